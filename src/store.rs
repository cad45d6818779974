//! `PlanStore`: the authoritative wall-graph floor-plan state and every
//! mutation that keeps it consistent.
//!
//! The store owns one main-house floor and two ADU floors, the single-slot
//! clipboard, the undo history, the active selection, and the drag gesture
//! state. Mutation methods are synchronous and atomic: a wall deletion and
//! the pruning of area references to it happen in the same call, with no
//! intermediate state observable. Every undoable operation pushes exactly
//! one history frame (the pre-mutation state) itself; callers never manage
//! history. Reads are snapshot-style (`&` access to the active floor), and
//! [`PlanStore::revision`] ticks on every observable change so a renderer
//! can poll for staleness instead of relying on reactive bindings.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use rand::Rng;
use thiserror::Error;

use crate::consts::{DEFAULT_OPENING_WIDTH, PASTE_OFFSET};
use crate::doc::{
    Area, BoundaryLine, Door, EntityId, FloorDoc, Furniture, IdSource, Mode, Orientation, Stair,
    Swing, Wall, Window,
};
use crate::geometry::{polygon_area, boundary_ring, snap};
use crate::history::{History, Snapshot};
use crate::layout::{self, GeneratedLayout, LayoutParams};
use crate::project::{AduFloors, DesignState};
use crate::snap::find_snap_to_wall;

/// Error from a rejected store operation. Nothing here is fatal; the
/// `Display` text is the user-facing message and the store is unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An area needs at least 3 walls to have a boundary.
    #[error("select at least 3 walls to define an area")]
    TooFewWalls,
    /// Paste was requested with an empty clipboard.
    #[error("nothing to paste")]
    EmptyClipboard,
    /// The referenced item does not exist on the active floor.
    #[error("no such item: {0}")]
    MissingItem(EntityId),
    /// Areas have no position of their own; they move with their walls.
    #[error("areas move with their walls")]
    NotMovable,
    /// A group drag needs at least two multi-selected items.
    #[error("select two or more items to drag as a group")]
    NoGroup,
}

/// Reference to one selectable item on the active floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRef {
    Wall(EntityId),
    Area(EntityId),
    Door(EntityId),
    Window(EntityId),
    Stair(EntityId),
    Furniture(EntityId),
    Boundary(EntityId),
}

/// Which endpoint of a wall is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallEnd {
    Start,
    End,
}

/// Multi-selection over the three bulk-editable collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiSelection {
    pub walls: Vec<EntityId>,
    pub doors: Vec<EntityId>,
    pub windows: Vec<EntityId>,
}

impl MultiSelection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.walls.len() + self.doors.len() + self.windows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Single-slot in-process clipboard contents.
#[derive(Debug, Clone)]
pub enum Clipboard {
    Wall(Wall),
    Door(Door),
    Window(Window),
    Multi { walls: Vec<Wall>, doors: Vec<Door>, windows: Vec<Window> },
}

/// Active drag gesture. Dragged items are recomputed from their coordinates
/// at gesture start plus the cursor delta, never iteratively, so repeated
/// small movements do not compound grid-rounding error.
#[derive(Debug, Clone, Default)]
enum DragState {
    #[default]
    Idle,
    Wall { orig: Wall },
    Endpoint { id: EntityId, end: WallEnd },
    Door { orig: Door },
    Window { orig: Window },
    Stair { orig: Stair },
    Furniture { orig: Furniture },
    Boundary { orig: BoundaryLine },
    Group { walls: Vec<Wall>, doors: Vec<Door>, windows: Vec<Window> },
}

/// Summary returned after applying a generated layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSummary {
    pub width: f64,
    pub depth: f64,
    pub rooms: usize,
}

/// The floor-plan store. See the module docs for the mutation contract.
#[derive(Debug)]
pub struct PlanStore {
    mode: Mode,
    adu_floor: usize,
    main: FloorDoc,
    adu: [FloorDoc; 2],
    ids: IdSource,
    history: History,
    clipboard: Option<Clipboard>,
    drag: DragState,
    selected: Option<ItemRef>,
    multi: MultiSelection,
    area_pick: Vec<EntityId>,
    revision: u64,
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Main,
            adu_floor: 0,
            main: FloorDoc::default(),
            adu: [FloorDoc::default(), FloorDoc::default()],
            ids: IdSource::new(),
            history: History::new(),
            clipboard: None,
            drag: DragState::Idle,
            selected: None,
            multi: MultiSelection::default(),
            area_pick: Vec::new(),
            revision: 0,
        }
    }

    // --- Context ---

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn adu_floor(&self) -> usize {
        self.adu_floor
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.touch();
    }

    /// Switch the active ADU floor (0 or 1; out-of-range is clamped).
    pub fn set_adu_floor(&mut self, floor: usize) {
        self.adu_floor = floor.min(1);
        self.touch();
    }

    /// The active floor's collections.
    #[must_use]
    pub fn floor(&self) -> &FloorDoc {
        match self.mode {
            Mode::Main => &self.main,
            Mode::Adu => &self.adu[self.adu_floor],
        }
    }

    fn floor_mut(&mut self) -> &mut FloorDoc {
        match self.mode {
            Mode::Main => &mut self.main,
            Mode::Adu => &mut self.adu[self.adu_floor],
        }
    }

    fn floor_at_mut(&mut self, mode: Mode, adu_floor: usize) -> &mut FloorDoc {
        match mode {
            Mode::Main => &mut self.main,
            Mode::Adu => &mut self.adu[adu_floor.min(1)],
        }
    }

    /// Monotonic counter bumped on every observable change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    // --- History ---

    fn snapshot(&self) -> Snapshot {
        let floor = self.floor();
        Snapshot {
            walls: floor.walls.clone(),
            areas: floor.areas.clone(),
            doors: floor.doors.clone(),
            windows: floor.windows.clone(),
            mode: self.mode,
            adu_floor: self.adu_floor,
        }
    }

    fn save_history(&mut self) {
        let frame = self.snapshot();
        self.history.push(frame);
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Pop one history frame and restore its collections verbatim into the
    /// floor it was recorded from, switching the active context to match.
    /// Returns false (and changes nothing) when the history is empty.
    pub fn undo(&mut self) -> bool {
        let Some(frame) = self.history.pop() else {
            return false;
        };
        tracing::debug!(mode = ?frame.mode, floor = frame.adu_floor, "undo");
        let target = self.floor_at_mut(frame.mode, frame.adu_floor);
        target.walls = frame.walls;
        target.areas = frame.areas;
        target.doors = frame.doors;
        target.windows = frame.windows;
        self.mode = frame.mode;
        self.adu_floor = frame.adu_floor;
        self.clear_selection();
        self.touch();
        true
    }

    // --- Selection ---

    pub fn select(&mut self, item: Option<ItemRef>) {
        self.selected = item;
        if item.is_some() {
            self.multi = MultiSelection::default();
        }
        self.touch();
    }

    #[must_use]
    pub fn selected(&self) -> Option<ItemRef> {
        self.selected
    }

    /// Add or remove a wall/door/window from the multi-selection.
    pub fn toggle_multi(&mut self, item: ItemRef) {
        let list = match item {
            ItemRef::Wall(_) => &mut self.multi.walls,
            ItemRef::Door(_) => &mut self.multi.doors,
            ItemRef::Window(_) => &mut self.multi.windows,
            _ => return,
        };
        let id = match item {
            ItemRef::Wall(id) | ItemRef::Door(id) | ItemRef::Window(id) => id,
            _ => return,
        };
        if let Some(pos) = list.iter().position(|&existing| existing == id) {
            list.remove(pos);
        } else {
            list.push(id);
        }
        self.touch();
    }

    #[must_use]
    pub fn multi(&self) -> &MultiSelection {
        &self.multi
    }

    /// Toggle a wall in the area-tool pick set.
    pub fn toggle_area_pick(&mut self, wall_id: EntityId) {
        if let Some(pos) = self.area_pick.iter().position(|&id| id == wall_id) {
            self.area_pick.remove(pos);
        } else {
            self.area_pick.push(wall_id);
        }
        self.touch();
    }

    #[must_use]
    pub fn area_pick(&self) -> &[EntityId] {
        &self.area_pick
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.multi = MultiSelection::default();
        self.touch();
    }

    // --- Creation ---

    /// Append a wall with the given raw coordinates.
    pub fn add_wall(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> EntityId {
        self.save_history();
        let id = self.ids.next_id();
        self.floor_mut().walls.push(Wall { id, x1, y1, x2, y2 });
        self.selected = Some(ItemRef::Wall(id));
        self.touch();
        id
    }

    /// Complete a wall-draw gesture. Near-axial drags collapse to a straight
    /// horizontal or vertical wall; drags shorter than 0.1 ft on both axes
    /// are discarded. All coordinates are grid-snapped.
    pub fn draw_wall(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Option<EntityId> {
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        if dx <= 0.1 && dy <= 0.1 {
            return None;
        }
        let mut x2 = x2;
        let mut y2 = y2;
        if dx < 1.0 && dy > dx {
            x2 = x1;
        }
        if dy < 1.0 && dx > dy {
            y2 = y1;
        }
        Some(self.add_wall(snap(x1), snap(y1), snap(x2), snap(y2)))
    }

    /// Place a door at the pointer position, snapping to the nearest wall
    /// (horizontal candidates tried before vertical). Without a snap the
    /// door is placed free-floating with horizontal orientation.
    pub fn place_door(&mut self, x: f64, y: f64, swing: Swing) -> EntityId {
        let (x, y, orientation) = self.snapped_placement(x, y);
        self.save_history();
        let id = self.ids.next_id();
        self.floor_mut().doors.push(Door {
            id,
            x,
            y,
            width: DEFAULT_OPENING_WIDTH,
            orientation,
            swing,
        });
        self.selected = Some(ItemRef::Door(id));
        self.touch();
        id
    }

    /// Place a window at the pointer position; same snapping as doors.
    pub fn place_window(&mut self, x: f64, y: f64) -> EntityId {
        let (x, y, orientation) = self.snapped_placement(x, y);
        self.save_history();
        let id = self.ids.next_id();
        self.floor_mut().windows.push(Window {
            id,
            x,
            y,
            width: DEFAULT_OPENING_WIDTH,
            orientation,
        });
        self.selected = Some(ItemRef::Window(id));
        self.touch();
        id
    }

    fn snapped_placement(&self, x: f64, y: f64) -> (f64, f64, Orientation) {
        let walls = &self.floor().walls;
        if let Some(hit) =
            find_snap_to_wall(walls, x, y, DEFAULT_OPENING_WIDTH, Orientation::Horizontal)
        {
            (hit.x, hit.y, Orientation::Horizontal)
        } else if let Some(hit) =
            find_snap_to_wall(walls, x, y, DEFAULT_OPENING_WIDTH, Orientation::Vertical)
        {
            (hit.x, hit.y, Orientation::Vertical)
        } else {
            (x, y, Orientation::Horizontal)
        }
    }

    /// Add a staircase. Not captured by undo history.
    pub fn add_stair(&mut self, x: f64, y: f64, width: f64, length: f64) -> EntityId {
        let id = self.ids.next_id();
        self.floor_mut().stairs.push(Stair { id, x, y, width, length });
        self.selected = Some(ItemRef::Stair(id));
        self.touch();
        id
    }

    /// Add a furniture footprint. Not captured by undo history.
    pub fn add_furniture(&mut self, name: &str, x: f64, y: f64, width: f64, depth: f64) -> EntityId {
        let id = self.ids.next_id();
        self.floor_mut().furniture.push(Furniture {
            id,
            name: name.to_owned(),
            x,
            y,
            width,
            depth,
        });
        self.selected = Some(ItemRef::Furniture(id));
        self.touch();
        id
    }

    /// Add a labeled boundary line. Endpoints are grid-snapped; not captured
    /// by undo history.
    pub fn add_boundary(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, label: &str) -> EntityId {
        let id = self.ids.next_id();
        self.floor_mut().boundaries.push(BoundaryLine {
            id,
            x1: snap(x1),
            y1: snap(y1),
            x2: snap(x2),
            y2: snap(y2),
            label: label.to_owned(),
        });
        self.selected = Some(ItemRef::Boundary(id));
        self.touch();
        id
    }

    /// Create an area referencing the given walls, in selection order.
    /// Rejected (store unchanged, no history frame) with fewer than 3 ids.
    pub fn create_area(
        &mut self,
        name: &str,
        wall_ids: &[EntityId],
        color: Option<String>,
    ) -> Result<EntityId, StoreError> {
        if wall_ids.len() < 3 {
            return Err(StoreError::TooFewWalls);
        }
        self.save_history();
        let id = self.ids.next_id();
        self.floor_mut().areas.push(Area {
            id,
            name: name.to_owned(),
            line_ids: wall_ids.to_vec(),
            color: color.unwrap_or_else(random_hsl),
        });
        self.area_pick.clear();
        self.selected = Some(ItemRef::Area(id));
        self.touch();
        Ok(id)
    }

    // --- Movement ---

    /// Discrete translation of one item by an offset; resulting coordinates
    /// are grid-snapped. Walls and boundaries move both endpoints.
    pub fn move_item(&mut self, item: ItemRef, dx: f64, dy: f64) -> Result<(), StoreError> {
        // Validate before pushing history so a rejection leaves no frame.
        self.require_item(item)?;
        self.save_history();
        self.apply_translation(item, dx, dy);
        self.touch();
        Ok(())
    }

    fn require_item(&self, item: ItemRef) -> Result<(), StoreError> {
        let floor = self.floor();
        let found = match item {
            ItemRef::Wall(id) => floor.wall(id).is_some(),
            ItemRef::Area(_) => return Err(StoreError::NotMovable),
            ItemRef::Door(id) => floor.door(id).is_some(),
            ItemRef::Window(id) => floor.window(id).is_some(),
            ItemRef::Stair(id) => floor.stairs.iter().any(|s| s.id == id),
            ItemRef::Furniture(id) => floor.furniture.iter().any(|f| f.id == id),
            ItemRef::Boundary(id) => floor.boundaries.iter().any(|b| b.id == id),
        };
        if found {
            Ok(())
        } else {
            let id = match item {
                ItemRef::Wall(id)
                | ItemRef::Area(id)
                | ItemRef::Door(id)
                | ItemRef::Window(id)
                | ItemRef::Stair(id)
                | ItemRef::Furniture(id)
                | ItemRef::Boundary(id) => id,
            };
            Err(StoreError::MissingItem(id))
        }
    }

    fn apply_translation(&mut self, item: ItemRef, dx: f64, dy: f64) {
        let floor = self.floor_mut();
        match item {
            ItemRef::Wall(id) => {
                if let Some(wall) = floor.wall_mut(id) {
                    wall.x1 = snap(wall.x1 + dx);
                    wall.y1 = snap(wall.y1 + dy);
                    wall.x2 = snap(wall.x2 + dx);
                    wall.y2 = snap(wall.y2 + dy);
                }
            }
            ItemRef::Door(id) => {
                if let Some(door) = floor.door_mut(id) {
                    door.x = snap(door.x + dx);
                    door.y = snap(door.y + dy);
                }
            }
            ItemRef::Window(id) => {
                if let Some(window) = floor.window_mut(id) {
                    window.x = snap(window.x + dx);
                    window.y = snap(window.y + dy);
                }
            }
            ItemRef::Stair(id) => {
                if let Some(stair) = floor.stairs.iter_mut().find(|s| s.id == id) {
                    stair.x = snap(stair.x + dx);
                    stair.y = snap(stair.y + dy);
                }
            }
            ItemRef::Furniture(id) => {
                if let Some(piece) = floor.furniture.iter_mut().find(|f| f.id == id) {
                    piece.x = snap(piece.x + dx);
                    piece.y = snap(piece.y + dy);
                }
            }
            ItemRef::Boundary(id) => {
                if let Some(boundary) = floor.boundaries.iter_mut().find(|b| b.id == id) {
                    boundary.x1 = snap(boundary.x1 + dx);
                    boundary.y1 = snap(boundary.y1 + dy);
                    boundary.x2 = snap(boundary.x2 + dx);
                    boundary.y2 = snap(boundary.y2 + dy);
                }
            }
            ItemRef::Area(_) => {}
        }
    }

    /// Free-form (unsnapped) wall endpoint update, used live during an
    /// endpoint drag. History comes from [`PlanStore::begin_endpoint_drag`].
    pub fn move_point(&mut self, wall_id: EntityId, end: WallEnd, x: f64, y: f64) {
        if let Some(wall) = self.floor_mut().wall_mut(wall_id) {
            match end {
                WallEnd::Start => {
                    wall.x1 = x;
                    wall.y1 = y;
                }
                WallEnd::End => {
                    wall.x2 = x;
                    wall.y2 = y;
                }
            }
            self.touch();
        }
    }

    // --- Drag gestures ---

    /// Begin dragging a single item. Pushes the one history frame for the
    /// whole gesture and records the item's original coordinates.
    pub fn begin_drag(&mut self, item: ItemRef) -> Result<(), StoreError> {
        self.require_item(item)?;
        self.save_history();
        let floor = self.floor();
        self.drag = match item {
            ItemRef::Wall(id) => match floor.wall(id) {
                Some(wall) => DragState::Wall { orig: *wall },
                None => DragState::Idle,
            },
            ItemRef::Door(id) => match floor.door(id) {
                Some(door) => DragState::Door { orig: door.clone() },
                None => DragState::Idle,
            },
            ItemRef::Window(id) => match floor.window(id) {
                Some(window) => DragState::Window { orig: window.clone() },
                None => DragState::Idle,
            },
            ItemRef::Stair(id) => match floor.stairs.iter().find(|s| s.id == id) {
                Some(stair) => DragState::Stair { orig: stair.clone() },
                None => DragState::Idle,
            },
            ItemRef::Furniture(id) => match floor.furniture.iter().find(|f| f.id == id) {
                Some(piece) => DragState::Furniture { orig: piece.clone() },
                None => DragState::Idle,
            },
            ItemRef::Boundary(id) => match floor.boundaries.iter().find(|b| b.id == id) {
                Some(boundary) => DragState::Boundary { orig: boundary.clone() },
                None => DragState::Idle,
            },
            ItemRef::Area(_) => DragState::Idle,
        };
        self.selected = Some(item);
        self.multi = MultiSelection::default();
        self.touch();
        Ok(())
    }

    /// Begin dragging a wall endpoint (live, unsnapped updates).
    pub fn begin_endpoint_drag(&mut self, wall_id: EntityId, end: WallEnd) -> Result<(), StoreError> {
        self.require_item(ItemRef::Wall(wall_id))?;
        self.save_history();
        self.drag = DragState::Endpoint { id: wall_id, end };
        self.selected = Some(ItemRef::Wall(wall_id));
        self.touch();
        Ok(())
    }

    /// Begin dragging the whole multi-selection as a group. Requires at
    /// least two selected items; originals are captured once so that every
    /// later [`PlanStore::update_drag`] recomputes from them.
    pub fn begin_group_drag(&mut self) -> Result<(), StoreError> {
        if self.multi.len() < 2 {
            return Err(StoreError::NoGroup);
        }
        self.save_history();
        let floor = self.floor();
        let walls = floor
            .walls
            .iter()
            .filter(|w| self.multi.walls.contains(&w.id))
            .copied()
            .collect();
        let doors = floor
            .doors
            .iter()
            .filter(|d| self.multi.doors.contains(&d.id))
            .cloned()
            .collect();
        let windows = floor
            .windows
            .iter()
            .filter(|w| self.multi.windows.contains(&w.id))
            .cloned()
            .collect();
        self.drag = DragState::Group { walls, doors, windows };
        self.touch();
        Ok(())
    }

    /// Apply the current cursor delta to the active drag. Single items and
    /// groups are snapped; endpoint drags track the pointer exactly.
    pub fn update_drag(&mut self, dx: f64, dy: f64) {
        match self.drag.clone() {
            DragState::Idle => {}
            DragState::Wall { orig } => {
                if let Some(wall) = self.floor_mut().wall_mut(orig.id) {
                    wall.x1 = snap(orig.x1 + dx);
                    wall.y1 = snap(orig.y1 + dy);
                    wall.x2 = snap(orig.x2 + dx);
                    wall.y2 = snap(orig.y2 + dy);
                    self.touch();
                }
            }
            DragState::Endpoint { .. } => {
                // Endpoint drags are positional, not delta-based; the caller
                // feeds absolute pointer coordinates through `move_point`.
            }
            DragState::Door { orig } => {
                if let Some(door) = self.floor_mut().door_mut(orig.id) {
                    door.x = snap(orig.x + dx);
                    door.y = snap(orig.y + dy);
                    self.touch();
                }
            }
            DragState::Window { orig } => {
                if let Some(window) = self.floor_mut().window_mut(orig.id) {
                    window.x = snap(orig.x + dx);
                    window.y = snap(orig.y + dy);
                    self.touch();
                }
            }
            DragState::Stair { orig } => {
                if let Some(stair) = self.floor_mut().stairs.iter_mut().find(|s| s.id == orig.id) {
                    stair.x = snap(orig.x + dx);
                    stair.y = snap(orig.y + dy);
                    self.touch();
                }
            }
            DragState::Furniture { orig } => {
                if let Some(piece) =
                    self.floor_mut().furniture.iter_mut().find(|f| f.id == orig.id)
                {
                    piece.x = snap(orig.x + dx);
                    piece.y = snap(orig.y + dy);
                    self.touch();
                }
            }
            DragState::Boundary { orig } => {
                if let Some(boundary) =
                    self.floor_mut().boundaries.iter_mut().find(|b| b.id == orig.id)
                {
                    boundary.x1 = snap(orig.x1 + dx);
                    boundary.y1 = snap(orig.y1 + dy);
                    boundary.x2 = snap(orig.x2 + dx);
                    boundary.y2 = snap(orig.y2 + dy);
                    self.touch();
                }
            }
            DragState::Group { walls, doors, windows } => {
                for orig in &walls {
                    if let Some(wall) = self.floor_mut().wall_mut(orig.id) {
                        wall.x1 = snap(orig.x1 + dx);
                        wall.y1 = snap(orig.y1 + dy);
                        wall.x2 = snap(orig.x2 + dx);
                        wall.y2 = snap(orig.y2 + dy);
                    }
                }
                for orig in &doors {
                    if let Some(door) = self.floor_mut().door_mut(orig.id) {
                        door.x = snap(orig.x + dx);
                        door.y = snap(orig.y + dy);
                    }
                }
                for orig in &windows {
                    if let Some(window) = self.floor_mut().window_mut(orig.id) {
                        window.x = snap(orig.x + dx);
                        window.y = snap(orig.y + dy);
                    }
                }
                self.touch();
            }
        }
    }

    /// Finish the active drag gesture.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
        self.touch();
    }

    /// Re-snap the selected door or window onto the nearest matching wall's
    /// center. Returns false (no history frame) when nothing snapped.
    pub fn snap_selected_to_wall_center(&mut self) -> bool {
        match self.selected {
            Some(ItemRef::Door(id)) => {
                let Some(door) = self.floor().door(id).cloned() else {
                    return false;
                };
                let Some(hit) = find_snap_to_wall(
                    &self.floor().walls,
                    door.x,
                    door.y,
                    door.width,
                    door.orientation,
                ) else {
                    return false;
                };
                self.save_history();
                if let Some(door) = self.floor_mut().door_mut(id) {
                    door.x = hit.x;
                    door.y = hit.y;
                }
                self.touch();
                true
            }
            Some(ItemRef::Window(id)) => {
                let Some(window) = self.floor().window(id).cloned() else {
                    return false;
                };
                let Some(hit) = find_snap_to_wall(
                    &self.floor().walls,
                    window.x,
                    window.y,
                    window.width,
                    window.orientation,
                ) else {
                    return false;
                };
                self.save_history();
                if let Some(window) = self.floor_mut().window_mut(id) {
                    window.x = hit.x;
                    window.y = hit.y;
                }
                self.touch();
                true
            }
            _ => false,
        }
    }

    // --- Deletion ---

    /// Delete a wall and prune its id from every area's wall list. Areas are
    /// never deleted by this cascade, even if left with fewer than 3 walls.
    pub fn delete_wall(&mut self, id: EntityId) -> Result<(), StoreError> {
        self.require_item(ItemRef::Wall(id))?;
        self.save_history();
        let floor = self.floor_mut();
        floor.walls.retain(|w| w.id != id);
        for area in &mut floor.areas {
            area.line_ids.retain(|&line_id| line_id != id);
        }
        if self.selected == Some(ItemRef::Wall(id)) {
            self.selected = None;
        }
        self.touch();
        Ok(())
    }

    pub fn delete_area(&mut self, id: EntityId) -> Result<(), StoreError> {
        if self.floor().area(id).is_none() {
            return Err(StoreError::MissingItem(id));
        }
        self.save_history();
        self.floor_mut().areas.retain(|a| a.id != id);
        if self.selected == Some(ItemRef::Area(id)) {
            self.selected = None;
        }
        self.touch();
        Ok(())
    }

    pub fn delete_door(&mut self, id: EntityId) -> Result<(), StoreError> {
        self.require_item(ItemRef::Door(id))?;
        self.save_history();
        self.floor_mut().doors.retain(|d| d.id != id);
        if self.selected == Some(ItemRef::Door(id)) {
            self.selected = None;
        }
        self.touch();
        Ok(())
    }

    pub fn delete_window(&mut self, id: EntityId) -> Result<(), StoreError> {
        self.require_item(ItemRef::Window(id))?;
        self.save_history();
        self.floor_mut().windows.retain(|w| w.id != id);
        if self.selected == Some(ItemRef::Window(id)) {
            self.selected = None;
        }
        self.touch();
        Ok(())
    }

    /// Delete a stair/furniture/boundary item (no history frame; these are
    /// outside the undo model).
    pub fn delete_decoration(&mut self, item: ItemRef) -> Result<(), StoreError> {
        self.require_item(item)?;
        let floor = self.floor_mut();
        match item {
            ItemRef::Stair(id) => floor.stairs.retain(|s| s.id != id),
            ItemRef::Furniture(id) => floor.furniture.retain(|f| f.id != id),
            ItemRef::Boundary(id) => floor.boundaries.retain(|b| b.id != id),
            _ => return Err(StoreError::NotMovable),
        }
        if self.selected == Some(item) {
            self.selected = None;
        }
        self.touch();
        Ok(())
    }

    /// Atomically delete the whole multi-selection as one history entry,
    /// pruning area references to removed walls. A no-op when empty.
    pub fn delete_selected(&mut self) {
        if self.multi.is_empty() {
            return;
        }
        self.save_history();
        let multi = std::mem::take(&mut self.multi);
        let floor = self.floor_mut();
        floor.walls.retain(|w| !multi.walls.contains(&w.id));
        floor.doors.retain(|d| !multi.doors.contains(&d.id));
        floor.windows.retain(|w| !multi.windows.contains(&w.id));
        for area in &mut floor.areas {
            area.line_ids.retain(|line_id| !multi.walls.contains(line_id));
        }
        self.selected = None;
        self.touch();
    }

    // --- Clipboard ---

    /// Copy the multi-selection (if any) or the selected item into the
    /// clipboard. Returns false when there is nothing copyable.
    pub fn copy_selected(&mut self) -> bool {
        let floor = self.floor();
        let contents = if !self.multi.is_empty() {
            Some(Clipboard::Multi {
                walls: floor
                    .walls
                    .iter()
                    .filter(|w| self.multi.walls.contains(&w.id))
                    .copied()
                    .collect(),
                doors: floor
                    .doors
                    .iter()
                    .filter(|d| self.multi.doors.contains(&d.id))
                    .cloned()
                    .collect(),
                windows: floor
                    .windows
                    .iter()
                    .filter(|w| self.multi.windows.contains(&w.id))
                    .cloned()
                    .collect(),
            })
        } else {
            match self.selected {
                Some(ItemRef::Wall(id)) => floor.wall(id).map(|w| Clipboard::Wall(*w)),
                Some(ItemRef::Door(id)) => floor.door(id).map(|d| Clipboard::Door(d.clone())),
                Some(ItemRef::Window(id)) => floor.window(id).map(|w| Clipboard::Window(w.clone())),
                _ => None,
            }
        };
        match contents {
            Some(contents) => {
                self.clipboard = Some(contents);
                true
            }
            None => false,
        }
    }

    /// Paste the clipboard at a fixed +2 ft offset on both axes, assigning
    /// fresh ids and selecting the pasted items. The clipboard is retained
    /// for repeated pastes.
    pub fn paste(&mut self) -> Result<(), StoreError> {
        let Some(contents) = self.clipboard.clone() else {
            return Err(StoreError::EmptyClipboard);
        };
        self.save_history();
        match contents {
            Clipboard::Wall(wall) => {
                let id = self.ids.next_id();
                self.floor_mut().walls.push(Wall {
                    id,
                    x1: wall.x1 + PASTE_OFFSET,
                    y1: wall.y1 + PASTE_OFFSET,
                    x2: wall.x2 + PASTE_OFFSET,
                    y2: wall.y2 + PASTE_OFFSET,
                });
                self.selected = Some(ItemRef::Wall(id));
                self.multi = MultiSelection::default();
            }
            Clipboard::Door(door) => {
                let id = self.ids.next_id();
                self.floor_mut().doors.push(Door {
                    id,
                    x: door.x + PASTE_OFFSET,
                    y: door.y + PASTE_OFFSET,
                    ..door
                });
                self.selected = Some(ItemRef::Door(id));
                self.multi = MultiSelection::default();
            }
            Clipboard::Window(window) => {
                let id = self.ids.next_id();
                self.floor_mut().windows.push(Window {
                    id,
                    x: window.x + PASTE_OFFSET,
                    y: window.y + PASTE_OFFSET,
                    ..window
                });
                self.selected = Some(ItemRef::Window(id));
                self.multi = MultiSelection::default();
            }
            Clipboard::Multi { walls, doors, windows } => {
                let mut selection = MultiSelection::default();
                for wall in walls {
                    let id = self.ids.next_id();
                    self.floor_mut().walls.push(Wall {
                        id,
                        x1: wall.x1 + PASTE_OFFSET,
                        y1: wall.y1 + PASTE_OFFSET,
                        x2: wall.x2 + PASTE_OFFSET,
                        y2: wall.y2 + PASTE_OFFSET,
                    });
                    selection.walls.push(id);
                }
                for door in doors {
                    let id = self.ids.next_id();
                    self.floor_mut().doors.push(Door {
                        id,
                        x: door.x + PASTE_OFFSET,
                        y: door.y + PASTE_OFFSET,
                        ..door
                    });
                    selection.doors.push(id);
                }
                for window in windows {
                    let id = self.ids.next_id();
                    self.floor_mut().windows.push(Window {
                        id,
                        x: window.x + PASTE_OFFSET,
                        y: window.y + PASTE_OFFSET,
                        ..window
                    });
                    selection.windows.push(id);
                }
                self.multi = selection;
                self.selected = None;
            }
        }
        self.touch();
        Ok(())
    }

    #[must_use]
    pub fn has_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }

    // --- Derived measurements ---

    /// Square footage of one area via boundary reconstruction. Zero when
    /// fewer than 3 referenced walls survive.
    #[must_use]
    pub fn area_sqft(&self, area: &Area) -> f64 {
        let walls = self.floor().area_walls(area);
        if walls.len() < 3 {
            return 0.0;
        }
        let segments: Vec<_> = walls.iter().map(|w| w.segment()).collect();
        polygon_area(&boundary_ring(&segments))
    }

    /// Total square footage across the active floor's areas.
    #[must_use]
    pub fn total_sqft(&self) -> f64 {
        self.floor().areas.iter().map(|a| self.area_sqft(a)).sum()
    }

    // --- Bulk producers ---

    /// Replace the active floor's walls with raster-extracted segments,
    /// clearing its areas. One history frame covers the whole swap.
    pub fn replace_walls(&mut self, segments: &[crate::geometry::Segment]) {
        self.save_history();
        let mut walls = Vec::with_capacity(segments.len());
        for segment in segments {
            walls.push(Wall {
                id: self.ids.next_id(),
                x1: segment.x1,
                y1: segment.y1,
                x2: segment.x2,
                y2: segment.y2,
            });
        }
        tracing::info!(walls = walls.len(), "replacing floor walls from raster import");
        let floor = self.floor_mut();
        floor.walls = walls;
        floor.areas.clear();
        self.clear_selection();
        self.touch();
    }

    /// Generate a layout from parameters and apply it to the parameter's
    /// target structure, replacing that floor's core content.
    pub fn apply_layout(&mut self, params: &LayoutParams) -> LayoutSummary {
        self.mode = params.target;
        let generated = layout::generate(params, &mut self.ids);
        self.apply_generated(generated)
    }

    fn apply_generated(&mut self, generated: GeneratedLayout) -> LayoutSummary {
        self.save_history();
        let summary = LayoutSummary {
            width: generated.width,
            depth: generated.depth,
            rooms: generated.areas.len(),
        };
        tracing::info!(
            width = generated.width,
            depth = generated.depth,
            rooms = generated.areas.len(),
            "applying generated layout"
        );
        let floor = self.floor_mut();
        floor.walls = generated.walls;
        floor.areas = generated.areas;
        floor.doors = generated.doors;
        floor.windows = generated.windows;
        self.clear_selection();
        self.touch();
        summary
    }

    // --- Persistence ---

    /// Capture the wall-graph slices of the current design for a project
    /// version. Slices this store does not own are left `None`.
    #[must_use]
    pub fn design_state(&self) -> DesignState {
        DesignState {
            lines: Some(self.main.walls.clone()),
            areas: Some(self.main.areas.clone()),
            doors: Some(self.main.doors.clone()),
            windows: Some(self.main.windows.clone()),
            stairs: Some(self.main.stairs.clone()),
            boundaries: Some(self.main.boundaries.clone()),
            furniture: Some(self.main.furniture.clone()),
            adu_lines: Some(self.adu_slice(|floor| floor.walls.clone())),
            adu_areas: Some(self.adu_slice(|floor| floor.areas.clone())),
            adu_doors: Some(self.adu_slice(|floor| floor.doors.clone())),
            adu_windows: Some(self.adu_slice(|floor| floor.windows.clone())),
            adu_stairs: Some(self.adu_slice(|floor| floor.stairs.clone())),
            adu_boundaries: Some(self.adu_slice(|floor| floor.boundaries.clone())),
            adu_furniture: Some(self.adu_slice(|floor| floor.furniture.clone())),
            ..DesignState::default()
        }
    }

    fn adu_slice<T>(&self, take: impl Fn(&FloorDoc) -> T) -> AduFloors<T> {
        AduFloors { lower: take(&self.adu[0]), upper: take(&self.adu[1]) }
    }

    /// Load a design state. Fields absent from `data` leave the matching
    /// store slice untouched; present fields replace it wholesale. The id
    /// source advances past every loaded id.
    pub fn load_design(&mut self, data: &DesignState) {
        if let Some(lines) = &data.lines {
            self.main.walls = lines.clone();
        }
        if let Some(areas) = &data.areas {
            self.main.areas = areas.clone();
        }
        if let Some(doors) = &data.doors {
            self.main.doors = doors.clone();
        }
        if let Some(windows) = &data.windows {
            self.main.windows = windows.clone();
        }
        if let Some(stairs) = &data.stairs {
            self.main.stairs = stairs.clone();
        }
        if let Some(boundaries) = &data.boundaries {
            self.main.boundaries = boundaries.clone();
        }
        if let Some(furniture) = &data.furniture {
            self.main.furniture = furniture.clone();
        }
        if let Some(adu_lines) = &data.adu_lines {
            self.adu[0].walls = adu_lines.lower.clone();
            self.adu[1].walls = adu_lines.upper.clone();
        }
        if let Some(adu_areas) = &data.adu_areas {
            self.adu[0].areas = adu_areas.lower.clone();
            self.adu[1].areas = adu_areas.upper.clone();
        }
        if let Some(adu_doors) = &data.adu_doors {
            self.adu[0].doors = adu_doors.lower.clone();
            self.adu[1].doors = adu_doors.upper.clone();
        }
        if let Some(adu_windows) = &data.adu_windows {
            self.adu[0].windows = adu_windows.lower.clone();
            self.adu[1].windows = adu_windows.upper.clone();
        }
        if let Some(adu_stairs) = &data.adu_stairs {
            self.adu[0].stairs = adu_stairs.lower.clone();
            self.adu[1].stairs = adu_stairs.upper.clone();
        }
        if let Some(adu_boundaries) = &data.adu_boundaries {
            self.adu[0].boundaries = adu_boundaries.lower.clone();
            self.adu[1].boundaries = adu_boundaries.upper.clone();
        }
        if let Some(adu_furniture) = &data.adu_furniture {
            self.adu[0].furniture = adu_furniture.lower.clone();
            self.adu[1].furniture = adu_furniture.upper.clone();
        }
        let used: Vec<EntityId> = self
            .main
            .all_ids()
            .chain(self.adu[0].all_ids())
            .chain(self.adu[1].all_ids())
            .collect();
        self.ids.advance_past(used);
        self.clear_selection();
        self.touch();
    }
}

fn random_hsl() -> String {
    let hue: f64 = rand::rng().random_range(0.0..360.0);
    format!("hsl({hue:.0}, 50%, 40%)")
}
