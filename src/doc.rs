//! Wall-graph document model: the entity types for the freeform editor and
//! the per-floor collections that own them.
//!
//! Walls are the sole structural primitive; rooms ([`Area`]) reference an
//! unordered set of wall ids and reconstruct their outline on demand. Doors
//! and windows are anchored by position only: their association with a wall
//! is recomputed heuristically, never stored as a foreign key. Stairs,
//! furniture, and boundary lines are positional planning elements outside
//! the undo history.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Segment;

/// Unique identifier for a wall-graph entity, scoped to its store.
pub type EntityId = u64;

/// Hands out fresh, locally unique entity ids.
///
/// Ids are monotonic within one store; they are stable for an entity's
/// lifetime but carry no meaning across stores or sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdSource {
    next: EntityId,
}

impl IdSource {
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// The next fresh id.
    pub fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Ensure future ids don't collide with any id in `used`.
    pub fn advance_past<I: IntoIterator<Item = EntityId>>(&mut self, used: I) {
        for id in used {
            if id >= self.next {
                self.next = id + 1;
            }
        }
    }
}

impl Default for IdSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Which structure is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The main house (single implicit floor).
    Main,
    /// The accessory dwelling unit (two floors).
    Adu,
}

/// Axis along which a door or window opening extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Door swing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swing {
    Left,
    Right,
}

/// A straight wall segment. Undirected; no explicit thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: EntityId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Wall {
    /// The wall's geometry without its identity.
    #[must_use]
    pub fn segment(&self) -> Segment {
        Segment::new(self.x1, self.y1, self.x2, self.y2)
    }
}

/// A named region defined by reference to an unordered set of wall ids.
///
/// The boundary polygon is not stored; it is reconstructed on demand from
/// whichever referenced walls still exist. Dangling ids are pruned when a
/// wall is deleted, but the area itself is never auto-deleted; with fewer
/// than 3 surviving walls it simply measures zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: EntityId,
    pub name: String,
    pub line_ids: Vec<EntityId>,
    pub color: String,
}

/// A door opening anchored at (x, y), extending `width` feet along its
/// orientation axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub orientation: Orientation,
    pub swing: Swing,
}

/// A window opening anchored at (x, y).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub orientation: Orientation,
}

/// A staircase footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stair {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64,
}

/// A furniture footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    pub id: EntityId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
}

/// A labeled dashed reference line dividing open space; not a structural wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryLine {
    pub id: EntityId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub label: String,
}

/// One floor's worth of collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorDoc {
    pub walls: Vec<Wall>,
    pub areas: Vec<Area>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
    pub stairs: Vec<Stair>,
    pub furniture: Vec<Furniture>,
    pub boundaries: Vec<BoundaryLine>,
}

impl FloorDoc {
    #[must_use]
    pub fn wall(&self, id: EntityId) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    pub fn wall_mut(&mut self, id: EntityId) -> Option<&mut Wall> {
        self.walls.iter_mut().find(|w| w.id == id)
    }

    #[must_use]
    pub fn area(&self, id: EntityId) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn door(&self, id: EntityId) -> Option<&Door> {
        self.doors.iter().find(|d| d.id == id)
    }

    pub fn door_mut(&mut self, id: EntityId) -> Option<&mut Door> {
        self.doors.iter_mut().find(|d| d.id == id)
    }

    #[must_use]
    pub fn window(&self, id: EntityId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn window_mut(&mut self, id: EntityId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// The walls referenced by an area that still exist, in reference order.
    #[must_use]
    pub fn area_walls(&self, area: &Area) -> Vec<&Wall> {
        area.line_ids.iter().filter_map(|id| self.wall(*id)).collect()
    }

    /// Every id currently in use on this floor, across all collections.
    pub fn all_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.walls
            .iter()
            .map(|w| w.id)
            .chain(self.areas.iter().map(|a| a.id))
            .chain(self.doors.iter().map(|d| d.id))
            .chain(self.windows.iter().map(|w| w.id))
            .chain(self.stairs.iter().map(|s| s.id))
            .chain(self.furniture.iter().map(|f| f.id))
            .chain(self.boundaries.iter().map(|b| b.id))
    }
}
