//! Rectangle-room model: the axis-aligned room plan driven by natural
//! language commands and checked by the zoning validator.
//!
//! This model is independent of the wall-graph editor: rooms are rectangles
//! with their own ids and are never reconciled with [`Area`](crate::doc::Area)
//! polygons. The [`RoomStore`] keeps a violation list cached alongside the
//! plan; every mutation recomputes it, so readers never see a plan/violations
//! mismatch.

#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate;

/// One rectangular room. `kind` drives minimum-size validation; `name` is
/// what commands and violation messages refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub ceiling_height: f64,
    pub color: String,
}

impl Room {
    #[must_use]
    pub fn sqft(&self) -> f64 {
        self.width * self.height
    }
}

/// Sparse room update: only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub ceiling_height: Option<f64>,
    pub color: Option<String>,
}

/// Side setbacks of the lot, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Setbacks {
    pub front: f64,
    pub back: f64,
    pub left: f64,
    pub right: f64,
}

/// The lot the plan sits on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub width: f64,
    pub depth: f64,
    pub setbacks: Setbacks,
}

/// A named plan: lot plus room rectangles, in insertion order. Command
/// parsing resolves room names by first substring match in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPlan {
    pub name: String,
    pub lot: Lot,
    pub rooms: Vec<Room>,
}

impl RoomPlan {
    /// The built-in renovation fixture: a corner-lot single-story plan with
    /// the usual room mix, used as the starting point for command demos.
    #[must_use]
    pub fn default_plan() -> Self {
        let room = |name: &str, kind: &str, x: f64, y: f64, w: f64, h: f64, color: &str| Room {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            kind: kind.to_owned(),
            x,
            y,
            width: w,
            height: h,
            ceiling_height: 9.0,
            color: color.to_owned(),
        };
        Self {
            name: "1700 Midwood Dr Renovation".to_owned(),
            lot: Lot {
                width: 80.0,
                depth: 100.0,
                setbacks: Setbacks { front: 20.0, back: 20.0, left: 5.0, right: 10.0 },
            },
            rooms: vec![
                room("Living Room", "living", 17.0, 24.0, 15.6, 13.2, "#00aa00"),
                room("Bedroom 3", "bedroom", 0.0, 27.0, 12.0, 9.6, "#0066aa"),
                room("Front Porch", "porch", 12.0, 37.0, 8.3, 3.7, "#444444"),
                room("Bedroom 2", "bedroom", 0.0, 15.0, 11.3, 11.1, "#0066aa"),
                room("Bathroom", "bathroom", 11.3, 18.0, 5.0, 7.6, "#006666"),
                room("Dining Room", "dining", 17.0, 13.0, 12.8, 10.3, "#aa00aa"),
                room("Primary Bedroom", "bedroom", 0.0, 3.0, 13.0, 10.3, "#0066aa"),
                room("Primary Bath", "bathroom", 13.0, 3.0, 5.0, 10.0, "#006666"),
                room("Kitchen", "kitchen", 22.0, 0.0, 8.5, 15.0, "#00aaaa"),
                room("Laundry", "utility", 11.3, 10.0, 4.0, 4.0, "#666666"),
            ],
        }
    }
}

/// Observable store over a [`RoomPlan`]. Violations are recomputed after
/// every mutation; `revision` ticks so a renderer can poll for staleness.
#[derive(Debug)]
pub struct RoomStore {
    plan: RoomPlan,
    selected: Option<Uuid>,
    violations: Vec<String>,
    revision: u64,
}

impl Default for RoomStore {
    fn default() -> Self {
        Self::new(RoomPlan::default_plan())
    }
}

impl RoomStore {
    /// Start from a plan. Violations begin empty; the first mutation
    /// populates them.
    #[must_use]
    pub fn new(plan: RoomPlan) -> Self {
        Self { plan, selected: None, violations: Vec::new(), revision: 0 }
    }

    #[must_use]
    pub fn plan(&self) -> &RoomPlan {
        &self.plan
    }

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.plan.rooms
    }

    #[must_use]
    pub fn room(&self, id: Uuid) -> Option<&Room> {
        self.plan.rooms.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn select_room(&mut self, id: Option<Uuid>) {
        self.selected = id;
        self.revision += 1;
    }

    /// Apply a sparse patch to one room. Unknown ids are ignored.
    pub fn update_room(&mut self, id: Uuid, patch: &RoomPatch) {
        if let Some(room) = self.plan.rooms.iter_mut().find(|r| r.id == id) {
            if let Some(name) = &patch.name {
                room.name = name.clone();
            }
            if let Some(kind) = &patch.kind {
                room.kind = kind.clone();
            }
            if let Some(x) = patch.x {
                room.x = x;
            }
            if let Some(y) = patch.y {
                room.y = y;
            }
            if let Some(width) = patch.width {
                room.width = width;
            }
            if let Some(height) = patch.height {
                room.height = height;
            }
            if let Some(ceiling_height) = patch.ceiling_height {
                room.ceiling_height = ceiling_height;
            }
            if let Some(color) = &patch.color {
                room.color = color.clone();
            }
        }
        self.after_mutation();
    }

    /// Scale both dimensions of one room by a factor.
    pub fn resize_room(&mut self, id: Uuid, scale: f64) {
        if let Some(room) = self.plan.rooms.iter_mut().find(|r| r.id == id) {
            room.width *= scale;
            room.height *= scale;
        }
        self.after_mutation();
    }

    pub fn add_room(&mut self, room: Room) {
        self.plan.rooms.push(room);
        self.after_mutation();
    }

    pub fn delete_room(&mut self, id: Uuid) {
        self.plan.rooms.retain(|r| r.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.after_mutation();
    }

    /// Sum of room rectangle areas (overlaps count twice; this mirrors the
    /// simple footprint arithmetic the validator uses).
    #[must_use]
    pub fn total_sqft(&self) -> f64 {
        self.plan.rooms.iter().map(Room::sqft).sum()
    }

    /// Violations as of the last mutation.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn after_mutation(&mut self) {
        self.violations = validate::validate(&self.plan);
        self.revision += 1;
    }
}
