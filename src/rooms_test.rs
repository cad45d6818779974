#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Default plan
// =============================================================

#[test]
fn default_plan_has_the_renovation_fixture() {
    let plan = RoomPlan::default_plan();
    assert_eq!(plan.name, "1700 Midwood Dr Renovation");
    assert_eq!(plan.rooms.len(), 10);
    assert_eq!(plan.lot.width, 80.0);
    assert_eq!(plan.lot.setbacks.left, 5.0);
    let kitchen = plan.rooms.iter().find(|r| r.name == "Kitchen").expect("kitchen");
    assert_eq!(kitchen.kind, "kitchen");
    assert_eq!((kitchen.width, kitchen.height), (8.5, 15.0));
}

#[test]
fn default_plan_rooms_get_unique_ids() {
    let plan = RoomPlan::default_plan();
    for (i, room) in plan.rooms.iter().enumerate() {
        for other in &plan.rooms[i + 1..] {
            assert_ne!(room.id, other.id);
        }
    }
}

// =============================================================
// Store mutations
// =============================================================

#[test]
fn violations_start_empty() {
    let store = RoomStore::default();
    assert!(store.violations().is_empty());
}

#[test]
fn update_room_applies_only_present_fields() {
    let mut store = RoomStore::default();
    let kitchen = store.rooms().iter().find(|r| r.name == "Kitchen").expect("kitchen").clone();
    let patch = RoomPatch { width: Some(12.0), ..RoomPatch::default() };
    store.update_room(kitchen.id, &patch);
    let updated = store.room(kitchen.id).expect("still there");
    assert_eq!(updated.width, 12.0);
    assert_eq!(updated.height, kitchen.height);
    assert_eq!(updated.name, kitchen.name);
}

#[test]
fn resize_scales_both_dimensions() {
    let mut store = RoomStore::default();
    let kitchen = store.rooms().iter().find(|r| r.name == "Kitchen").expect("kitchen").clone();
    store.resize_room(kitchen.id, 1.2);
    let resized = store.room(kitchen.id).expect("still there");
    assert!((resized.width - kitchen.width * 1.2).abs() < 1e-9);
    assert!((resized.height - kitchen.height * 1.2).abs() < 1e-9);
}

#[test]
fn delete_room_clears_its_selection() {
    let mut store = RoomStore::default();
    let id = store.rooms()[0].id;
    store.select_room(Some(id));
    store.delete_room(id);
    assert_eq!(store.selected(), None);
    assert!(store.room(id).is_none());
}

#[test]
fn mutations_recompute_violations() {
    let mut store = RoomStore::default();
    let bath = store
        .rooms()
        .iter()
        .find(|r| r.name == "Primary Bath")
        .expect("bath")
        .clone();
    // 5 x 10 = 50 sq ft; halving both dimensions puts it under 35.
    store.resize_room(bath.id, 0.5);
    assert!(store
        .violations()
        .iter()
        .any(|v| v.contains("Primary Bath")));
    // Growing it back clears the violation on the next recompute.
    store.resize_room(bath.id, 2.0);
    assert!(store.violations().iter().all(|v| !v.contains("Primary Bath")));
}

#[test]
fn total_sqft_sums_room_rectangles() {
    let mut store = RoomStore::new(RoomPlan {
        rooms: Vec::new(),
        ..RoomPlan::default_plan()
    });
    assert_eq!(store.total_sqft(), 0.0);
    store.add_room(Room {
        id: Uuid::new_v4(),
        name: "Studio".to_owned(),
        kind: "living".to_owned(),
        x: 0.0,
        y: 0.0,
        width: 20.0,
        height: 15.0,
        ceiling_height: 9.0,
        color: "#00aa00".to_owned(),
    });
    assert_eq!(store.total_sqft(), 300.0);
}

#[test]
fn revision_ticks_on_every_mutation() {
    let mut store = RoomStore::default();
    let id = store.rooms()[0].id;
    let r0 = store.revision();
    store.resize_room(id, 1.1);
    let r1 = store.revision();
    assert!(r1 > r0);
    store.select_room(Some(id));
    assert!(store.revision() > r1);
}
