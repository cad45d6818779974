use uuid::Uuid;

use crate::rooms::{Lot, Room, RoomPlan, Setbacks};

use super::*;

fn room(name: &str, kind: &str, x: f64, y: f64, w: f64, h: f64) -> Room {
    Room {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        kind: kind.to_owned(),
        x,
        y,
        width: w,
        height: h,
        ceiling_height: 9.0,
        color: "#0066aa".to_owned(),
    }
}

fn plan_with(rooms: Vec<Room>) -> RoomPlan {
    RoomPlan {
        name: "Test Lot".to_owned(),
        lot: Lot {
            width: 80.0,
            depth: 100.0,
            setbacks: Setbacks { front: 20.0, back: 20.0, left: 5.0, right: 10.0 },
        },
        rooms,
    }
}

// =============================================================
// Room size minimums
// =============================================================

#[test]
fn undersized_bedroom_violates() {
    let plan = plan_with(vec![room("New bedroom", "bedroom", 0.0, 0.0, 10.0, 6.0)]);
    let violations = validate(&plan);
    assert_eq!(
        violations,
        vec!["New bedroom: 60 sq ft below minimum 70 sq ft for bedroom".to_owned()]
    );
}

#[test]
fn adequate_bedroom_passes() {
    let plan = plan_with(vec![room("New bedroom", "bedroom", 0.0, 0.0, 10.0, 8.0)]);
    assert!(validate(&plan).is_empty());
}

#[test]
fn kinds_without_minimums_are_skipped() {
    let plan = plan_with(vec![room("Front Porch", "porch", 0.0, 0.0, 2.0, 2.0)]);
    assert!(validate(&plan).is_empty());
}

#[test]
fn minimum_size_table() {
    assert_eq!(min_room_size("bedroom"), Some(70.0));
    assert_eq!(min_room_size("bathroom"), Some(35.0));
    assert_eq!(min_room_size("kitchen"), Some(50.0));
    assert_eq!(min_room_size("living"), Some(120.0));
    assert_eq!(min_room_size("porch"), None);
}

// =============================================================
// Lot-level checks
// =============================================================

#[test]
fn excessive_coverage_violates() {
    let plan = plan_with(vec![room("Hall", "hall", 0.0, 0.0, 60.0, 60.0)]);
    let violations = validate(&plan);
    assert_eq!(violations, vec!["Lot coverage: 45.0% exceeds max 40%".to_owned()]);
}

#[test]
fn left_setback_violation_from_negative_x() {
    let plan = plan_with(vec![room("Wing", "hall", -2.0, 0.0, 10.0, 10.0)]);
    let violations = validate(&plan);
    assert_eq!(
        violations,
        vec!["Left setback violation: 3.0ft (min: 5ft)".to_owned()]
    );
}

#[test]
fn rooms_at_or_past_origin_skip_the_setback_check() {
    let plan = plan_with(vec![room("Wing", "hall", 0.0, 0.0, 10.0, 10.0)]);
    assert!(validate(&plan).is_empty());
}

#[test]
fn empty_plan_passes_vacuously() {
    assert!(validate(&plan_with(Vec::new())).is_empty());
}

#[test]
fn multiple_violations_accumulate() {
    let plan = plan_with(vec![
        room("Tiny Bath", "bathroom", 0.0, 0.0, 4.0, 4.0),
        room("Tiny Kitchen", "kitchen", 10.0, 0.0, 5.0, 5.0),
    ]);
    let violations = validate(&plan);
    assert_eq!(violations.len(), 2);
    assert!(violations[0].contains("Tiny Bath"));
    assert!(violations[1].contains("Tiny Kitchen"));
}
