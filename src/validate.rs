//! Zoning checks for the rectangle-room plan, modeled on Raleigh, NC
//! residential rules.
//!
//! Validation is advisory: it returns human-readable violation strings and
//! never blocks a mutation. The checks are deliberately coarse: a bounding
//! box stands in for the building footprint, and only the left setback is
//! checked (rooms at negative x are the only way the fixture plan can poke
//! past its placement origin).

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::rooms::RoomPlan;

/// Minimum side setback, feet.
pub const SETBACK_SIDE_MIN: f64 = 5.0;
/// Maximum fraction of the lot the building footprint may cover.
pub const MAX_LOT_COVERAGE: f64 = 0.40;

/// Minimum square footage for a room kind, where one applies.
#[must_use]
pub fn min_room_size(kind: &str) -> Option<f64> {
    match kind {
        "bedroom" => Some(70.0),
        "bathroom" => Some(35.0),
        "kitchen" => Some(50.0),
        "living" => Some(120.0),
        _ => None,
    }
}

/// Check a plan and return one message per violation. An empty plan has
/// no footprint and passes vacuously.
#[must_use]
pub fn validate(plan: &RoomPlan) -> Vec<String> {
    let mut violations = Vec::new();
    if plan.rooms.is_empty() {
        return violations;
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for room in &plan.rooms {
        min_x = min_x.min(room.x);
        max_x = max_x.max(room.x + room.width);
        min_y = min_y.min(room.y);
        max_y = max_y.max(room.y + room.height);
    }

    // Rooms at negative x eat into the left setback.
    if min_x < 0.0 {
        let actual_setback = plan.lot.setbacks.left + min_x;
        if actual_setback < SETBACK_SIDE_MIN {
            violations.push(format!(
                "Left setback violation: {actual_setback:.1}ft (min: {SETBACK_SIDE_MIN:.0}ft)"
            ));
        }
    }

    let footprint = (max_x - min_x) * (max_y - min_y);
    let lot_area = plan.lot.width * plan.lot.depth;
    let coverage = footprint / lot_area;
    if coverage > MAX_LOT_COVERAGE {
        violations.push(format!(
            "Lot coverage: {:.1}% exceeds max {:.0}%",
            coverage * 100.0,
            MAX_LOT_COVERAGE * 100.0
        ));
    }

    for room in &plan.rooms {
        let sqft = room.sqft();
        if let Some(min_size) = min_room_size(&room.kind) {
            if sqft < min_size {
                violations.push(format!(
                    "{}: {sqft:.0} sq ft below minimum {min_size:.0} sq ft for {}",
                    room.name, room.kind
                ));
            }
        }
    }

    violations
}
