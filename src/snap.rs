//! Wall-proximity snapping for door and window placement.
//!
//! Openings are not structurally tied to walls; when one is placed (or
//! re-snapped later) the nearest orientation-matched wall within
//! [`SNAP_MAX_DIST`](crate::consts::SNAP_MAX_DIST) is found and the opening
//! is centered on its span. The same routine serves initial placement and
//! the explicit "snap to wall center" action.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use crate::consts::SNAP_MAX_DIST;
use crate::doc::{EntityId, Orientation, Wall};

/// A computed snap target on a wall span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSnap {
    /// Anchor x for the opening (centered on the wall span for horizontal
    /// walls, pinned to the wall for vertical ones).
    pub x: f64,
    /// Anchor y for the opening.
    pub y: f64,
    /// The wall the opening snapped onto.
    pub wall_id: EntityId,
}

/// Find the best wall to snap an opening of `item_width` feet onto.
///
/// Only walls whose own lean matches `orientation` are considered. The
/// maximum snap distance doubles as the best-distance accumulator, so each
/// accepted candidate tightens both the cross-axis gate and the span
/// tolerance for later walls. Ties go to the first wall found (strict `<`).
#[must_use]
pub fn find_snap_to_wall(
    walls: &[Wall],
    x: f64,
    y: f64,
    item_width: f64,
    orientation: Orientation,
) -> Option<WallSnap> {
    let mut best: Option<WallSnap> = None;
    let mut min_dist = SNAP_MAX_DIST;

    for wall in walls {
        let wall_horizontal = (wall.y2 - wall.y1).abs() < (wall.x2 - wall.x1).abs();
        match orientation {
            Orientation::Horizontal if wall_horizontal => {
                let wall_y = wall.y1;
                if (y - wall_y).abs() < min_dist {
                    let start = wall.x1.min(wall.x2);
                    let end = wall.x1.max(wall.x2);
                    let center_x = start + (end - start - item_width) / 2.0;
                    if x >= start - min_dist && x <= end + min_dist {
                        let dist = (y - wall_y).abs();
                        if dist < min_dist {
                            min_dist = dist;
                            best = Some(WallSnap { x: center_x, y: wall_y, wall_id: wall.id });
                        }
                    }
                }
            }
            Orientation::Vertical if !wall_horizontal => {
                let wall_x = wall.x1;
                if (x - wall_x).abs() < min_dist {
                    let start = wall.y1.min(wall.y2);
                    let end = wall.y1.max(wall.y2);
                    let center_y = start + (end - start - item_width) / 2.0;
                    if y >= start - min_dist && y <= end + min_dist {
                        let dist = (x - wall_x).abs();
                        if dist < min_dist {
                            min_dist = dist;
                            best = Some(WallSnap { x: wall_x, y: center_y, wall_id: wall.id });
                        }
                    }
                }
            }
            _ => {}
        }
    }

    best
}
