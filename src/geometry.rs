//! Planar geometry: points, segments, grid snapping, and the polygon helpers
//! the area engine is built on.
//!
//! All coordinates are in feet on a shared per-floor plane. The one
//! non-obvious piece here is [`boundary_ring`]: rooms are stored as unordered
//! wall sets, so their outline has to be reconstructed by sorting the unique
//! endpoints around their centroid. That closure is only guaranteed correct
//! for boundaries that are star-shaped from the centroid (axis-aligned
//! rectangles and most L-shapes); it can silently misorder vertices for
//! highly concave selections. That is the editor's long-standing behavior
//! and fixtures depend on it, so it stays.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::GRID_UNIT;

/// A point in plan coordinates (feet).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight segment in plan coordinates (feet).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Euclidean length, invariant under endpoint swap.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }

    /// Whether the segment leans horizontal (strictly more run than rise).
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        (self.y2 - self.y1).abs() < (self.x2 - self.x1).abs()
    }

    /// Both endpoints of the segment.
    #[must_use]
    pub fn endpoints(&self) -> [Point; 2] {
        [Point::new(self.x1, self.y1), Point::new(self.x2, self.y2)]
    }
}

/// Round a coordinate to the nearest grid increment.
#[must_use]
pub fn snap(v: f64) -> f64 {
    (v / GRID_UNIT).round() * GRID_UNIT
}

/// Shoelace area of a closed ring. Returns 0 for fewer than 3 points and is
/// invariant under cyclic rotation and winding reversal.
#[must_use]
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    (area / 2.0).abs()
}

/// Close an unordered set of wall segments into a polygon ring.
///
/// Endpoints are deduplicated by exact coordinate equality, then sorted by
/// angle about their centroid (ascending `atan2`). The sort is stable, so
/// points at equal angles keep their collection order.
#[must_use]
pub fn boundary_ring(segments: &[Segment]) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();
    for segment in segments {
        for p in segment.endpoints() {
            if !points.iter().any(|q| q.x == p.x && q.y == p.y) {
                points.push(p);
            }
        }
    }
    if points.is_empty() {
        return points;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let cx = points.iter().map(|p| p.x).sum::<f64>() / n;
    let cy = points.iter().map(|p| p.y).sum::<f64>() / n;
    points.sort_by(|a, b| {
        let angle_a = (a.y - cy).atan2(a.x - cx);
        let angle_b = (b.y - cy).atan2(b.x - cx);
        angle_a.total_cmp(&angle_b)
    });
    points
}
