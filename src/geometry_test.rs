#![allow(clippy::float_cmp)]

use super::*;

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(x1, y1, x2, y2)
}

// =============================================================
// Segment length
// =============================================================

#[test]
fn length_matches_hypot() {
    let s = seg(0.0, 0.0, 3.0, 4.0);
    assert_eq!(s.length(), 5.0);
}

#[test]
fn length_invariant_under_endpoint_swap() {
    let s = seg(1.0, 2.0, 7.5, -3.0);
    let swapped = seg(7.5, -3.0, 1.0, 2.0);
    assert_eq!(s.length(), swapped.length());
}

#[test]
fn zero_length_segment() {
    assert_eq!(seg(2.0, 2.0, 2.0, 2.0).length(), 0.0);
}

#[test]
fn horizontal_lean() {
    assert!(seg(0.0, 0.0, 10.0, 1.0).is_horizontal());
    assert!(!seg(0.0, 0.0, 1.0, 10.0).is_horizontal());
    // Perfect diagonal is not horizontal (strict comparison).
    assert!(!seg(0.0, 0.0, 5.0, 5.0).is_horizontal());
}

// =============================================================
// Grid snap
// =============================================================

#[test]
fn snap_rounds_to_half_foot() {
    assert_eq!(snap(1.2), 1.0);
    assert_eq!(snap(1.3), 1.5);
    assert_eq!(snap(0.0), 0.0);
    assert_eq!(snap(-1.3), -1.5);
}

#[test]
fn snap_is_idempotent() {
    for v in [0.0, 0.5, 17.5, -42.0, 3.1] {
        assert_eq!(snap(snap(v)), snap(v));
    }
}

// =============================================================
// Polygon area (shoelace)
// =============================================================

#[test]
fn area_of_fewer_than_three_points_is_zero() {
    assert_eq!(polygon_area(&[]), 0.0);
    assert_eq!(polygon_area(&[Point::new(0.0, 0.0)]), 0.0);
    assert_eq!(polygon_area(&[Point::new(0.0, 0.0), Point::new(4.0, 0.0)]), 0.0);
}

#[test]
fn area_of_unit_square() {
    let ring = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];
    assert_eq!(polygon_area(&ring), 1.0);
}

#[test]
fn area_invariant_under_rotation_and_reversal() {
    let ring = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 6.0),
        Point::new(0.0, 6.0),
    ];
    let base = polygon_area(&ring);
    assert_eq!(base, 60.0);

    let mut rotated = ring.clone();
    rotated.rotate_left(2);
    assert_eq!(polygon_area(&rotated), base);

    let mut reversed = ring;
    reversed.reverse();
    assert_eq!(polygon_area(&reversed), base);
}

#[test]
fn area_of_l_shape() {
    // 4x4 square with a 2x2 corner bite: 16 - 4 = 12.
    let ring = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 2.0),
        Point::new(2.0, 2.0),
        Point::new(2.0, 4.0),
        Point::new(0.0, 4.0),
    ];
    assert_eq!(polygon_area(&ring), 12.0);
}

// =============================================================
// Boundary ring reconstruction
// =============================================================

#[test]
fn ring_from_rectangle_walls() {
    let walls = [
        seg(0.0, 0.0, 8.0, 0.0),
        seg(8.0, 0.0, 8.0, 6.0),
        seg(8.0, 6.0, 0.0, 6.0),
        seg(0.0, 6.0, 0.0, 0.0),
    ];
    let ring = boundary_ring(&walls);
    assert_eq!(ring.len(), 4);
    assert_eq!(polygon_area(&ring), 48.0);
}

#[test]
fn ring_dedupes_shared_corners() {
    // Each corner appears in two walls; only four unique points remain.
    let walls = [
        seg(0.0, 0.0, 4.0, 0.0),
        seg(4.0, 0.0, 4.0, 4.0),
        seg(4.0, 4.0, 0.0, 4.0),
        seg(0.0, 4.0, 0.0, 0.0),
    ];
    assert_eq!(boundary_ring(&walls).len(), 4);
}

#[test]
fn ring_orders_points_by_angle_regardless_of_wall_order() {
    // Same rectangle with walls given in scrambled order and orientation.
    let walls = [
        seg(8.0, 6.0, 0.0, 6.0),
        seg(0.0, 0.0, 8.0, 0.0),
        seg(0.0, 6.0, 0.0, 0.0),
        seg(8.0, 0.0, 8.0, 6.0),
    ];
    let ring = boundary_ring(&walls);
    assert_eq!(polygon_area(&ring), 48.0);
}

#[test]
fn ring_of_empty_input_is_empty() {
    assert!(boundary_ring(&[]).is_empty());
}

#[test]
fn ring_handles_disjoint_walls() {
    // Two parallel walls produce four points and a degenerate-but-finite ring.
    let walls = [seg(0.0, 0.0, 4.0, 0.0), seg(0.0, 2.0, 4.0, 2.0)];
    let ring = boundary_ring(&walls);
    assert_eq!(ring.len(), 4);
    assert_eq!(polygon_area(&ring), 8.0);
}
