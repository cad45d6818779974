#![allow(clippy::float_cmp)]

use super::*;

fn names(layout: &GeneratedLayout) -> Vec<&str> {
    layout.areas.iter().map(|a| a.name.as_str()).collect()
}

// =============================================================
// Open concept
// =============================================================

#[test]
fn default_open_layout_shape() {
    let mut ids = IdSource::new();
    let layout = generate(&LayoutParams::default(), &mut ids);
    // 1800 sq ft at 1.3:1, rounded to 2 ft.
    assert_eq!(layout.width, 48.0);
    assert_eq!(layout.depth, 38.0);
    assert_eq!(
        names(&layout),
        vec!["Great Room", "Primary Bedroom", "Primary Bath", "Bedroom 2", "Bedroom 3"]
    );
    assert_eq!(layout.walls.len(), 10);
    assert_eq!(layout.doors.len(), 5);
    assert_eq!(layout.windows.len(), 6);
}

#[test]
fn great_room_references_front_wall_and_divider() {
    let mut ids = IdSource::new();
    let layout = generate(&LayoutParams::default(), &mut ids);
    let great_room = &layout.areas[0];
    // Fresh id source: exterior front wall is 1, the divider follows the
    // shell at 5. Every other generated area is an unreferenced label.
    assert_eq!(great_room.line_ids, vec![1, 5]);
    for area in &layout.areas[1..] {
        assert!(area.line_ids.is_empty());
    }
}

#[test]
fn no_primary_suite_drops_the_bath() {
    let mut ids = IdSource::new();
    let params = LayoutParams { primary_suite: false, ..LayoutParams::default() };
    let layout = generate(&params, &mut ids);
    assert!(names(&layout).iter().all(|n| *n != "Primary Bath"));
    assert_eq!(layout.walls.len(), 8);
}

#[test]
fn generation_is_deterministic() {
    let mut ids_a = IdSource::new();
    let mut ids_b = IdSource::new();
    let params = LayoutParams::default();
    assert_eq!(generate(&params, &mut ids_a), generate(&params, &mut ids_b));
}

#[test]
fn ids_come_from_the_callers_source() {
    let mut ids = IdSource::new();
    ids.advance_past([100]);
    let layout = generate(&LayoutParams::default(), &mut ids);
    assert!(layout.walls.iter().all(|w| w.id > 100));
}

// =============================================================
// Traditional
// =============================================================

#[test]
fn traditional_layout_shape() {
    let mut ids = IdSource::new();
    let params = LayoutParams { style: Style::Traditional, ..LayoutParams::default() };
    let layout = generate(&params, &mut ids);
    assert_eq!(
        names(&layout),
        vec![
            "Living Room",
            "Dining Room",
            "Kitchen",
            "Primary Bedroom",
            "Bedroom 2",
            "Bedroom 3"
        ]
    );
    assert_eq!(layout.walls.len(), 9);
    assert_eq!(layout.doors.len(), 7);
    assert_eq!(layout.windows.len(), 6);
}

#[test]
fn traditional_bedroom_count_follows_params() {
    let mut ids = IdSource::new();
    let params = LayoutParams {
        style: Style::Traditional,
        bedrooms: 2,
        ..LayoutParams::default()
    };
    let layout = generate(&params, &mut ids);
    let bedrooms = layout
        .areas
        .iter()
        .filter(|a| a.name.contains("Bedroom"))
        .count();
    assert_eq!(bedrooms, 2);
}

// =============================================================
// Parameter extraction
// =============================================================

#[test]
fn parses_full_request() {
    let defaults = LayoutParams::default();
    let params = parse_params("2000 sqft open concept 3 bed 2.5 bath", &defaults);
    assert_eq!(params.sqft, 2000.0);
    assert_eq!(params.bedrooms, 3);
    assert_eq!(params.bathrooms, 2.5);
    assert_eq!(params.style, Style::Open);
}

#[test]
fn silent_fields_keep_defaults() {
    let defaults = LayoutParams::default();
    let params = parse_params("something cozy please", &defaults);
    assert_eq!(params, defaults);
}

#[test]
fn traditional_and_no_garage() {
    let defaults = LayoutParams::default();
    let params = parse_params("traditional 4 bedrooms, no garage", &defaults);
    assert_eq!(params.style, Style::Traditional);
    assert_eq!(params.bedrooms, 4);
    assert!(!params.garage);
}

#[test]
fn adu_keywords_retarget() {
    let defaults = LayoutParams::default();
    let params = parse_params("a 600 sq ft guest house", &defaults);
    assert_eq!(params.target, Mode::Adu);
    assert_eq!(params.sqft, 600.0);
}

#[test]
fn primary_suite_sets_flag_and_main_target() {
    let defaults = LayoutParams { target: Mode::Adu, primary_suite: false, ..LayoutParams::default() };
    let params = parse_params("1800 sf with a primary suite", &defaults);
    assert!(params.primary_suite);
    // "primary" doubles as a main-house keyword.
    assert_eq!(params.target, Mode::Main);
}

#[test]
fn sqft_figure_is_three_or_four_digits() {
    let defaults = LayoutParams::default();
    // Five digits: the trailing four-digit window is what binds to "sq ft".
    let params = parse_params("12000 sq ft", &defaults);
    assert_eq!(params.sqft, 2000.0);
}

#[test]
fn square_feet_spelling_variants() {
    let defaults = LayoutParams::default();
    assert_eq!(parse_params("900 square feet", &defaults).sqft, 900.0);
    assert_eq!(parse_params("900 sq. ft", &defaults).sqft, 900.0);
    assert_eq!(parse_params("900sf", &defaults).sqft, 900.0);
}
