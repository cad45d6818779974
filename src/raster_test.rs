#![allow(clippy::float_cmp)]

use image::{DynamicImage, Rgba, RgbaImage};

use super::*;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn blank(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, WHITE)
}

fn h_stroke(img: &mut RgbaImage, x0: u32, x1: u32, y0: u32, rows: u32) {
    for y in y0..y0 + rows {
        for x in x0..x1 {
            img.put_pixel(x, y, BLACK);
        }
    }
}

fn v_stroke(img: &mut RgbaImage, x0: u32, cols: u32, y0: u32, y1: u32) {
    for y in y0..y1 {
        for x in x0..x0 + cols {
            img.put_pixel(x, y, BLACK);
        }
    }
}

// =============================================================
// Extraction
// =============================================================

#[test]
fn horizontal_stroke_becomes_one_snapped_wall() {
    // 100 px wide drawing of a 50 ft plan: 0.5 ft per pixel.
    let mut img = blank(100, 100);
    h_stroke(&mut img, 20, 60, 50, 2);
    let walls = walls_from_image(&DynamicImage::ImageRgba8(img), 50.0);
    assert_eq!(walls.len(), 1);
    let wall = &walls[0];
    assert!(wall.is_horizontal());
    assert_eq!(wall.x1, 10.0);
    // Inclusive run end: last dark pixel is x = 59.
    assert_eq!(wall.x2, 29.5);
    assert_eq!(wall.y1, wall.y2);
}

#[test]
fn vertical_stroke_becomes_one_wall() {
    let mut img = blank(100, 100);
    v_stroke(&mut img, 40, 2, 10, 90);
    let walls = walls_from_image(&DynamicImage::ImageRgba8(img), 50.0);
    assert_eq!(walls.len(), 1);
    assert!(!walls[0].is_horizontal());
    assert_eq!(walls[0].y1, 5.0);
}

#[test]
fn short_marks_are_ignored() {
    let mut img = blank(100, 100);
    // 10 px is under the minimum run length.
    h_stroke(&mut img, 20, 30, 50, 1);
    assert!(walls_from_image(&DynamicImage::ImageRgba8(img), 50.0).is_empty());
}

#[test]
fn thick_stroke_collapses_to_centerline() {
    let mut img = blank(100, 100);
    h_stroke(&mut img, 10, 90, 48, 5);
    let walls = walls_from_image(&DynamicImage::ImageRgba8(img), 50.0);
    assert_eq!(walls.len(), 1);
    // Rows 48..=52 merge toward the middle: y lands near 25 ft.
    assert!((walls[0].y1 - 25.0).abs() <= 1.0);
}

#[test]
fn near_parallel_duplicates_are_suppressed() {
    // Two lines 9 px apart: past the merge distance, but within 1 ft once
    // scaled at 0.05 ft per pixel.
    let mut img = blank(100, 100);
    h_stroke(&mut img, 10, 90, 50, 1);
    h_stroke(&mut img, 10, 90, 59, 1);
    let walls = walls_from_image(&DynamicImage::ImageRgba8(img), 5.0);
    assert_eq!(walls.len(), 1);
}

#[test]
fn tiny_walls_in_feet_are_dropped() {
    // A 20 px run on a 2 ft wide drawing is only half a foot.
    let mut img = blank(100, 100);
    h_stroke(&mut img, 20, 40, 50, 1);
    assert!(walls_from_image(&DynamicImage::ImageRgba8(img), 2.0).is_empty());
}

#[test]
fn large_images_are_downscaled_before_extraction() {
    // 1000 px downscales to the 800 px cap; feet are computed against the
    // downscaled width, so a full-width band still spans the full scale.
    let mut img = blank(1000, 500);
    h_stroke(&mut img, 0, 1000, 200, 10);
    let walls = walls_from_image(&DynamicImage::ImageRgba8(img), 40.0);
    assert_eq!(walls.len(), 1);
    assert!(walls[0].is_horizontal());
    assert_eq!(walls[0].x1, 0.0);
    assert_eq!(walls[0].x2, 40.0);
}

#[test]
fn blank_image_yields_no_walls() {
    let img = blank(64, 64);
    assert!(walls_from_image(&DynamicImage::ImageRgba8(img), 50.0).is_empty());
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn undecodable_bytes_yield_no_walls() {
    assert!(walls_from_bytes(b"definitely not an image", 50.0).is_empty());
}

#[test]
fn decodes_png_bytes() {
    let mut img = blank(100, 100);
    h_stroke(&mut img, 10, 90, 50, 2);
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("png encodes");
    let walls = walls_from_bytes(&bytes, 50.0);
    assert_eq!(walls.len(), 1);
}
