//! Blueprint image import: extract axis-aligned wall segments from a raster
//! floor-plan drawing.
//!
//! The pipeline is deliberately simple: downscale, threshold to a dark mask,
//! collect horizontal and vertical pixel runs, merge nearby collinear runs,
//! then convert to feet using the caller's real-world width and grid-snap the
//! endpoints. It works well on clean line drawings and degrades to "some
//! walls" on photos, which is the intended bar; the user edits from there.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::consts::{
    RASTER_DUP_DIST_FEET, RASTER_MAX_SIDE, RASTER_MERGE_DIST, RASTER_MIN_RUN,
    RASTER_MIN_WALL_FEET, RASTER_THRESHOLD,
};
use crate::geometry::{Segment, snap};

/// One detected pixel-space line, axis-aligned, endpoints inclusive.
#[derive(Debug, Clone, Copy)]
struct PixelLine {
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
}

impl PixelLine {
    fn is_horizontal(self) -> bool {
        (self.y2 - self.y1).abs() < (self.x2 - self.x1).abs()
    }
}

/// Decode an image from raw bytes and extract wall segments.
///
/// `scale_feet` is the real-world width of the drawing. Undecodable input
/// yields an empty result rather than an error; a blueprint import that
/// fails should leave the plan untouched, not abort a session.
#[must_use]
pub fn walls_from_bytes(bytes: &[u8], scale_feet: f64) -> Vec<Segment> {
    match image::load_from_memory(bytes) {
        Ok(img) => walls_from_image(&img, scale_feet),
        Err(err) => {
            tracing::warn!(error = %err, "blueprint image failed to decode");
            Vec::new()
        }
    }
}

/// Extract wall segments from a decoded image.
#[must_use]
pub fn walls_from_image(img: &DynamicImage, scale_feet: f64) -> Vec<Segment> {
    let (src_w, src_h) = img.dimensions();
    if src_w == 0 || src_h == 0 {
        return Vec::new();
    }

    let max_side = f64::from(RASTER_MAX_SIDE);
    let factor = (max_side / f64::from(src_w))
        .min(max_side / f64::from(src_h))
        .min(1.0);
    let width = (f64::from(src_w) * factor) as u32;
    let height = (f64::from(src_h) * factor) as u32;

    let rgba = if factor < 1.0 {
        img.resize_exact(width, height, FilterType::Triangle).to_rgba8()
    } else {
        img.to_rgba8()
    };

    let dark = threshold_mask(&rgba);
    let width = i64::from(width);
    let height = i64::from(height);

    let detected = detect_runs(&dark, width, height);
    let merged = merge_lines(&detected);

    let feet_per_pixel = scale_feet / width as f64;
    let converted: Vec<Segment> = merged
        .iter()
        .map(|line| {
            Segment::new(
                snap(line.x1 as f64 * feet_per_pixel),
                snap(line.y1 as f64 * feet_per_pixel),
                snap(line.x2 as f64 * feet_per_pixel),
                snap(line.y2 as f64 * feet_per_pixel),
            )
        })
        .collect();

    let mut accepted: Vec<Segment> = Vec::new();
    for segment in converted {
        if segment.length() < RASTER_MIN_WALL_FEET {
            continue;
        }
        let duplicate = accepted.iter().any(|other| {
            (segment.x1 - other.x1).hypot(segment.y1 - other.y1) < RASTER_DUP_DIST_FEET
                && (segment.x2 - other.x2).hypot(segment.y2 - other.y2) < RASTER_DUP_DIST_FEET
        });
        if !duplicate {
            accepted.push(segment);
        }
    }

    tracing::debug!(
        detected = detected.len(),
        walls = accepted.len(),
        "extracted walls from blueprint image"
    );
    accepted
}

fn threshold_mask(rgba: &image::RgbaImage) -> Vec<bool> {
    rgba.pixels()
        .map(|px| {
            let luma = (f64::from(px[0]) * 0.299
                + f64::from(px[1]) * 0.587
                + f64::from(px[2]) * 0.114)
                .round() as u8;
            luma < RASTER_THRESHOLD
        })
        .collect()
}

/// Row-wise and column-wise dark runs of at least [`RASTER_MIN_RUN`] pixels.
/// Recorded endpoints are inclusive; the length test uses the exclusive end.
fn detect_runs(dark: &[bool], width: i64, height: i64) -> Vec<PixelLine> {
    let at = |x: i64, y: i64| dark[(y * width + x) as usize];
    let mut lines = Vec::new();

    for y in 0..height {
        let mut start_x = -1i64;
        for x in 0..width {
            if at(x, y) {
                if start_x == -1 {
                    start_x = x;
                }
            } else {
                if start_x != -1 && x - start_x >= RASTER_MIN_RUN {
                    lines.push(PixelLine { x1: start_x, y1: y, x2: x - 1, y2: y });
                }
                start_x = -1;
            }
        }
        if start_x != -1 && width - start_x >= RASTER_MIN_RUN {
            lines.push(PixelLine { x1: start_x, y1: y, x2: width - 1, y2: y });
        }
    }

    for x in 0..width {
        let mut start_y = -1i64;
        for y in 0..height {
            if at(x, y) {
                if start_y == -1 {
                    start_y = y;
                }
            } else {
                if start_y != -1 && y - start_y >= RASTER_MIN_RUN {
                    lines.push(PixelLine { x1: x, y1: start_y, x2: x, y2: y - 1 });
                }
                start_y = -1;
            }
        }
        if start_y != -1 && height - start_y >= RASTER_MIN_RUN {
            lines.push(PixelLine { x1: x, y1: start_y, x2: x, y2: height - 1 });
        }
    }

    lines
}

/// Greedy pairwise merge of same-orientation runs. The accumulating line's
/// cross-axis coordinate drifts toward each absorbed run's midpoint, so a
/// thick stroke collapses to roughly its centerline. Runs merge when their
/// cross-axis gap is under [`RASTER_MERGE_DIST`] and their spans overlap or
/// fall within twice that distance of each other.
fn merge_lines(detected: &[PixelLine]) -> Vec<PixelLine> {
    let mut merged = Vec::new();
    let mut used = vec![false; detected.len()];

    for i in 0..detected.len() {
        if used[i] {
            continue;
        }
        let mut line = detected[i];
        let horizontal = line.is_horizontal();

        for j in (i + 1)..detected.len() {
            if used[j] {
                continue;
            }
            let other = detected[j];
            if horizontal != other.is_horizontal() {
                continue;
            }
            if horizontal && (line.y1 - other.y1).abs() < RASTER_MERGE_DIST {
                if line.x2.min(other.x2) - line.x1.max(other.x1) > -RASTER_MERGE_DIST * 2 {
                    line.x1 = line.x1.min(other.x1);
                    line.x2 = line.x2.max(other.x2);
                    let mid = ((line.y1 + other.y1) as f64 / 2.0).round() as i64;
                    line.y1 = mid;
                    line.y2 = mid;
                    used[j] = true;
                }
            } else if !horizontal && (line.x1 - other.x1).abs() < RASTER_MERGE_DIST {
                if line.y2.min(other.y2) - line.y1.max(other.y1) > -RASTER_MERGE_DIST * 2 {
                    line.y1 = line.y1.min(other.y1);
                    line.y2 = line.y2.max(other.y2);
                    let mid = ((line.x1 + other.x1) as f64 / 2.0).round() as i64;
                    line.x1 = mid;
                    line.x2 = mid;
                    used[j] = true;
                }
            }
        }
        used[i] = true;
        merged.push(line);
    }

    merged
}
