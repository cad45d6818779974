//! Shared numeric constants for the floor-plan engine.

// ── Grid ────────────────────────────────────────────────────────

/// Grid quantization unit in feet. Interactively placed geometry is rounded
/// to the nearest multiple of this after a drag or draw completes.
pub const GRID_UNIT: f64 = 0.5;

// ── Openings ────────────────────────────────────────────────────

/// Maximum distance in feet at which a door/window snaps onto a wall.
pub const SNAP_MAX_DIST: f64 = 3.0;

/// Default door/window width in feet.
pub const DEFAULT_OPENING_WIDTH: f64 = 3.0;

// ── History / clipboard ─────────────────────────────────────────

/// Maximum number of undo frames retained; oldest frames are dropped.
pub const HISTORY_CAP: usize = 50;

/// Offset in feet applied to both axes of pasted items.
pub const PASTE_OFFSET: f64 = 2.0;

// ── Raster tracing ──────────────────────────────────────────────

/// Longer image side is downscaled to at most this many pixels.
pub const RASTER_MAX_SIDE: u32 = 800;

/// Grayscale values below this are treated as wall/edge pixels.
pub const RASTER_THRESHOLD: u8 = 128;

/// Minimum pixel-run length accepted as a candidate segment.
pub const RASTER_MIN_RUN: i64 = 15;

/// Maximum cross-axis distance in pixels for merging colinear-ish runs.
pub const RASTER_MERGE_DIST: i64 = 8;

/// Converted segments shorter than this many feet are discarded.
pub const RASTER_MIN_WALL_FEET: f64 = 1.5;

/// Endpoint distance in feet under which a converted segment counts as a
/// duplicate of an already-accepted one.
pub const RASTER_DUP_DIST_FEET: f64 = 1.0;
