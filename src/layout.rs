//! Parametric layout generation: turn a parameter bundle into a complete
//! wall/area/door/window set, plus keyword extraction of those parameters
//! from free-form text.
//!
//! Generation is deterministic: the same parameters always produce the same
//! geometry. Footprint targets a 1.3:1 width-to-depth ratio with dimensions
//! rounded to 2 ft. Only the open-concept great room gets wall references on
//! its area; the remaining generated areas ship with empty `line_ids` and
//! exist as labels until the user redraws their boundaries.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::command::{leading_number, skip_spaces};
use crate::doc::{Area, Door, EntityId, IdSource, Mode, Orientation, Swing, Wall, Window};

/// Overall arrangement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Combined living/kitchen/dining great room, bedrooms in a private wing.
    Open,
    /// Separate defined rooms, front-back split.
    Traditional,
}

/// Generator inputs. `Default` mirrors the starting chat parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub sqft: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub floors: u32,
    pub style: Style,
    pub garage: bool,
    pub primary_suite: bool,
    pub target: Mode,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            sqft: 1800.0,
            bedrooms: 3,
            bathrooms: 2.0,
            floors: 1,
            style: Style::Open,
            garage: true,
            primary_suite: true,
            target: Mode::Main,
        }
    }
}

/// One generated floor's content plus its outer dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedLayout {
    pub walls: Vec<Wall>,
    pub areas: Vec<Area>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
    pub width: f64,
    pub depth: f64,
}

const COLOR_LIVING: &str = "hsl(200, 50%, 45%)";
const COLOR_KITCHEN: &str = "hsl(30, 50%, 45%)";
const COLOR_DINING: &str = "hsl(45, 50%, 45%)";
const COLOR_BEDROOM: &str = "hsl(240, 40%, 45%)";
const COLOR_BATHROOM: &str = "hsl(180, 50%, 40%)";
const COLOR_PRIMARY: &str = "hsl(260, 40%, 45%)";

fn round2(v: f64) -> f64 {
    (v / 2.0).round() * 2.0
}

struct Builder<'a> {
    ids: &'a mut IdSource,
    walls: Vec<Wall>,
    areas: Vec<Area>,
    doors: Vec<Door>,
    windows: Vec<Window>,
}

impl Builder<'_> {
    fn wall(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> EntityId {
        let id = self.ids.next_id();
        self.walls.push(Wall { id, x1, y1, x2, y2 });
        id
    }

    fn area(&mut self, name: &str, line_ids: Vec<EntityId>, color: &str) {
        let id = self.ids.next_id();
        self.areas.push(Area {
            id,
            name: name.to_owned(),
            line_ids,
            color: color.to_owned(),
        });
    }

    fn door(&mut self, x: f64, y: f64, width: f64, orientation: Orientation, swing: Swing) {
        let id = self.ids.next_id();
        self.doors.push(Door { id, x, y, width, orientation, swing });
    }

    fn window(&mut self, x: f64, y: f64, width: f64, orientation: Orientation) {
        let id = self.ids.next_id();
        self.windows.push(Window { id, x, y, width, orientation });
    }
}

/// Generate a floor layout. Ids are drawn from the caller's source so the
/// result can be applied to a store without renumbering.
#[must_use]
pub fn generate(params: &LayoutParams, ids: &mut IdSource) -> GeneratedLayout {
    // Footprint from square footage at a 1.3:1 width:depth ratio.
    let ratio = 1.3;
    let depth = (params.sqft / ratio).sqrt();
    let width = params.sqft / depth;
    let total_width = round2(width);
    let total_depth = round2(depth);

    let mut b = Builder {
        ids,
        walls: Vec::new(),
        areas: Vec::new(),
        doors: Vec::new(),
        windows: Vec::new(),
    };

    // Exterior shell.
    let ext_top = b.wall(0.0, 0.0, total_width, 0.0);
    b.wall(total_width, 0.0, total_width, total_depth);
    b.wall(total_width, total_depth, 0.0, total_depth);
    b.wall(0.0, total_depth, 0.0, 0.0);

    match params.style {
        Style::Open => {
            // Public great room on one side, private wing on the other.
            let public_width = round2(total_width * 0.55);

            let divider = b.wall(public_width, 0.0, public_width, total_depth);
            b.area("Great Room", vec![ext_top, divider], COLOR_LIVING);

            b.window(public_width / 2.0 - 3.0, 0.0, 6.0, Orientation::Horizontal);
            b.window(public_width / 2.0 - 3.0, total_depth, 6.0, Orientation::Horizontal);
            b.window(0.0, total_depth / 2.0 - 2.0, 4.0, Orientation::Vertical);
            b.door(public_width / 3.0, 0.0, 3.0, Orientation::Horizontal, Swing::Right);

            let room_depth = round2(total_depth / f64::from(params.bedrooms + 1));
            let hall_width = 4.0;
            b.wall(public_width + hall_width, 0.0, public_width + hall_width, total_depth);

            // Primary bedroom across the back of the wing.
            let primary_depth = round2(room_depth * 1.5);
            b.wall(
                public_width,
                total_depth - primary_depth,
                total_width,
                total_depth - primary_depth,
            );
            b.area("Primary Bedroom", Vec::new(), COLOR_PRIMARY);
            b.door(
                public_width + hall_width,
                total_depth - primary_depth + 1.0,
                3.0,
                Orientation::Vertical,
                Swing::Right,
            );
            b.window(total_width, total_depth - primary_depth / 2.0, 4.0, Orientation::Vertical);

            if params.primary_suite {
                let bath_width = 8.0;
                let bath_depth = 6.0;
                b.wall(
                    total_width - bath_width,
                    total_depth - primary_depth,
                    total_width - bath_width,
                    total_depth - primary_depth + bath_depth,
                );
                b.wall(
                    total_width - bath_width,
                    total_depth - primary_depth + bath_depth,
                    total_width,
                    total_depth - primary_depth + bath_depth,
                );
                b.area("Primary Bath", Vec::new(), COLOR_BATHROOM);
                b.door(
                    total_width - bath_width,
                    total_depth - primary_depth + 2.0,
                    2.5,
                    Orientation::Vertical,
                    Swing::Left,
                );
            }

            let other_bedrooms = params.bedrooms.saturating_sub(1);
            let other_depth =
                round2((total_depth - primary_depth) / f64::from(other_bedrooms.max(1)));
            for i in 0..other_bedrooms {
                let y = f64::from(i) * other_depth;
                if i + 1 < other_bedrooms {
                    b.wall(public_width + hall_width, y + other_depth, total_width, y + other_depth);
                }
                b.area(&format!("Bedroom {}", i + 2), Vec::new(), COLOR_BEDROOM);
                b.door(public_width + hall_width, y + 1.0, 2.5, Orientation::Vertical, Swing::Right);
                b.window(total_width, y + other_depth / 2.0, 3.0, Orientation::Vertical);
            }
        }
        Style::Traditional => {
            // Front: living and dining. Back: kitchen and bedroom wing.
            let front_depth = round2(total_depth * 0.4);
            let living_width = round2(total_width * 0.5);

            b.wall(0.0, front_depth, total_width, front_depth);
            b.wall(living_width, 0.0, living_width, front_depth);

            b.area("Living Room", Vec::new(), COLOR_LIVING);
            b.window(living_width / 2.0 - 2.0, 0.0, 4.0, Orientation::Horizontal);
            b.door(living_width / 3.0, 0.0, 3.0, Orientation::Horizontal, Swing::Right);

            b.area("Dining Room", Vec::new(), COLOR_DINING);
            b.window(
                living_width + (total_width - living_width) / 2.0 - 2.0,
                0.0,
                4.0,
                Orientation::Horizontal,
            );
            b.door(living_width, front_depth / 2.0, 3.0, Orientation::Vertical, Swing::Left);

            let back_depth = total_depth - front_depth;
            let kitchen_width = round2(total_width * 0.35);

            b.wall(kitchen_width, front_depth, kitchen_width, total_depth);
            b.area("Kitchen", Vec::new(), COLOR_KITCHEN);
            b.window(kitchen_width / 2.0 - 2.0, total_depth, 4.0, Orientation::Horizontal);
            b.door(kitchen_width, front_depth + 2.0, 3.0, Orientation::Vertical, Swing::Right);
            b.door(kitchen_width / 2.0 + 1.0, front_depth, 3.0, Orientation::Horizontal, Swing::Left);

            let bedroom_height = round2(back_depth / f64::from(params.bedrooms.max(1)));
            for i in 0..params.bedrooms {
                let y = front_depth + f64::from(i) * bedroom_height;
                if i + 1 < params.bedrooms {
                    b.wall(kitchen_width, y + bedroom_height, total_width, y + bedroom_height);
                }
                if i == 0 {
                    b.area("Primary Bedroom", Vec::new(), COLOR_PRIMARY);
                } else {
                    b.area(&format!("Bedroom {}", i + 1), Vec::new(), COLOR_BEDROOM);
                }
                b.window(total_width, y + bedroom_height / 2.0, 3.0, Orientation::Vertical);
                b.door(kitchen_width, y + 1.0, 2.5, Orientation::Vertical, Swing::Right);
            }
        }
    }

    tracing::debug!(
        width = total_width,
        depth = total_depth,
        rooms = b.areas.len(),
        "generated layout"
    );
    GeneratedLayout {
        walls: b.walls,
        areas: b.areas,
        doors: b.doors,
        windows: b.windows,
        width: total_width,
        depth: total_depth,
    }
}

/// Extract layout parameters from free-form text, starting from `defaults`
/// and overriding only what the text mentions.
#[must_use]
pub fn parse_params(text: &str, defaults: &LayoutParams) -> LayoutParams {
    let lower = text.to_lowercase();
    let mut params = *defaults;

    if let Some(sqft) = extract_sqft(&lower) {
        params.sqft = sqft;
    }
    if let Some(beds) = extract_count(&lower, &["bed", "br"]) {
        params.bedrooms = beds as u32;
    }
    if let Some(baths) = extract_fractional_count(&lower, &["ba"]) {
        params.bathrooms = baths;
    }

    if lower.contains("open concept") || lower.contains("open floor") || lower.contains("great room")
    {
        params.style = Style::Open;
    } else if lower.contains("traditional")
        || lower.contains("separate")
        || lower.contains("formal")
    {
        params.style = Style::Traditional;
    }

    if lower.contains("no garage") || lower.contains("without garage") {
        params.garage = false;
    } else if lower.contains("garage") {
        params.garage = true;
    }

    if lower.contains("master suite") || lower.contains("primary suite") || lower.contains("ensuite")
    {
        params.primary_suite = true;
    }

    // Note "primary" alone retargets the main house, so "primary suite"
    // both sets the suite flag and picks the main-house target.
    if lower.contains("adu") || lower.contains("accessory") || lower.contains("guest house") {
        params.target = Mode::Adu;
    } else if lower.contains("main house") || lower.contains("primary") {
        params.target = Mode::Main;
    }

    params
}

/// A 3-4 digit figure followed by a square-footage suffix.
fn extract_sqft(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    for start in 0..bytes.len() {
        if !bytes[start].is_ascii_digit() {
            continue;
        }
        for len in [4usize, 3] {
            if start + len > bytes.len() {
                continue;
            }
            if !bytes[start..start + len].iter().all(u8::is_ascii_digit) {
                continue;
            }
            if has_sqft_suffix(skip_spaces(&text[start + len..])) {
                if let Ok(value) = text[start..start + len].parse::<f64>() {
                    return Some(value);
                }
            }
        }
    }
    None
}

fn has_sqft_suffix(rest: &str) -> bool {
    if rest.starts_with("sf") {
        return true;
    }
    if let Some(after) = rest.strip_prefix("square") {
        return skip_spaces(after).starts_with("feet");
    }
    if let Some(after) = rest.strip_prefix("sq") {
        let after = after.strip_prefix('.').unwrap_or(after);
        return skip_spaces(after).starts_with("ft");
    }
    false
}

/// First integer followed by one of `suffixes`.
fn extract_count(text: &str, suffixes: &[&str]) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let rest = skip_spaces(&text[i..]);
            if suffixes.iter().any(|s| rest.starts_with(s)) {
                if let Ok(value) = text[start..i].parse::<f64>() {
                    return Some(value);
                }
            }
        } else {
            i += 1;
        }
    }
    None
}

/// First decimal number (2.5 baths) followed by one of `suffixes`.
fn extract_fractional_count(text: &str, suffixes: &[&str]) -> Option<f64> {
    let mut offset = 0;
    while offset < text.len() {
        let rest = &text[offset..];
        if let Some((value, consumed)) = leading_number(rest) {
            let after = skip_spaces(&rest[consumed..]);
            if suffixes.iter().any(|s| after.starts_with(s)) {
                return Some(value);
            }
            offset += consumed;
        } else {
            offset += rest
                .char_indices()
                .nth(1)
                .map_or(rest.len(), |(idx, _)| idx);
        }
    }
    None
}
