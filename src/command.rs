//! Rule-based natural-language commands over the rectangle-room plan.
//!
//! Parsing is keyword matching in a fixed branch order, with hand-rolled
//! number extraction; no grammar, no tokenizer. A branch that matches its
//! keywords but cannot resolve a room falls through to the next branch, so
//! "add a bigger closet room" still reaches the add intent.
//! Every parse yields a transient feedback message; `unknown` carries a
//! usage hint and mutates nothing.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use uuid::Uuid;

use crate::rooms::{Room, RoomPatch, RoomStore};

/// Which rectangle dimension an extend applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

/// The resolved meaning of one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Scale both dimensions by `scale` (1.2 = 20 % bigger).
    Resize { room: Uuid, scale: f64 },
    /// Add `amount` feet to one dimension.
    Extend { room: Uuid, dimension: Dimension, amount: f64 },
    /// Translate by (dx, dy); negative y is north.
    Move { room: Uuid, dx: f64, dy: f64 },
    /// Create a default-sized room of `kind`.
    Add { kind: String },
    Delete { room: Uuid },
    Unknown,
}

/// A parsed command plus its user-facing feedback message.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub intent: Intent,
    pub message: String,
}

/// Parse one command against the current room list.
#[must_use]
pub fn parse(input: &str, rooms: &[Room]) -> Command {
    let cmd = input.trim().to_lowercase();

    let find_room = || {
        rooms.iter().find(|r| {
            cmd.contains(&r.name.to_lowercase()) || cmd.contains(&r.kind.to_lowercase())
        })
    };

    if cmd.contains("bigger") || cmd.contains("larger") || cmd.contains("expand") {
        if let Some(room) = find_room() {
            let percent = parse_percent(&cmd).filter(|&p| p != 0.0).unwrap_or(0.2);
            return Command {
                intent: Intent::Resize { room: room.id, scale: 1.0 + percent },
                message: format!("Expanding {} by {:.0}%", room.name, percent * 100.0),
            };
        }
    }

    if cmd.contains("smaller") || cmd.contains("shrink") || cmd.contains("reduce") {
        if let Some(room) = find_room() {
            let percent = parse_percent(&cmd).filter(|&p| p != 0.0).unwrap_or(0.2);
            return Command {
                intent: Intent::Resize { room: room.id, scale: 1.0 - percent },
                message: format!("Shrinking {} by {:.0}%", room.name, percent * 100.0),
            };
        }
    }

    if cmd.contains("longer") || cmd.contains("extend") {
        if let Some(room) = find_room() {
            if let Some(feet) = parse_feet(&cmd).filter(|&f| f != 0.0) {
                let dimension = if cmd.contains("wide") || cmd.contains("width") {
                    Dimension::Width
                } else {
                    Dimension::Height
                };
                return Command {
                    intent: Intent::Extend { room: room.id, dimension, amount: feet },
                    message: format!("Extending {} by {feet} feet", room.name),
                };
            }
        }
    }

    if cmd.contains("move") {
        if let Some(room) = find_room() {
            let feet = parse_feet(&cmd).filter(|&f| f != 0.0).unwrap_or(5.0);
            // Later keywords win when several directions appear.
            let mut direction = None;
            if cmd.contains("north") || cmd.contains("up") {
                direction = Some((0.0, -feet));
            }
            if cmd.contains("south") || cmd.contains("down") {
                direction = Some((0.0, feet));
            }
            if cmd.contains("east") || cmd.contains("right") {
                direction = Some((feet, 0.0));
            }
            if cmd.contains("west") || cmd.contains("left") {
                direction = Some((-feet, 0.0));
            }
            if let Some((dx, dy)) = direction {
                return Command {
                    intent: Intent::Move { room: room.id, dx, dy },
                    message: format!("Moving {} {feet} feet", room.name),
                };
            }
        }
    }

    if cmd.contains("add")
        && (cmd.contains("room") || cmd.contains("bathroom") || cmd.contains("bedroom"))
    {
        let mut kind = "room";
        if cmd.contains("bathroom") {
            kind = "bathroom";
        }
        if cmd.contains("bedroom") {
            kind = "bedroom";
        }
        if cmd.contains("closet") {
            kind = "closet";
        }
        return Command {
            intent: Intent::Add { kind: kind.to_owned() },
            message: format!("Adding new {kind}"),
        };
    }

    if cmd.contains("delete") || cmd.contains("remove") {
        if let Some(room) = find_room() {
            return Command {
                intent: Intent::Delete { room: room.id },
                message: format!("Removing {}", room.name),
            };
        }
    }

    Command {
        intent: Intent::Unknown,
        message: format!(
            "I don't understand: \"{input}\". Try commands like \
             \"make the living room 20% bigger\" or \"move kitchen 5 feet north\""
        ),
    }
}

/// Parse and apply one command, returning the feedback message. Exactly one
/// store mutation happens for actionable intents; `unknown` touches nothing.
pub fn execute(store: &mut RoomStore, input: &str) -> String {
    let command = parse(input, store.rooms());
    match &command.intent {
        Intent::Resize { room, scale } => {
            store.resize_room(*room, *scale);
        }
        Intent::Extend { room, dimension, amount } => {
            if let Some(current) = store.room(*room) {
                let patch = match dimension {
                    Dimension::Width => {
                        RoomPatch { width: Some(current.width + amount), ..RoomPatch::default() }
                    }
                    Dimension::Height => {
                        RoomPatch { height: Some(current.height + amount), ..RoomPatch::default() }
                    }
                };
                store.update_room(*room, &patch);
            }
        }
        Intent::Move { room, dx, dy } => {
            if let Some(current) = store.room(*room) {
                let patch = RoomPatch {
                    x: Some(current.x + dx),
                    y: Some(current.y + dy),
                    ..RoomPatch::default()
                };
                store.update_room(*room, &patch);
            }
        }
        Intent::Add { kind } => {
            let bathroom = kind == "bathroom";
            store.add_room(Room {
                id: Uuid::new_v4(),
                name: format!("New {kind}"),
                kind: kind.clone(),
                x: 30.0,
                y: 0.0,
                width: if bathroom { 8.0 } else { 12.0 },
                height: if bathroom { 6.0 } else { 10.0 },
                ceiling_height: 9.0,
                color: if bathroom { "#006666" } else { "#0066aa" }.to_owned(),
            });
        }
        Intent::Delete { room } => {
            store.delete_room(*room);
        }
        Intent::Unknown => {
            tracing::debug!(input, "unrecognized command");
        }
    }
    command.message
}

/// First integer immediately followed (after spaces) by `%`, as a fraction.
/// The digits must directly abut the percent sign, so "30.5%" reads as 5 %.
fn parse_percent(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let mut j = i;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'%' {
                if let Ok(value) = text[start..i].parse::<f64>() {
                    return Some(value / 100.0);
                }
            }
        } else {
            i += 1;
        }
    }
    None
}

/// First decimal number followed (after spaces) by a feet suffix.
fn parse_feet(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == b'.' {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let mut j = i;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            let rest = &text[j..];
            if rest.starts_with("feet")
                || rest.starts_with("foot")
                || rest.starts_with("ft")
                || rest.starts_with('\'')
            {
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

/// Longest digit run (with optional fraction) starting at the head of `s`,
/// with the byte length consumed. Shared with the layout parameter parser.
pub(crate) fn leading_number(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == 0 {
        return None;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        end = frac;
    }
    match s[..end].parse::<f64>() {
        Ok(value) => Some((value, end)),
        Err(_) => None,
    }
}

pub(crate) fn skip_spaces(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii_whitespace())
}
