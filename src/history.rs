//! Undo history: a bounded snapshot stack over the four core collections.
//!
//! Every discrete mutating action pushes the pre-mutation state as one frame;
//! continuous drags push a single frame at gesture start. Undo pops a frame
//! and restores it verbatim into the floor it was recorded from. There is no
//! redo; pushing a new frame after undoing simply builds forward from the
//! restored state.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::consts::HISTORY_CAP;
use crate::doc::{Area, Door, Mode, Wall, Window};

/// One undo frame: the core collections plus the context they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub walls: Vec<Wall>,
    pub areas: Vec<Area>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
    pub mode: Mode,
    pub adu_floor: usize,
}

/// Bounded LIFO of snapshots. When full, the oldest frame falls off.
#[derive(Debug, Default)]
pub struct History {
    frames: Vec<Snapshot>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Record a frame, evicting the oldest if the cap is reached.
    pub fn push(&mut self, frame: Snapshot) {
        self.frames.push(frame);
        if self.frames.len() > HISTORY_CAP {
            self.frames.remove(0);
        }
    }

    /// Take the most recent frame, if any.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.frames.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
