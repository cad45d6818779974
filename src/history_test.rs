use super::*;
use crate::consts::HISTORY_CAP;

fn frame(tag: u64) -> Snapshot {
    Snapshot {
        walls: vec![Wall { id: tag, x1: 0.0, y1: 0.0, x2: 1.0, y2: 0.0 }],
        areas: Vec::new(),
        doors: Vec::new(),
        windows: Vec::new(),
        mode: Mode::Main,
        adu_floor: 0,
    }
}

#[test]
fn push_pop_is_lifo() {
    let mut history = History::new();
    history.push(frame(1));
    history.push(frame(2));
    assert_eq!(history.pop(), Some(frame(2)));
    assert_eq!(history.pop(), Some(frame(1)));
    assert_eq!(history.pop(), None);
}

#[test]
fn empty_history_pops_none() {
    let mut history = History::new();
    assert!(history.is_empty());
    assert_eq!(history.pop(), None);
}

#[test]
fn cap_evicts_oldest_frame() {
    let mut history = History::new();
    for i in 0..=HISTORY_CAP as u64 {
        history.push(frame(i));
    }
    assert_eq!(history.len(), HISTORY_CAP);
    // Drain to the bottom: frame 0 was evicted, frame 1 is the oldest left.
    let mut last = None;
    while let Some(f) = history.pop() {
        last = Some(f);
    }
    assert_eq!(last, Some(frame(1)));
}

#[test]
fn restored_frame_is_verbatim() {
    let mut history = History::new();
    let original = Snapshot {
        walls: vec![Wall { id: 1, x1: 0.0, y1: 0.0, x2: 24.0, y2: 0.0 }],
        areas: vec![Area {
            id: 101,
            name: "Living/Kitchen".into(),
            line_ids: vec![1, 2, 8, 7],
            color: "hsl(200, 50%, 40%)".into(),
        }],
        doors: Vec::new(),
        windows: Vec::new(),
        mode: Mode::Adu,
        adu_floor: 1,
    };
    history.push(original.clone());
    assert_eq!(history.pop(), Some(original));
}
