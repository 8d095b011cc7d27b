use std::cell::{Ref, RefCell};
use std::collections::VecDeque;

use super::Notify;

/// Most recent pointer position, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    /// Render key only. Increases with every sample.
    pub id: u64,
}

/// Size and opacity of one rendered trail dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDot {
    pub size: f64,
    pub opacity: f64,
}

const DOT_MAX_SIZE: f64 = 40.0;
const DOT_SIZE_STEP: f64 = 1.8;
const DOT_MAX_OPACITY: f64 = 0.8;

/// Maps a sample's position in the retained window to its look. Index 0 is
/// the oldest sample: the biggest and faintest dot.
pub fn trail_dot(index: usize, len: usize) -> TrailDot {
    let progress = if len == 0 {
        0.0
    } else {
        index as f64 / len as f64
    };
    TrailDot {
        size: (DOT_MAX_SIZE - index as f64 * DOT_SIZE_STEP).max(0.0),
        opacity: progress * DOT_MAX_OPACITY,
    }
}

/// Cursor position plus a bounded, oldest-first window of samples.
#[derive(Debug, Clone)]
pub struct PointerTrail {
    cursor: CursorPosition,
    samples: VecDeque<PointerSample>,
    capacity: usize,
    next_id: u64,
}

impl PointerTrail {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            cursor: CursorPosition::default(),
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
            next_id: 0,
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.cursor = CursorPosition { x, y };
        self.samples.push_back(PointerSample {
            x,
            y,
            id: self.next_id,
        });
        self.next_id += 1;
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Samples paired with their render mapping, oldest first.
    pub fn dots(&self) -> impl Iterator<Item = (&PointerSample, TrailDot)> + '_ {
        let len = self.samples.len();
        self.samples
            .iter()
            .enumerate()
            .map(move |(index, sample)| (sample, trail_dot(index, len)))
    }
}

#[cfg(test)]
impl PointerTrail {
    pub fn samples(&self) -> impl ExactSizeIterator<Item = &PointerSample> + '_ {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Feeds pointer-move events into the trail and requests a re-render.
pub struct TrailController {
    trail: RefCell<PointerTrail>,
    notify: Notify,
}

impl TrailController {
    pub fn new(capacity: usize, notify: Notify) -> Self {
        Self {
            trail: RefCell::new(PointerTrail::new(capacity)),
            notify,
        }
    }

    pub fn on_pointer_move(&self, x: f64, y: f64) {
        self.trail.borrow_mut().push(x, y);
        (self.notify)();
    }

    pub fn trail(&self) -> Ref<'_, PointerTrail> {
        self.trail.borrow()
    }
}
