//! Deterministic host doubles for the coordinator tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::host::{Bounds, Navigator, Timer, Viewport};
use super::Notify;

type Task = (u64, u64, Box<dyn FnOnce()>);

/// Virtual clock that runs deferred tasks only when advanced.
#[derive(Default)]
pub struct ManualTimer {
    now: Cell<u64>,
    seq: Cell<u64>,
    queue: RefCell<Vec<Task>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Runs every task due at or before `now`, ordered by due time then by
    /// scheduling order. Tasks may schedule further tasks.
    pub fn advance_to(&self, now: u64) {
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _, _))| *at <= now)
                    .min_by_key(|(_, (at, seq, _))| (*at, *seq))
                    .map(|(index, _)| index);
                due.map(|index| queue.remove(index))
            };
            match next {
                Some((at, _, task)) => {
                    self.now.set(at);
                    task();
                }
                None => break,
            }
        }
        self.now.set(now);
    }
}

impl Timer for ManualTimer {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        let at = self.now.get() + u64::from(delay_ms);
        self.queue.borrow_mut().push((at, seq, task));
    }
}

/// A page laid out as a vertical stack of sections at fixed document offsets.
pub struct ScriptedViewport {
    height: f64,
    scroll_y: Cell<f64>,
    sections: Vec<(String, f64, f64, usize)>,
}

impl ScriptedViewport {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            scroll_y: Cell::new(0.0),
            sections: Vec::new(),
        }
    }

    /// Appends a section directly below the previous one.
    pub fn section(mut self, id: &str, height: f64, items: usize) -> Self {
        let top = self.sections.last().map_or(0.0, |(_, top, h, _)| top + h);
        self.sections.push((id.to_string(), top, height, items));
        self
    }

    pub fn ids(&self) -> Vec<String> {
        self.sections.iter().map(|(id, ..)| id.clone()).collect()
    }

    pub fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn document_top(&self, id: &str) -> Option<f64> {
        self.sections
            .iter()
            .find(|(section, ..)| section == id)
            .map(|(_, top, ..)| *top)
    }
}

impl Viewport for ScriptedViewport {
    fn height(&self) -> f64 {
        self.height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn section_bounds(&self, id: &str) -> Option<Bounds> {
        let scroll = self.scroll_y.get();
        self.sections
            .iter()
            .find(|(section, ..)| section == id)
            .map(|(_, top, height, _)| Bounds {
                top: top - scroll,
                bottom: top + height - scroll,
            })
    }

    fn stagger_count(&self, id: &str) -> usize {
        self.sections
            .iter()
            .find(|(section, ..)| section == id)
            .map_or(0, |(.., items)| *items)
    }
}

/// Records navigation side effects.
#[derive(Default)]
pub struct RecordingNavigator {
    pub scrolls: RefCell<Vec<f64>>,
    pub fragments: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn smooth_scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
    }

    fn replace_fragment(&self, fragment: &str) {
        self.fragments.borrow_mut().push(fragment.to_string());
    }
}

/// Counts re-render requests.
pub fn counting_notify() -> (Rc<Cell<usize>>, Notify) {
    let count = Rc::new(Cell::new(0));
    let notify: Notify = {
        let count = count.clone();
        Rc::new(move || count.set(count.get() + 1))
    };
    (count, notify)
}

