use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::coordinator::host::{Bounds, Navigator, Timer, Viewport};
use crate::error::DomError;

/// Class that marks a section child as part of its entrance cascade.
pub const STAGGER_ITEM_CLASS: &str = "stagger-item";

/// Live geometry of the browser window.
#[derive(Clone)]
pub struct DomViewport {
    window: Window,
    document: Document,
}

impl DomViewport {
    pub fn current() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Viewport for DomViewport {
    fn height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_bounds(&self, id: &str) -> Option<Bounds> {
        let rect = self.document.get_element_by_id(id)?.get_bounding_client_rect();
        Some(Bounds {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    fn stagger_count(&self, id: &str) -> usize {
        self.document
            .get_element_by_id(id)
            .and_then(|section| {
                section
                    .query_selector_all(&format!(".{STAGGER_ITEM_CLASS}"))
                    .ok()
            })
            .map_or(0, |items| items.length() as usize)
    }
}

/// Smooth scrolling and fragment updates through `window.history`.
#[derive(Clone)]
pub struct DomNavigator {
    window: Window,
}

impl DomNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for DomNavigator {
    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn replace_fragment(&self, fragment: &str) {
        // replaceState neither adds a history entry nor fires `hashchange`.
        match self.window.history() {
            Ok(history) => {
                if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(fragment)) {
                    log::warn!("Failed to update fragment to {fragment}: {:?}", e);
                }
            }
            Err(e) => log::warn!("No history available: {:?}", e),
        }
    }
}

/// Deferred callbacks on the browser event loop. Timeouts are forgotten, so
/// they always run.
#[derive(Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
