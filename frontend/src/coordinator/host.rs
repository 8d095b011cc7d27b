use std::rc::Rc;

/// Vertical extent of an element relative to the viewport top, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

/// Read access to page geometry.
pub trait Viewport {
    fn height(&self) -> f64;
    fn scroll_y(&self) -> f64;
    /// Bounds of the element with this id, or `None` if no such element exists.
    fn section_bounds(&self, id: &str) -> Option<Bounds>;
    /// Number of stagger items currently inside the section, in document order.
    fn stagger_count(&self, id: &str) -> usize;
}

/// Deferred, fire-and-forget execution.
pub trait Timer {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

impl<T: Timer + ?Sized> Timer for Rc<T> {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        (**self).defer(delay_ms, task)
    }
}

/// Scroll and address-bar side effects of in-page navigation.
pub trait Navigator {
    /// Smooth-scrolls the document so that `top` is at the viewport top.
    fn smooth_scroll_to(&self, top: f64);
    /// Shows `fragment` in the address bar without a history entry or a
    /// `hashchange` notification.
    fn replace_fragment(&self, fragment: &str);
}
