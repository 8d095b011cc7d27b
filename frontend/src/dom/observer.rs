use wasm_bindgen::prelude::Closure;
use web_sys::{Element, IntersectionObserver};

/// Keeps an intersection observer and its callback alive; unobserves every
/// element and disconnects when dropped.
pub struct ObserverGuard<F: ?Sized> {
    observer: IntersectionObserver,
    observed: Vec<Element>,
    _callback: Closure<F>,
}

impl<F: ?Sized> ObserverGuard<F> {
    pub fn new(observer: IntersectionObserver, callback: Closure<F>) -> Self {
        Self {
            observer,
            observed: Vec::new(),
            _callback: callback,
        }
    }

    pub fn observe(&mut self, element: Element) {
        self.observer.observe(&element);
        self.observed.push(element);
    }
}

impl<F: ?Sized> Drop for ObserverGuard<F> {
    fn drop(&mut self) {
        for element in self.observed.drain(..) {
            self.observer.unobserve(&element);
        }
        self.observer.disconnect();
    }
}
