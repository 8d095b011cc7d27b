use super::host::{Timer, Viewport};
use super::registry::Reveal;
use super::stagger::StaggerScheduler;
use super::{Notify, SharedRegistry};

/// Decides which sections are revealed. Three writers feed the same
/// monotonic flag: the eager default at registration, the intersection
/// signal, and the scroll fallback. None of them can hide a section.
pub struct VisibilityTracker<T> {
    registry: SharedRegistry,
    stagger: StaggerScheduler<T>,
    fallback_margin: f64,
    active_ratio: f64,
    notify: Notify,
}

impl<T: Timer> VisibilityTracker<T> {
    pub fn new(
        registry: SharedRegistry,
        stagger: StaggerScheduler<T>,
        fallback_margin: f64,
        active_ratio: f64,
        notify: Notify,
    ) -> Self {
        Self {
            registry,
            stagger,
            fallback_margin,
            active_ratio,
            notify,
        }
    }

    /// Starts tracking a section and reveals it right away so nothing is
    /// blank before the first intersection callback arrives.
    pub fn register_section(&self, id: &str) {
        let eager = {
            let mut registry = self.registry.borrow_mut();
            registry.register(id);
            registry.reveal(id)
        };
        log::debug!("registered section {id}");
        if eager.changed() {
            (self.notify)();
        }
    }

    /// Handles one intersection entry. Leaving the viewport is ignored.
    pub fn on_intersection(&self, id: &str, is_intersecting: bool, viewport: &impl Viewport) {
        if !is_intersecting {
            return;
        }
        if self.observe(id, viewport) {
            (self.notify)();
        }
    }

    /// Fallback pass over every registered section using live geometry.
    /// Reveals anything within the viewport height widened by the fallback
    /// margin on both sides, and moves the active section.
    pub fn reconcile_by_scroll(&self, viewport: &impl Viewport) {
        let ids: Vec<String> = self
            .registry
            .borrow()
            .sections()
            .iter()
            .map(|section| section.id.clone())
            .collect();
        let height = viewport.height();

        let mut changed = false;
        let mut active = None;
        for id in &ids {
            let Some(bounds) = viewport.section_bounds(id) else {
                continue;
            };
            if bounds.top < height + self.fallback_margin && bounds.bottom > -self.fallback_margin {
                changed |= self.observe(id, viewport);
            }
            if bounds.top < height * self.active_ratio && bounds.bottom > 0.0 {
                active = Some(id.as_str());
            }
        }
        if active.is_some() {
            changed |= self.registry.borrow_mut().set_active(active);
        }

        log::debug!("reconcile at scroll {}: changed={changed}", viewport.scroll_y());
        if changed {
            (self.notify)();
        }
    }

    /// Reveals a section regardless of where it is and always plays its
    /// cascade. Used by in-page navigation.
    pub fn force_reveal(&self, id: &str, viewport: &impl Viewport) -> Reveal {
        let reveal = {
            let mut registry = self.registry.borrow_mut();
            registry.claim_cascade(id);
            registry.reveal(id)
        };
        if reveal == Reveal::Unknown {
            return reveal;
        }
        self.stagger.cascade(id, viewport.stagger_count(id));
        if reveal.changed() {
            (self.notify)();
        }
        reveal
    }

    /// Stops observing every section. Safe to call more than once.
    pub fn teardown(&self) -> Vec<String> {
        let released = self.registry.borrow_mut().unobserve_all();
        if !released.is_empty() {
            log::info!("visibility tracker released {} sections", released.len());
        }
        released
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Positive observation: reveal, and start the cascade the first time.
    fn observe(&self, id: &str, viewport: &impl Viewport) -> bool {
        let (reveal, first) = {
            let mut registry = self.registry.borrow_mut();
            let reveal = registry.reveal(id);
            (reveal, reveal != Reveal::Unknown && registry.claim_cascade(id))
        };
        if first {
            self.stagger.cascade(id, viewport.stagger_count(id));
        }
        reveal.changed()
    }
}
