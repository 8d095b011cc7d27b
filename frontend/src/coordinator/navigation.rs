use super::host::{Navigator, Timer, Viewport};
use super::visibility::VisibilityTracker;

/// What the click handler should do with the browser's default action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavOutcome {
    /// The click was handled; suppress default navigation.
    Handled { scroll_top: f64 },
    /// Not an in-page target we know about; let the browser navigate.
    PassThrough,
}

/// Returns the element id an in-page href points at, e.g. `"#about"` -> `"about"`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Offset-aware smooth scrolling for in-page anchors.
pub struct NavigationController {
    navbar_height: f64,
}

impl NavigationController {
    pub fn new(navbar_height: f64) -> Self {
        Self { navbar_height }
    }

    /// Handles activation of an anchor with the given href. The target
    /// section is revealed and its cascade replayed before scrolling, so it
    /// is visible even if the scroll never reaches the fallback window.
    pub fn activate<T: Timer>(
        &self,
        href: &str,
        tracker: &VisibilityTracker<T>,
        viewport: &impl Viewport,
        navigator: &impl Navigator,
    ) -> NavOutcome {
        let Some(id) = fragment_target(href) else {
            return NavOutcome::PassThrough;
        };
        let Some(bounds) = viewport.section_bounds(id) else {
            log::debug!("no element for {href}, leaving it to the browser");
            return NavOutcome::PassThrough;
        };

        tracker.force_reveal(id, viewport);

        let scroll_top = bounds.top + viewport.scroll_y() - self.navbar_height;
        navigator.smooth_scroll_to(scroll_top);
        navigator.replace_fragment(href);
        log::debug!("navigating to {id} at {scroll_top}");

        NavOutcome::Handled { scroll_top }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::coordinator::registry::RevealRegistry;
    use crate::coordinator::stagger::StaggerScheduler;
    use crate::coordinator::testing::{
        counting_notify, ManualTimer, RecordingNavigator, ScriptedViewport,
    };
    use crate::coordinator::SharedRegistry;
    use pretty_assertions::assert_eq;

    fn tracker(timer: Rc<ManualTimer>) -> VisibilityTracker<Rc<ManualTimer>> {
        let registry: SharedRegistry = Rc::new(RefCell::new(RevealRegistry::new()));
        let (_, notify) = counting_notify();
        let stagger = StaggerScheduler::new(registry.clone(), timer, 100, notify.clone());
        VisibilityTracker::new(registry, stagger, 500.0, 0.75, notify)
    }

    fn page() -> ScriptedViewport {
        ScriptedViewport::new(800.0)
            .section("hero", 800.0, 0)
            .section("about", 900.0, 3)
            .section("attractions", 1200.0, 6)
    }

    #[test]
    fn fragment_targets() {
        assert_eq!(fragment_target("#about"), Some("about"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/faq#about"), None);
        assert_eq!(fragment_target("https://example.com"), None);
    }

    #[test]
    fn lands_below_the_navbar_and_reveals_offscreen_target() {
        let timer = Rc::new(ManualTimer::new());
        let tracker = tracker(timer.clone());
        let viewport = page();
        let navigator = RecordingNavigator::default();
        // Known to the registry but never revealed by any other path.
        tracker.registry().borrow_mut().register("attractions");
        viewport.scroll_to(120.0);

        let outcome = NavigationController::new(80.0).activate(
            "#attractions",
            &tracker,
            &viewport,
            &navigator,
        );

        assert_eq!(outcome, NavOutcome::Handled { scroll_top: 1_700.0 - 80.0 });
        assert!(tracker.registry().borrow().is_revealed("attractions"));
        assert_eq!(*navigator.scrolls.borrow(), vec![1_620.0]);
        assert_eq!(*navigator.fragments.borrow(), vec!["#attractions".to_string()]);

        // Once the smooth scroll lands, the section top sits at the navbar edge.
        viewport.scroll_to(1_620.0);
        assert_eq!(viewport.section_bounds("attractions").unwrap().top, 80.0);

        timer.advance_to(500);
        assert!(tracker.registry().borrow().is_item_revealed("attractions", 5));
    }

    #[test]
    fn missing_target_passes_through_untouched() {
        let tracker = tracker(Rc::new(ManualTimer::new()));
        let navigator = RecordingNavigator::default();

        let outcome =
            NavigationController::new(80.0).activate("#pricing", &tracker, &page(), &navigator);

        assert_eq!(outcome, NavOutcome::PassThrough);
        assert!(navigator.scrolls.borrow().is_empty());
        assert!(navigator.fragments.borrow().is_empty());
    }

    #[test]
    fn bare_hash_passes_through() {
        let tracker = tracker(Rc::new(ManualTimer::new()));
        let navigator = RecordingNavigator::default();

        let outcome = NavigationController::new(80.0).activate("#", &tracker, &page(), &navigator);

        assert_eq!(outcome, NavOutcome::PassThrough);
    }
}
