//! Scroll-driven reveal, in-page navigation and pointer trail state for the
//! landing page. Nothing in here touches the DOM; `crate::dom` supplies the
//! host implementations.

pub mod host;
pub mod navigation;
pub mod registry;
pub mod stagger;
pub mod trail;
pub mod visibility;

#[cfg(test)]
pub mod testing;

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::config::CoordinatorConfig;
use host::{Navigator, Timer, Viewport};
use navigation::{NavOutcome, NavigationController};
use registry::RevealRegistry;
use stagger::StaggerScheduler;
use trail::{PointerTrail, TrailController};
use visibility::VisibilityTracker;

pub type SharedRegistry = Rc<RefCell<RevealRegistry>>;

/// Asks the render layer to re-render.
pub type Notify = Rc<dyn Fn()>;

pub struct Coordinator<T> {
    config: CoordinatorConfig,
    tracker: VisibilityTracker<T>,
    navigation: NavigationController,
    trail: TrailController,
}

impl<T: Timer> Coordinator<T> {
    pub fn new(config: CoordinatorConfig, timer: T, notify: Notify) -> Self {
        let registry: SharedRegistry = Rc::new(RefCell::new(RevealRegistry::new()));
        let stagger = StaggerScheduler::new(
            registry.clone(),
            timer,
            config.stagger_delay_ms,
            notify.clone(),
        );
        let tracker = VisibilityTracker::new(
            registry,
            stagger,
            config.fallback_margin,
            config.active_ratio,
            notify.clone(),
        );
        Self {
            navigation: NavigationController::new(config.navbar_height),
            trail: TrailController::new(config.trail_capacity, notify),
            tracker,
            config,
        }
    }

    pub fn activate_anchor(
        &self,
        href: &str,
        viewport: &impl Viewport,
        navigator: &impl Navigator,
    ) -> NavOutcome {
        self.navigation.activate(href, &self.tracker, viewport, navigator)
    }

    pub fn tracker(&self) -> &VisibilityTracker<T> {
        &self.tracker
    }

    pub fn trail_controller(&self) -> &TrailController {
        &self.trail
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    pub fn registry(&self) -> Ref<'_, RevealRegistry> {
        self.tracker.registry().borrow()
    }

    pub fn trail(&self) -> Ref<'_, PointerTrail> {
        self.trail.trail()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{counting_notify, ManualTimer, RecordingNavigator, ScriptedViewport};
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const IDS: [&str; 5] = ["hero", "about", "attractions", "experiences", "contact"];

    fn page() -> ScriptedViewport {
        ScriptedViewport::new(800.0)
            .section("hero", 800.0, 0)
            .section("about", 900.0, 3)
            .section("attractions", 1400.0, 6)
            .section("experiences", 1400.0, 6)
            .section("contact", 900.0, 2)
    }

    fn coordinator(timer: Rc<ManualTimer>) -> Coordinator<Rc<ManualTimer>> {
        let (_, notify) = counting_notify();
        Coordinator::new(CoordinatorConfig::default(), timer, notify)
    }

    #[derive(Debug, Clone)]
    enum Op {
        Intersect(usize, bool),
        Scroll(u32),
        Reconcile,
        Navigate(usize),
        Tick(u32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..IDS.len(), any::<bool>()).prop_map(|(i, on)| Op::Intersect(i, on)),
            (0u32..6_000).prop_map(Op::Scroll),
            Just(Op::Reconcile),
            (0..IDS.len()).prop_map(Op::Navigate),
            (0u32..400).prop_map(Op::Tick),
        ]
    }

    fn snapshot(coordinator: &Coordinator<Rc<ManualTimer>>) -> Vec<(bool, Vec<bool>)> {
        coordinator
            .registry()
            .sections()
            .iter()
            .map(|s| (s.revealed, s.items().iter().map(|item| item.revealed).collect()))
            .collect()
    }

    #[test]
    fn mount_scroll_and_click_through_the_page() {
        let timer = Rc::new(ManualTimer::new());
        let coordinator = coordinator(timer.clone());
        let viewport = page();
        let navigator = RecordingNavigator::default();

        for id in IDS {
            coordinator.tracker().register_section(id);
        }
        coordinator.tracker().on_intersection("hero", true, &viewport);
        coordinator.tracker().reconcile_by_scroll(&viewport);
        timer.advance_to(100);

        assert!(IDS.iter().all(|id| coordinator.registry().is_revealed(id)));
        assert!(coordinator.registry().is_item_revealed("about", 1));
        assert!(!coordinator.registry().is_item_revealed("experiences", 0));

        let outcome = coordinator.activate_anchor("#experiences", &viewport, &navigator);
        assert_eq!(outcome, NavOutcome::Handled { scroll_top: 3_100.0 - 80.0 });
        timer.advance_to(700);
        assert!((0..6).all(|order| coordinator.registry().is_item_revealed("experiences", order)));
    }

    #[test]
    fn trail_capacity_comes_from_config() {
        let (_, notify) = counting_notify();
        let config = CoordinatorConfig {
            trail_capacity: 5,
            ..CoordinatorConfig::default()
        };
        let coordinator = Coordinator::new(config, Rc::new(ManualTimer::new()), notify);
        for step in 0..9 {
            coordinator.trail_controller().on_pointer_move(step as f64, 0.0);
        }
        assert_eq!(coordinator.trail().len(), 5);
    }

    proptest! {
        #[test]
        fn revealed_flags_never_go_back(ops in prop::collection::vec(op_strategy(), 1..80)) {
            let timer = Rc::new(ManualTimer::new());
            let coordinator = coordinator(timer.clone());
            let viewport = page();
            let navigator = RecordingNavigator::default();
            // Skip the eager default so the other writers carry the reveals.
            for id in IDS {
                coordinator.tracker().registry().borrow_mut().register(id);
            }

            let mut now = 0u64;
            let mut before = snapshot(&coordinator);
            for op in ops {
                match op {
                    Op::Intersect(i, on) => {
                        coordinator.tracker().on_intersection(IDS[i], on, &viewport)
                    }
                    Op::Scroll(y) => viewport.scroll_to(f64::from(y)),
                    Op::Reconcile => coordinator.tracker().reconcile_by_scroll(&viewport),
                    Op::Navigate(i) => {
                        coordinator.activate_anchor(&format!("#{}", IDS[i]), &viewport, &navigator);
                    }
                    Op::Tick(ms) => {
                        now += u64::from(ms);
                        timer.advance_to(now);
                    }
                }
                let after = snapshot(&coordinator);
                for ((was, was_items), (is, is_items)) in before.iter().zip(&after) {
                    prop_assert!(!*was || *is);
                    for (old, new) in was_items.iter().zip(is_items) {
                        prop_assert!(!*old || *new);
                    }
                    // Items appear only inside revealed sections.
                    prop_assert!(*is || is_items.iter().all(|item| !item));
                }
                before = after;
            }
        }

        #[test]
        fn repeated_positive_signals_are_idempotent(scroll in 0u32..6_000, repeats in 1usize..6) {
            let timer = Rc::new(ManualTimer::new());
            let (renders, notify) = counting_notify();
            let coordinator = Coordinator::new(CoordinatorConfig::default(), timer.clone(), notify);
            let viewport = page();
            viewport.scroll_to(f64::from(scroll));
            for id in IDS {
                coordinator.tracker().register_section(id);
                coordinator.tracker().on_intersection(id, true, &viewport);
            }
            coordinator.tracker().reconcile_by_scroll(&viewport);
            timer.advance_to(10_000);

            let settled = snapshot(&coordinator);
            let settled_renders = renders.get();
            for _ in 0..repeats {
                for id in IDS {
                    coordinator.tracker().on_intersection(id, true, &viewport);
                }
                coordinator.tracker().reconcile_by_scroll(&viewport);
            }
            timer.advance_to(20_000);

            prop_assert_eq!(snapshot(&coordinator), settled);
            prop_assert_eq!(renders.get(), settled_renders);
            prop_assert_eq!(timer.pending(), 0);
        }

        #[test]
        fn navigation_lands_every_section_under_the_navbar(
            target in 0..IDS.len(),
            scroll in 0u32..6_000,
        ) {
            let coordinator = coordinator(Rc::new(ManualTimer::new()));
            let viewport = page();
            let navigator = RecordingNavigator::default();
            viewport.scroll_to(f64::from(scroll));

            let href = format!("#{}", IDS[target]);
            let outcome = coordinator.activate_anchor(&href, &viewport, &navigator);

            let NavOutcome::Handled { scroll_top } = outcome else {
                return Err(TestCaseError::fail("in-page target was not handled"));
            };
            viewport.scroll_to(scroll_top);
            let top = viewport.section_bounds(IDS[target]).unwrap().top;
            prop_assert!((top - 80.0).abs() < 1e-9);
            let expected = viewport.document_top(IDS[target]).unwrap() - 80.0;
            prop_assert!((scroll_top - expected).abs() < 1e-9);
        }
    }
}
