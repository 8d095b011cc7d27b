//! Binds the coordinator to the live document: intersection observer, scroll,
//! pointer and anchor listeners, all released by dropping a [`MountGuard`].

pub mod host;
pub mod observer;

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent,
};

use crate::config::CoordinatorConfig;
use crate::coordinator::navigation::NavOutcome;
use crate::coordinator::Coordinator;
use crate::error::DomError;
use host::{DomNavigator, DomViewport, GlooTimer};
use observer::ObserverGuard;

pub type PageCoordinator = Coordinator<GlooTimer>;

type IntersectionCallback = dyn FnMut(js_sys::Array, IntersectionObserver);

/// Everything `mount` acquired. Dropping it tears the page wiring down.
pub struct MountGuard {
    coordinator: Rc<PageCoordinator>,
    _observer: ObserverGuard<IntersectionCallback>,
    _scroll: EventListener,
    _pointer: EventListener,
    _anchors: Vec<EventListener>,
    _fallback: Timeout,
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.coordinator.tracker().teardown();
        log::info!("landing page coordinator torn down");
    }
}

/// Registers every `section[id]`, starts observing them and installs the
/// scroll, pointer and in-page anchor listeners.
///
/// All fallible DOM work happens before the first section is registered, so
/// an error leaves the registry untouched.
pub fn mount(coordinator: Rc<PageCoordinator>) -> Result<MountGuard, DomError> {
    let viewport = DomViewport::current()?;
    let navigator = DomNavigator::new(viewport.window().clone());
    let config = coordinator.config().clone();

    let mut observer = {
        let coordinator = coordinator.clone();
        let viewport = viewport.clone();
        let callback = Closure::<IntersectionCallback>::new(
            move |entries: js_sys::Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let id = entry.target().id();
                    coordinator
                        .tracker()
                        .on_intersection(&id, entry.is_intersecting(), &viewport);
                }
            },
        );
        ObserverGuard::new(intersection_observer(&config, &callback)?, callback)
    };
    let sections = query_all(viewport.document(), "section[id]")?;
    let anchor_elements = query_all(viewport.document(), "a[href^=\"#\"]")?;

    for section in sections {
        coordinator.tracker().register_section(&section.id());
        observer.observe(section);
    }

    let scroll = {
        let coordinator = coordinator.clone();
        let live = viewport.clone();
        EventListener::new(viewport.window(), "scroll", move |_| {
            coordinator.tracker().reconcile_by_scroll(&live);
        })
    };

    let pointer = {
        let coordinator = coordinator.clone();
        EventListener::new(viewport.window(), "mousemove", move |event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                coordinator
                    .trail_controller()
                    .on_pointer_move(f64::from(e.client_x()), f64::from(e.client_y()));
            }
        })
    };

    let anchors = {
        let coordinator = coordinator.clone();
        let live = viewport.clone();
        let handler: Rc<dyn Fn(&Event)> = Rc::new(move |event: &Event| {
            let Some(href) = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|anchor| anchor.get_attribute("href"))
            else {
                return;
            };
            let outcome = coordinator.activate_anchor(&href, &live, &navigator);
            if let NavOutcome::Handled { .. } = outcome {
                event.prevent_default();
            }
        });
        anchor_elements
            .iter()
            .map(|anchor| {
                let handler = handler.clone();
                EventListener::new_with_options(
                    anchor,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| handler(event),
                )
            })
            .collect::<Vec<_>>()
    };

    coordinator.tracker().reconcile_by_scroll(&viewport);
    let fallback = {
        let coordinator = coordinator.clone();
        let viewport = viewport.clone();
        Timeout::new(config.fallback_delay_ms, move || {
            coordinator.tracker().reconcile_by_scroll(&viewport);
        })
    };

    log::info!(
        "landing page coordinator mounted: {} sections, {} in-page anchors",
        coordinator.registry().sections().len(),
        anchors.len()
    );

    Ok(MountGuard {
        coordinator,
        _observer: observer,
        _scroll: scroll,
        _pointer: pointer,
        _anchors: anchors,
        _fallback: fallback,
    })
}

fn intersection_observer(
    config: &CoordinatorConfig,
    callback: &Closure<IntersectionCallback>,
) -> Result<IntersectionObserver, DomError> {
    let thresholds: js_sys::Array = config
        .observer_thresholds
        .iter()
        .map(|threshold| JsValue::from_f64(*threshold))
        .collect();
    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.observer_root_margin);
    options.set_threshold(&thresholds);
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| DomError::js("IntersectionObserver", e))
}

fn query_all(document: &web_sys::Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| DomError::js("query_selector_all", e))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
