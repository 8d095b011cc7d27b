use std::rc::Rc;

use super::host::Timer;
use super::{Notify, SharedRegistry};

/// Reveals a section's stagger items one after another.
pub struct StaggerScheduler<T> {
    registry: SharedRegistry,
    timer: T,
    base_delay_ms: u32,
    notify: Notify,
}

impl<T: Timer> StaggerScheduler<T> {
    pub fn new(registry: SharedRegistry, timer: T, base_delay_ms: u32, notify: Notify) -> Self {
        Self {
            registry,
            timer,
            base_delay_ms,
            notify,
        }
    }

    /// Schedules item `i` of `section` to be revealed `i * base_delay_ms`
    /// after this call. Items already revealed are left alone when their
    /// timer fires. Nothing is cancelled; a reveal firing after the registry
    /// is gone does nothing.
    pub fn cascade(&self, section: &str, count: usize) {
        self.registry.borrow_mut().assign_items(section, count);
        log::debug!("cascade {section}: {count} items every {}ms", self.base_delay_ms);

        for order in 0..count {
            let registry = Rc::downgrade(&self.registry);
            let notify = self.notify.clone();
            let section = section.to_string();
            let delay = (order as u32).saturating_mul(self.base_delay_ms);
            self.timer.defer(
                delay,
                Box::new(move || {
                    let Some(registry) = registry.upgrade() else {
                        return;
                    };
                    let changed = registry.borrow_mut().reveal_item(&section, order).changed();
                    if changed {
                        notify();
                    }
                }),
            );
        }
    }
}
