//! Blocking alert notifier.
//!
//! Failures are parked in an [`AlertSlot`] shared with the view. While the
//! slot holds an alert the view accepts nothing but a dismiss.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::port::{Event, Notifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Shared handle to the single pending alert.
#[derive(Debug, Clone, Default)]
pub struct AlertSlot {
    inner: Arc<Mutex<Option<Alert>>>,
}

impl AlertSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending alert.
    pub fn raise(&self, alert: Alert) {
        *self.inner.lock() = Some(alert);
    }

    #[must_use]
    pub fn current(&self) -> Option<Alert> {
        self.inner.lock().clone()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.lock().is_some()
    }

    /// Close the alert, returning it.
    pub fn dismiss(&self) -> Option<Alert> {
        self.inner.lock().take()
    }
}

/// Raises an alert for every failed plan. Successes are ignored.
pub struct AlertNotifier {
    slot: AlertSlot,
}

impl AlertNotifier {
    #[must_use]
    pub fn new(slot: AlertSlot) -> Self {
        Self { slot }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, event: Event) {
        if let Event::PlanFailed(failure) = event {
            self.slot.raise(Alert {
                title: format!("PLAN FAILED {}", failure.request),
                message: failure.message,
            });
        }
    }
}
