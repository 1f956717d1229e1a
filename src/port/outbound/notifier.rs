//! Notifier port for plan outcome notifications.
//!
//! The orchestrator's owner reports each settled plan here. The terminal UI
//! turns failures into a blocking alert; the log notifier records everything.

use crate::domain::{RoutePlan, RoutePlanRequest};

/// Events that can trigger notifications.
#[derive(Debug, Clone)]
pub enum Event {
    /// A plan request settled successfully.
    PlanSucceeded(PlanSummary),
    /// A plan request failed; the view is back to an error state.
    PlanFailed(FailureEvent),
}

/// Short description of a successful plan.
#[derive(Debug, Clone)]
pub struct PlanSummary {
    pub request: RoutePlanRequest,
    pub distance_nm: f64,
    pub ete: String,
    pub hazards: usize,
}

impl From<&RoutePlan> for PlanSummary {
    fn from(plan: &RoutePlan) -> Self {
        Self {
            request: plan.request.clone(),
            distance_nm: plan.response.flight_data.distance_nm,
            ete: plan.response.flight_data.ete.clone(),
            hazards: plan.response.storm_polygons.len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FailureEvent {
    pub request: RoutePlanRequest,
    /// Human-readable text for the user.
    pub message: String,
}

/// Trait for notification handlers.
///
/// `notify` runs on the UI loop and must return quickly. "Blocking" alerts
/// block further input, not the caller.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: Event);
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts events to all registered notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Notify all registered notifiers.
    pub fn notify_all(&self, event: Event) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: Event) {}
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        use tracing::{info, warn};
        match event {
            Event::PlanSucceeded(e) => {
                info!(
                    route = %e.request,
                    distance_nm = e.distance_nm,
                    ete = %e.ete,
                    hazards = e.hazards,
                    "Route plan ready"
                );
            }
            Event::PlanFailed(e) => {
                warn!(route = %e.request, message = %e.message, "Route plan failed");
            }
        }
    }
}
