//! Plan request orchestration.
//!
//! [`PlanOrchestrator`] owns the [`OrchestratorState`] and the single
//! outstanding request. Transitions:
//!
//! ```text
//!   Idle ──submit──▶ Loading ──ok──▶ Success(plan)
//!                      │  ▲
//!                      │  └──────submit────── Success | Error
//!                      └──err──▶ Error(message)
//! ```
//!
//! A submit while `Loading` is ignored. Each accepted submit spawns one task
//! whose [`PlanCompletion`] comes back over a channel; the owning loop hands
//! it to [`PlanOrchestrator::complete`]. Completions carry a generation number
//! and anything not matching the current `Loading` generation is dropped.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::input::InputController;
use crate::domain::{RoutePlan, RoutePlanRequest, RoutePlanResponse};
use crate::error::PlanError;
use crate::port::RouteService;

#[derive(Debug, Clone, PartialEq)]
pub enum OrchestratorState {
    Idle,
    /// Waiting on the service for this request.
    Loading(RoutePlanRequest),
    Success(Box<RoutePlan>),
    /// Failure message for the user. No route data survives a failure.
    Error(String),
}

impl OrchestratorState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    #[must_use]
    pub fn plan(&self) -> Option<&RoutePlan> {
        match self {
            Self::Success(plan) => Some(plan),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading(_) => "loading",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }
}

/// Result of one request task, sent back to the owning loop.
#[derive(Debug)]
pub struct PlanCompletion {
    pub generation: u64,
    pub request: RoutePlanRequest,
    pub result: Result<RoutePlanResponse, PlanError>,
}

/// What [`PlanOrchestrator::complete`] did with a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed(String),
    /// Belonged to a superseded or cancelled request; state untouched.
    Stale,
}

pub struct PlanOrchestrator {
    service: Arc<dyn RouteService>,
    state: OrchestratorState,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    completions: mpsc::UnboundedSender<PlanCompletion>,
}

impl PlanOrchestrator {
    /// Create an idle orchestrator and the receiver its completions arrive on.
    pub fn new(service: Arc<dyn RouteService>) -> (Self, mpsc::UnboundedReceiver<PlanCompletion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let orchestrator = Self {
            service,
            state: OrchestratorState::Idle,
            generation: 0,
            in_flight: None,
            completions: tx,
        };
        (orchestrator, rx)
    }

    #[must_use]
    pub fn state(&self) -> &OrchestratorState {
        &self.state
    }

    /// False while a request is outstanding.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Snapshot the inputs and start a request.
    ///
    /// Returns the request that was sent, or `None` when one is already
    /// outstanding. Must be called inside a tokio runtime.
    pub fn submit(&mut self, input: &InputController) -> Option<RoutePlanRequest> {
        if self.state.is_loading() {
            debug!(generation = self.generation, "Submit ignored, request in flight");
            return None;
        }

        let request = input.snapshot();
        self.generation += 1;
        let generation = self.generation;
        self.state = OrchestratorState::Loading(request.clone());

        info!(
            generation,
            route = %request,
            service = self.service.name(),
            "Plan submitted"
        );

        let service = Arc::clone(&self.service);
        let tx = self.completions.clone();
        let task_request = request.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = service.calculate_route(&task_request).await;
            // The receiver is gone only when the view has shut down.
            let _ = tx.send(PlanCompletion {
                generation,
                request: task_request,
                result,
            });
        }));

        Some(request)
    }

    /// Apply a finished request.
    pub fn complete(&mut self, completion: PlanCompletion) -> Completion {
        if !self.state.is_loading() || completion.generation != self.generation {
            debug!(
                generation = completion.generation,
                current = self.generation,
                state = self.state.name(),
                "Discarding stale plan completion"
            );
            return Completion::Stale;
        }

        self.in_flight = None;
        match completion.result {
            Ok(response) => {
                info!(
                    generation = completion.generation,
                    route = %completion.request,
                    "Plan succeeded"
                );
                self.state = OrchestratorState::Success(Box::new(RoutePlan {
                    request: completion.request,
                    response,
                }));
                Completion::Succeeded
            }
            Err(err) => {
                warn!(
                    generation = completion.generation,
                    route = %completion.request,
                    error = %err,
                    "Plan failed"
                );
                let message = err.user_message();
                self.state = OrchestratorState::Error(message.clone());
                Completion::Failed(message)
            }
        }
    }

    /// Abort any request in flight. A `Loading` state falls back to `Idle`.
    pub fn deactivate(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
            debug!(generation = self.generation, "Aborted in-flight plan request");
        }
        if self.state.is_loading() {
            self.state = OrchestratorState::Idle;
        }
    }
}

impl Drop for PlanOrchestrator {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::app::input::Field;
    use crate::app::testing::{sample_response, ScriptedService};
    use crate::error::RemoteError;

    async fn settle(
        orchestrator: &mut PlanOrchestrator,
        rx: &mut mpsc::UnboundedReceiver<PlanCompletion>,
    ) -> Completion {
        let completion = rx.recv().await.expect("completion");
        orchestrator.complete(completion)
    }

    #[tokio::test]
    async fn submit_moves_idle_to_loading() {
        let service = ScriptedService::gated(vec![Ok(sample_response())]);
        let (mut orchestrator, _rx) = PlanOrchestrator::new(service.clone());

        let request = orchestrator.submit(&InputController::default());

        assert_eq!(request, Some(RoutePlanRequest::new("KJFK", "EGLL")));
        assert!(orchestrator.state().is_loading());
        assert!(!orchestrator.can_submit());
    }

    #[tokio::test]
    async fn repeated_submits_while_loading_send_one_request() {
        let service = ScriptedService::gated(vec![Ok(sample_response())]);
        let (mut orchestrator, mut rx) = PlanOrchestrator::new(service.clone());
        let input = InputController::default();

        assert!(orchestrator.submit(&input).is_some());
        for _ in 0..10 {
            assert!(orchestrator.submit(&input).is_none());
        }
        service.release();

        assert_eq!(settle(&mut orchestrator, &mut rx).await, Completion::Succeeded);
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        assert_eq!(orchestrator.generation(), 1);
    }

    #[tokio::test]
    async fn success_holds_snapshot_not_live_input() {
        let service = ScriptedService::gated(vec![Ok(sample_response())]);
        let (mut orchestrator, mut rx) = PlanOrchestrator::new(service.clone());
        let mut input = InputController::default();

        orchestrator.submit(&input);
        input.set(Field::Origin, "CYYZ");
        service.release();
        settle(&mut orchestrator, &mut rx).await;

        let plan = orchestrator.state().plan().expect("success");
        assert_eq!(plan.request.origin.as_str(), "KJFK");
    }

    #[tokio::test]
    async fn failure_discards_previous_success() {
        let service = ScriptedService::immediate(vec![
            Ok(sample_response()),
            Err(PlanError::Remote(RemoteError::Status {
                status: 500,
                detail: None,
            })),
        ]);
        let (mut orchestrator, mut rx) = PlanOrchestrator::new(service);
        let input = InputController::default();

        orchestrator.submit(&input);
        settle(&mut orchestrator, &mut rx).await;
        assert!(orchestrator.state().plan().is_some());

        orchestrator.submit(&input);
        let outcome = settle(&mut orchestrator, &mut rx).await;

        assert!(matches!(outcome, Completion::Failed(ref m) if m.contains("HTTP 500")));
        assert!(orchestrator.state().plan().is_none());
        assert!(orchestrator.state().error().is_some());
    }

    #[tokio::test]
    async fn error_state_accepts_new_submit_and_recovers() {
        let service = ScriptedService::immediate(vec![
            Err(PlanError::Network("refused".into())),
            Ok(sample_response()),
        ]);
        let (mut orchestrator, mut rx) = PlanOrchestrator::new(service);
        let input = InputController::default();

        orchestrator.submit(&input);
        settle(&mut orchestrator, &mut rx).await;
        assert!(orchestrator.can_submit());

        assert!(orchestrator.submit(&input).is_some());
        assert_eq!(settle(&mut orchestrator, &mut rx).await, Completion::Succeeded);
    }

    #[tokio::test]
    async fn completion_with_old_generation_is_stale() {
        let service = ScriptedService::gated(vec![Ok(sample_response())]);
        let (mut orchestrator, _rx) = PlanOrchestrator::new(service);
        orchestrator.submit(&InputController::default());

        let outcome = orchestrator.complete(PlanCompletion {
            generation: 0,
            request: RoutePlanRequest::new("KJFK", "EGLL"),
            result: Ok(sample_response()),
        });

        assert_eq!(outcome, Completion::Stale);
        assert!(orchestrator.state().is_loading());
    }

    #[tokio::test]
    async fn deactivate_aborts_and_returns_to_idle() {
        let service = ScriptedService::gated(vec![Ok(sample_response())]);
        let (mut orchestrator, _rx) = PlanOrchestrator::new(service);
        orchestrator.submit(&InputController::default());

        orchestrator.deactivate();

        assert_eq!(orchestrator.state(), &OrchestratorState::Idle);
        let late = orchestrator.complete(PlanCompletion {
            generation: 1,
            request: RoutePlanRequest::new("KJFK", "EGLL"),
            result: Ok(sample_response()),
        });
        assert_eq!(late, Completion::Stale);
    }
}
