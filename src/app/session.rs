//! Flight deck session: input, orchestrator, canvas and notifiers wired
//! together.
//!
//! Every state change goes through [`FlightDeck`] so the canvas is redrawn
//! and the user is notified in one place. The owner drives it from a single
//! loop: call [`FlightDeck::submit`] on user action and feed
//! [`FlightDeck::next_completion`] results back through [`FlightDeck::apply`].

use std::sync::Arc;

use tokio::sync::mpsc;

use super::input::InputController;
use super::orchestrator::{Completion, OrchestratorState, PlanCompletion, PlanOrchestrator};
use super::render::{self, FlightPanel};
use crate::domain::RoutePlanRequest;
use crate::port::{Event, FailureEvent, MapCanvas, NotifierRegistry, PlanSummary, RouteService};

pub struct FlightDeck<C: MapCanvas> {
    input: InputController,
    orchestrator: PlanOrchestrator,
    completions: mpsc::UnboundedReceiver<PlanCompletion>,
    canvas: C,
    notifiers: NotifierRegistry,
}

impl<C: MapCanvas> FlightDeck<C> {
    pub fn new(service: Arc<dyn RouteService>, canvas: C, notifiers: NotifierRegistry) -> Self {
        let (orchestrator, completions) = PlanOrchestrator::new(service);
        let mut deck = Self {
            input: InputController::default(),
            orchestrator,
            completions,
            canvas,
            notifiers,
        };
        deck.redraw();
        deck
    }

    #[must_use]
    pub fn with_input(mut self, input: InputController) -> Self {
        self.input = input;
        self
    }

    #[must_use]
    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// Edits are local; nothing is redrawn until the next submit.
    pub fn input_mut(&mut self) -> &mut InputController {
        &mut self.input
    }

    #[must_use]
    pub fn state(&self) -> &OrchestratorState {
        self.orchestrator.state()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.orchestrator.state().is_loading()
    }

    #[must_use]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    #[must_use]
    pub fn flight_panel(&self) -> Option<FlightPanel> {
        render::flight_panel(self.orchestrator.state())
    }

    /// Start a plan from the current inputs. `None` while loading.
    pub fn submit(&mut self) -> Option<RoutePlanRequest> {
        let request = self.orchestrator.submit(&self.input)?;
        self.redraw();
        Some(request)
    }

    /// Wait for the next request task to finish.
    pub async fn next_completion(&mut self) -> Option<PlanCompletion> {
        self.completions.recv().await
    }

    /// Apply a completion, redraw, and notify.
    pub fn apply(&mut self, completion: PlanCompletion) -> Completion {
        let request = completion.request.clone();
        let outcome = self.orchestrator.complete(completion);

        match &outcome {
            Completion::Stale => return outcome,
            Completion::Succeeded => {
                if let Some(plan) = self.orchestrator.state().plan() {
                    self.notifiers
                        .notify_all(Event::PlanSucceeded(PlanSummary::from(plan)));
                }
            }
            Completion::Failed(message) => {
                self.notifiers.notify_all(Event::PlanFailed(FailureEvent {
                    request,
                    message: message.clone(),
                }));
            }
        }

        self.redraw();
        outcome
    }

    /// Wait for and apply the next completion.
    pub async fn settle(&mut self) -> Option<Completion> {
        let completion = self.next_completion().await?;
        Some(self.apply(completion))
    }

    /// The view is going away: abort any request and clear loading.
    pub fn deactivate(&mut self) {
        self.orchestrator.deactivate();
        self.redraw();
    }

    fn redraw(&mut self) {
        render::redraw(self.orchestrator.state(), &mut self.canvas);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::adapter::outbound::canvas::LayeredCanvas;
    use crate::adapter::outbound::notifier::{AlertNotifier, AlertSlot};
    use crate::app::input::Field;
    use crate::app::render::WeatherStyle;
    use crate::app::testing::{sample_response, ScriptedService};
    use crate::domain::Overlay;
    use crate::error::{PlanError, RemoteError};

    fn deck(service: Arc<ScriptedService>) -> (FlightDeck<LayeredCanvas>, AlertSlot) {
        let slot = AlertSlot::new();
        let mut notifiers = NotifierRegistry::new();
        notifiers.register(Box::new(AlertNotifier::new(slot.clone())));
        let deck = FlightDeck::new(service, LayeredCanvas::new(), notifiers);
        (deck, slot)
    }

    fn server_error() -> PlanError {
        PlanError::Remote(RemoteError::Status {
            status: 500,
            detail: None,
        })
    }

    #[tokio::test]
    async fn ifr_plan_renders_full_overlay_set() {
        let service = ScriptedService::immediate(vec![Ok(sample_response())]);
        let (mut deck, slot) = deck(service);
        deck.input_mut().set(Field::Origin, "KJFK");
        deck.input_mut().set(Field::Dest, "EGLL");

        deck.submit();
        assert_eq!(deck.settle().await, Some(Completion::Succeeded));

        let overlays = deck.canvas().overlays();
        let lines = overlays.iter().filter(|o| matches!(o, Overlay::Route(_))).count();
        let polygons = overlays.iter().filter(|o| matches!(o, Overlay::Hazard(_))).count();
        let labels: Vec<_> = overlays
            .iter()
            .filter_map(|o| match o {
                Overlay::Waypoint(m) => Some(m.label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!((lines, polygons), (1, 1));
        assert_eq!(labels, ["KJFK", "EGLL"]);

        let panel = deck.flight_panel().expect("panel");
        assert_eq!(panel.condition_style, WeatherStyle::Hazard);
        assert!(!slot.is_open());
    }

    #[tokio::test]
    async fn server_error_alerts_and_clears_previous_route() {
        let service =
            ScriptedService::immediate(vec![Ok(sample_response()), Err(server_error())]);
        let (mut deck, slot) = deck(service);

        deck.submit();
        deck.settle().await;
        assert_eq!(deck.canvas().overlays().len(), 4);

        deck.submit();
        let outcome = deck.settle().await;

        assert!(matches!(outcome, Some(Completion::Failed(_))));
        assert!(deck.state().error().is_some());
        assert!(deck.canvas().overlays().is_empty());
        assert!(deck.flight_panel().is_none());
        let alert = slot.current().expect("alert raised");
        assert!(alert.message.contains("HTTP 500"));
    }

    #[tokio::test]
    async fn empty_destination_is_still_sent() {
        let service = ScriptedService::immediate(vec![Err(PlanError::Remote(
            RemoteError::Status {
                status: 404,
                detail: Some("Airport not found".into()),
            },
        ))]);
        let (mut deck, _slot) = deck(service.clone());
        deck.input_mut().clear(Field::Dest);

        let sent = deck.submit().expect("submit accepted");
        deck.settle().await;

        assert_eq!(sent.dest.as_str(), "");
        let requests = service.requests.lock();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].origin.as_str(), "KJFK");
        assert_eq!(requests[0].dest.as_str(), "");
    }

    #[tokio::test]
    async fn loading_clears_overlays_and_blocks_resubmit() {
        let service = ScriptedService::gated(vec![Ok(sample_response()), Ok(sample_response())]);
        let (mut deck, _slot) = deck(service.clone());

        deck.submit();
        service.release();
        deck.settle().await;
        assert!(!deck.canvas().overlays().is_empty());

        assert!(deck.submit().is_some());
        assert!(deck.canvas().overlays().is_empty());
        assert!(deck.submit().is_none());
        assert!(deck.submit().is_none());

        service.release();
        deck.settle().await;
        assert_eq!(service.calls.load(Ordering::SeqCst), 2);
        assert_eq!(deck.canvas().overlays().len(), 4);
    }

    #[tokio::test]
    async fn view_stays_usable_after_failure() {
        let service = ScriptedService::immediate(vec![
            Err(PlanError::Network("refused".into())),
            Ok(sample_response()),
        ]);
        let (mut deck, slot) = deck(service);

        deck.submit();
        deck.settle().await;
        slot.dismiss();

        deck.submit();
        assert_eq!(deck.settle().await, Some(Completion::Succeeded));
        assert!(deck.state().plan().is_some());
    }

    #[tokio::test]
    async fn deactivate_idles_a_pending_plan() {
        let service = ScriptedService::gated(vec![Ok(sample_response())]);
        let (mut deck, _slot) = deck(service);

        deck.submit();
        deck.deactivate();

        assert_eq!(deck.state(), &OrchestratorState::Idle);
        assert!(deck.canvas().overlays().is_empty());
    }
}
