//! Terminal front end.
//!
//! [`run`] owns the terminal and the flight deck and drives both from one
//! `select!` loop over key events, plan completions and clock ticks.

pub mod event;
pub mod map;
pub mod theme;
pub mod view;

use std::sync::Arc;

use crossterm::event::{Event as TermEvent, EventStream};
use futures_util::StreamExt;
use tracing::{debug, info, warn};

use self::event::{map_key, Action};
use self::theme::Theme;
use self::view::UiState;
use crate::adapter::outbound::canvas::LayeredCanvas;
use crate::adapter::outbound::notifier::{AlertNotifier, AlertSlot};
use crate::adapter::outbound::route_api::RouteApiClient;
use crate::app::{ClockTicker, FlightDeck, SystemClock};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{LogNotifier, MapCanvas, NotifierRegistry};

/// Whether the event loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the terminal UI until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be initialized, drawn to, or
/// read from.
pub async fn run(config: &Config) -> Result<()> {
    let theme = theme::init(Theme::default());

    let alerts = AlertSlot::new();
    let mut notifiers = NotifierRegistry::new();
    notifiers.register(Box::new(LogNotifier));
    notifiers.register(Box::new(AlertNotifier::new(alerts.clone())));

    let service = Arc::new(RouteApiClient::from_config(&config.service));
    info!(endpoint = service.endpoint(), "Route service configured");

    let mut deck = FlightDeck::new(service, LayeredCanvas::new(), notifiers);
    let mut ui = UiState {
        alerts,
        clock_zone: config.clock.zone,
        ..UiState::default()
    };

    let mut clock = ClockTicker::start(SystemClock {
        zone: config.clock.zone,
    });
    let mut clock_rx = clock.subscribe();

    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, &mut deck, &mut ui, &mut clock_rx, theme).await;

    clock.stop();
    deck.deactivate();
    ratatui::restore();

    info!("Terminal UI closed");
    result
}

async fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    deck: &mut FlightDeck<LayeredCanvas>,
    ui: &mut UiState,
    clock_rx: &mut tokio::sync::watch::Receiver<String>,
    theme: &Theme,
) -> Result<()> {
    let mut events = EventStream::new();

    loop {
        let clock_text = clock_rx.borrow_and_update().clone();
        terminal.draw(|frame| view::draw(frame, deck, ui, &clock_text, theme))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(TermEvent::Key(key))) => {
                        let action = map_key(key, ui.focus, ui.alerts.is_open());
                        if handle_action(action, deck, ui) == Flow::Quit {
                            return Ok(());
                        }
                    }
                    // Resize and the rest only need a redraw.
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        warn!("Terminal event stream closed");
                        return Ok(());
                    }
                }
            }
            Some(completion) = deck.next_completion() => {
                let outcome = deck.apply(completion);
                debug!(?outcome, "Plan completion applied");
            }
            changed = clock_rx.changed() => {
                if changed.is_err() {
                    warn!("Clock ticker stopped unexpectedly");
                    return Ok(());
                }
            }
        }
    }
}

/// Apply one user action to the deck and view state.
pub fn handle_action<C: MapCanvas>(
    action: Action,
    deck: &mut FlightDeck<C>,
    ui: &mut UiState,
) -> Flow {
    match action {
        Action::Quit => return Flow::Quit,
        Action::Submit => match deck.submit() {
            Some(request) => info!(%request, "Flight plan requested"),
            None => debug!("Submit ignored while a plan is loading"),
        },
        Action::NextFocus => ui.focus = ui.focus.next(),
        Action::PrevFocus => ui.focus = ui.focus.prev(),
        Action::Type(ch) => {
            if let Some(field) = ui.focus.field() {
                deck.input_mut().push(field, ch);
            }
        }
        Action::Backspace => {
            if let Some(field) = ui.focus.field() {
                deck.input_mut().backspace(field);
            }
        }
        Action::Pan(direction) => ui.viewport.pan(direction),
        Action::ZoomIn => ui.viewport.zoom_in(),
        Action::ZoomOut => ui.viewport.zoom_out(),
        Action::Dismiss => {
            ui.alerts.dismiss();
        }
        Action::None => {}
    }
    Flow::Continue
}
