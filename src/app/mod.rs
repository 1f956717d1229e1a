//! Application layer: input, orchestration, rendering, clock, and the
//! session that ties them together.

pub mod clock;
pub mod input;
pub mod orchestrator;
pub mod render;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use clock::{ClockTicker, ClockZone, SystemClock, TimeSource};
pub use input::{Field, InputController};
pub use orchestrator::{Completion, OrchestratorState, PlanCompletion, PlanOrchestrator};
pub use render::{flight_panel, redraw, render, FlightPanel, WeatherStyle};
pub use session::FlightDeck;
