//! Flightdeck - terminal flight planning client.
//!
//! Enter a departure and an arrival ICAO code, ask the route planning
//! service for a plan, and see the great-circle route, SIGMET hazard
//! polygons and destination weather drawn over a world map.
//!
//! # Architecture
//!
//! - **`domain`** - Airport codes, coordinates, route plans and map overlays
//! - **`port`** - Route service, map canvas and notifier traits
//! - **`adapter`** - HTTP route client, in-memory canvas, alert notifier and
//!   the terminal UI
//! - **`app`** - Input controller, plan orchestrator, render adapter, clock
//!   ticker and the [`app::FlightDeck`] session tying them together
//! - **`infrastructure`** - TOML configuration and logging bootstrap
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use flightdeck::adapter::outbound::canvas::LayeredCanvas;
//! use flightdeck::adapter::outbound::route_api::RouteApiClient;
//! use flightdeck::app::FlightDeck;
//! use flightdeck::port::{LogNotifier, NotifierRegistry};
//!
//! # async fn example() {
//! let mut notifiers = NotifierRegistry::new();
//! notifiers.register(Box::new(LogNotifier));
//!
//! let service = Arc::new(RouteApiClient::new("http://127.0.0.1:8000"));
//! let mut deck = FlightDeck::new(service, LayeredCanvas::new(), notifiers);
//! deck.submit();
//! let outcome = deck.settle().await;
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
