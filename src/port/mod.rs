//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Route   │            │ Map Canvas  │              │ Notifier  │
//! │ Service │            │   Adapter   │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`RouteService`] - Remote route and weather computation
//! - [`MapCanvas`] - Overlay sink for the map view
//! - [`Notifier`] - Plan outcome notifications (alert, logging)

pub mod outbound;

pub use outbound::map_canvas::{MapCanvas, TileLayer};
pub use outbound::notifier::{
    Event, FailureEvent, LogNotifier, Notifier, NotifierRegistry, NullNotifier, PlanSummary,
};
pub use outbound::route_service::RouteService;
