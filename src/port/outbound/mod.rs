//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the route service, the map canvas, and user
//! notifications.

pub mod map_canvas;
pub mod notifier;
pub mod route_service;
