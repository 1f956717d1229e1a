//! Outbound adapters (driven side).

pub mod canvas;
pub mod notifier;
pub mod route_api;
