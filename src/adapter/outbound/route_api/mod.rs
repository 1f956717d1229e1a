//! Route planning service adapter.

mod client;
pub mod dto;

pub use client::RouteApiClient;
