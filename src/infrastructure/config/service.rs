//! Route service and display configuration.

use serde::Deserialize;

use crate::app::ClockZone;

/// Environment variable overriding `[service] base_url`.
pub const SERVICE_URL_ENV: &str = "FLIGHTDECK_SERVICE_URL";

/// Where the route planning service lives.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL; requests go to `<base_url>/api/calculate_route`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Clock overlay configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ClockConfig {
    #[serde(default)]
    pub zone: ClockZone,
}
