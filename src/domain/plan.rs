//! Route plan request and response types.

use std::fmt;

use super::airport::AirportCode;
use super::geo::LatLng;

/// One submission to the route service.
///
/// Built once from a snapshot of the input fields at submit time. Edits made
/// while the request is in flight do not change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlanRequest {
    pub origin: AirportCode,
    pub dest: AirportCode,
}

impl RoutePlanRequest {
    pub fn new(origin: impl Into<AirportCode>, dest: impl Into<AirportCode>) -> Self {
        Self {
            origin: origin.into(),
            dest: dest.into(),
        }
    }
}

impl fmt::Display for RoutePlanRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.origin, self.dest)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightData {
    pub distance_nm: f64,
    /// Estimated time en route, preformatted by the service (e.g. `7H 12M`).
    pub ete: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub condition: String,
    pub wind: String,
    pub visibility: Option<String>,
}

impl WeatherReport {
    #[must_use]
    pub fn flight_rules(&self) -> FlightRules {
        FlightRules::classify(&self.condition)
    }
}

/// Flight rules category reported for the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightRules {
    Vfr,
    Mvfr,
    Ifr,
    Lifr,
    /// Anything else the service sends (`SIMULATED`, `N/A`, ...).
    Unknown,
}

impl FlightRules {
    #[must_use]
    pub fn classify(condition: &str) -> Self {
        match condition.trim() {
            "VFR" => Self::Vfr,
            "MVFR" => Self::Mvfr,
            "IFR" => Self::Ifr,
            "LIFR" => Self::Lifr,
            _ => Self::Unknown,
        }
    }

    /// Only plain VFR counts as nominal.
    #[must_use]
    pub fn is_hazard(self) -> bool {
        self != Self::Vfr
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirportCoords {
    pub origin: LatLng,
    pub dest: LatLng,
}

/// A successful route service answer. Rendered whole or not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlanResponse {
    pub flight_data: FlightData,
    pub weather: WeatherReport,
    pub path: Vec<LatLng>,
    /// SIGMET hazard rings. Empty when the service sent none.
    pub storm_polygons: Vec<Vec<LatLng>>,
    pub coords: AirportCoords,
}

/// A response paired with the request snapshot that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub request: RoutePlanRequest,
    pub response: RoutePlanResponse,
}
