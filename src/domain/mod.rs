//! Flight planning domain types.

pub mod airport;
pub mod geo;
pub mod overlay;
pub mod plan;

pub use airport::{AirportCode, MAX_CODE_LEN};
pub use geo::LatLng;
pub use overlay::{
    Dash, Overlay, OverlaySet, Polygon, Polyline, Rgb, StrokeStyle, WaypointKind, WaypointMarker,
};
pub use plan::{
    AirportCoords, FlightData, FlightRules, RoutePlan, RoutePlanRequest, RoutePlanResponse,
    WeatherReport,
};
