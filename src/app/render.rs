//! Route render adapter.
//!
//! [`render`] is a pure function of the orchestrator state. [`redraw`] is the
//! only code that writes to the map canvas: it clears every overlay and adds
//! the new set, so nothing accumulates between renders.

use super::orchestrator::OrchestratorState;
use crate::domain::{
    LatLng, Overlay, OverlaySet, Polygon, Polyline, RoutePlan, StrokeStyle, WaypointKind,
    WaypointMarker,
};
use crate::port::MapCanvas;

/// Overlays for a state. Only `Success` produces any.
#[must_use]
pub fn render(state: &OrchestratorState) -> OverlaySet {
    match state.plan() {
        Some(plan) => render_plan(plan),
        None => OverlaySet::new(),
    }
}

fn render_plan(plan: &RoutePlan) -> OverlaySet {
    let response = &plan.response;
    let mut set = OverlaySet::new();

    set.push(Overlay::Route(Polyline {
        points: response.path.clone(),
        style: StrokeStyle::ROUTE,
    }));

    for ring in &response.storm_polygons {
        set.push(Overlay::Hazard(Polygon {
            ring: open_ring(ring),
            style: StrokeStyle::HAZARD,
        }));
    }

    // Labels come from the request snapshot, never from anything the
    // service echoes back.
    set.push(Overlay::Waypoint(WaypointMarker {
        position: response.coords.origin,
        label: plan.request.origin.to_string(),
        kind: WaypointKind::Departure,
    }));
    set.push(Overlay::Waypoint(WaypointMarker {
        position: response.coords.dest,
        label: plan.request.dest.to_string(),
        kind: WaypointKind::Arrival,
    }));

    set
}

/// Drop an explicit closing vertex; polygon closure is implicit.
fn open_ring(ring: &[LatLng]) -> Vec<LatLng> {
    match ring {
        [first, .., last] if first == last => ring[..ring.len() - 1].to_vec(),
        _ => ring.to_vec(),
    }
}

/// Replace the canvas overlays with the render of `state`.
pub fn redraw<C: MapCanvas + ?Sized>(state: &OrchestratorState, canvas: &mut C) {
    canvas.clear_overlays();
    for overlay in render(state) {
        canvas.add_overlay(overlay);
    }
}

/// Whether a weather value is shown in the nominal or the hazard colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherStyle {
    Nominal,
    Hazard,
}

/// Flight data block shown under the inputs after a successful plan.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPanel {
    pub distance: String,
    pub ete: String,
    pub condition: String,
    pub condition_style: WeatherStyle,
    pub wind: String,
    pub visibility: Option<String>,
}

#[must_use]
pub fn flight_panel(state: &OrchestratorState) -> Option<FlightPanel> {
    let response = &state.plan()?.response;
    let condition_style = if response.weather.flight_rules().is_hazard() {
        WeatherStyle::Hazard
    } else {
        WeatherStyle::Nominal
    };
    Some(FlightPanel {
        distance: format!("{} NM", response.flight_data.distance_nm),
        ete: response.flight_data.ete.clone(),
        condition: response.weather.condition.clone(),
        condition_style,
        wind: response.weather.wind.clone(),
        visibility: response.weather.visibility.clone(),
    })
}
