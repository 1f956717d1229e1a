//! Test doubles shared by the app module tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Semaphore;

use crate::domain::{
    AirportCoords, FlightData, LatLng, RoutePlanRequest, RoutePlanResponse, WeatherReport,
};
use crate::error::PlanError;
use crate::port::RouteService;

/// Three-point KJFK→EGLL route with one closed SIGMET ring and IFR weather.
pub fn sample_response() -> RoutePlanResponse {
    RoutePlanResponse {
        flight_data: FlightData {
            distance_nm: 2999.1,
            ete: "6H 39M".into(),
        },
        weather: WeatherReport {
            condition: "IFR".into(),
            wind: "270@12KT".into(),
            visibility: Some("2 SM".into()),
        },
        path: vec![
            LatLng::new(40.6413, -73.7781),
            LatLng::new(48.0, -40.0),
            LatLng::new(51.47, -0.4543),
        ],
        storm_polygons: vec![vec![
            LatLng::new(45.0, -50.0),
            LatLng::new(47.0, -48.0),
            LatLng::new(44.0, -46.0),
            LatLng::new(45.0, -50.0),
        ]],
        coords: AirportCoords {
            origin: LatLng::new(40.6413, -73.7781),
            dest: LatLng::new(51.47, -0.4543),
        },
    }
}

/// Route service replaying scripted results in order.
///
/// A gated service holds every call until [`release`](Self::release).
pub struct ScriptedService {
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<RoutePlanRequest>>,
    responses: Mutex<VecDeque<Result<RoutePlanResponse, PlanError>>>,
    gate: Option<Semaphore>,
}

impl ScriptedService {
    pub fn immediate(responses: Vec<Result<RoutePlanResponse, PlanError>>) -> Arc<Self> {
        Arc::new(Self::build(responses, None))
    }

    pub fn gated(responses: Vec<Result<RoutePlanResponse, PlanError>>) -> Arc<Self> {
        Arc::new(Self::build(responses, Some(Semaphore::new(0))))
    }

    fn build(
        responses: Vec<Result<RoutePlanResponse, PlanError>>,
        gate: Option<Semaphore>,
    ) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
            gate,
        }
    }

    /// Let one held call through.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }
}

#[async_trait]
impl RouteService for ScriptedService {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn calculate_route(
        &self,
        request: &RoutePlanRequest,
    ) -> Result<RoutePlanResponse, PlanError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate open").forget();
        }
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(PlanError::Network("script exhausted".into())))
    }
}
