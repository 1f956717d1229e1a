//! Route service HTTP client.
//!
//! Posts the two airport codes to `<base-url>/api/calculate_route` and maps
//! the answer onto [`PlanError`] categories:
//!
//! - transport failure or body read failure → [`PlanError::Network`]
//! - non-2xx status → [`RemoteError::Status`] (with the service's `detail`)
//! - 2xx with an unparseable body or an off-globe coordinate →
//!   [`RemoteError::MalformedBody`]

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info, warn};

use super::dto::{CalculateRouteRequest, CalculateRouteResponse, ErrorBody};
use crate::domain::{RoutePlanRequest, RoutePlanResponse};
use crate::error::{PlanError, RemoteError};
use crate::infrastructure::config::service::ServiceConfig;
use crate::port::RouteService;

const CALCULATE_ROUTE_PATH: &str = "/api/calculate_route";

/// HTTP client for the route planning service.
pub struct RouteApiClient {
    http: HttpClient,
    endpoint: String,
}

impl RouteApiClient {
    /// Create a client for the service at `base_url`
    /// (e.g. `http://127.0.0.1:8000`). A trailing `/` is ignored.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: HttpClient::new(),
            endpoint: endpoint_for(base_url),
        }
    }

    #[must_use]
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(&config.base_url)
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn endpoint_for(base_url: &str) -> String {
    format!(
        "{}{CALCULATE_ROUTE_PATH}",
        base_url.trim().trim_end_matches('/')
    )
}

#[async_trait]
impl RouteService for RouteApiClient {
    fn name(&self) -> &'static str {
        "route-api"
    }

    async fn calculate_route(
        &self,
        request: &RoutePlanRequest,
    ) -> Result<RoutePlanResponse, PlanError> {
        info!(url = %self.endpoint, route = %request, "Requesting route plan");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&CalculateRouteRequest::from(request))
            .send()
            .await
            .map_err(|e| PlanError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| PlanError::Network(e.to_string()))?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .map(|b| b.detail);
            warn!(status = status.as_u16(), detail = ?detail, "Route service rejected request");
            return Err(RemoteError::Status {
                status: status.as_u16(),
                detail,
            }
            .into());
        }

        let parsed: CalculateRouteResponse = serde_json::from_slice(&body)
            .map_err(|e| PlanError::from(RemoteError::MalformedBody(e.to_string())))?;

        debug!(
            points = parsed.path.len(),
            hazards = parsed.storm_polygons.as_ref().map_or(0, Vec::len),
            "Route plan parsed"
        );

        Ok(RoutePlanResponse::try_from(parsed)?)
    }
}
