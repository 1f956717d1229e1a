//! Route service port.
//!
//! The remote planner computes the path, weather and hazards for an
//! origin/destination pair. The client only forwards the codes.

use async_trait::async_trait;

use crate::domain::{RoutePlanRequest, RoutePlanResponse};
use crate::error::PlanError;

/// Client for the remote route planning service.
///
/// Implementations must be `Send + Sync`: each request runs on its own task.
///
/// # Errors
///
/// [`calculate_route`](Self::calculate_route) returns
/// [`PlanError::Network`] when the request never completed and
/// [`PlanError::Remote`] for a non-2xx status or an unparseable body.
#[async_trait]
pub trait RouteService: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    async fn calculate_route(
        &self,
        request: &RoutePlanRequest,
    ) -> Result<RoutePlanResponse, PlanError>;
}
