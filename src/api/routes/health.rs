//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes, plus the
//! root service descriptor.
//!
//! - GET / - Service name and version
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{HealthResponse, ServiceInfo};
use crate::api::state::AppState;

/// GET /
///
/// Service descriptor for humans poking at the root path.
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Sentinel API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Returns 200 if the catalog is readable and non-empty.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match check_catalog_health(&state) {
        true => StatusCode::OK,
        false => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let catalog_ok = check_catalog_health(&state);

    let overall_status = if catalog_ok { "healthy" } else { "unhealthy" };
    let catalog_status = if catalog_ok { "ok" } else { "error" };

    Json(HealthResponse {
        status: overall_status.to_string(),
        catalog: catalog_status.to_string(),
        lead_count: state.catalog.lead_count(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Check catalog health
///
/// The catalog is immutable after seeding, so an empty queue means the
/// service came up without its data.
fn check_catalog_health(state: &AppState) -> bool {
    state.catalog.lead_count() > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
