//! Sentinel REST API
//!
//! HTTP API layer for Sentinel, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard stats
//! - `GET /api/kpis` - Dashboard KPI set
//! - `GET /api/leads-over-time` - Detected-vs-certified trend
//! - `GET /api/product-demand` - Product demand distribution
//! - `GET /api/lead-status` - Pipeline status distribution
//!
//! ## Leads
//! - `GET /api/leads` - Warm-entity queue, model-enriched
//! - `GET /api/leads/:id` - Dossier for a single lead
//!
//! ## Analytics
//! - `GET /api/analytics/funnel` - Conversion funnel stages
//! - `GET /api/analytics/sectors` - Lead counts by sector
//!
//! ## Scoring
//! - `POST /api/score` - Predict confidence for a company + signal text
//!
//! ## Health
//! - `GET /` - Service name and version
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use sentinel::api::{serve, ApiConfig, AppState};
//! use sentinel::catalog::LeadCatalog;
//! use sentinel::scoring::ConfidenceModel;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Arc::new(LeadCatalog::seeded());
//!     let model = Arc::new(ConfidenceModel::default());
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(catalog, model, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Dashboard stats
        .route("/kpis", get(routes::stats::get_kpis))
        .route("/leads-over-time", get(routes::stats::get_leads_over_time))
        .route("/product-demand", get(routes::stats::get_product_demand))
        .route("/lead-status", get(routes::stats::get_lead_status))
        // Leads
        .route("/leads", get(routes::leads::list_leads))
        .route("/leads/:id", get(routes::leads::get_dossier))
        // Analytics
        .route("/analytics/funnel", get(routes::analytics::get_funnel))
        .route("/analytics/sectors", get(routes::analytics::get_sectors))
        // Scoring
        .route("/score", post(routes::score::predict_score));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::health::service_info))
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Build the CORS layer from the configured origins
///
/// An empty origin list means dev mode: allow everything.
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Sentinel API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Sentinel API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LeadCatalog;
    use crate::scoring::ConfidenceModel;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let catalog = Arc::new(LeadCatalog::seeded());
        let model = Arc::new(ConfidenceModel::default());
        let api_config = ApiConfig::default();

        let state = AppState::new(catalog, model, api_config);
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = get(create_test_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["catalog"], "ok");
        assert!(json["lead_count"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_root_service_info() {
        let response = get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Sentinel API");
    }

    #[tokio::test]
    async fn test_kpis() {
        let response = get(create_test_app(), "/api/kpis").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json.get("warmEntitiesThisWeek").is_some());
        assert!(json.get("avgConfidence").is_some());
    }

    #[tokio::test]
    async fn test_dashboard_series() {
        for uri in ["/api/leads-over-time", "/api/product-demand", "/api/lead-status"] {
            let response = get(create_test_app(), uri).await;
            assert_eq!(response.status(), StatusCode::OK, "GET {} failed", uri);

            let json = body_json(response).await;
            assert!(!json.as_array().unwrap().is_empty(), "{} is empty", uri);
        }
    }

    #[tokio::test]
    async fn test_list_leads_is_enriched() {
        let response = get(create_test_app(), "/api/leads").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let leads = json.as_array().unwrap();
        assert!(!leads.is_empty());

        for lead in leads {
            assert!(lead.get("aiScore").is_some(), "lead missing model score");
            let confidence = lead["confidence"].as_f64().unwrap();
            assert!((0.0..=100.0).contains(&confidence));
        }
    }

    #[tokio::test]
    async fn test_get_dossier() {
        let response = get(create_test_app(), "/api/leads/1").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["id"], 1);
        assert!(json.get("whyLead").is_some());
        assert!(json.get("aiScore").is_some());
    }

    #[tokio::test]
    async fn test_unknown_dossier_is_404() {
        let response = get(create_test_app(), "/api/leads/9999").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert!(json.get("request_id").is_some());
    }

    #[tokio::test]
    async fn test_analytics_series() {
        for uri in ["/api/analytics/funnel", "/api/analytics/sectors"] {
            let response = get(create_test_app(), uri).await;
            assert_eq!(response.status(), StatusCode::OK, "GET {} failed", uri);
        }
    }

    #[tokio::test]
    async fn test_score() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/score")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"company_name": "Acme Fuels", "signal_text": "Marine Fuel Tender"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["company_name"], "Acme Fuels");
        let confidence = json["confidence"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&confidence));
    }

    #[tokio::test]
    async fn test_score_without_signal_text() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/score")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"company_name": "Acme Fuels"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_score_empty_company_is_400() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/score")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"company_name": "  "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}
