//! Sentinel API Server
//!
//! Run with: cargo run --bin sentinel-api
//!
//! # Configuration
//!
//! Loaded from the first config.toml found in the platform config dir,
//! /etc/sentinel, or the working directory, then overridden by environment:
//! - `SENTINEL_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SENTINEL_API_PORT`: Port to listen on (default: 8000)
//! - `SENTINEL_CORS_ORIGINS`: Comma-separated allowed origins
//! - `SENTINEL_MODEL_WEIGHT`: Model share of the blended confidence (0-1)
//! - `SENTINEL_LOG_LEVEL` / `SENTINEL_LOG_FORMAT`: Logging overrides
//! - `RUST_LOG`: Wins over the configured log level when set

use sentinel::api::{serve, ApiConfig, AppState};
use sentinel::catalog::LeadCatalog;
use sentinel::config::Config;
use sentinel::scoring::{ConfidenceModel, ModelWeights};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();

    init_tracing(&config);

    tracing::info!("Starting Sentinel API server v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Arc::new(LeadCatalog::seeded());
    tracing::info!("Catalog seeded with {} leads", catalog.lead_count());

    let model = Arc::new(ConfidenceModel::new(
        ModelWeights::default(),
        config.scoring.model_weight,
    ));
    tracing::info!(model_weight = model.model_weight(), "Confidence model ready");

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        cors_origins: config.api.cors_origins.clone(),
    };

    let state = AppState::new(catalog, model, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Sentinel API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "sentinel={},tower_http=info",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
