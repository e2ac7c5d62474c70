//! # Sentinel
//!
//! Verifiable Sales-Lead Intelligence - the back end of the Sentinel
//! dashboard. Serves certified lead analytics (KPIs, trends, the warm-entity
//! queue, and per-lead dossiers) over a small REST API and scores lead
//! confidence with a text-feature model.
//!
//! ## Modules
//!
//! - [`catalog`]: In-memory store of leads, dossiers, and analytics datasets
//! - [`scoring`]: Confidence model and blending with analyst-assigned scores
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
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

pub mod api;
pub mod catalog;
pub mod config;
pub mod scoring;

// Re-export top-level types for convenience
pub use catalog::{
    DemandSlice, FunnelStage, KpiSet, Lead, LeadCatalog, LeadDossier, ProductRecommendation,
    SectorCount, StatusSlice, TrendPoint, Verification,
};

pub use scoring::{ConfidenceModel, ModelWeights, TextFeatures};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig, ScoringConfig};
