//! Analytics Routes
//!
//! Executive analytics series.
//!
//! - GET /api/analytics/funnel - Conversion funnel stages
//! - GET /api/analytics/sectors - Lead counts by sector

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::catalog::{FunnelStage, SectorCount};

/// GET /api/analytics/funnel
pub async fn get_funnel(State(state): State<Arc<AppState>>) -> Json<Vec<FunnelStage>> {
    Json(state.catalog.funnel().to_vec())
}

/// GET /api/analytics/sectors
pub async fn get_sectors(State(state): State<Arc<AppState>>) -> Json<Vec<SectorCount>> {
    Json(state.catalog.sectors().to_vec())
}
