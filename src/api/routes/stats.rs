//! Dashboard Stats Routes
//!
//! Read-only aggregate series for the main dashboard view.
//!
//! - GET /api/kpis - Dashboard KPI set
//! - GET /api/leads-over-time - Detected-vs-certified trend
//! - GET /api/product-demand - Product demand distribution
//! - GET /api/lead-status - Pipeline status distribution

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::catalog::{DemandSlice, KpiSet, StatusSlice, TrendPoint};

/// GET /api/kpis
pub async fn get_kpis(State(state): State<Arc<AppState>>) -> Json<KpiSet> {
    Json(*state.catalog.kpis())
}

/// GET /api/leads-over-time
pub async fn get_leads_over_time(State(state): State<Arc<AppState>>) -> Json<Vec<TrendPoint>> {
    Json(state.catalog.leads_over_time().to_vec())
}

/// GET /api/product-demand
pub async fn get_product_demand(State(state): State<Arc<AppState>>) -> Json<Vec<DemandSlice>> {
    Json(state.catalog.product_demand().to_vec())
}

/// GET /api/lead-status
pub async fn get_lead_status(State(state): State<Arc<AppState>>) -> Json<Vec<StatusSlice>> {
    Json(state.catalog.lead_status().to_vec())
}
