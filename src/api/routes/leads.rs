//! Lead Routes
//!
//! The warm-entity queue and per-lead dossiers, enriched with the
//! confidence model before they go out.
//!
//! - GET /api/leads - List the warm-entity queue
//! - GET /api/leads/:id - Dossier for a single lead

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::catalog::{Lead, LeadDossier};

/// GET /api/leads
///
/// Returns the queue with each lead's confidence blended against the model
/// score.
pub async fn list_leads(State(state): State<Arc<AppState>>) -> Json<Vec<Lead>> {
    let leads: Vec<Lead> = state
        .catalog
        .leads()
        .iter()
        .map(|seed| {
            let mut lead = seed.clone();
            state.model.enrich_lead(&mut lead);
            lead
        })
        .collect();

    Json(leads)
}

/// GET /api/leads/:id
///
/// Returns the full battle card for one lead, model-enriched.
/// 404 when the id is not in the catalog.
pub async fn get_dossier(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> ApiResult<Json<LeadDossier>> {
    let mut dossier = state
        .catalog
        .dossier(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Lead with id {} not found", id)))?;

    state.model.enrich_dossier(&mut dossier);

    tracing::debug!(lead_id = id, company = %dossier.company, "Served dossier");

    Ok(Json(dossier))
}
