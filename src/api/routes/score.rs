//! Score Routes
//!
//! On-demand confidence prediction, exposing the raw model without the
//! analyst blend.
//!
//! - POST /api/score - Predict confidence for a company + signal text

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ScoreRequest, ScoreResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/score
///
/// Predict a confidence score for an arbitrary company and signal text.
pub async fn predict_score(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScoreRequest>,
) -> ApiResult<Json<ScoreResponse>> {
    if req.company_name.trim().is_empty() {
        return Err(ApiError::Validation("company_name is required".to_string()));
    }

    let confidence = state.model.predict(&req.company_name, &req.signal_text);

    tracing::debug!(company = %req.company_name, confidence, "Scored lead text");

    Ok(Json(ScoreResponse {
        company_name: req.company_name,
        confidence,
    }))
}
