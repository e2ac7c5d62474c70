//! HTTP API Client
//!
//! Typed functions for communicating with the Sentinel REST API. Every
//! call returns `Err` on network failure, a non-2xx status, or an
//! unparseable body; the caller decides which fixture to substitute.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::model::{
    DemandSlice, FunnelStage, KpiSet, Lead, LeadDossier, ScoreResult, SectorCount, StatusSlice,
    TrendPoint,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("sentinel_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("sentinel_api_url", url);
        }
    }
}

/// Server error envelope, `{"error": {"code", "message"}, "request_id"}`
#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// Issue a GET against the API base and decode the JSON body
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let message = response
            .json::<ErrorEnvelope>()
            .await
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| format!("API error: {}", response.status()));
        return Err(message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the dashboard KPI set
pub async fn fetch_kpis() -> Result<KpiSet, String> {
    get_json("/kpis").await
}

/// Fetch the detected-vs-certified trend
pub async fn fetch_leads_over_time() -> Result<Vec<TrendPoint>, String> {
    get_json("/leads-over-time").await
}

/// Fetch the product demand distribution
pub async fn fetch_product_demand() -> Result<Vec<DemandSlice>, String> {
    get_json("/product-demand").await
}

/// Fetch the pipeline status distribution
pub async fn fetch_lead_status() -> Result<Vec<StatusSlice>, String> {
    get_json("/lead-status").await
}

/// Fetch the warm-entity queue
pub async fn fetch_leads() -> Result<Vec<Lead>, String> {
    get_json("/leads").await
}

/// Fetch the battle card for a single lead
pub async fn fetch_dossier(id: u32) -> Result<LeadDossier, String> {
    get_json(&format!("/leads/{}", id)).await
}

/// Fetch the conversion funnel stages
pub async fn fetch_funnel() -> Result<Vec<FunnelStage>, String> {
    get_json("/analytics/funnel").await
}

/// Fetch lead counts by sector
pub async fn fetch_sectors() -> Result<Vec<SectorCount>, String> {
    get_json("/analytics/sectors").await
}

/// Predict a confidence score for a company and signal text
pub async fn predict_score(company_name: &str, signal_text: &str) -> Result<ScoreResult, String> {
    #[derive(serde::Serialize)]
    struct ScoreRequest {
        company_name: String,
        signal_text: String,
    }

    let response = Request::post(&format!("{}/score", get_api_base()))
        .json(&ScoreRequest {
            company_name: company_name.to_string(),
            signal_text: signal_text.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let message = response
            .json::<ErrorEnvelope>()
            .await
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| format!("API error: {}", response.status()));
        return Err(message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Resolve a settled request against its fixture
///
/// A failed request degrades only its own slice of the view; the
/// substitution is logged to the console and nothing is surfaced to the
/// user.
pub fn or_fixture<T>(result: Result<T, String>, endpoint: &str, fixture: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("GET {} failed, using fixture: {}", endpoint, e).into(),
            );
            fixture
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn api_base_roundtrips_through_local_storage() {
        set_api_base("http://example.test/api/");
        // Trailing slash is normalized away
        assert_eq!(get_api_base(), "http://example.test/api");

        set_api_base(DEFAULT_API_BASE);
        assert_eq!(get_api_base(), DEFAULT_API_BASE);
    }
}
