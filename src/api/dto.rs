//! Data Transfer Objects
//!
//! Request and response types for the API endpoints. The catalog records
//! themselves (leads, dossiers, analytics series) are serialized directly;
//! only the score and service endpoints need dedicated shapes.

use serde::{Deserialize, Serialize};

// ============================================
// SCORE DTOs
// ============================================

/// Confidence prediction request
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    /// Company name to score
    pub company_name: String,
    /// Optional regulatory signal text for intent context
    #[serde(default)]
    pub signal_text: String,
}

/// Confidence prediction response
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    /// Echo of the scored company name
    pub company_name: String,
    /// Predicted confidence, 0-100
    pub confidence: f64,
}

// ============================================
// SERVICE DTOs
// ============================================

/// Root service descriptor
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// Catalog component status
    pub catalog: String,
    /// Number of leads the catalog serves
    pub lead_count: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
