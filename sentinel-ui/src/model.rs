//! Display Model
//!
//! The records the dashboard renders, shared by the API client, the
//! fixtures and the pages. These are read-only projections: the front end
//! renders whatever shape arrives and never mutates them beyond the
//! battle-card rescore. Field names follow the wire format (camelCase
//! except the score endpoint, which uses snake_case).

use serde::{Deserialize, Serialize};

/// Three-factor verification flags for a lead
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Verification {
    pub signal: bool,
    pub legal: bool,
    pub geo: bool,
}

/// A warm entity in the lead queue
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: u32,
    pub company: String,
    pub industry: String,
    pub confidence: f64,
    pub signal: String,
    #[serde(default)]
    pub products: Vec<String>,
    pub product_fit: String,
    pub depot: String,
    pub depot_distance: String,
    pub verified: Verification,
    pub gstin: String,
    #[serde(default)]
    pub ai_score: Option<f64>,
}

/// Per-product recommendation inside a battle card
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ProductRecommendation {
    pub name: String,
    pub confidence: f64,
    pub reason: String,
}

/// The full battle card for a single lead
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadDossier {
    pub id: u32,
    pub company: String,
    pub industry: String,
    pub gstin: String,
    pub location: String,
    pub signal: String,
    pub confidence: f64,
    pub product_fit: String,
    pub depot: String,
    pub depot_distance: String,
    pub procurement_hint: String,
    pub why_lead: String,
    pub products: Vec<ProductRecommendation>,
    #[serde(default)]
    pub ai_score: Option<f64>,
}

/// Dashboard KPI set
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiSet {
    pub warm_entities_this_week: u32,
    pub high_confidence_leads: u32,
    pub conversion_rate: f64,
    pub avg_confidence: f64,
}

/// One point of the detected-vs-certified trend
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TrendPoint {
    pub date: String,
    pub detected: u32,
    pub certified: u32,
}

/// Share of demand for a single product
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DemandSlice {
    pub name: String,
    pub value: u32,
}

/// Pipeline status slice with its display color
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct StatusSlice {
    pub name: String,
    pub value: u32,
    pub color: String,
}

/// Conversion funnel stage
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct FunnelStage {
    pub stage: String,
    pub count: u32,
}

/// Lead count for a single sector
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SectorCount {
    pub name: String,
    pub count: u32,
}

/// Result of the on-demand confidence prediction
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ScoreResult {
    pub company_name: String,
    pub confidence: f64,
}

/// Format a confidence value for display, `round(value)%`
pub fn confidence_label(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

/// Inline width style for a confidence meter, clamped to the bar
pub fn confidence_width(value: f64) -> String {
    format!("width: {}%", value.clamp(0.0, 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_parses_camel_case_wire_format() {
        let raw = r#"{
            "id": 4,
            "company": "Adani Ports & SEZ Ltd.",
            "industry": "Shipping",
            "confidence": 89,
            "signal": "Marine Fuel Tender - Mundra Port",
            "products": ["HSD", "FO"],
            "productFit": "HSD, FO",
            "depot": "Mundra Depot",
            "depotDistance": "5 km",
            "verified": {"signal": true, "legal": true, "geo": true},
            "gstin": "24AAACA2729K1Z8",
            "aiScore": 91.5
        }"#;

        let lead: Lead = serde_json::from_str(raw).unwrap();
        assert_eq!(lead.product_fit, "HSD, FO");
        assert_eq!(lead.depot_distance, "5 km");
        assert_eq!(lead.ai_score, Some(91.5));
        assert!(lead.verified.geo);
    }

    #[test]
    fn dossier_parses_without_model_score() {
        let raw = r#"{
            "id": 5,
            "company": "NHAI - Project Division",
            "industry": "Infrastructure",
            "gstin": "09AAAGN0171N1ZE",
            "location": "Panipat, Haryana",
            "signal": "Annual Bitumen Procurement Tender",
            "confidence": 84,
            "productFit": "Bitumen",
            "depot": "Panipat Depot",
            "depotDistance": "22 km",
            "procurementHint": "FY26 tender cycle",
            "whyLead": "Annual bitumen procurement for highway projects.",
            "products": [{"name": "Bitumen", "confidence": 94, "reason": "Tender scope"}]
        }"#;

        let dossier: LeadDossier = serde_json::from_str(raw).unwrap();
        assert_eq!(dossier.products.len(), 1);
        assert_eq!(dossier.ai_score, None);
    }

    #[test]
    fn kpis_parse_camel_case() {
        let raw = r#"{
            "warmEntitiesThisWeek": 47,
            "highConfidenceLeads": 12,
            "conversionRate": 31.2,
            "avgConfidence": 87
        }"#;

        let kpis: KpiSet = serde_json::from_str(raw).unwrap();
        assert_eq!(kpis.warm_entities_this_week, 47);
        assert_eq!(kpis.conversion_rate, 31.2);
    }

    #[test]
    fn score_result_uses_snake_case() {
        let raw = r#"{"company_name": "Acme Fuels", "confidence": 78.4}"#;
        let score: ScoreResult = serde_json::from_str(raw).unwrap();
        assert_eq!(score.company_name, "Acme Fuels");
    }

    #[test]
    fn confidence_label_rounds_to_whole_percent() {
        assert_eq!(confidence_label(92.4), "92%");
        assert_eq!(confidence_label(92.5), "93%");
        assert_eq!(confidence_label(0.0), "0%");
        assert_eq!(confidence_label(100.0), "100%");
    }

    #[test]
    fn confidence_width_clamps_out_of_range_values() {
        assert_eq!(confidence_width(84.6), "width: 85%");
        assert_eq!(confidence_width(140.0), "width: 100%");
        assert_eq!(confidence_width(-5.0), "width: 0%");
    }
}
