//! Display records served by the API
//!
//! These types are read-only projections: the front end renders whatever
//! shape arrives and never mutates them. Field names follow the wire format
//! the dashboard expects (camelCase except where noted).

use serde::{Deserialize, Serialize};

/// Three-factor verification flags for a lead
///
/// A lead enters the warm-entity queue only after signal triangulation,
/// legal-entity resolution, and geo-logistics checks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verification {
    /// Regulatory signal confirmed (EC / PCB / tender filing)
    pub signal: bool,
    /// Legal entity resolved (GSTIN / CIN, active filing history)
    pub legal: bool,
    /// Depot delivery feasibility confirmed
    pub geo: bool,
}

impl Verification {
    /// All three factors confirmed
    pub fn full() -> Self {
        Self {
            signal: true,
            legal: true,
            geo: true,
        }
    }

    /// True when every factor is confirmed
    pub fn is_complete(&self) -> bool {
        self.signal && self.legal && self.geo
    }
}

/// A warm entity in the lead queue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: u32,
    pub company: String,
    pub industry: String,
    /// Blended confidence score, 0-100
    pub confidence: f64,
    /// The regulatory signal that surfaced this lead
    pub signal: String,
    /// Products the entity is expected to procure
    pub products: Vec<String>,
    /// One-line product fit summary
    pub product_fit: String,
    pub depot: String,
    pub depot_distance: String,
    pub verified: Verification,
    pub gstin: String,
    /// Raw model score before blending, set during enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_score: Option<f64>,
}

/// Per-product recommendation inside a dossier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecommendation {
    pub name: String,
    /// Fit confidence for this product, 0-100
    pub confidence: f64,
    pub reason: String,
}

/// The full battle card for a single lead
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadDossier {
    pub id: u32,
    pub company: String,
    pub industry: String,
    pub gstin: String,
    pub location: String,
    pub signal: String,
    /// Blended confidence score, 0-100
    pub confidence: f64,
    pub product_fit: String,
    pub depot: String,
    pub depot_distance: String,
    /// Expected procurement timing
    pub procurement_hint: String,
    /// Narrative justification for the lead
    pub why_lead: String,
    pub products: Vec<ProductRecommendation>,
    /// Raw model score before blending, set during enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_score: Option<f64>,
}

/// Dashboard KPI set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiSet {
    pub warm_entities_this_week: u32,
    pub high_confidence_leads: u32,
    /// Percentage, 0-100
    pub conversion_rate: f64,
    /// Percentage, 0-100
    pub avg_confidence: f64,
}

/// One point of the detected-vs-certified trend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    /// Opaque period label ("Week 1", ...)
    pub date: String,
    pub detected: u32,
    pub certified: u32,
}

/// Share of demand for a single product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemandSlice {
    pub name: String,
    pub value: u32,
}

/// Pipeline status slice with its display color
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusSlice {
    pub name: String,
    pub value: u32,
    /// Hex color the dashboard uses for this slice
    pub color: String,
}

/// Conversion funnel stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunnelStage {
    pub stage: String,
    pub count: u32,
}

/// Lead count for a single sector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectorCount {
    pub name: String,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_full() {
        let v = Verification::full();
        assert!(v.is_complete());
        assert!(!Verification::default().is_complete());
    }

    #[test]
    fn test_lead_wire_format_is_camel_case() {
        let lead = Lead {
            id: 1,
            company: "ABC Power Solutions Pvt. Ltd.".to_string(),
            industry: "Power".to_string(),
            confidence: 92.0,
            signal: "EC Filing".to_string(),
            products: vec!["Furnace Oil".to_string()],
            product_fit: "Furnace Oil (~40 KL/month)".to_string(),
            depot: "Panipat Depot".to_string(),
            depot_distance: "12 km".to_string(),
            verified: Verification::full(),
            gstin: "27AABCU9603R1ZM".to_string(),
            ai_score: None,
        };

        let json = serde_json::to_value(&lead).unwrap();
        assert!(json.get("productFit").is_some());
        assert!(json.get("depotDistance").is_some());
        // Unset model score stays off the wire
        assert!(json.get("aiScore").is_none());
    }

    #[test]
    fn test_kpi_wire_format() {
        let kpis = KpiSet {
            warm_entities_this_week: 47,
            high_confidence_leads: 12,
            conversion_rate: 31.2,
            avg_confidence: 87.0,
        };

        let json = serde_json::to_value(kpis).unwrap();
        assert_eq!(json["warmEntitiesThisWeek"], 47);
        assert_eq!(json["conversionRate"], 31.2);
    }

    #[test]
    fn test_dossier_roundtrip() {
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
        assert_eq!(dossier.id, 5);
        assert_eq!(dossier.products.len(), 1);
        assert_eq!(dossier.ai_score, None);
    }
}
