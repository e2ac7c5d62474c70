//! Seed datasets for the lead catalog
//!
//! The demo deployment ships with a curated queue of six certified leads
//! plus the aggregate series the dashboard charts. Confidence values here
//! are the analyst-assigned scores; the API blends them with the model
//! score at serve time.

use super::types::{
    DemandSlice, FunnelStage, KpiSet, Lead, LeadDossier, ProductRecommendation, SectorCount,
    StatusSlice, TrendPoint, Verification,
};

pub(super) fn kpis() -> KpiSet {
    KpiSet {
        warm_entities_this_week: 47,
        high_confidence_leads: 12,
        conversion_rate: 31.2,
        avg_confidence: 87.0,
    }
}

pub(super) fn leads_over_time() -> Vec<TrendPoint> {
    [
        ("Week 1", 120, 38),
        ("Week 2", 135, 42),
        ("Week 3", 98, 35),
        ("Week 4", 156, 51),
        ("Week 5", 142, 47),
    ]
    .into_iter()
    .map(|(date, detected, certified)| TrendPoint {
        date: date.to_string(),
        detected,
        certified,
    })
    .collect()
}

pub(super) fn product_demand() -> Vec<DemandSlice> {
    [
        ("HSD", 28),
        ("FO", 22),
        ("Bitumen", 18),
        ("Hexane", 15),
        ("LPG", 12),
        ("Others", 5),
    ]
    .into_iter()
    .map(|(name, value)| DemandSlice {
        name: name.to_string(),
        value,
    })
    .collect()
}

pub(super) fn lead_status() -> Vec<StatusSlice> {
    [
        ("Detected", 85, "#64748b"),
        ("Verified", 52, "#3b82f6"),
        ("Contacted", 28, "#eab308"),
        ("Converted", 17, "#22c55e"),
    ]
    .into_iter()
    .map(|(name, value, color)| StatusSlice {
        name: name.to_string(),
        value,
        color: color.to_string(),
    })
    .collect()
}

pub(super) fn funnel() -> Vec<FunnelStage> {
    [
        ("Detected", 120),
        ("Verified", 85),
        ("Contacted", 52),
        ("Converted", 28),
    ]
    .into_iter()
    .map(|(stage, count)| FunnelStage {
        stage: stage.to_string(),
        count,
    })
    .collect()
}

pub(super) fn sectors() -> Vec<SectorCount> {
    [
        ("Petrochemicals", 32),
        ("Power", 28),
        ("Transport", 24),
        ("Shipping", 18),
        ("Infrastructure", 15),
    ]
    .into_iter()
    .map(|(name, count)| SectorCount {
        name: name.to_string(),
        count,
    })
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn lead(
    id: u32,
    company: &str,
    industry: &str,
    confidence: f64,
    signal: &str,
    products: &[&str],
    product_fit: &str,
    depot: &str,
    depot_distance: &str,
    gstin: &str,
) -> Lead {
    Lead {
        id,
        company: company.to_string(),
        industry: industry.to_string(),
        confidence,
        signal: signal.to_string(),
        products: products.iter().map(|p| p.to_string()).collect(),
        product_fit: product_fit.to_string(),
        depot: depot.to_string(),
        depot_distance: depot_distance.to_string(),
        verified: Verification::full(),
        gstin: gstin.to_string(),
        ai_score: None,
    }
}

pub(super) fn leads() -> Vec<Lead> {
    vec![
        lead(
            1,
            "ABC Power Solutions Pvt. Ltd.",
            "Power",
            92.0,
            "EC Filing - 5 MW Captive Power (Jan 2026)",
            &["Furnace Oil (~40 KL/month)"],
            "Furnace Oil (~40 KL/month)",
            "Panipat Depot",
            "12 km",
            "27AABCU9603R1ZM",
        ),
        lead(
            2,
            "XYZ Construction & Infra Ltd.",
            "Infrastructure",
            88.0,
            "PCB Approval - Bitumen Plant Expansion",
            &["Bitumen", "HSD"],
            "Bitumen, HSD",
            "Delhi Depot",
            "8 km",
            "07AAACX1234K1Z5",
        ),
        lead(
            3,
            "Reliance Petrochemicals",
            "Petrochemicals",
            95.0,
            "EC Filing - Refinery Expansion Gujarat",
            &["HSD", "FO", "Hexane"],
            "HSD, FO, Hexane",
            "Vadodara Depot",
            "18 km",
            "24AABCR5055M1ZV",
        ),
        lead(
            4,
            "Adani Ports & SEZ Ltd.",
            "Shipping",
            89.0,
            "Marine Fuel Tender - Mundra Port",
            &["HSD", "FO"],
            "HSD, FO",
            "Mundra Depot",
            "5 km",
            "24AAACA2729K1Z8",
        ),
        lead(
            5,
            "NHAI - Project Division",
            "Infrastructure",
            84.0,
            "Annual Bitumen Procurement Tender",
            &["Bitumen"],
            "Bitumen",
            "Panipat Depot",
            "22 km",
            "09AAAGN0171N1ZE",
        ),
        lead(
            6,
            "Tata Steel Captive Power",
            "Power",
            78.0,
            "Boiler Capacity Upgrade - EC Amendment",
            &["FO", "LPG"],
            "FO, LPG",
            "Jamshedpur Depot",
            "15 km",
            "20AABCT3518Q1ZV",
        ),
    ]
}

fn product(name: &str, confidence: f64, reason: &str) -> ProductRecommendation {
    ProductRecommendation {
        name: name.to_string(),
        confidence,
        reason: reason.to_string(),
    }
}

pub(super) fn dossiers() -> Vec<LeadDossier> {
    let queue = leads();

    let detail = |id: u32,
                  location: &str,
                  procurement_hint: &str,
                  why_lead: &str,
                  products: Vec<ProductRecommendation>| {
        let summary = queue
            .iter()
            .find(|l| l.id == id)
            .expect("dossier id must match a seeded lead");
        LeadDossier {
            id,
            company: summary.company.clone(),
            industry: summary.industry.clone(),
            gstin: summary.gstin.clone(),
            location: location.to_string(),
            signal: summary.signal.clone(),
            confidence: summary.confidence,
            product_fit: summary.product_fit.clone(),
            depot: summary.depot.clone(),
            depot_distance: summary.depot_distance.clone(),
            procurement_hint: procurement_hint.to_string(),
            why_lead: why_lead.to_string(),
            products,
            ai_score: None,
        }
    };

    vec![
        detail(
            1,
            "Sonipat, Haryana",
            "Tender expected in ~15 days",
            "EC filing confirms 10 TPH Husk-Fired Boiler commissioning Q1 2026. \
             Power capacity 5 MW. Legal entity verified via GSTIN with 18+ months \
             active filing. Depot feasibility confirmed within service radius.",
            vec![
                product(
                    "Furnace Oil",
                    95.0,
                    "Boiler specification, 40 KL/month estimated",
                ),
                product("HSD", 72.0, "Backup generator capacity"),
            ],
        ),
        detail(
            2,
            "Noida, Uttar Pradesh",
            "Project kickoff in 30 days",
            "State PCB approval for bitumen mixing plant expansion. Company has \
             verified GSTIN, active filings. Depot delivery feasible.",
            vec![
                product("Bitumen", 92.0, "Plant expansion scope"),
                product("HSD", 65.0, "Site equipment fuel"),
            ],
        ),
        detail(
            3,
            "Vadodara, Gujarat",
            "Ongoing procurement cycle",
            "Recent tender for 50,000 MT HSD. Active expansion in Gujarat \
             refinery. Legal entity verified.",
            vec![
                product("HSD", 95.0, "Tender published, high volume"),
                product("FO", 82.0, "Refinery operations"),
                product("Hexane", 78.0, "Solvent extraction unit"),
            ],
        ),
        detail(
            4,
            "Mundra, Gujarat",
            "Tender closing in 10 days",
            "Marine fuel bunkering tender for port operations. Legal entity \
             verified. Depot co-located with port.",
            vec![
                product("HSD", 88.0, "Marine fuel specifications"),
                product("FO", 85.0, "Bunker fuel demand"),
            ],
        ),
        detail(
            5,
            "Panipat, Haryana",
            "FY26 tender cycle",
            "Annual bitumen procurement for highway projects. Government entity, \
             verified.",
            vec![product("Bitumen", 94.0, "Tender scope")],
        ),
        detail(
            6,
            "Jamshedpur, Jharkhand",
            "Upgrade completion Q2 2026",
            "EC amendment for boiler capacity increase. Tata Group entity, \
             strong credit profile.",
            vec![
                product("FO", 82.0, "Boiler fuel"),
                product("LPG", 68.0, "Ancillary operations"),
            ],
        ),
    ]
}
