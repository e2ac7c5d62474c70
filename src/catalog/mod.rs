//! Lead Catalog
//!
//! In-memory store of the datasets the dashboard renders: the warm-entity
//! queue, per-lead dossiers, and the aggregate analytics series. The catalog
//! is seeded at startup and read-only afterwards, so handlers share it behind
//! an `Arc` without locking.

mod seed;
mod types;

pub use types::{
    DemandSlice, FunnelStage, KpiSet, Lead, LeadDossier, ProductRecommendation, SectorCount,
    StatusSlice, TrendPoint, Verification,
};

use std::collections::BTreeMap;

/// Read-only store of leads and analytics datasets
#[derive(Debug, Clone)]
pub struct LeadCatalog {
    leads: Vec<Lead>,
    dossiers: BTreeMap<u32, LeadDossier>,
    kpis: KpiSet,
    trend: Vec<TrendPoint>,
    demand: Vec<DemandSlice>,
    status: Vec<StatusSlice>,
    funnel: Vec<FunnelStage>,
    sectors: Vec<SectorCount>,
}

impl LeadCatalog {
    /// Build the catalog from the seed datasets
    pub fn seeded() -> Self {
        Self {
            leads: seed::leads(),
            dossiers: seed::dossiers().into_iter().map(|d| (d.id, d)).collect(),
            kpis: seed::kpis(),
            trend: seed::leads_over_time(),
            demand: seed::product_demand(),
            status: seed::lead_status(),
            funnel: seed::funnel(),
            sectors: seed::sectors(),
        }
    }

    /// All leads in the warm-entity queue
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Dossier for a single lead, if one exists
    pub fn dossier(&self, id: u32) -> Option<&LeadDossier> {
        self.dossiers.get(&id)
    }

    /// Number of leads in the queue
    pub fn lead_count(&self) -> usize {
        self.leads.len()
    }

    /// Dashboard KPI set
    pub fn kpis(&self) -> &KpiSet {
        &self.kpis
    }

    /// Detected-vs-certified trend series
    pub fn leads_over_time(&self) -> &[TrendPoint] {
        &self.trend
    }

    /// Product demand distribution
    pub fn product_demand(&self) -> &[DemandSlice] {
        &self.demand
    }

    /// Pipeline status distribution
    pub fn lead_status(&self) -> &[StatusSlice] {
        &self.status
    }

    /// Conversion funnel stages
    pub fn funnel(&self) -> &[FunnelStage] {
        &self.funnel
    }

    /// Lead counts by sector
    pub fn sectors(&self) -> &[SectorCount] {
        &self.sectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_is_populated() {
        let catalog = LeadCatalog::seeded();

        assert!(!catalog.leads().is_empty());
        assert!(!catalog.leads_over_time().is_empty());
        assert!(!catalog.product_demand().is_empty());
        assert!(!catalog.lead_status().is_empty());
        assert!(!catalog.funnel().is_empty());
        assert!(!catalog.sectors().is_empty());
    }

    #[test]
    fn test_every_lead_has_a_dossier() {
        let catalog = LeadCatalog::seeded();

        for lead in catalog.leads() {
            let dossier = catalog.dossier(lead.id);
            assert!(dossier.is_some(), "lead {} has no dossier", lead.id);
            assert_eq!(dossier.unwrap().company, lead.company);
        }
    }

    #[test]
    fn test_lead_ids_are_unique() {
        let catalog = LeadCatalog::seeded();

        let mut ids: Vec<u32> = catalog.leads().iter().map(|l| l.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.lead_count());
    }

    #[test]
    fn test_seed_confidence_in_range() {
        let catalog = LeadCatalog::seeded();

        for lead in catalog.leads() {
            assert!((0.0..=100.0).contains(&lead.confidence));
        }
        for lead in catalog.leads() {
            let dossier = catalog.dossier(lead.id).unwrap();
            assert!((0.0..=100.0).contains(&dossier.confidence));
            for product in &dossier.products {
                assert!((0.0..=100.0).contains(&product.confidence));
            }
        }
    }

    #[test]
    fn test_unknown_dossier_is_none() {
        let catalog = LeadCatalog::seeded();
        assert!(catalog.dossier(9999).is_none());
    }

    #[test]
    fn test_funnel_stages_are_monotonic() {
        let catalog = LeadCatalog::seeded();

        let counts: Vec<u32> = catalog.funnel().iter().map(|s| s.count).collect();
        for window in counts.windows(2) {
            assert!(window[0] >= window[1], "funnel stages must narrow");
        }
    }
}
