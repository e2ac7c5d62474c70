//! Confidence model
//!
//! Distilled form of the trained lead scorer: a weighted combination of the
//! text features, scaled from the raw model range down to a 0-100
//! confidence. Served scores blend the model output with the
//! analyst-assigned confidence so curated leads keep their ranking while
//! still reflecting the model.

use crate::catalog::{Lead, LeadDossier};
use crate::scoring::features::TextFeatures;

/// Raw model output range; scores are clipped here before scaling to 0-100
const RAW_SCALE: f64 = 10_000.0;

/// Share of the blended confidence taken from the model
pub const DEFAULT_MODEL_WEIGHT: f64 = 0.7;

/// Feature weights of the distilled scorer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelWeights {
    pub length: f64,
    pub char_sum: f64,
    pub digits: f64,
    pub letters: f64,
    pub bias: f64,
}

impl Default for ModelWeights {
    fn default() -> Self {
        Self {
            length: 18.0,
            char_sum: 1.15,
            digits: 45.0,
            letters: 12.0,
            bias: 650.0,
        }
    }
}

/// Lead confidence scorer
#[derive(Debug, Clone)]
pub struct ConfidenceModel {
    weights: ModelWeights,
    model_weight: f64,
}

impl Default for ConfidenceModel {
    fn default() -> Self {
        Self::new(ModelWeights::default(), DEFAULT_MODEL_WEIGHT)
    }
}

impl ConfidenceModel {
    /// Create a model with explicit weights and blend share
    ///
    /// `model_weight` is clamped to [0, 1]; the analyst score receives the
    /// remainder.
    pub fn new(weights: ModelWeights, model_weight: f64) -> Self {
        Self {
            weights,
            model_weight: model_weight.clamp(0.0, 1.0),
        }
    }

    /// Blend share currently in effect
    pub fn model_weight(&self) -> f64 {
        self.model_weight
    }

    /// Predict a confidence score (0-100) for a company and its signal text
    pub fn predict(&self, company: &str, signal: &str) -> f64 {
        let f = TextFeatures::from_lead_text(company, signal);

        let raw = self.weights.length * f.length as f64
            + self.weights.char_sum * f.char_sum as f64
            + self.weights.digits * f.digits as f64
            + self.weights.letters * f.letters as f64
            + self.weights.bias;

        let clipped = raw.clamp(0.0, RAW_SCALE);
        round_tenth(clipped / RAW_SCALE * 100.0)
    }

    /// Blend a model score with an analyst-assigned confidence
    pub fn blend(&self, model_score: f64, analyst_confidence: f64) -> f64 {
        let blended = self.model_weight * model_score
            + (1.0 - self.model_weight) * analyst_confidence;
        round_tenth(blended.clamp(0.0, 100.0))
    }

    /// Enrich a queue lead with the model score
    ///
    /// Sets `ai_score` to the raw prediction and replaces `confidence` with
    /// the blend.
    pub fn enrich_lead(&self, lead: &mut Lead) {
        let ai = self.predict(&lead.company, &lead.signal);
        lead.confidence = self.blend(ai, lead.confidence);
        lead.ai_score = Some(ai);
    }

    /// Enrich a dossier with the model score
    pub fn enrich_dossier(&self, dossier: &mut LeadDossier) {
        let ai = self.predict(&dossier.company, &dossier.signal);
        dossier.confidence = self.blend(ai, dossier.confidence);
        dossier.ai_score = Some(ai);
    }
}

/// Round to one decimal place, matching the served score precision
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LeadCatalog;

    #[test]
    fn predictions_stay_in_range() {
        let model = ConfidenceModel::default();

        let cases = [
            ("", ""),
            ("A", ""),
            ("Acme Fuels", ""),
            ("ABC Power Solutions Pvt. Ltd.", "EC Filing - 5 MW Captive Power"),
            ("प्रमाणित लीड प्राइवेट लिमिटेड", "tender"),
        ];
        for (company, signal) in cases {
            let score = model.predict(company, signal);
            assert!(
                (0.0..=100.0).contains(&score),
                "score {} out of range for {:?}",
                score,
                company
            );
        }

        // Very long text saturates at the top of the range
        let long = "z".repeat(20_000);
        assert_eq!(model.predict(&long, ""), 100.0);
    }

    #[test]
    fn prediction_is_deterministic() {
        let model = ConfidenceModel::default();
        let a = model.predict("Reliance Petrochemicals", "EC Filing - Refinery Expansion");
        let b = model.predict("Reliance Petrochemicals", "EC Filing - Refinery Expansion");
        assert_eq!(a, b);
    }

    #[test]
    fn richer_signal_text_raises_the_score() {
        let model = ConfidenceModel::default();
        let bare = model.predict("Acme Fuels", "");
        let detailed = model.predict("Acme Fuels", "Annual Bitumen Procurement Tender FY26");
        assert!(detailed > bare);
    }

    #[test]
    fn blend_weights_sum_to_one() {
        let model = ConfidenceModel::new(ModelWeights::default(), 0.7);
        assert_eq!(model.blend(100.0, 0.0), 70.0);
        assert_eq!(model.blend(0.0, 100.0), 30.0);
        assert_eq!(model.blend(80.0, 80.0), 80.0);
    }

    #[test]
    fn blend_share_is_clamped() {
        let all_model = ConfidenceModel::new(ModelWeights::default(), 7.0);
        assert_eq!(all_model.model_weight(), 1.0);
        assert_eq!(all_model.blend(42.0, 99.0), 42.0);

        let all_analyst = ConfidenceModel::new(ModelWeights::default(), -1.0);
        assert_eq!(all_analyst.model_weight(), 0.0);
        assert_eq!(all_analyst.blend(42.0, 99.0), 99.0);
    }

    #[test]
    fn blend_result_is_clamped_and_rounded() {
        let model = ConfidenceModel::default();
        assert!(model.blend(150.0, 120.0) <= 100.0);
        assert!(model.blend(-20.0, -5.0) >= 0.0);

        let blended = model.blend(33.33, 66.67);
        assert_eq!((blended * 10.0).round() / 10.0, blended);
    }

    #[test]
    fn enrichment_sets_ai_score_and_keeps_range() {
        let model = ConfidenceModel::default();
        let catalog = LeadCatalog::seeded();

        for seed in catalog.leads() {
            let mut lead = seed.clone();
            model.enrich_lead(&mut lead);
            assert!(lead.ai_score.is_some());
            assert!((0.0..=100.0).contains(&lead.confidence));
        }

        let mut dossier = catalog.dossier(1).unwrap().clone();
        model.enrich_dossier(&mut dossier);
        assert!(dossier.ai_score.is_some());
        assert!((0.0..=100.0).contains(&dossier.confidence));
    }
}
