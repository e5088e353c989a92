//! Risk assessment — deduction scoring plus the narrative analysis
//! derived from the same snapshot.
//!
//! `engine` holds the fixed rule table (the scoring contract);
//! `insights` adds lifestyle factors, BMI, and condition predictions;
//! `report` renders everything as plain text.

pub mod engine;
pub mod insights;
pub mod report;

use serde::Serialize;

use crate::models::{LifestyleSnapshot, ScoreBreakdown};

pub use engine::{assess, DeductionRule, DEDUCTION_RULES, DEFAULT_AFFIRMATION};
pub use insights::{
    bmi, focus_items, lifestyle_factors, risk_predictions, BmiReading, FocusItem,
    LifestyleFactor, RiskPrediction,
};
pub use report::{render_report, report_filename};

/// Full analysis bundle: the score plus every derived insight section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthAnalysis {
    pub breakdown: ScoreBreakdown,
    pub factors: Vec<LifestyleFactor>,
    pub bmi: Option<BmiReading>,
    pub predictions: Vec<RiskPrediction>,
    pub focus: Vec<FocusItem>,
}

/// Run the deduction engine and every insight pass over one snapshot.
pub fn analyze(snapshot: &LifestyleSnapshot) -> HealthAnalysis {
    let breakdown = assess(snapshot);
    let factors = lifestyle_factors(snapshot);
    let bmi = bmi(snapshot);
    let predictions = risk_predictions(snapshot);
    let focus = focus_items(snapshot);

    tracing::info!(
        score = breakdown.score,
        level = breakdown.level.as_str(),
        factors = factors.len(),
        focus = focus.len(),
        "Health analysis complete"
    );

    HealthAnalysis {
        breakdown,
        factors,
        bmi,
        predictions,
        focus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PredictedRisk, RiskLevel};

    #[test]
    fn analyze_bundles_every_section() {
        let snap = LifestyleSnapshot {
            sleep_hours: 5.0,
            smoking: true,
            stress_level: 9,
            ..Default::default()
        };
        let analysis = analyze(&snap);

        assert_eq!(analysis.breakdown.level, RiskLevel::High);
        assert!(!analysis.factors.is_empty());
        assert!(analysis.bmi.is_some());
        assert_eq!(analysis.predictions[0].risk, PredictedRisk::High);
        assert!(!analysis.focus.is_empty());
    }

    #[test]
    fn analyze_is_deterministic() {
        let snap = LifestyleSnapshot::default();
        assert_eq!(analyze(&snap), analyze(&snap));
    }
}
