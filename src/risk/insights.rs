//! Narrative analysis layered over the score: lifestyle factors, BMI,
//! condition risk predictions, and personalized focus items.

use serde::{Deserialize, Serialize};

use crate::models::{BmiStatus, FactorSignal, LifestyleSnapshot, PlanPriority, PredictedRisk};

/// A flagged lifestyle observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleFactor {
    pub signal: FactorSignal,
    pub text: String,
}

/// BMI value with its band and note. Value is rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    pub value: f64,
    pub status: BmiStatus,
    pub note: String,
}

/// Predicted risk for a named condition with a fixed confidence figure.
/// Serialize-only: the confidence strings live in the rule table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskPrediction {
    pub condition: String,
    pub risk: PredictedRisk,
    pub confidence: &'static str,
}

/// A prioritized focus item for the personalized plan section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusItem {
    pub priority: PlanPriority,
    pub action: String,
}

/// Flag lifestyle concerns in fixed check order.
pub fn lifestyle_factors(snapshot: &LifestyleSnapshot) -> Vec<LifestyleFactor> {
    let mut factors = Vec::new();

    if snapshot.sleep_hours < 7.0 {
        factors.push(LifestyleFactor {
            signal: FactorSignal::Warning,
            text: "Insufficient sleep may impact immune function and metabolism".into(),
        });
    }
    if snapshot.exercise_frequency < 3 {
        factors.push(LifestyleFactor {
            signal: FactorSignal::Alert,
            text: "Low exercise frequency increases cardiovascular risk".into(),
        });
    }
    if snapshot.stress_level > 7 {
        factors.push(LifestyleFactor {
            signal: FactorSignal::Alert,
            text: "High stress levels can contribute to various health issues".into(),
        });
    }
    if snapshot.water_intake < 2.0 {
        factors.push(LifestyleFactor {
            signal: FactorSignal::Warning,
            text: "Dehydration can affect cognitive function and energy levels".into(),
        });
    }
    if snapshot.smoking {
        factors.push(LifestyleFactor {
            signal: FactorSignal::Critical,
            text: "Smoking significantly increases risk of multiple diseases".into(),
        });
    }

    factors
}

/// Compute BMI and classify it. Returns `None` when height or weight is
/// non-positive (division would be meaningless).
pub fn bmi(snapshot: &LifestyleSnapshot) -> Option<BmiReading> {
    if snapshot.height <= 0.0 || snapshot.weight <= 0.0 {
        return None;
    }

    let meters = snapshot.height / 100.0;
    let raw = snapshot.weight / (meters * meters);
    let value = (raw * 10.0).round() / 10.0;

    let (status, note) = if raw < 18.5 {
        (BmiStatus::Underweight, "Consider nutritional consultation")
    } else if raw > 25.0 {
        (BmiStatus::Overweight, "Weight management may improve overall health")
    } else {
        (BmiStatus::Normal, "Healthy weight range")
    };

    Some(BmiReading {
        value,
        status,
        note: note.into(),
    })
}

/// Condition risk predictions: cardiovascular and type 2 diabetes.
pub fn risk_predictions(snapshot: &LifestyleSnapshot) -> Vec<RiskPrediction> {
    let mut predictions = Vec::new();

    let mut cardio = PredictedRisk::Low;
    if snapshot.smoking || snapshot.stress_level > 8 || snapshot.exercise_frequency < 2 {
        cardio = PredictedRisk::Moderate;
    }
    if snapshot.smoking && snapshot.stress_level > 8 {
        cardio = PredictedRisk::High;
    }
    predictions.push(RiskPrediction {
        condition: "Cardiovascular Disease".into(),
        risk: cardio,
        confidence: "85%",
    });

    let diabetes = if snapshot.junk_food_level > 3 || snapshot.exercise_frequency < 2 {
        PredictedRisk::Moderate
    } else {
        PredictedRisk::Low
    };
    predictions.push(RiskPrediction {
        condition: "Type 2 Diabetes".into(),
        risk: diabetes,
        confidence: "78%",
    });

    predictions
}

/// Prioritized focus items for the personalized plan section.
pub fn focus_items(snapshot: &LifestyleSnapshot) -> Vec<FocusItem> {
    let mut items = Vec::new();

    if snapshot.sleep_hours < 7.0 {
        items.push(FocusItem {
            priority: PlanPriority::High,
            action: "Improve sleep hygiene - aim for 7-9 hours nightly".into(),
        });
    }
    if snapshot.exercise_frequency < 3 {
        items.push(FocusItem {
            priority: PlanPriority::High,
            action: "Increase physical activity to 150 minutes per week".into(),
        });
    }
    if snapshot.water_intake < 2.5 {
        items.push(FocusItem {
            priority: PlanPriority::Medium,
            action: "Increase daily water intake to 2.5-3 liters".into(),
        });
    }
    if snapshot.stress_level > 7 {
        items.push(FocusItem {
            priority: PlanPriority::High,
            action: "Practice stress management techniques (meditation, yoga)".into(),
        });
    }

    items
}
