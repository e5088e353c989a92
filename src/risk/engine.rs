//! Deduction scoring — the fixed rule table and tier mapping.

use crate::models::{LifestyleSnapshot, RiskLevel, ScoreBreakdown};

/// Suggestion shown when no rule triggers.
pub const DEFAULT_AFFIRMATION: &str = "Great job! Keep maintaining your healthy lifestyle";

/// One deduction rule: a predicate over the snapshot, the points it
/// removes, and the suggestion it emits.
pub struct DeductionRule {
    pub penalty: u8,
    pub suggestion: &'static str,
    pub applies: fn(&LifestyleSnapshot) -> bool,
}

/// The rule table, evaluated top to bottom. Suggestion order in the
/// result follows this order, so reordering entries is an observable
/// behavior change.
///
/// Optional fields: `None` skips the rule entirely; an explicit value,
/// including zero, is checked against the threshold.
pub const DEDUCTION_RULES: &[DeductionRule] = &[
    DeductionRule {
        penalty: 20,
        suggestion: "Increase sleep to 7-9 hours for better recovery",
        applies: |s| s.sleep_hours < 6.0,
    },
    DeductionRule {
        penalty: 15,
        suggestion: "Increase water intake to at least 2 liters daily",
        applies: |s| s.water_intake < 1.5,
    },
    DeductionRule {
        penalty: 25,
        suggestion: "Increase exercise to at least 3 times per week",
        applies: |s| s.exercise_frequency < 2,
    },
    DeductionRule {
        penalty: 20,
        suggestion: "Practice stress management techniques",
        applies: |s| s.stress_level > 7,
    },
    DeductionRule {
        penalty: 30,
        suggestion: "Consider quitting smoking for major health benefits",
        applies: |s| s.smoking,
    },
    DeductionRule {
        penalty: 10,
        suggestion: "Improve sleep quality through better sleep hygiene",
        applies: |s| matches!(s.sleep_quality, Some(q) if q < 5),
    },
    DeductionRule {
        penalty: 15,
        suggestion: "Increase daily fruit and vegetable intake to at least 5 servings",
        applies: |s| matches!(s.fruits_veggies, Some(v) if v < 3),
    },
    DeductionRule {
        penalty: 10,
        suggestion: "Reduce screen time to improve eye health and sleep quality",
        applies: |s| matches!(s.screen_time, Some(t) if t > 8.0),
    },
    DeductionRule {
        penalty: 10,
        suggestion: "Schedule regular medical checkups for preventive care",
        applies: |s| s.regular_checkups == Some(false),
    },
];

/// Score a snapshot: start at 100, subtract each triggered rule's penalty,
/// floor at 0. Deductions are independent and additive.
pub fn assess(snapshot: &LifestyleSnapshot) -> ScoreBreakdown {
    let mut total_penalty: u16 = 0;
    let mut suggestions = Vec::new();

    for rule in DEDUCTION_RULES {
        if (rule.applies)(snapshot) {
            total_penalty += rule.penalty as u16;
            suggestions.push(rule.suggestion.to_string());
        }
    }

    let score = 100u16.saturating_sub(total_penalty) as u8;

    if suggestions.is_empty() {
        suggestions.push(DEFAULT_AFFIRMATION.to_string());
    }

    ScoreBreakdown {
        score,
        level: RiskLevel::from_score(score),
        suggestions,
    }
}
