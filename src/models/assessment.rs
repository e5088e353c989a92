use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::RiskLevel;

/// Pure output of the risk engine. Carries no identity so that two runs
/// over the same snapshot compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: u8,
    pub level: RiskLevel,
    pub suggestions: Vec<String>,
}

/// A recorded assessment: a breakdown stamped with identity and date.
/// Immutable once appended to the session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub id: Uuid,
    pub date: String, // YYYY-MM-DD
    pub score: u8,
    pub level: RiskLevel,
    pub suggestions: Vec<String>,
}

impl RiskAssessment {
    pub fn from_breakdown(breakdown: ScoreBreakdown, date: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            score: breakdown.score,
            level: breakdown.level,
            suggestions: breakdown.suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_breakdown_preserves_fields() {
        let breakdown = ScoreBreakdown {
            score: 70,
            level: RiskLevel::Medium,
            suggestions: vec!["Practice stress management techniques".into()],
        };
        let assessment = RiskAssessment::from_breakdown(breakdown.clone(), "2025-03-10".into());
        assert_eq!(assessment.score, 70);
        assert_eq!(assessment.level, RiskLevel::Medium);
        assert_eq!(assessment.suggestions, breakdown.suggestions);
        assert_eq!(assessment.date, "2025-03-10");
    }

    #[test]
    fn distinct_ids_per_record() {
        let breakdown = ScoreBreakdown {
            score: 100,
            level: RiskLevel::Low,
            suggestions: vec![],
        };
        let a = RiskAssessment::from_breakdown(breakdown.clone(), "2025-03-10".into());
        let b = RiskAssessment::from_breakdown(breakdown, "2025-03-10".into());
        assert_ne!(a.id, b.id);
    }
}
