use crate::db::StoreError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(RiskLevel {
    Low => "low",
    Medium => "medium",
    High => "high",
});

impl RiskLevel {
    /// Tier cutoffs are inclusive at the lower bound of each band.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Low
        } else if score >= 60 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

str_enum!(PlanPriority {
    Critical => "critical",
    High => "high",
    Medium => "medium",
    Low => "low",
});

impl PlanPriority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

str_enum!(PlanCategory {
    Sleep => "sleep",
    Hydration => "hydration",
    Exercise => "exercise",
    Stress => "stress",
    Nutrition => "nutrition",
    Smoking => "smoking",
});

impl PlanCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sleep => "Sleep",
            Self::Hydration => "Hydration",
            Self::Exercise => "Exercise",
            Self::Stress => "Stress",
            Self::Nutrition => "Nutrition",
            Self::Smoking => "Smoking",
        }
    }
}

str_enum!(ScanType {
    Manual => "manual",
    Barcode => "barcode",
    Plate => "plate",
});

str_enum!(MealType {
    Breakfast => "breakfast",
    Lunch => "lunch",
    Dinner => "dinner",
    Snacks => "snacks",
});

str_enum!(GoalType {
    Lose => "lose",
    Gain => "gain",
    Maintain => "maintain",
});

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

str_enum!(SubscriptionPlan {
    Free => "free",
    Premium => "premium",
});

str_enum!(ReportType {
    BloodTest => "blood_test",
    PhysicalExam => "physical_exam",
    General => "general",
});

impl ReportType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BloodTest => "Blood Test",
            Self::PhysicalExam => "Physical Exam",
            Self::General => "General",
        }
    }
}

str_enum!(FactorSignal {
    Warning => "warning",
    Alert => "alert",
    Critical => "critical",
});

str_enum!(PredictedRisk {
    Low => "low",
    Moderate => "moderate",
    High => "high",
});

impl PredictedRisk {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

str_enum!(BmiStatus {
    Underweight => "underweight",
    Normal => "normal",
    Overweight => "overweight",
});

str_enum!(MetricStatus {
    Excellent => "excellent",
    Good => "good",
    NeedsImprovement => "needs_improvement",
});

str_enum!(ChatRole {
    User => "user",
    Assistant => "assistant",
});
