//! Action plan — a second threshold table over the same snapshot, plus
//! the static weekly focus schedule.
//!
//! Thresholds here deliberately differ from the deduction rules (sleep
//! cuts off at 7 h instead of 6, exercise at 4 days instead of 2). The
//! two tables are kept separate; a profile can score clean yet still
//! receive plan items.

use serde::{Deserialize, Serialize};

use crate::models::{LifestyleSnapshot, PlanCategory, PlanPriority};

/// One recommendation. Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlanItem {
    pub category: PlanCategory,
    pub priority: PlanPriority,
    pub action: String,
    pub details: String,
}

struct PlanRule {
    applies: fn(&LifestyleSnapshot) -> bool,
    category: PlanCategory,
    priority: PlanPriority,
    action: &'static str,
    details: &'static str,
}

const PLAN_RULES: &[PlanRule] = &[
    PlanRule {
        applies: |s| s.sleep_hours < 7.0,
        category: PlanCategory::Sleep,
        priority: PlanPriority::High,
        action: "Establish a consistent bedtime routine",
        details: "Aim for 7-9 hours of sleep. Go to bed and wake up at the same time daily.",
    },
    PlanRule {
        applies: |s| s.water_intake < 2.5,
        category: PlanCategory::Hydration,
        priority: PlanPriority::Medium,
        action: "Increase daily water intake",
        details: "Drink a glass of water upon waking and before each meal.",
    },
    PlanRule {
        applies: |s| s.exercise_frequency < 4,
        category: PlanCategory::Exercise,
        priority: PlanPriority::High,
        action: "Increase physical activity",
        details: "Start with 30 minutes of walking daily, then add strength training.",
    },
    PlanRule {
        applies: |s| s.stress_level > 6,
        category: PlanCategory::Stress,
        priority: PlanPriority::High,
        action: "Practice stress reduction techniques",
        details: "Try 10 minutes of meditation or deep breathing exercises daily.",
    },
    PlanRule {
        applies: |s| s.junk_food_level > 2,
        category: PlanCategory::Nutrition,
        priority: PlanPriority::Medium,
        action: "Improve dietary choices",
        details: "Replace processed snacks with fruits, nuts, and vegetables.",
    },
    PlanRule {
        applies: |s| s.smoking,
        category: PlanCategory::Smoking,
        priority: PlanPriority::Critical,
        action: "Quit smoking program",
        details: "Consult a healthcare provider for smoking cessation resources.",
    },
];

/// Generate plan items in table order. An empty result means no action
/// is needed.
pub fn generate_action_plan(snapshot: &LifestyleSnapshot) -> Vec<ActionPlanItem> {
    PLAN_RULES
        .iter()
        .filter(|rule| (rule.applies)(snapshot))
        .map(|rule| ActionPlanItem {
            category: rule.category,
            priority: rule.priority,
            action: rule.action.into(),
            details: rule.details.into(),
        })
        .collect()
}

/// One day of the weekly focus schedule. Serialize-only, all text is
/// static.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyFocus {
    pub day: &'static str,
    pub focus: &'static str,
    pub activities: [&'static str; 3],
}

/// The static seven-day schedule shown alongside the plan.
pub fn weekly_schedule() -> Vec<WeeklyFocus> {
    vec![
        WeeklyFocus {
            day: "Monday",
            focus: "Movement Monday",
            activities: ["30 min morning walk", "8 glasses of water", "Bedtime by 10 PM"],
        },
        WeeklyFocus {
            day: "Tuesday",
            focus: "Nutrition Tuesday",
            activities: ["Healthy breakfast", "Meal prep", "Stress check-in"],
        },
        WeeklyFocus {
            day: "Wednesday",
            focus: "Wellness Wednesday",
            activities: ["Meditation session", "Strength training", "Sleep hygiene"],
        },
        WeeklyFocus {
            day: "Thursday",
            focus: "Thriving Thursday",
            activities: ["Active recovery", "Hydration focus", "Social connection"],
        },
        WeeklyFocus {
            day: "Friday",
            focus: "Fitness Friday",
            activities: ["Cardio workout", "Healthy meal", "Weekend planning"],
        },
        WeeklyFocus {
            day: "Saturday",
            focus: "Self-care Saturday",
            activities: ["Outdoor activity", "Meal preparation", "Relaxation"],
        },
        WeeklyFocus {
            day: "Sunday",
            focus: "Reset Sunday",
            activities: ["Week review", "Goal setting", "Rest and recovery"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clears every plan threshold.
    fn covered_snapshot() -> LifestyleSnapshot {
        LifestyleSnapshot {
            sleep_hours: 7.0,
            water_intake: 2.5,
            exercise_frequency: 4,
            stress_level: 6,
            junk_food_level: 2,
            smoking: false,
            ..Default::default()
        }
    }

    #[test]
    fn covered_snapshot_yields_empty_plan() {
        assert!(generate_action_plan(&covered_snapshot()).is_empty());
    }

    #[test]
    fn each_rule_emits_one_item() {
        let snap = LifestyleSnapshot {
            sleep_hours: 6.0,
            water_intake: 2.0,
            exercise_frequency: 3,
            stress_level: 7,
            junk_food_level: 3,
            smoking: true,
            ..Default::default()
        };
        let plan = generate_action_plan(&snap);
        assert_eq!(plan.len(), 6);
    }

    #[test]
    fn items_follow_table_order() {
        let snap = LifestyleSnapshot {
            sleep_hours: 6.0,
            smoking: true,
            ..covered_snapshot()
        };
        let plan = generate_action_plan(&snap);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].category, PlanCategory::Sleep);
        assert_eq!(plan[1].category, PlanCategory::Smoking);
        assert_eq!(plan[1].priority, PlanPriority::Critical);
    }

    #[test]
    fn plan_thresholds_diverge_from_deduction_rules() {
        // Sleeps 6.5 h: deducts nothing (cutoff 6) but still gets a
        // Sleep plan item (cutoff 7).
        let snap = LifestyleSnapshot {
            sleep_hours: 6.5,
            regular_checkups: Some(true),
            ..covered_snapshot()
        };
        assert_eq!(crate::risk::assess(&snap).score, 100);

        let plan = generate_action_plan(&snap);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].category, PlanCategory::Sleep);
        assert_eq!(plan[0].action, "Establish a consistent bedtime routine");
    }

    #[test]
    fn smoking_item_copy_text() {
        let snap = LifestyleSnapshot {
            smoking: true,
            ..covered_snapshot()
        };
        let plan = generate_action_plan(&snap);
        assert_eq!(plan[0].action, "Quit smoking program");
        assert_eq!(
            plan[0].details,
            "Consult a healthcare provider for smoking cessation resources."
        );
    }

    #[test]
    fn schedule_covers_the_week() {
        let schedule = weekly_schedule();
        assert_eq!(schedule.len(), 7);
        assert_eq!(schedule[0].day, "Monday");
        assert_eq!(schedule[0].focus, "Movement Monday");
        assert_eq!(schedule[6].focus, "Reset Sunday");
        for day in &schedule {
            assert_eq!(day.activities.len(), 3);
        }
    }
}
