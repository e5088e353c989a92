//! Calorie logging — daily aggregation, meal grouping, and weight-goal
//! arithmetic.
//!
//! Scan dates are opaque `YYYY-MM-DD` strings compared by exact
//! equality; only goal progress does real date math.

pub mod lookup;
pub mod reference;

use chrono::NaiveDate;

use crate::models::{FoodScan, GoalType, MealType, WeightGoal};

pub use lookup::{
    FoodAnalysis, FoodLookup, FoodQuery, LookupError, MatchedFood, NutritionFacts,
};
pub use reference::{FoodEntry, FoodReference, ReferenceError};

/// Base daily intake before goal adjustment, kcal.
const BASE_CALORIES: f64 = 2000.0;

/// Energy equivalent of one kilogram of body weight, kcal.
const CALORIES_PER_KG: f64 = 7700.0;

/// Sum of calories over scans whose `date` equals `date` exactly.
/// "2024-01-01" does not match "2024-1-1".
pub fn daily_calories(scans: &[FoodScan], date: &str) -> u32 {
    scans
        .iter()
        .filter(|scan| scan.date == date)
        .map(|scan| scan.calories)
        .sum()
}

/// Per-meal calorie sums for one day. A scan without a meal type lands
/// in no bucket but still counts toward [`daily_calories`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MealBreakdown {
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
    pub snacks: u32,
}

pub fn meal_breakdown(scans: &[FoodScan], date: &str) -> MealBreakdown {
    let mut totals = MealBreakdown::default();
    for scan in scans.iter().filter(|scan| scan.date == date) {
        match scan.meal_type {
            Some(MealType::Breakfast) => totals.breakfast += scan.calories,
            Some(MealType::Lunch) => totals.lunch += scan.calories,
            Some(MealType::Dinner) => totals.dinner += scan.calories,
            Some(MealType::Snacks) => totals.snacks += scan.calories,
            None => {}
        }
    }
    totals
}

/// Macro-nutrient sums for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacroTotals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

pub fn macro_totals(scans: &[FoodScan], date: &str) -> MacroTotals {
    let mut totals = MacroTotals::default();
    for scan in scans.iter().filter(|scan| scan.date == date) {
        totals.calories += scan.calories;
        totals.protein += scan.protein;
        totals.carbs += scan.carbs;
        totals.fat += scan.fat;
    }
    totals
}

// ── Weight goals ───────────────────────────────

/// Daily calorie target for moving from `current_weight` to
/// `target_weight` over `timeframe_days`: the 2000 kcal base adjusted
/// by the required daily weight change at 7700 kcal per kg. A zero
/// timeframe keeps the base; negative results clamp to zero.
pub fn daily_calorie_target(current_weight: f64, target_weight: f64, timeframe_days: u32) -> u32 {
    if timeframe_days == 0 {
        return BASE_CALORIES as u32;
    }
    let daily_change = (target_weight - current_weight) / timeframe_days as f64;
    let adjusted = BASE_CALORIES + daily_change * CALORIES_PER_KG;
    adjusted.round().max(0.0) as u32
}

/// Build a goal with its derived daily target. `created_at` is the
/// `YYYY-MM-DD` date the goal starts.
pub fn new_goal(
    goal_type: GoalType,
    current_weight: f64,
    target_weight: f64,
    timeframe_days: u32,
    created_at: &str,
) -> WeightGoal {
    WeightGoal {
        goal_type,
        current_weight,
        target_weight,
        timeframe_days,
        daily_calorie_target: daily_calorie_target(current_weight, target_weight, timeframe_days),
        created_at: created_at.into(),
    }
}

/// Effective daily target: the goal's stored target, or the 2000 kcal
/// base when no goal is set or the stored target is zero.
pub fn daily_target(goal: Option<&WeightGoal>) -> u32 {
    match goal {
        Some(goal) if goal.daily_calorie_target > 0 => goal.daily_calorie_target,
        _ => BASE_CALORIES as u32,
    }
}

/// Calories left for the day. Negative means over target.
pub fn remaining_calories(target: u32, consumed: u32) -> i32 {
    target as i32 - consumed as i32
}

/// Consumed share of the target as a percentage, capped at 100.
pub fn progress_percent(consumed: u32, target: u32) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (consumed as f64 / target as f64 * 100.0).min(100.0)
}

/// Position within a goal's timeframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub days_elapsed: u32,
    pub total_days: u32,
    pub percent_complete: f64,
}

/// Whole days into the goal window as of `today`, clamped to
/// `0..=timeframe_days`. Unparseable dates count as day zero; a zero
/// timeframe reads as complete.
pub fn goal_progress(goal: &WeightGoal, today: &str) -> GoalProgress {
    let elapsed = match (
        NaiveDate::parse_from_str(&goal.created_at, "%Y-%m-%d"),
        NaiveDate::parse_from_str(today, "%Y-%m-%d"),
    ) {
        (Ok(start), Ok(end)) => (end - start).num_days(),
        _ => 0,
    };
    let days_elapsed = elapsed.clamp(0, goal.timeframe_days as i64) as u32;
    let percent_complete = if goal.timeframe_days == 0 {
        100.0
    } else {
        days_elapsed as f64 / goal.timeframe_days as f64 * 100.0
    };

    GoalProgress {
        days_elapsed,
        total_days: goal.timeframe_days,
        percent_complete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(date: &str, calories: u32, meal: Option<MealType>) -> FoodScan {
        let mut scan = FoodScan::manual("test food", calories, date);
        scan.meal_type = meal;
        scan
    }

    #[test]
    fn daily_calories_sums_exact_date_matches() {
        let scans = vec![
            scan("2024-01-01", 300, None),
            scan("2024-01-01", 150, None),
            scan("2024-01-02", 500, None),
        ];
        assert_eq!(daily_calories(&scans, "2024-01-01"), 450);
        assert_eq!(daily_calories(&scans, "2024-01-02"), 500);
        assert_eq!(daily_calories(&scans, "2024-01-03"), 0);
    }

    #[test]
    fn daily_calories_does_not_normalize_date_formats() {
        let scans = vec![scan("2024-01-01", 300, None)];
        assert_eq!(daily_calories(&scans, "2024-1-1"), 0);
    }

    #[test]
    fn meal_breakdown_buckets_by_meal_type_only() {
        let scans = vec![
            scan("2024-06-01", 400, Some(MealType::Breakfast)),
            scan("2024-06-01", 600, Some(MealType::Lunch)),
            scan("2024-06-01", 200, Some(MealType::Snacks)),
            scan("2024-06-01", 120, None),
            scan("2024-06-02", 900, Some(MealType::Dinner)),
        ];
        let meals = meal_breakdown(&scans, "2024-06-01");

        assert_eq!(meals.breakfast, 400);
        assert_eq!(meals.lunch, 600);
        assert_eq!(meals.dinner, 0);
        assert_eq!(meals.snacks, 200);
        // The untyped scan is outside every bucket but inside the total.
        let bucketed = meals.breakfast + meals.lunch + meals.dinner + meals.snacks;
        assert_eq!(bucketed, 1200);
        assert_eq!(daily_calories(&scans, "2024-06-01"), 1320);
    }

    #[test]
    fn macro_totals_sum_for_one_date() {
        let mut a = scan("2024-06-01", 400, None);
        a.protein = 20;
        a.carbs = 50;
        a.fat = 10;
        let mut b = scan("2024-06-01", 300, None);
        b.protein = 15;
        b.carbs = 30;
        b.fat = 12;
        let other_day = scan("2024-06-02", 999, None);

        let totals = macro_totals(&[a, b, other_day], "2024-06-01");
        assert_eq!(totals.calories, 700);
        assert_eq!(totals.protein, 35);
        assert_eq!(totals.carbs, 80);
        assert_eq!(totals.fat, 22);
    }

    #[test]
    fn calorie_target_for_weight_loss() {
        // 5 kg down over 30 days: 2000 - (5/30)*7700 = 716.67 -> 717.
        assert_eq!(daily_calorie_target(70.0, 65.0, 30), 717);
    }

    #[test]
    fn calorie_target_for_weight_gain() {
        // 5 kg up over 30 days: 2000 + (5/30)*7700 = 3283.33 -> 3283.
        assert_eq!(daily_calorie_target(70.0, 75.0, 30), 3283);
    }

    #[test]
    fn calorie_target_for_maintenance_is_base() {
        assert_eq!(daily_calorie_target(70.0, 70.0, 60), 2000);
    }

    #[test]
    fn calorie_target_clamps_aggressive_loss_to_zero() {
        // 30 kg down in 10 days asks for a deficit far past the base.
        assert_eq!(daily_calorie_target(90.0, 60.0, 10), 0);
    }

    #[test]
    fn calorie_target_with_zero_timeframe_keeps_base() {
        assert_eq!(daily_calorie_target(70.0, 65.0, 0), 2000);
    }

    #[test]
    fn new_goal_derives_target() {
        let goal = new_goal(GoalType::Lose, 70.0, 65.0, 30, "2025-01-01");
        assert_eq!(goal.daily_calorie_target, 717);
        assert_eq!(goal.timeframe_days, 30);
        assert_eq!(goal.created_at, "2025-01-01");
    }

    #[test]
    fn daily_target_falls_back_to_base() {
        assert_eq!(daily_target(None), 2000);
        let mut goal = new_goal(GoalType::Maintain, 70.0, 70.0, 30, "2025-01-01");
        assert_eq!(daily_target(Some(&goal)), 2000);
        goal.daily_calorie_target = 1800;
        assert_eq!(daily_target(Some(&goal)), 1800);
        goal.daily_calorie_target = 0;
        assert_eq!(daily_target(Some(&goal)), 2000);
    }

    #[test]
    fn remaining_goes_negative_when_over_target() {
        assert_eq!(remaining_calories(2000, 1500), 500);
        assert_eq!(remaining_calories(2000, 2400), -400);
    }

    #[test]
    fn progress_percent_caps_at_one_hundred() {
        assert!((progress_percent(500, 2000) - 25.0).abs() < 1e-9);
        assert!((progress_percent(2500, 2000) - 100.0).abs() < 1e-9);
        assert_eq!(progress_percent(500, 0), 0.0);
    }

    #[test]
    fn goal_progress_counts_whole_days() {
        let goal = new_goal(GoalType::Lose, 70.0, 65.0, 30, "2025-03-01");
        let progress = goal_progress(&goal, "2025-03-11");
        assert_eq!(progress.days_elapsed, 10);
        assert_eq!(progress.total_days, 30);
        assert!((progress.percent_complete - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn goal_progress_caps_at_timeframe() {
        let goal = new_goal(GoalType::Lose, 70.0, 65.0, 30, "2025-03-01");
        let progress = goal_progress(&goal, "2025-06-01");
        assert_eq!(progress.days_elapsed, 30);
        assert!((progress.percent_complete - 100.0).abs() < 1e-9);
    }

    #[test]
    fn goal_progress_floors_at_day_zero() {
        let goal = new_goal(GoalType::Lose, 70.0, 65.0, 30, "2025-03-10");
        let before_start = goal_progress(&goal, "2025-03-05");
        assert_eq!(before_start.days_elapsed, 0);
        assert_eq!(before_start.percent_complete, 0.0);

        let bad_date = new_goal(GoalType::Lose, 70.0, 65.0, 30, "not a date");
        assert_eq!(goal_progress(&bad_date, "2025-03-05").days_elapsed, 0);
    }
}
