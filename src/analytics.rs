//! History-derived analytics: score trend, lifestyle averages, status
//! banding, and the weekly calorie series.
//!
//! Everything here is pure over slices the session owns; the caller
//! supplies the anchor date for the weekly window.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{FoodScan, HealthRecord, MetricStatus, RiskAssessment};
use crate::nutrition::daily_calories;

// ---------------------------------------------------------------------------
// Trend and averages
// ---------------------------------------------------------------------------

/// Change between the two most recent assessment scores. Zero with
/// fewer than two entries.
pub fn score_trend(history: &[RiskAssessment]) -> i16 {
    match history {
        [.., previous, last] => last.score as i16 - previous.score as i16,
        _ => 0,
    }
}

/// Mean lifestyle metrics over the record history. All zeros when the
/// history is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryAverages {
    pub sleep_hours: f64,
    pub water_intake: f64,
    pub stress_level: f64,
    pub exercise_frequency: f64,
}

impl HistoryAverages {
    pub fn compute(records: &[HealthRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }
        let count = records.len() as f64;
        let mut totals = Self::default();
        for record in records {
            totals.sleep_hours += record.sleep_hours;
            totals.water_intake += record.water_intake;
            totals.stress_level += record.stress_level as f64;
            totals.exercise_frequency += record.exercise_frequency as f64;
        }
        Self {
            sleep_hours: totals.sleep_hours / count,
            water_intake: totals.water_intake / count,
            stress_level: totals.stress_level / count,
            exercise_frequency: totals.exercise_frequency / count,
        }
    }
}

// ---------------------------------------------------------------------------
// Status banding
// ---------------------------------------------------------------------------

/// Band a value against a (good, excellent) cutoff pair, inclusive at
/// both cutoffs.
pub fn metric_status(value: f64, good: f64, excellent: f64) -> MetricStatus {
    if value >= excellent {
        MetricStatus::Excellent
    } else if value >= good {
        MetricStatus::Good
    } else {
        MetricStatus::NeedsImprovement
    }
}

pub fn sleep_status(avg_hours: f64) -> MetricStatus {
    metric_status(avg_hours, 7.0, 8.0)
}

pub fn water_status(avg_liters: f64) -> MetricStatus {
    metric_status(avg_liters, 2.0, 2.5)
}

pub fn exercise_status(avg_days: f64) -> MetricStatus {
    metric_status(avg_days, 3.0, 5.0)
}

/// Stress is banded inverted: lower averages are better.
pub fn stress_status(avg_stress: f64) -> MetricStatus {
    metric_status(10.0 - avg_stress, 5.0, 7.0)
}

// ---------------------------------------------------------------------------
// Weekly calorie series
// ---------------------------------------------------------------------------

/// One day of the calorie series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCalories {
    pub date: String,
    pub calories: u32,
}

/// Calorie totals for the seven dates ending at `end_date` inclusive,
/// oldest first. Empty when `end_date` does not parse.
pub fn weekly_calories(scans: &[FoodScan], end_date: &str) -> Vec<DailyCalories> {
    let Ok(end) = NaiveDate::parse_from_str(end_date, "%Y-%m-%d") else {
        return Vec::new();
    };
    (0..7)
        .rev()
        .map(|offset| {
            let date = (end - Duration::days(offset)).format("%Y-%m-%d").to_string();
            let calories = daily_calories(scans, &date);
            DailyCalories { date, calories }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Insight messages
// ---------------------------------------------------------------------------

/// Deterministic weekly insight lines: below-par averages and a strong
/// upward trend each emit one message.
pub fn insights(averages: &HistoryAverages, trend: i16) -> Vec<String> {
    let mut messages = Vec::new();

    if averages.sleep_hours < 7.0 {
        messages.push(format!(
            "Your sleep average is {:.1} hours. Aim for 7-9 hours for optimal recovery.",
            averages.sleep_hours
        ));
    }
    if averages.water_intake < 2.0 {
        messages.push(format!(
            "Increase water intake to at least 2L daily. You're currently at {:.1}L average.",
            averages.water_intake
        ));
    }
    if averages.exercise_frequency < 3.0 {
        messages.push(format!(
            "Try to exercise at least 3 days per week for better health outcomes. Your average is {:.1}.",
            averages.exercise_frequency
        ));
    }
    if trend > 5 {
        messages.push(format!(
            "Great progress! Your health score improved by {trend} points recently."
        ));
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;
    use uuid::Uuid;

    fn assessment(date: &str, score: u8) -> RiskAssessment {
        RiskAssessment {
            id: Uuid::new_v4(),
            date: date.into(),
            score,
            level: RiskLevel::from_score(score),
            suggestions: vec!["Practice stress management techniques".into()],
        }
    }

    fn record(sleep: f64, water: f64, stress: u8, exercise: u8) -> HealthRecord {
        HealthRecord::new("2025-03-10", sleep, water, stress, exercise)
    }

    // -----------------------------------------------------------------------
    // score_trend
    // -----------------------------------------------------------------------

    #[test]
    fn trend_needs_two_entries() {
        assert_eq!(score_trend(&[]), 0);
        assert_eq!(score_trend(&[assessment("2025-03-01", 80)]), 0);
    }

    #[test]
    fn trend_is_last_minus_previous() {
        let history = vec![
            assessment("2025-03-01", 60),
            assessment("2025-03-08", 75),
            assessment("2025-03-15", 70),
        ];
        assert_eq!(score_trend(&history), -5);
        assert_eq!(score_trend(&history[..2]), 15);
    }

    // -----------------------------------------------------------------------
    // HistoryAverages
    // -----------------------------------------------------------------------

    #[test]
    fn averages_empty_history_is_zero() {
        let averages = HistoryAverages::compute(&[]);
        assert_eq!(averages, HistoryAverages::default());
    }

    #[test]
    fn averages_are_means() {
        let records = vec![record(6.0, 1.5, 4, 2), record(8.0, 2.5, 6, 4)];
        let averages = HistoryAverages::compute(&records);
        assert!((averages.sleep_hours - 7.0).abs() < 1e-9);
        assert!((averages.water_intake - 2.0).abs() < 1e-9);
        assert!((averages.stress_level - 5.0).abs() < 1e-9);
        assert!((averages.exercise_frequency - 3.0).abs() < 1e-9);
    }

    // -----------------------------------------------------------------------
    // Status banding
    // -----------------------------------------------------------------------

    #[test]
    fn banding_is_inclusive_at_cutoffs() {
        assert_eq!(metric_status(8.0, 7.0, 8.0), MetricStatus::Excellent);
        assert_eq!(metric_status(7.0, 7.0, 8.0), MetricStatus::Good);
        assert_eq!(metric_status(6.9, 7.0, 8.0), MetricStatus::NeedsImprovement);
    }

    #[test]
    fn stress_band_is_inverted() {
        assert_eq!(stress_status(3.0), MetricStatus::Excellent);
        assert_eq!(stress_status(5.0), MetricStatus::Good);
        assert_eq!(stress_status(6.0), MetricStatus::NeedsImprovement);
    }

    #[test]
    fn lifestyle_bands() {
        assert_eq!(water_status(2.5), MetricStatus::Excellent);
        assert_eq!(water_status(2.2), MetricStatus::Good);
        assert_eq!(exercise_status(5.0), MetricStatus::Excellent);
        assert_eq!(exercise_status(1.0), MetricStatus::NeedsImprovement);
    }

    // -----------------------------------------------------------------------
    // weekly_calories
    // -----------------------------------------------------------------------

    #[test]
    fn weekly_series_covers_seven_days_oldest_first() {
        let mut scans = Vec::new();
        let mut scan = FoodScan::manual("oatmeal", 300, "2024-06-10");
        scan.meal_type = None;
        scans.push(scan);
        scans.push(FoodScan::manual("salad", 200, "2024-06-04"));
        scans.push(FoodScan::manual("old pizza", 800, "2024-06-03"));

        let series = weekly_calories(&scans, "2024-06-10");
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, "2024-06-04");
        assert_eq!(series[0].calories, 200);
        assert_eq!(series[6].date, "2024-06-10");
        assert_eq!(series[6].calories, 300);
        // The scan outside the window contributes nothing.
        assert_eq!(series.iter().map(|d| d.calories).sum::<u32>(), 500);
    }

    #[test]
    fn weekly_series_empty_for_bad_anchor() {
        let scans = vec![FoodScan::manual("salad", 200, "2024-06-04")];
        assert!(weekly_calories(&scans, "June 10").is_empty());
    }

    // -----------------------------------------------------------------------
    // insights
    // -----------------------------------------------------------------------

    #[test]
    fn insights_quiet_when_everything_is_on_track() {
        let averages = HistoryAverages {
            sleep_hours: 7.5,
            water_intake: 2.5,
            stress_level: 4.0,
            exercise_frequency: 4.0,
        };
        assert!(insights(&averages, 3).is_empty());
    }

    #[test]
    fn insights_flag_shortfalls_and_strong_trend() {
        let averages = HistoryAverages {
            sleep_hours: 6.2,
            water_intake: 1.4,
            stress_level: 6.0,
            exercise_frequency: 1.0,
        };
        let messages = insights(&averages, 8);
        assert_eq!(messages.len(), 4);
        assert!(messages[0].contains("6.2 hours"));
        assert!(messages[1].contains("1.4L"));
        assert!(messages[3].contains("8 points"));
    }
}
