use serde::{Deserialize, Serialize};

/// Lifestyle snapshot — the input to every scoring and planning function.
///
/// Held in session memory and mutated only through [`SnapshotUpdate`];
/// engines read it and return new values. Optional fields distinguish
/// "never reported" (`None`, every check passes) from an explicit zero,
/// which is evaluated against thresholds like any other value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleSnapshot {
    pub sleep_hours: f64,
    pub water_intake: f64, // liters/day
    pub junk_food_level: u8, // 1-5
    pub exercise_frequency: u8, // days/week
    pub stress_level: u8, // 1-10
    pub steps: u32,
    pub alcohol: u8, // days/week
    pub smoking: bool,
    pub height: f64, // cm
    pub weight: f64, // kg
    pub age: u32,
    pub sleep_quality: Option<u8>, // 1-10
    pub fruits_veggies: Option<u8>, // servings/day
    pub exercise_intensity: Option<u8>, // 1-10
    pub screen_time: Option<f64>, // hours/day
    pub regular_checkups: Option<bool>,
    pub family_history: Vec<String>,
    pub sleep_restfulness: Option<String>,
}

impl Default for LifestyleSnapshot {
    fn default() -> Self {
        Self {
            sleep_hours: 7.0,
            water_intake: 2.0,
            junk_food_level: 2,
            exercise_frequency: 3,
            stress_level: 5,
            steps: 8000,
            alcohol: 0,
            smoking: false,
            height: 170.0,
            weight: 70.0,
            age: 30,
            sleep_quality: Some(7),
            fruits_veggies: Some(3),
            exercise_intensity: Some(5),
            screen_time: Some(6.0),
            regular_checkups: Some(false),
            family_history: Vec::new(),
            sleep_restfulness: None,
        }
    }
}

/// Partial update to a snapshot. Fields left `None` are untouched;
/// optional snapshot fields take a nested `Option` so they can be cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotUpdate {
    pub sleep_hours: Option<f64>,
    pub water_intake: Option<f64>,
    pub junk_food_level: Option<u8>,
    pub exercise_frequency: Option<u8>,
    pub stress_level: Option<u8>,
    pub steps: Option<u32>,
    pub alcohol: Option<u8>,
    pub smoking: Option<bool>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub age: Option<u32>,
    pub sleep_quality: Option<Option<u8>>,
    pub fruits_veggies: Option<Option<u8>>,
    pub exercise_intensity: Option<Option<u8>>,
    pub screen_time: Option<Option<f64>>,
    pub regular_checkups: Option<Option<bool>>,
    pub family_history: Option<Vec<String>>,
    pub sleep_restfulness: Option<Option<String>>,
}

impl LifestyleSnapshot {
    /// Apply a partial update in place.
    pub fn apply(&mut self, update: SnapshotUpdate) {
        if let Some(v) = update.sleep_hours {
            self.sleep_hours = v;
        }
        if let Some(v) = update.water_intake {
            self.water_intake = v;
        }
        if let Some(v) = update.junk_food_level {
            self.junk_food_level = v;
        }
        if let Some(v) = update.exercise_frequency {
            self.exercise_frequency = v;
        }
        if let Some(v) = update.stress_level {
            self.stress_level = v;
        }
        if let Some(v) = update.steps {
            self.steps = v;
        }
        if let Some(v) = update.alcohol {
            self.alcohol = v;
        }
        if let Some(v) = update.smoking {
            self.smoking = v;
        }
        if let Some(v) = update.height {
            self.height = v;
        }
        if let Some(v) = update.weight {
            self.weight = v;
        }
        if let Some(v) = update.age {
            self.age = v;
        }
        if let Some(v) = update.sleep_quality {
            self.sleep_quality = v;
        }
        if let Some(v) = update.fruits_veggies {
            self.fruits_veggies = v;
        }
        if let Some(v) = update.exercise_intensity {
            self.exercise_intensity = v;
        }
        if let Some(v) = update.screen_time {
            self.screen_time = v;
        }
        if let Some(v) = update.regular_checkups {
            self.regular_checkups = v;
        }
        if let Some(v) = update.family_history {
            self.family_history = v;
        }
        if let Some(v) = update.sleep_restfulness {
            self.sleep_restfulness = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_baseline_values() {
        let snap = LifestyleSnapshot::default();
        assert_eq!(snap.sleep_hours, 7.0);
        assert_eq!(snap.water_intake, 2.0);
        assert_eq!(snap.exercise_frequency, 3);
        assert_eq!(snap.stress_level, 5);
        assert_eq!(snap.steps, 8000);
        assert!(!snap.smoking);
        assert_eq!(snap.sleep_quality, Some(7));
        assert_eq!(snap.regular_checkups, Some(false));
        assert!(snap.family_history.is_empty());
    }

    #[test]
    fn apply_touches_only_provided_fields() {
        let mut snap = LifestyleSnapshot::default();
        snap.apply(SnapshotUpdate {
            sleep_hours: Some(5.5),
            stress_level: Some(9),
            ..Default::default()
        });
        assert_eq!(snap.sleep_hours, 5.5);
        assert_eq!(snap.stress_level, 9);
        assert_eq!(snap.water_intake, 2.0);
        assert_eq!(snap.sleep_quality, Some(7));
    }

    #[test]
    fn apply_can_clear_optional_field() {
        let mut snap = LifestyleSnapshot::default();
        snap.apply(SnapshotUpdate {
            screen_time: Some(None),
            ..Default::default()
        });
        assert_eq!(snap.screen_time, None);
    }

    #[test]
    fn apply_can_set_optional_field_to_zero() {
        let mut snap = LifestyleSnapshot::default();
        snap.apply(SnapshotUpdate {
            fruits_veggies: Some(Some(0)),
            ..Default::default()
        });
        assert_eq!(snap.fruits_veggies, Some(0));
    }
}
