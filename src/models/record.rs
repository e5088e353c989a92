use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dated daily log entry. Analytics averages are computed over these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: Uuid,
    pub date: String, // YYYY-MM-DD
    pub sleep_hours: f64,
    pub water_intake: f64,
    pub stress_level: u8,
    pub exercise_frequency: u8,
    pub steps: Option<u32>,
    pub weight: Option<f64>, // kg
    pub notes: Option<String>,
}

impl HealthRecord {
    pub fn new(date: &str, sleep_hours: f64, water_intake: f64, stress_level: u8, exercise_frequency: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: date.into(),
            sleep_hours,
            water_intake,
            stress_level,
            exercise_frequency,
            steps: None,
            weight: None,
            notes: None,
        }
    }
}
