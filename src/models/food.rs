use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{GoalType, MealType, ScanType};

/// A logged food item. `date` is kept as the exact `YYYY-MM-DD` string the
/// caller supplied; daily aggregation matches it by string equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodScan {
    pub id: Uuid,
    pub name: String,
    pub calories: u32,
    pub protein: u32, // grams
    pub carbs: u32, // grams
    pub fat: u32, // grams
    pub fiber: u32, // grams
    pub sugar: u32, // grams
    pub sodium: u32, // milligrams
    pub date: String, // YYYY-MM-DD
    pub scan_type: ScanType,
    pub meal_type: Option<MealType>,
    pub image_url: Option<String>,
    pub barcode: Option<String>,
}

impl FoodScan {
    /// Manual entry with just a name, calories, and date. Remaining
    /// nutrients default to zero.
    pub fn manual(name: &str, calories: u32, date: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            calories,
            protein: 0,
            carbs: 0,
            fat: 0,
            fiber: 0,
            sugar: 0,
            sodium: 0,
            date: date.into(),
            scan_type: ScanType::Manual,
            meal_type: None,
            image_url: None,
            barcode: None,
        }
    }
}

/// A weight goal with its derived daily calorie target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightGoal {
    pub goal_type: GoalType,
    pub current_weight: f64, // kg
    pub target_weight: f64, // kg
    pub timeframe_days: u32,
    pub daily_calorie_target: u32,
    pub created_at: String, // YYYY-MM-DD
}
