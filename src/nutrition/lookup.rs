//! Food-lookup collaborator contract.
//!
//! Implementations resolve a free-text description or a barcode to
//! nutrition facts. The bundled table lives in [`super::reference`];
//! the trait keeps the seam open for other providers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FoodScan, MealType, ScanType};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FoodQuery {
    Description(String),
    Barcode(String),
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No nutrition data found for this item")]
    NotFound,

    #[error("Food lookup unavailable: {0}")]
    Unavailable(String),
}

/// Rounded nutrition totals for a resolved query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub name: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
    pub sugar: u32,
    pub sodium: u32,
}

/// Per-item breakdown for multi-food descriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedFood {
    pub name: String,
    pub calories: u32,
    pub serving: String,
}

/// Full lookup result: combined facts plus the per-food breakdown
/// (empty for barcode lookups, which resolve a single item and keep
/// the code that matched).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodAnalysis {
    pub facts: NutritionFacts,
    pub scan_type: ScanType,
    pub foods: Vec<MatchedFood>,
    pub barcode: Option<String>,
}

impl FoodAnalysis {
    /// Turn the analysis into a loggable scan for the given date.
    pub fn into_scan(self, date: &str, meal_type: Option<MealType>) -> FoodScan {
        FoodScan {
            id: Uuid::new_v4(),
            name: self.facts.name,
            calories: self.facts.calories,
            protein: self.facts.protein,
            carbs: self.facts.carbs,
            fat: self.facts.fat,
            fiber: self.facts.fiber,
            sugar: self.facts.sugar,
            sodium: self.facts.sodium,
            date: date.into(),
            scan_type: self.scan_type,
            meal_type,
            image_url: None,
            barcode: self.barcode,
        }
    }
}

/// Food-lookup collaborator: description or barcode in, facts out.
pub trait FoodLookup {
    fn lookup(&self, query: &FoodQuery) -> Result<FoodAnalysis, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_converts_to_scan() {
        let analysis = FoodAnalysis {
            facts: NutritionFacts {
                name: "apple".into(),
                calories: 95,
                protein: 0,
                carbs: 25,
                fat: 0,
                fiber: 4,
                sugar: 19,
                sodium: 2,
            },
            scan_type: ScanType::Manual,
            foods: vec![],
            barcode: None,
        };
        let scan = analysis.into_scan("2025-03-10", Some(MealType::Snacks));
        assert_eq!(scan.name, "apple");
        assert_eq!(scan.calories, 95);
        assert_eq!(scan.date, "2025-03-10");
        assert_eq!(scan.meal_type, Some(MealType::Snacks));
        assert_eq!(scan.scan_type, ScanType::Manual);
        assert_eq!(scan.barcode, None);
    }

    #[test]
    fn not_found_carries_fixed_message() {
        assert_eq!(
            LookupError::NotFound.to_string(),
            "No nutrition data found for this item"
        );
    }
}
