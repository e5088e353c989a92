//! Bundled food table backing the default [`FoodLookup`] implementation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::lookup::{FoodAnalysis, FoodLookup, FoodQuery, LookupError, MatchedFood, NutritionFacts};
use crate::models::ScanType;

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Failed to load reference data from {0}: {1}")]
    Load(String, String),

    #[error("Failed to parse {0}: {1}")]
    Parse(String, String),
}

/// One table entry, values per listed serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    pub barcode: Option<String>,
    pub serving_qty: f64,
    pub serving_unit: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

/// Lookup table over bundled entries. Description matching is a
/// case-insensitive substring scan in table order; barcodes match
/// exactly.
pub struct FoodReference {
    entries: Vec<FoodEntry>,
}

impl FoodReference {
    /// Load the table from `food_reference.json` in the resources dir.
    pub fn load(resources_dir: &std::path::Path) -> Result<Self, ReferenceError> {
        let path = resources_dir.join("food_reference.json");
        let json = std::fs::read_to_string(&path)
            .map_err(|e| ReferenceError::Load(path.display().to_string(), e.to_string()))?;
        let entries: Vec<FoodEntry> = serde_json::from_str(&json)
            .map_err(|e| ReferenceError::Parse("food_reference.json".into(), e.to_string()))?;
        Ok(Self { entries })
    }

    /// Create a small table for tests (no file I/O).
    pub fn load_test() -> Self {
        fn entry(
            name: &str,
            barcode: Option<&str>,
            qty: f64,
            unit: &str,
            calories: f64,
            protein: f64,
            carbs: f64,
            fat: f64,
        ) -> FoodEntry {
            FoodEntry {
                name: name.into(),
                barcode: barcode.map(|b| b.into()),
                serving_qty: qty,
                serving_unit: unit.into(),
                calories,
                protein,
                carbs,
                fat,
                fiber: 0.0,
                sugar: 0.0,
                sodium: 0.0,
            }
        }

        Self {
            entries: vec![
                entry("egg", None, 1.0, "large", 71.5, 6.3, 0.4, 4.8),
                entry("toast", None, 1.0, "slice", 64.0, 2.3, 12.0, 0.9),
                entry("apple", None, 1.0, "medium", 94.6, 0.5, 25.1, 0.3),
                entry("banana", None, 1.0, "medium", 105.0, 1.3, 27.0, 0.4),
                entry("chicken breast", None, 100.0, "g", 165.0, 31.0, 0.0, 3.6),
                entry("rice", None, 1.0, "cup", 206.0, 4.3, 44.5, 0.4),
                entry("granola bar", Some("0123456789012"), 1.0, "bar", 132.0, 2.9, 18.0, 5.6),
                entry("oat milk", Some("0987654321098"), 1.0, "cup", 120.0, 3.0, 16.0, 5.0),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn match_description(&self, query: &str) -> Vec<&FoodEntry> {
        let lower = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| lower.contains(&e.name.to_lowercase()))
            .collect()
    }

    fn match_barcode(&self, barcode: &str) -> Option<&FoodEntry> {
        self.entries
            .iter()
            .find(|e| e.barcode.as_deref() == Some(barcode))
    }
}

/// Sum raw values across matched entries, round each total once,
/// join names with ", ".
fn combine(matches: &[&FoodEntry]) -> NutritionFacts {
    let mut calories = 0.0;
    let mut protein = 0.0;
    let mut carbs = 0.0;
    let mut fat = 0.0;
    let mut fiber = 0.0;
    let mut sugar = 0.0;
    let mut sodium = 0.0;

    for entry in matches {
        calories += entry.calories;
        protein += entry.protein;
        carbs += entry.carbs;
        fat += entry.fat;
        fiber += entry.fiber;
        sugar += entry.sugar;
        sodium += entry.sodium;
    }

    NutritionFacts {
        name: matches
            .iter()
            .map(|e| e.name.clone())
            .collect::<Vec<_>>()
            .join(", "),
        calories: round(calories),
        protein: round(protein),
        carbs: round(carbs),
        fat: round(fat),
        fiber: round(fiber),
        sugar: round(sugar),
        sodium: round(sodium),
    }
}

fn round(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

fn single(entry: &FoodEntry) -> NutritionFacts {
    NutritionFacts {
        name: entry.name.clone(),
        calories: round(entry.calories),
        protein: round(entry.protein),
        carbs: round(entry.carbs),
        fat: round(entry.fat),
        fiber: round(entry.fiber),
        sugar: round(entry.sugar),
        sodium: round(entry.sodium),
    }
}

impl FoodLookup for FoodReference {
    fn lookup(&self, query: &FoodQuery) -> Result<FoodAnalysis, LookupError> {
        match query {
            FoodQuery::Barcode(code) => {
                let entry = self.match_barcode(code).ok_or(LookupError::NotFound)?;
                Ok(FoodAnalysis {
                    facts: single(entry),
                    scan_type: ScanType::Barcode,
                    foods: vec![],
                    barcode: Some(code.clone()),
                })
            }
            FoodQuery::Description(text) => {
                let matches = self.match_description(text);
                if matches.is_empty() {
                    return Err(LookupError::NotFound);
                }

                let foods = matches
                    .iter()
                    .map(|e| MatchedFood {
                        name: e.name.clone(),
                        calories: round(e.calories),
                        serving: format!("{} {}", e.serving_qty, e.serving_unit),
                    })
                    .collect();

                Ok(FoodAnalysis {
                    facts: combine(&matches),
                    scan_type: ScanType::Manual,
                    foods,
                    barcode: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_match_is_case_insensitive() {
        let table = FoodReference::load_test();
        let analysis = table
            .lookup(&FoodQuery::Description("One APPLE please".into()))
            .unwrap();
        assert_eq!(analysis.facts.name, "apple");
        assert_eq!(analysis.facts.calories, 95);
        assert_eq!(analysis.scan_type, ScanType::Manual);
    }

    #[test]
    fn multi_food_description_combines_and_joins_names() {
        let table = FoodReference::load_test();
        let analysis = table
            .lookup(&FoodQuery::Description("egg and toast".into()))
            .unwrap();

        assert_eq!(analysis.facts.name, "egg, toast");
        // Raw sums are rounded once: 71.5 + 64.0 = 135.5 -> 136.
        assert_eq!(analysis.facts.calories, 136);
        assert_eq!(analysis.foods.len(), 2);
        assert_eq!(analysis.foods[0].serving, "1 large");
        // Per-item values round individually: 71.5 -> 72.
        assert_eq!(analysis.foods[0].calories, 72);
    }

    #[test]
    fn unknown_description_is_not_found() {
        let table = FoodReference::load_test();
        let err = table
            .lookup(&FoodQuery::Description("plutonium sandwich".into()))
            .unwrap_err();
        assert!(matches!(err, LookupError::NotFound));
    }

    #[test]
    fn barcode_matches_exactly() {
        let table = FoodReference::load_test();
        let analysis = table
            .lookup(&FoodQuery::Barcode("0123456789012".into()))
            .unwrap();
        assert_eq!(analysis.facts.name, "granola bar");
        assert_eq!(analysis.scan_type, ScanType::Barcode);
        assert!(analysis.foods.is_empty());
        assert_eq!(analysis.barcode.as_deref(), Some("0123456789012"));

        let err = table
            .lookup(&FoodQuery::Barcode("0000000000000".into()))
            .unwrap_err();
        assert!(matches!(err, LookupError::NotFound));
    }

    #[test]
    fn test_table_is_nonempty() {
        let table = FoodReference::load_test();
        assert!(!table.is_empty());
        assert!(table.len() >= 8);
    }
}
