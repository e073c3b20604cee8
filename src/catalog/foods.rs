use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::info;

use crate::error::{DietError, Result};
use crate::models::{Food, Ingredient};

/// Read-only food catalog keyed by food name, in document order.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: IndexMap<String, Food>,
}

#[derive(Deserialize)]
struct CatalogFile {
    foods: IndexMap<String, FoodRecord>,
}

#[derive(Deserialize)]
struct FoodRecord {
    usda_serving_size: String,
    total_serving_calories: f64,
    primary_ingredients: IndexMap<String, IngredientRecord>,
    #[serde(default)]
    optional_ingredients: IndexMap<String, IngredientRecord>,
}

#[derive(Deserialize)]
struct IngredientRecord {
    quantity_per_serving: String,
    category: String,
    calorific_value: f64,
}

fn ingredients(records: IndexMap<String, IngredientRecord>) -> IndexMap<String, Ingredient> {
    records
        .into_iter()
        .map(|(name, r)| {
            let ingredient = Ingredient::new(&name, &r.quantity_per_serving, &r.category, r.calorific_value);
            (name, ingredient)
        })
        .collect()
}

impl FoodCatalog {
    pub fn new(foods: Vec<Food>) -> Self {
        Self {
            foods: foods.into_iter().map(|f| (f.name.clone(), f)).collect(),
        }
    }

    /// Parse a catalog document of the form `{"foods": {name: record, ...}}`.
    ///
    /// Any invalid record rejects the whole catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut foods = IndexMap::with_capacity(file.foods.len());
        for (name, record) in file.foods {
            let food = Food {
                name: name.clone(),
                serving_size: record.usda_serving_size,
                total_calories: record.total_serving_calories,
                primary_ingredients: ingredients(record.primary_ingredients),
                optional_ingredients: ingredients(record.optional_ingredients),
            };
            if !food.is_valid() {
                return Err(DietError::InvalidCatalog(format!(
                    "'{}' has a negative calorie value",
                    name
                )));
            }
            foods.insert(name, food);
        }

        Ok(Self { foods })
    }

    /// Exact (case-sensitive) lookup by catalog name.
    pub fn get(&self, name: &str) -> Option<&Food> {
        self.foods.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.foods.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Food> {
        self.foods.values()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// Load the food catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let content = fs::read_to_string(path.as_ref())?;
    let catalog = FoodCatalog::from_json(&content)?;
    info!(
        path = %path.as_ref().display(),
        foods = catalog.len(),
        "Loaded food catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "foods": {
            "Pizza": {
                "usda_serving_size": "1 slice (107g)",
                "total_serving_calories": 285,
                "primary_ingredients": {
                    "Crust": {"quantity_per_serving": "60 g", "category": "Refined grains", "calorific_value": 160},
                    "Tomato sauce": {"quantity_per_serving": "20 g", "category": "Vegetables", "calorific_value": 15}
                },
                "optional_ingredients": {
                    "Pepperoni": {"quantity_per_serving": "10 g", "category": "Processed meat", "calorific_value": 50}
                }
            },
            "Apple": {
                "usda_serving_size": "1 medium",
                "total_serving_calories": 95.5,
                "primary_ingredients": {
                    "Apple": {"quantity_per_serving": "182 g", "category": "Fruit", "calorific_value": 95.5}
                }
            }
        }
    }"#;

    #[test]
    fn test_load_catalog() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Pizza", "Apple"]);

        let pizza = catalog.get("Pizza").unwrap();
        assert_eq!(pizza.serving_size, "1 slice (107g)");
        assert_eq!(pizza.total_calories, 285.0);
        let primary: Vec<&str> = pizza.primary_ingredients.keys().map(String::as_str).collect();
        assert_eq!(primary, vec!["Crust", "Tomato sauce"]);
        assert_eq!(pizza.optional_ingredients["Pepperoni"].category, "Processed meat");

        let apple = catalog.get("Apple").unwrap();
        assert!(apple.optional_ingredients.is_empty());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog(dir.path().join("absent.json"));
        assert!(matches!(result, Err(DietError::Io(_))));
    }

    #[test]
    fn test_unparsable_is_error() {
        assert!(matches!(
            FoodCatalog::from_json("{\"foods\": [1, 2]}"),
            Err(DietError::Json(_))
        ));
    }

    #[test]
    fn test_negative_calories_rejected() {
        let json = r#"{"foods": {"Bad": {
            "usda_serving_size": "1", "total_serving_calories": -5,
            "primary_ingredients": {}
        }}}"#;
        assert!(matches!(
            FoodCatalog::from_json(json),
            Err(DietError::InvalidCatalog(_))
        ));
    }
}
