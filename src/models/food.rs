use std::collections::HashSet;

use indexmap::IndexMap;

/// A single ingredient of a catalog food.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,

    /// Unit-bearing quantity, e.g. "2 slices" or "30 g".
    pub quantity_per_serving: String,

    /// Free-text category as written in the catalog.
    pub category: String,

    pub calories: f64,
}

impl Ingredient {
    pub fn new(name: &str, quantity_per_serving: &str, category: &str, calories: f64) -> Self {
        Self {
            name: name.to_string(),
            quantity_per_serving: quantity_per_serving.to_string(),
            category: category.to_string(),
            calories,
        }
    }
}

/// A food record from the catalog.
///
/// Primary ingredients always contribute to scoring; optional ingredients
/// only contribute when the caller selects them by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub name: String,
    pub serving_size: String,
    pub total_calories: f64,
    pub primary_ingredients: IndexMap<String, Ingredient>,
    pub optional_ingredients: IndexMap<String, Ingredient>,
}

impl Food {
    /// Ingredients that take part in a scoring call, primary first.
    ///
    /// Selected names that are not optional ingredients of this food are ignored.
    pub fn contributing_ingredients<'a>(
        &'a self,
        selected_optional: &'a HashSet<String>,
    ) -> impl Iterator<Item = &'a Ingredient> + 'a {
        self.primary_ingredients.values().chain(
            self.optional_ingredients
                .values()
                .filter(move |i| selected_optional.contains(&i.name)),
        )
    }

    pub fn has_optional(&self, name: &str) -> bool {
        self.optional_ingredients.contains_key(name)
    }

    pub fn optional_names(&self) -> Vec<&str> {
        self.optional_ingredients.keys().map(String::as_str).collect()
    }

    /// Non-negative calorie values everywhere.
    pub fn is_valid(&self) -> bool {
        self.total_calories >= 0.0
            && self
                .primary_ingredients
                .values()
                .chain(self.optional_ingredients.values())
                .all(|i| i.calories >= 0.0)
    }
}
