use std::collections::{BTreeSet, HashSet};

use tracing::{debug, trace};

use crate::catalog::IndexCatalog;
use crate::models::{DietaryIndex, Food, ScoreCard, ScoreResult};
use crate::scoring::constants::ENERGY_COMPONENT;
use crate::scoring::normalize::CategoryNormalizer;

/// Scores foods against every index of a catalog.
///
/// Scoring is presence-based: a component earns its weight when its
/// normalized label appears among the food's normalized categories.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    indices: &'a IndexCatalog,
    normalizer: &'a CategoryNormalizer,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(indices: &'a IndexCatalog, normalizer: &'a CategoryNormalizer) -> Self {
        Self {
            indices,
            normalizer,
        }
    }

    /// Canonical labels of every ingredient that takes part in scoring.
    pub fn canonical_categories(
        &self,
        food: &Food,
        selected_optional: &HashSet<String>,
    ) -> BTreeSet<String> {
        food.contributing_ingredients(selected_optional)
            .map(|i| self.normalizer.normalize(&i.category))
            .collect()
    }

    /// Score a food, with the selected optional ingredients, against all indices.
    pub fn score_food(&self, food: &Food, selected_optional: &HashSet<String>) -> ScoreCard {
        let categories = self.canonical_categories(food, selected_optional);
        debug!(
            food = %food.name,
            categories = ?categories,
            "Scoring food against {} indices",
            self.indices.len()
        );

        let results = self
            .indices
            .iter()
            .map(|index| self.score_index(index, &categories))
            .collect();

        ScoreCard::new(results)
    }

    /// Score one index against an already-normalized category set.
    ///
    /// `Energy (kcal)` is always awarded when it isn't matched as a category,
    /// since every food carries a calorie total.
    pub fn score_index(&self, index: &DietaryIndex, categories: &BTreeSet<String>) -> ScoreResult {
        let mut score: u32 = 0;
        let mut matched = Vec::new();

        for (label, weight) in index.components() {
            if categories.contains(&self.normalizer.normalize(label)) {
                trace!(index = index.name(), component = label, "Category match");
                score += weight;
                matched.push(label.to_string());
            } else if label == ENERGY_COMPONENT {
                trace!(index = index.name(), component = label, "Energy bonus");
                score += weight;
                matched.push(label.to_string());
            }
        }

        let capped = score.min(index.max_score());
        debug!(
            index = index.name(),
            raw = score,
            score = capped,
            max = index.max_score(),
            matched = matched.len(),
            "Index scored"
        );

        ScoreResult::new(index.name(), matched, capped, index.max_score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;
    use indexmap::IndexMap;

    fn food_with(primary: &[(&str, &str)], optional: &[(&str, &str)]) -> Food {
        let to_map = |items: &[(&str, &str)]| -> IndexMap<String, Ingredient> {
            items
                .iter()
                .map(|(name, cat)| (name.to_string(), Ingredient::new(name, "1 serving", cat, 10.0)))
                .collect()
        };
        Food {
            name: "Test food".to_string(),
            serving_size: "1 serving".to_string(),
            total_calories: 100.0,
            primary_ingredients: to_map(primary),
            optional_ingredients: to_map(optional),
        }
    }

    fn single_index(labels: &[(&str, u32)], max_score: u32) -> IndexCatalog {
        let components = labels.iter().map(|(l, w)| (l.to_string(), *w)).collect();
        let index = DietaryIndex::new("Synthetic", components, max_score, "", BTreeSet::new()).unwrap();
        IndexCatalog::new(vec![index]).unwrap()
    }

    #[test]
    fn test_component_labels_are_normalized() {
        // "legumes" as a component resolves to the same label as a "Beans" ingredient.
        let catalog = single_index(&[("legumes", 1), ("Fruit", 1)], 2);
        let normalizer = CategoryNormalizer::standard();
        let engine = ScoringEngine::new(&catalog, &normalizer);

        let food = food_with(&[("Black beans", "Beans")], &[]);
        let card = engine.score_food(&food, &HashSet::new());
        let result = card.get("Synthetic").unwrap();

        assert_eq!(result.matched_components, vec!["legumes"]);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_score_capped_at_max() {
        let catalog = single_index(&[("Fruit", 3), ("nuts", 3), (ENERGY_COMPONENT, 2)], 5);
        let normalizer = CategoryNormalizer::standard();
        let engine = ScoringEngine::new(&catalog, &normalizer);

        let food = food_with(&[("Apple", "Fruit"), ("Almonds", "Nuts")], &[]);
        let result = engine.score_food(&food, &HashSet::new()).get("Synthetic").cloned().unwrap();

        assert_eq!(result.matched_count(), 3);
        assert_eq!(result.score, 5);
        assert!((result.percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_energy_matched_without_categories() {
        let catalog = single_index(&[("Sodium", 1), (ENERGY_COMPONENT, 1)], 2);
        let normalizer = CategoryNormalizer::standard();
        let engine = ScoringEngine::new(&catalog, &normalizer);

        let food = food_with(&[], &[]);
        let result = engine.score_food(&food, &HashSet::new()).get("Synthetic").cloned().unwrap();

        assert_eq!(result.matched_components, vec![ENERGY_COMPONENT]);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_energy_counted_once_when_also_a_category() {
        let catalog = single_index(&[(ENERGY_COMPONENT, 1)], 5);
        let normalizer = CategoryNormalizer::standard();
        let engine = ScoringEngine::new(&catalog, &normalizer);

        let food = food_with(&[("Sugar", "Energy (kcal)")], &[]);
        let result = engine.score_food(&food, &HashSet::new()).get("Synthetic").cloned().unwrap();

        assert_eq!(result.score, 1);
        assert_eq!(result.matched_count(), 1);
    }

    #[test]
    fn test_optional_only_when_selected() {
        let catalog = single_index(&[("red & processed meat", 1)], 1);
        let normalizer = CategoryNormalizer::standard();
        let engine = ScoringEngine::new(&catalog, &normalizer);

        let food = food_with(&[("Dough", "Refined grain")], &[("Bacon", "Processed meat")]);

        let none = engine.score_food(&food, &HashSet::new());
        assert_eq!(none.get("Synthetic").unwrap().score, 0);

        let selected: HashSet<String> = ["Bacon".to_string()].into();
        let with_bacon = engine.score_food(&food, &selected);
        assert_eq!(with_bacon.get("Synthetic").unwrap().score, 1);
    }

    #[test]
    fn test_canonical_categories_collapse_duplicates() {
        let catalog = single_index(&[("Fruit", 1)], 1);
        let normalizer = CategoryNormalizer::standard();
        let engine = ScoringEngine::new(&catalog, &normalizer);

        let food = food_with(&[("Carrot", "Vegetables"), ("Pepper", " vegetables"), ("Kale", "Other Vegetables")], &[]);
        let categories = engine.canonical_categories(&food, &HashSet::new());

        assert_eq!(categories.len(), 1);
        assert!(categories.contains("other vegetables"));
    }
}
