use std::collections::HashSet;

use tracing::{debug, info};

use crate::catalog::{FoodCatalog, IndexCatalog};
use crate::error::{DietError, Result};
use crate::models::{Food, ScoreCard, ScoreResult};
use crate::scoring::{
    best_match, CategoryNormalizer, ComponentSummary, ExplanationTables, FoodMatch, ScoringEngine,
    MATCH_THRESHOLD,
};

/// Entry point for a presentation layer: find a food, score it, explain the scores.
///
/// Holds the catalogs and reference tables loaded once at startup; every
/// operation is a read-only query over them.
#[derive(Debug, Clone)]
pub struct DietAnalyzer {
    foods: FoodCatalog,
    indices: IndexCatalog,
    normalizer: CategoryNormalizer,
    tables: ExplanationTables,
    threshold: f64,
}

impl DietAnalyzer {
    pub fn new(foods: FoodCatalog, indices: IndexCatalog) -> Self {
        Self {
            foods,
            indices,
            normalizer: CategoryNormalizer::standard(),
            tables: ExplanationTables::standard(),
            threshold: MATCH_THRESHOLD,
        }
    }

    /// Override the match-acceptance confidence (0-100).
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&threshold) {
            return Err(DietError::InvalidInput(format!(
                "Match threshold must be between 0 and 100, got {}",
                threshold
            )));
        }
        self.threshold = threshold;
        Ok(self)
    }

    pub fn with_normalizer(mut self, normalizer: CategoryNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_tables(mut self, tables: ExplanationTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn foods(&self) -> &FoodCatalog {
        &self.foods
    }

    pub fn indices(&self) -> &IndexCatalog {
        &self.indices
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn engine(&self) -> ScoringEngine<'_> {
        ScoringEngine::new(&self.indices, &self.normalizer)
    }

    /// Closest catalog food at or above the match threshold.
    pub fn find_food(&self, query: &str) -> Option<FoodMatch<'_>> {
        let candidate = best_match(query, self.foods.names())?;
        if candidate.meets(self.threshold) {
            info!(query, name = candidate.name, confidence = candidate.confidence, "Food matched");
            Some(candidate)
        } else {
            debug!(
                query,
                closest = candidate.name,
                confidence = candidate.confidence,
                "No match above threshold"
            );
            None
        }
    }

    /// Like `find_food`, returning the food record or `FoodNotFound`.
    pub fn lookup(&self, query: &str) -> Result<(&Food, FoodMatch<'_>)> {
        let found = self
            .find_food(query)
            .ok_or_else(|| DietError::FoodNotFound(query.to_string()))?;
        let food = self
            .foods
            .get(found.name)
            .ok_or_else(|| DietError::FoodNotFound(query.to_string()))?;
        Ok((food, found))
    }

    pub fn score_food(&self, food: &Food, selected_optional: &HashSet<String>) -> ScoreCard {
        self.engine().score_food(food, selected_optional)
    }

    /// Explanation text for a result produced by `score_food`.
    pub fn explain(&self, result: &ScoreResult) -> Result<String> {
        let index = self
            .indices
            .get(&result.index_name)
            .ok_or_else(|| DietError::UnknownIndex(result.index_name.clone()))?;
        Ok(self.tables.explain(index, result))
    }

    /// Beneficial and concerning categories of the food as scored.
    pub fn summarize(&self, food: &Food, selected_optional: &HashSet<String>) -> ComponentSummary {
        let categories = self.engine().canonical_categories(food, selected_optional);
        self.tables
            .summarize(&categories, &self.indices.reverse_scored_labels())
    }
}
