use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::error::{DietError, Result};

/// A named dietary scoring rubric.
///
/// Components are kept in definition order; that order drives both the
/// matched-component list of a score and the improvement suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct DietaryIndex {
    name: String,
    components: IndexMap<String, u32>,
    max_score: u32,
    description: String,
    reverse_scored: BTreeSet<String>,
}

impl DietaryIndex {
    /// Build a validated index definition.
    ///
    /// Fails when the component mapping is empty, a weight is zero,
    /// `max_score` is zero, or a reverse-scored label is not a component.
    pub fn new(
        name: &str,
        components: IndexMap<String, u32>,
        max_score: u32,
        description: &str,
        reverse_scored: BTreeSet<String>,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(DietError::invalid_index(name, "name must not be empty"));
        }
        if components.is_empty() {
            return Err(DietError::invalid_index(name, "no components defined"));
        }
        if max_score == 0 {
            return Err(DietError::invalid_index(name, "max_score must be positive"));
        }
        if let Some((label, _)) = components.iter().find(|(_, w)| **w == 0) {
            return Err(DietError::invalid_index(
                name,
                format!("component '{}' has zero weight", label),
            ));
        }
        if let Some(label) = reverse_scored.iter().find(|l| !components.contains_key(*l)) {
            return Err(DietError::invalid_index(
                name,
                format!("reverse-scored label '{}' is not a component", label),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            components,
            max_score,
            description: description.to_string(),
            reverse_scored,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Component labels with their point weights, in definition order.
    pub fn components(&self) -> impl Iterator<Item = (&str, u32)> {
        self.components.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn component_labels(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn has_component(&self, label: &str) -> bool {
        self.components.contains_key(label)
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Presence of a reverse-scored component is unfavorable.
    pub fn is_reverse_scored(&self, label: &str) -> bool {
        self.reverse_scored.contains(label)
    }

    pub fn reverse_scored(&self) -> &BTreeSet<String> {
        &self.reverse_scored
    }
}
