use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::info;

use crate::error::{DietError, Result};
use crate::models::DietaryIndex;
use crate::scoring::constants::{REVERSE_SCORED_COMPONENTS, STANDARD_INDICES};

/// Immutable registry of dietary indices, in definition order.
#[derive(Debug, Clone)]
pub struct IndexCatalog {
    indices: Vec<DietaryIndex>,
}

/// Index definition as written in an index catalog file.
#[derive(Debug, Deserialize)]
struct IndexDefinition {
    name: String,
    components: IndexMap<String, u32>,
    max_score: u32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    reverse_scored: Vec<String>,
}

impl IndexCatalog {
    /// Build a catalog; index names must be unique and the catalog non-empty.
    pub fn new(indices: Vec<DietaryIndex>) -> Result<Self> {
        if indices.is_empty() {
            return Err(DietError::invalid_index("", "catalog defines no indices"));
        }

        let mut seen = HashSet::new();
        for index in &indices {
            if !seen.insert(index.name()) {
                return Err(DietError::invalid_index(index.name(), "duplicate index name"));
            }
        }

        Ok(Self { indices })
    }

    /// The six built-in indices: AHEI-2010, aMED, MIND, DASH, PDI and DII.
    ///
    /// Each index's reverse-scored set is the shared reverse-scored list
    /// restricted to that index's components.
    pub fn standard() -> Result<Self> {
        let indices = STANDARD_INDICES
            .iter()
            .map(|def| {
                let components: IndexMap<String, u32> =
                    def.components.iter().map(|c| (c.to_string(), 1)).collect();
                let reverse: BTreeSet<String> = REVERSE_SCORED_COMPONENTS
                    .iter()
                    .filter(|r| components.contains_key(**r))
                    .map(|r| r.to_string())
                    .collect();
                DietaryIndex::new(def.name, components, def.max_score, def.description, reverse)
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(indices)
    }

    /// Parse a catalog from a JSON array of index definitions.
    pub fn from_json(json: &str) -> Result<Self> {
        let definitions: Vec<IndexDefinition> = serde_json::from_str(json)?;
        let indices = definitions
            .into_iter()
            .map(|def| {
                DietaryIndex::new(
                    &def.name,
                    def.components,
                    def.max_score,
                    &def.description,
                    def.reverse_scored.into_iter().collect(),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(indices)
    }

    /// Load a catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&content)?;
        info!(
            path = %path.as_ref().display(),
            indices = catalog.len(),
            "Loaded index catalog"
        );
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&DietaryIndex> {
        self.indices.iter().find(|i| i.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DietaryIndex> {
        self.indices.iter()
    }

    /// Every reverse-scored label across all indices.
    pub fn reverse_scored_labels(&self) -> BTreeSet<String> {
        self.indices
            .iter()
            .flat_map(|i| i.reverse_scored().iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
