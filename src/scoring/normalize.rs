use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{DietError, Result};
use crate::scoring::constants::CATEGORY_ALIASES;

/// Maps free-text ingredient categories onto canonical component labels.
#[derive(Debug, Clone)]
pub struct CategoryNormalizer {
    /// Lower-cased alias -> canonical label.
    aliases: HashMap<String, String>,
}

static STANDARD: LazyLock<CategoryNormalizer> = LazyLock::new(CategoryNormalizer::standard);

impl CategoryNormalizer {
    /// Normalizer over the built-in alias table.
    pub fn standard() -> Self {
        Self {
            aliases: CATEGORY_ALIASES
                .iter()
                .map(|(alias, target)| (alias.to_string(), target.to_string()))
                .collect(),
        }
    }

    /// Normalizer over a custom alias table.
    ///
    /// Aliases are matched case-insensitively. A target that is itself an
    /// alias is rejected, otherwise normalizing twice would not be stable.
    pub fn with_aliases<I, K, V>(aliases: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let aliases: HashMap<String, String> = aliases
            .into_iter()
            .map(|(k, v)| (fold(k.as_ref()), fold(v.as_ref())))
            .collect();

        if let Some((alias, target)) = aliases.iter().find(|(_, t)| aliases.contains_key(*t)) {
            return Err(DietError::InvalidAlias {
                alias: alias.clone(),
                target: target.clone(),
            });
        }

        Ok(Self { aliases })
    }

    /// Canonical label for a raw category.
    ///
    /// Unknown categories pass through lower-cased and trimmed.
    pub fn normalize(&self, raw_category: &str) -> String {
        let folded = fold(raw_category);
        match self.aliases.get(&folded) {
            Some(target) => target.clone(),
            None => folded,
        }
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for CategoryNormalizer {
    fn default() -> Self {
        Self::standard()
    }
}

/// Normalize a category with the built-in alias table.
pub fn normalize_category(raw_category: &str) -> String {
    STANDARD.normalize(raw_category)
}

fn fold(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_variants() {
        assert_eq!(normalize_category("Vegetables"), "other vegetables");
        assert_eq!(normalize_category("  VEGETABLES "), "other vegetables");
        assert_eq!(normalize_category("vegetables"), "other vegetables");
        assert_eq!(normalize_category("Poultry"), "poultry (not fried, skinless)");
        assert_eq!(normalize_category("Legumes"), "beans & legumes");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize_category("  Dairy "), "dairy");
        assert_eq!(normalize_category("Low-Fat Dairy"), "low-fat dairy");
        assert_eq!(normalize_category("mystery"), "mystery");
        assert_eq!(normalize_category(""), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Vegetables",
            "red meat",
            "Sweets",
            "Whole Grain",
            "Energy (kcal)",
            "β-Carotene (μg)",
            "  Fish  ",
            "poultry (not fried, skinless)",
        ];
        for input in inputs {
            let once = normalize_category(input);
            assert_eq!(normalize_category(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn test_standard_table_is_stable() {
        let table = CATEGORY_ALIASES.iter().copied();
        assert!(CategoryNormalizer::with_aliases(table).is_ok());
    }

    #[test]
    fn test_chained_alias_rejected() {
        let result = CategoryNormalizer::with_aliases([("veg", "vegetables"), ("vegetables", "other vegetables")]);
        assert!(matches!(result, Err(DietError::InvalidAlias { .. })));
    }
}
