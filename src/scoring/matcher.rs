//! Fuzzy lookup of food names.
//!
//! Confidence is a weighted blend of whole-string, token and partial
//! similarity on a 0-100 scale. Names are compared case-insensitively with
//! punctuation folded to whitespace. Only a byte-exact name scores 100;
//! anything that needs folding to match is capped at `FOLDED_CEILING`.

use strsim::normalized_levenshtein;

use crate::scoring::constants::EXACT_CONFIDENCE;

/// Weight applied to token-based ratios.
const TOKEN_SCALE: f64 = 0.95;

/// Highest confidence for a name that is not byte-exact.
const FOLDED_CEILING: f64 = EXACT_CONFIDENCE * TOKEN_SCALE;

/// Length ratio from which substring alignment is considered.
const PARTIAL_LEN_RATIO: f64 = 1.5;

/// Length ratio from which substring alignment is heavily discounted.
const LONG_LEN_RATIO: f64 = 8.0;

/// Best catalog entry for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodMatch<'a> {
    pub name: &'a str,
    pub confidence: f64,
}

impl FoodMatch<'_> {
    pub fn is_exact(&self) -> bool {
        self.confidence >= EXACT_CONFIDENCE
    }

    pub fn meets(&self, threshold: f64) -> bool {
        self.confidence >= threshold
    }
}

/// Highest-confidence candidate for `query`.
///
/// Ties go to the earliest candidate. Returns `None` only when there are no
/// candidates; applying an acceptance threshold is up to the caller.
pub fn best_match<'a, I>(query: &str, candidates: I) -> Option<FoodMatch<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<FoodMatch<'a>> = None;
    for name in candidates {
        let confidence = similarity(query, name);
        if best.is_none_or(|b| confidence > b.confidence) {
            best = Some(FoodMatch { name, confidence });
        }
    }
    best
}

/// Similarity between a query and a candidate name, 0-100.
pub fn similarity(query: &str, candidate: &str) -> f64 {
    if query == candidate && !query.trim().is_empty() {
        return EXACT_CONFIDENCE;
    }

    let a = preprocess(query);
    let b = preprocess(candidate);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let whole = ratio(&a, &b);

    let score = if len_ratio < PARTIAL_LEN_RATIO {
        whole
            .max(token_sort_ratio(&a, &b) * TOKEN_SCALE)
            .max(token_set_ratio(&a, &b) * TOKEN_SCALE)
    } else {
        let partial_scale = if len_ratio < LONG_LEN_RATIO { 0.9 } else { 0.6 };
        whole
            .max(partial_ratio(&a, &b) * partial_scale)
            .max(token_set_ratio(&a, &b) * TOKEN_SCALE * partial_scale)
    };

    score.clamp(0.0, FOLDED_CEILING)
}

/// Lower-case, fold non-alphanumerics to spaces and collapse whitespace.
fn preprocess(s: &str) -> String {
    let mapped: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

fn sorted_tokens(s: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.dedup();
    tokens
}

fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a).join(" "), &sorted_tokens(b).join(" "))
}

fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = sorted_tokens(a);
    let tokens_b = sorted_tokens(b);

    let common: Vec<&str> = tokens_a
        .iter()
        .filter(|t| tokens_b.contains(t))
        .copied()
        .collect();
    let only_a: Vec<&str> = tokens_a
        .iter()
        .filter(|t| !common.contains(t))
        .copied()
        .collect();
    let only_b: Vec<&str> = tokens_b
        .iter()
        .filter(|t| !common.contains(t))
        .copied()
        .collect();

    // One side's words are all contained in the other's.
    if !common.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return EXACT_CONFIDENCE;
    }

    let sect = common.join(" ");
    let diff_a = only_a.join(" ");
    let diff_b = only_b.join(" ");
    if sect.is_empty() {
        return ratio(&diff_a, &diff_b);
    }

    let combined_a = format!("{} {}", sect, diff_a);
    let combined_b = format!("{} {}", sect, diff_b);

    ratio(&sect, &combined_a)
        .max(ratio(&sect, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

/// Best alignment of the shorter string against equal-length windows of the longer.
fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let long_chars: Vec<char> = long.chars().collect();
    let width = short.chars().count();
    if width == 0 {
        return 0.0;
    }

    long_chars
        .windows(width)
        .map(|w| ratio(short, &w.iter().collect::<String>()))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &[&str] = &["Pizza", "Caesar Salad", "Pepperoni Pizza", "Banana Bread"];

    #[test]
    fn test_exact_match() {
        let m = best_match("Caesar Salad", CATALOG.iter().copied()).unwrap();
        assert_eq!(m.name, "Caesar Salad");
        assert_eq!(m.confidence, 100.0);
        assert!(m.is_exact());
    }

    #[test]
    fn test_folded_equality_is_not_exact() {
        assert_eq!(similarity("pizza", "Pizza"), 95.0);
        assert_eq!(similarity("Pizza!", "Pizza"), 95.0);
        assert_eq!(similarity("  PIZZA!", "Pizza"), 95.0);
        assert_eq!(similarity("Pizza", "Pizza"), 100.0);
    }

    #[test]
    fn test_exact_name_beats_case_variant_listed_first() {
        let m = best_match("pizza", ["Pizza", "pizza"]).unwrap();
        assert_eq!(m.name, "pizza");
        assert!(m.is_exact());

        let m = best_match("Pizza!", ["Pizza", "pizza"]).unwrap();
        assert_eq!(m.name, "Pizza");
        assert!(!m.is_exact());
    }

    #[test]
    fn test_typo_matches_closest() {
        let m = best_match("piza", CATALOG.iter().copied()).unwrap();
        assert_eq!(m.name, "Pizza");
        assert!(!m.is_exact());
        assert!(m.meets(50.0));
    }

    #[test]
    fn test_word_order_ignored() {
        assert!(similarity("Bread Banana", "Banana Bread") >= 90.0);
    }

    #[test]
    fn test_unrelated_query_below_threshold() {
        let m = best_match("xxxx", CATALOG.iter().copied()).unwrap();
        assert!(!m.meets(50.0));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(best_match("Pizza", std::iter::empty()).is_none());
        assert_eq!(similarity("", "Pizza"), 0.0);
        assert_eq!(similarity("...", "Pizza"), 0.0);
    }

    #[test]
    fn test_ties_prefer_first_candidate() {
        let m = best_match("Pizza", ["Pizza", "pizza"]).unwrap();
        assert_eq!(m.name, "Pizza");
    }

    #[test]
    fn test_confidence_in_range() {
        for query in ["p", "Pepperoni", "salad caesar extra", "bread"] {
            for name in CATALOG {
                let c = similarity(query, name);
                assert!((0.0..=100.0).contains(&c), "{} vs {} = {}", query, name, c);
            }
        }
    }
}
