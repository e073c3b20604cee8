use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::models::{DietaryIndex, ScoreResult};
use crate::scoring::constants::{
    EXCELLENT_THRESHOLD, GOOD_THRESHOLD, IMPROVABLE_THRESHOLD, MAX_SUGGESTIONS,
    NEGATIVE_RATIONALES, POSITIVE_RATIONALES,
};

/// Qualitative band for a percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment {
    Excellent,
    Good,
    RoomForImprovement,
    SignificantImprovementNeeded,
}

impl Assessment {
    /// Bands are inclusive at their lower bound.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= EXCELLENT_THRESHOLD {
            Assessment::Excellent
        } else if percentage >= GOOD_THRESHOLD {
            Assessment::Good
        } else if percentage >= IMPROVABLE_THRESHOLD {
            Assessment::RoomForImprovement
        } else {
            Assessment::SignificantImprovementNeeded
        }
    }

    fn headline(self, index_name: &str, percentage: f64) -> String {
        match self {
            Assessment::Excellent => format!(
                "**Excellent news!** Your food scores {:.1}% on the {} scale, which is considered very good.",
                percentage, index_name
            ),
            Assessment::Good => format!(
                "**Good progress!** Your food scores {:.1}% on the {} scale, which is moderately healthy.",
                percentage, index_name
            ),
            Assessment::RoomForImprovement => format!(
                "**Room for improvement.** Your food scores {:.1}% on the {} scale, indicating some healthy elements but with potential for enhancement.",
                percentage, index_name
            ),
            Assessment::SignificantImprovementNeeded => format!(
                "**Significant improvement needed.** Your food scores {:.1}% on the {} scale, suggesting this food doesn't align well with this dietary pattern.",
                percentage, index_name
            ),
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Assessment::Excellent => "excellent",
            Assessment::Good => "good",
            Assessment::RoomForImprovement => "room for improvement",
            Assessment::SignificantImprovementNeeded => "significant improvement needed",
        };
        f.write_str(label)
    }
}

/// One line of the component summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryItem {
    /// Title-cased canonical category.
    pub label: String,
    pub rationale: String,
}

/// The canonical categories of a food split by whether they count against it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentSummary {
    pub beneficial: Vec<SummaryItem>,
    pub concerning: Vec<SummaryItem>,
}

/// Curated rationale text for index components.
#[derive(Debug, Clone)]
pub struct ExplanationTables {
    positive: HashMap<String, String>,
    negative: HashMap<String, String>,
}

impl ExplanationTables {
    pub fn standard() -> Self {
        Self::new(POSITIVE_RATIONALES.iter().copied(), NEGATIVE_RATIONALES.iter().copied())
    }

    pub fn new<'s>(
        positive: impl IntoIterator<Item = (&'s str, &'s str)>,
        negative: impl IntoIterator<Item = (&'s str, &'s str)>,
    ) -> Self {
        let own = |(k, v): (&str, &str)| (k.to_string(), v.to_string());
        Self {
            positive: positive.into_iter().map(own).collect(),
            negative: negative.into_iter().map(own).collect(),
        }
    }

    pub fn positive_rationale(&self, label: &str) -> Option<&str> {
        self.positive.get(label).map(String::as_str)
    }

    pub fn negative_rationale(&self, label: &str) -> Option<&str> {
        self.negative.get(label).map(String::as_str)
    }

    /// Doctor-style feedback for one index result.
    ///
    /// Matched components are split into favorable and reverse-scored
    /// groups. Up to three unmatched, favorable components are suggested
    /// as additions; reverse-scored absentees are never suggested.
    pub fn explain(&self, index: &DietaryIndex, result: &ScoreResult) -> String {
        let mut lines = Vec::new();

        let assessment = Assessment::from_percentage(result.percentage);
        lines.push(assessment.headline(index.name(), result.percentage));
        lines.push(format!("\n*{}.*", index.description()));

        let (negative, positive): (Vec<&String>, Vec<&String>) = result
            .matched_components
            .iter()
            .partition(|c| index.is_reverse_scored(c));

        if !positive.is_empty() {
            lines.push("\n**What's working well:**".to_string());
            for comp in positive {
                lines.push(match self.positive_rationale(comp) {
                    Some(why) => format!("• Your food contains **{}** - {}", comp.to_lowercase(), why),
                    None => format!(
                        "• Your food contains **{}** which contributes positively to this dietary pattern",
                        comp.to_lowercase()
                    ),
                });
            }
        }

        if !negative.is_empty() {
            lines.push("\n**Areas of concern:**".to_string());
            for comp in negative {
                lines.push(match self.negative_rationale(comp) {
                    Some(why) => format!("• Your food contains **{}** - {}", comp.to_lowercase(), why),
                    None => format!(
                        "• Your food contains **{}** which may not align with this dietary pattern",
                        comp.to_lowercase()
                    ),
                });
            }
        }

        let missing = improvable_components(index, result);
        if !missing.is_empty() {
            lines.push("\n**To improve your score, consider adding:**".to_string());
            for comp in missing.iter().take(MAX_SUGGESTIONS) {
                lines.push(match self.positive_rationale(comp) {
                    Some(why) => format!("• **{}** - {}", comp.to_lowercase(), why),
                    None => format!("• **{}** would benefit this dietary pattern", comp.to_lowercase()),
                });
            }
            if missing.len() > MAX_SUGGESTIONS {
                lines.push(format!(
                    "• ... and {} other beneficial components",
                    missing.len() - MAX_SUGGESTIONS
                ));
            }
        }

        lines.join("\n")
    }

    /// Split a food's canonical categories into beneficial and concerning groups.
    ///
    /// `reverse_scored` holds component labels as written in the indices;
    /// membership and rationale lookup ignore case.
    pub fn summarize(
        &self,
        categories: &BTreeSet<String>,
        reverse_scored: &BTreeSet<String>,
    ) -> ComponentSummary {
        let concerning_labels: BTreeSet<String> =
            reverse_scored.iter().map(|l| l.to_lowercase()).collect();
        let positive = lowercase_keys(&self.positive);
        let negative = lowercase_keys(&self.negative);

        let mut summary = ComponentSummary::default();
        for category in categories {
            let key = category.to_lowercase();
            if concerning_labels.contains(&key) {
                summary.concerning.push(SummaryItem {
                    label: title_case(category),
                    rationale: negative
                        .get(&key)
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "should be consumed in moderation".to_string()),
                });
            } else {
                summary.beneficial.push(SummaryItem {
                    label: title_case(category),
                    rationale: positive
                        .get(&key)
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "generally beneficial for health".to_string()),
                });
            }
        }
        summary
    }
}

impl Default for ExplanationTables {
    fn default() -> Self {
        Self::standard()
    }
}

/// Unmatched components worth adding, in definition order.
pub fn improvable_components<'a>(index: &'a DietaryIndex, result: &ScoreResult) -> Vec<&'a str> {
    index
        .component_labels()
        .filter(|c| !result.is_matched(c) && !index.is_reverse_scored(c))
        .collect()
}

fn lowercase_keys(table: &HashMap<String, String>) -> HashMap<String, &str> {
    table
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.as_str()))
        .collect()
}

/// Capitalize the first letter of every alphabetic run.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn index(labels: &[&str], reverse: &[&str], max_score: u32) -> DietaryIndex {
        let components: IndexMap<String, u32> = labels.iter().map(|l| (l.to_string(), 1)).collect();
        DietaryIndex::new(
            "TEST",
            components,
            max_score,
            "A test index",
            reverse.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    fn result(matched: &[&str], score: u32, max_score: u32) -> ScoreResult {
        ScoreResult::new("TEST", matched.iter().map(|s| s.to_string()).collect(), score, max_score)
    }

    #[test]
    fn test_bands_inclusive() {
        assert_eq!(Assessment::from_percentage(70.0), Assessment::Excellent);
        assert_eq!(Assessment::from_percentage(69.99), Assessment::Good);
        assert_eq!(Assessment::from_percentage(50.0), Assessment::Good);
        assert_eq!(Assessment::from_percentage(30.0), Assessment::RoomForImprovement);
        assert_eq!(Assessment::from_percentage(29.9), Assessment::SignificantImprovementNeeded);
        assert_eq!(Assessment::from_percentage(0.0), Assessment::SignificantImprovementNeeded);
    }

    #[test]
    fn test_positive_and_negative_split() {
        let idx = index(&["Fruit", "Sodium", "mystery"], &["Sodium"], 3);
        let tables = ExplanationTables::standard();
        let text = tables.explain(&idx, &result(&["Fruit", "Sodium"], 2, 3));

        let working = text.find("What's working well").unwrap();
        let concern = text.find("Areas of concern").unwrap();
        let fruit = text.find("**fruit** - fruits are rich").unwrap();
        let sodium = text.find("**sodium** - excess sodium").unwrap();
        assert!(working < fruit && fruit < concern && concern < sodium);
        assert!(text.contains("• **mystery** would benefit this dietary pattern"));
        assert!(text.starts_with("**Good progress!** Your food scores 66.7% on the TEST scale"));
        assert!(text.contains("\n*A test index.*"));
    }

    #[test]
    fn test_generic_fallbacks() {
        let idx = index(&["mystery", "odd"], &["odd"], 2);
        let tables = ExplanationTables::standard();
        let text = tables.explain(&idx, &result(&["mystery", "odd"], 2, 2));

        assert!(text.contains("**mystery** which contributes positively to this dietary pattern"));
        assert!(text.contains("**odd** which may not align with this dietary pattern"));
        assert!(!text.contains("consider adding"));
    }

    #[test]
    fn test_suggestions_limited_to_three() {
        let idx = index(&["a", "b", "c", "d", "e", "Sodium"], &["Sodium"], 6);
        let tables = ExplanationTables::standard();
        let text = tables.explain(&idx, &result(&[], 0, 6));

        assert!(text.contains("• **a** would benefit"));
        assert!(text.contains("• **c** would benefit"));
        assert!(!text.contains("• **d**"));
        assert!(text.contains("• ... and 2 other beneficial components"));
        assert!(!text.contains("sodium"));
        assert!(!text.contains("What's working well"));
    }

    #[test]
    fn test_improvable_excludes_reverse_scored() {
        let idx = index(&["Fruit", "Sodium", "nuts"], &["Sodium"], 3);
        let missing = improvable_components(&idx, &result(&["Fruit"], 1, 3));
        assert_eq!(missing, vec!["nuts"]);
    }

    #[test]
    fn test_summarize() {
        let tables = ExplanationTables::standard();
        let categories: BTreeSet<String> = ["other vegetables", "red & processed meat", "sodium", "mystery"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let reverse: BTreeSet<String> = ["red & processed meat", "Sodium"].iter().map(|s| s.to_string()).collect();

        let summary = tables.summarize(&categories, &reverse);

        let beneficial: Vec<&str> = summary.beneficial.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(beneficial, vec!["Mystery", "Other Vegetables"]);
        assert_eq!(summary.beneficial[0].rationale, "generally beneficial for health");

        let concerning: Vec<&str> = summary.concerning.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(concerning, vec!["Red & Processed Meat", "Sodium"]);
        assert_eq!(
            summary.concerning[1].rationale,
            "excess sodium can contribute to high blood pressure"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("poultry (not fried, skinless)"), "Poultry (Not Fried, Skinless)");
        assert_eq!(title_case("n-3 fats"), "N-3 Fats");
        assert_eq!(title_case("PUFA"), "Pufa");
    }
}
