/// The outcome of scoring one food against one dietary index.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub index_name: String,

    /// Matched component labels, in the index's definition order.
    pub matched_components: Vec<String>,

    /// Sum of matched weights, capped at `max_score`.
    pub score: u32,

    pub max_score: u32,

    /// `score / max_score * 100`.
    pub percentage: f64,
}

impl ScoreResult {
    pub fn new(index_name: &str, matched_components: Vec<String>, score: u32, max_score: u32) -> Self {
        let percentage = if max_score > 0 {
            score as f64 / max_score as f64 * 100.0
        } else {
            0.0
        };
        Self {
            index_name: index_name.to_string(),
            matched_components,
            score,
            max_score,
            percentage,
        }
    }

    pub fn matched_count(&self) -> usize {
        self.matched_components.len()
    }

    pub fn is_matched(&self, label: &str) -> bool {
        self.matched_components.iter().any(|c| c == label)
    }
}

/// Scores for every index of a catalog, in index-definition order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreCard {
    results: Vec<ScoreResult>,
}

impl ScoreCard {
    pub fn new(results: Vec<ScoreResult>) -> Self {
        Self { results }
    }

    pub fn get(&self, index_name: &str) -> Option<&ScoreResult> {
        self.results.iter().find(|r| r.index_name == index_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreResult> {
        self.results.iter()
    }

    /// Results sorted by percentage, highest first.
    ///
    /// Equal percentages keep index-definition order.
    pub fn ranked(&self) -> Vec<&ScoreResult> {
        let mut ranked: Vec<&ScoreResult> = self.results.iter().collect();
        ranked.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl IntoIterator for ScoreCard {
    type Item = ScoreResult;
    type IntoIter = std::vec::IntoIter<ScoreResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}
