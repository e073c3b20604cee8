use std::path::Path;

use crate::error::Result;
use crate::models::ScoreCard;

/// One row of the results table, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub index: String,
    pub score: String,
    pub percentage: String,
    pub matched: usize,
}

pub const SCORE_HEADERS: [&str; 4] = ["Dietary Index", "Score", "Percentage", "Matched Components"];

/// Results table rows, highest percentage first.
pub fn score_rows(card: &ScoreCard) -> Vec<ScoreRow> {
    card.ranked()
        .into_iter()
        .map(|r| ScoreRow {
            index: r.index_name.clone(),
            score: format!("{}/{}", r.score, r.max_score),
            percentage: format!("{:.1}%", r.percentage),
            matched: r.matched_count(),
        })
        .collect()
}

/// Write the results table to a CSV file.
pub fn write_scores_csv(card: &ScoreCard, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(SCORE_HEADERS)?;
    for row in score_rows(card) {
        wtr.write_record([
            row.index,
            row.score,
            row.percentage,
            row.matched.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoreResult;

    fn sample_card() -> ScoreCard {
        ScoreCard::new(vec![
            ScoreResult::new("DASH", vec!["other vegetables".to_string()], 1, 8),
            ScoreResult::new("DII", vec!["Energy (kcal)".to_string()], 1, 45),
            ScoreResult::new("MIND", vec!["Fruit".to_string(), "nuts".to_string()], 2, 15),
        ])
    }

    #[test]
    fn test_score_rows_ranked() {
        let rows = score_rows(&sample_card());
        let order: Vec<&str> = rows.iter().map(|r| r.index.as_str()).collect();
        assert_eq!(order, vec!["MIND", "DASH", "DII"]);
        assert_eq!(rows[0].score, "2/15");
        assert_eq!(rows[0].percentage, "13.3%");
        assert_eq!(rows[0].matched, 2);
    }

    #[test]
    fn test_write_scores_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        write_scores_csv(&sample_card(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Dietary Index,Score,Percentage,Matched Components");
        assert_eq!(lines[1], "MIND,2/15,13.3%,2");
        assert_eq!(lines.len(), 4);
    }
}
