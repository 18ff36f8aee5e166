//! Bout records extracted from query result pages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names of the published bout table, in output order
pub const COLUMNS: [&str; 15] = [
    "Date",
    "Day",
    "Rikishi 1 Rank",
    "Rikishi 1 Name",
    "Rikishi 1 ID",
    "Rikishi 1 Score",
    "Rikishi 1 Basho score",
    "Rikishi 1 Result",
    "Kimarite",
    "Rikishi 2 Result",
    "Rikishi 2 Rank",
    "Rikishi 2 Name",
    "Rikishi 2 ID",
    "Rikishi 2 Score",
    "Rikishi 2 Basho Score",
];

/// Image path markers that denote a win for the adjacent rikishi
const WIN_IMAGE_MARKERS: [&str; 3] = ["shiro", "fusensho", "hikiwake"];

/// Win/loss outcome of one side of a bout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoutResult {
    Win,
    Loss,
}

impl BoutResult {
    /// Classify a result image by its path
    pub fn from_image(src: &str) -> Self {
        if WIN_IMAGE_MARKERS.iter().any(|marker| src.contains(marker)) {
            Self::Win
        } else {
            Self::Loss
        }
    }
}

impl fmt::Display for BoutResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "win",
            Self::Loss => "loss",
        })
    }
}

/// One side of a bout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RikishiBout {
    pub rank: String,
    pub name: String,
    /// Rikishi id in the sumodb database
    pub id: String,
    /// Score immediately after the bout
    pub score: String,
    /// Cumulative win-loss tally within the basho
    pub basho_score: String,
}

/// One bout row from a query result page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoutRecord {
    pub date: String,
    pub day: String,
    pub rikishi1: RikishiBout,
    pub result1: BoutResult,
    pub kimarite: String,
    pub result2: BoutResult,
    pub rikishi2: RikishiBout,
}

impl BoutRecord {
    /// Field values in `COLUMNS` order
    pub fn row(&self) -> [String; 15] {
        [
            self.date.clone(),
            self.day.clone(),
            self.rikishi1.rank.clone(),
            self.rikishi1.name.clone(),
            self.rikishi1.id.clone(),
            self.rikishi1.score.clone(),
            self.rikishi1.basho_score.clone(),
            self.result1.to_string(),
            self.kimarite.clone(),
            self.result2.to_string(),
            self.rikishi2.rank.clone(),
            self.rikishi2.name.clone(),
            self.rikishi2.id.clone(),
            self.rikishi2.score.clone(),
            self.rikishi2.basho_score.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_markers() {
        assert_eq!(BoutResult::from_image("img/hoshi_shiro.gif"), BoutResult::Win);
        assert_eq!(BoutResult::from_image("img/hoshi_fusensho.gif"), BoutResult::Win);
        assert_eq!(BoutResult::from_image("img/hoshi_hikiwake.gif"), BoutResult::Win);
    }

    #[test]
    fn test_loss_without_marker() {
        assert_eq!(BoutResult::from_image("img/hoshi_kuro.gif"), BoutResult::Loss);
        assert_eq!(BoutResult::from_image("img/hoshi_fusenpai.gif"), BoutResult::Loss);
    }

    #[test]
    fn test_result_display() {
        assert_eq!(BoutResult::Win.to_string(), "win");
        assert_eq!(BoutResult::Loss.to_string(), "loss");
    }

    #[test]
    fn test_column_count() {
        assert_eq!(COLUMNS.len(), 15);
        assert_eq!(COLUMNS[8], "Kimarite");
    }
}
