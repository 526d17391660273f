use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Statistics for every completed game at one code length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub games_played: u32,
    /// Fewest guesses needed to crack a code of this length.
    pub best: u32,
    /// Mean number of guesses over all games played.
    pub average: f64,
}

impl HistoryRecord {
    /// Record for the first completed game at a code length.
    pub fn first(score: u32) -> Self {
        Self {
            games_played: 1,
            best: score,
            average: f64::from(score),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.games_played >= 1
            && self.best >= 1
            && self.average.is_finite()
            && self.average >= 1.0
    }
}

/// Per code length statistics, kept ordered so the history file is stable.
pub type History = BTreeMap<usize, HistoryRecord>;

/// What the player is told after a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    None,
    NewBest,
    BetterThanAverage,
}

/// One history entry flattened for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct StatsRow {
    pub code_length: usize,
    #[serde(flatten)]
    pub record: HistoryRecord,
}

pub fn stats_rows(history: &History) -> Vec<StatsRow> {
    history
        .iter()
        .map(|(&code_length, &record)| StatsRow {
            code_length,
            record,
        })
        .collect()
}
