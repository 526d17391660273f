pub mod aggregate;
pub mod models;
pub mod store;

pub use aggregate::update;
pub use models::{History, HistoryRecord, Notification, StatsRow, stats_rows};
pub use store::{FileStore, HistoryStore};

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

pub const HISTORY_FILE_NAME: &str = "CODEBREAKER.history";

/// Get the path to the history file in the player's home directory
pub fn default_history_path() -> Result<PathBuf> {
    let mut path = dirs::home_dir().context("Unable to determine your home directory")?;
    path.push(HISTORY_FILE_NAME);
    Ok(path)
}

/// Loads the history, falling back to an empty one when the store fails.
///
/// The second value is the message to show the player on failure.
pub fn load_or_empty(store: &dyn HistoryStore) -> (History, Option<String>) {
    match store.load() {
        Ok(history) => {
            info!("Loaded history for {} code lengths", history.len());
            (history, None)
        }
        Err(e) => {
            warn!("Continuing with empty history: {:#}", e);
            (History::new(), Some(e.to_string()))
        }
    }
}

/// Summary shown before a round at `code_length` starts.
pub fn describe(history: &History, code_length: usize) -> String {
    match history.get(&code_length) {
        Some(record) => format!(
            "The number of times you have tried codes of length {} is {}.  \
             Your average and best number of guesses are {} and {}, respectively.",
            code_length, record.games_played, record.average, record.best
        ),
        None => format!(
            "This is your first time trying a code of length {}",
            code_length
        ),
    }
}

/// Everything that came out of recording one finished game.
#[derive(Debug, Clone)]
pub struct GameRecorded {
    pub code_length: usize,
    pub score: u32,
    pub previous: Option<HistoryRecord>,
    pub record: HistoryRecord,
    pub notification: Notification,
    pub save_error: Option<String>,
}

impl GameRecorded {
    /// Player-facing lines, in the order they should be shown.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = vec![format!(
            "You cracked the code!  Number of guesses: {}",
            self.score
        )];

        match (self.notification, self.previous) {
            (Notification::NewBest, _) => messages.push(format!(
                "{} is a new best score for codes of length {}!",
                self.score, self.code_length
            )),
            (Notification::BetterThanAverage, Some(previous)) => messages.push(format!(
                "{} is better than your average score of {} for codes of length {}!",
                self.score, previous.average, self.code_length
            )),
            _ => {}
        }

        if let Some(ref error) = self.save_error {
            messages.push(error.clone());
        }

        messages
    }
}

/// Folds a finished game into `history` and persists the whole history.
///
/// A failed save is reported in the result; the in-memory history is
/// updated either way.
pub fn record_game(
    history: &mut History,
    store: &dyn HistoryStore,
    code_length: usize,
    score: u32,
) -> GameRecorded {
    let previous = history.get(&code_length).copied();
    let (record, notification) = update(previous.as_ref(), score);
    history.insert(code_length, record);

    info!(
        "Recorded game: length {}, {} guesses, {:?}",
        code_length, score, notification
    );

    let save_error = match store.save(history) {
        Ok(()) => None,
        Err(e) => {
            warn!("Failed to save history: {:#}", e);
            Some(e.to_string())
        }
    };

    GameRecorded {
        code_length,
        score,
        previous,
        record,
        notification,
        save_error,
    }
}

/// Plain text table of the history, used by `--stats`.
pub fn format_stats_table(history: &History) -> String {
    if history.is_empty() {
        return String::from("No games recorded yet\n");
    }

    let mut out = format!("{:>6}  {:>6}  {:>5}  {:>8}\n", "length", "games", "best", "average");
    for (code_length, record) in history {
        out.push_str(&format!(
            "{:>6}  {:>6}  {:>5}  {:>8.2}\n",
            code_length, record.games_played, record.best, record.average
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::store::testing::MemoryStore;
    use super::*;

    fn record(games_played: u32, best: u32, average: f64) -> HistoryRecord {
        HistoryRecord {
            games_played,
            best,
            average,
        }
    }

    #[test]
    fn test_default_history_path_ends_with_file_name() {
        if let Ok(path) = default_history_path() {
            assert!(path.ends_with(HISTORY_FILE_NAME));
        }
    }

    #[test]
    fn test_load_or_empty_falls_back() {
        let store = MemoryStore {
            fail_load: true,
            ..MemoryStore::default()
        };
        let (history, message) = load_or_empty(&store);
        assert!(history.is_empty());
        assert_eq!(
            message.as_deref(),
            Some("Uh oh, your history file could not be read")
        );
    }

    #[test]
    fn test_describe() {
        let mut history = History::new();
        assert_eq!(
            describe(&history, 4),
            "This is your first time trying a code of length 4"
        );

        history.insert(4, record(3, 5, 5.5));
        assert_eq!(
            describe(&history, 4),
            "The number of times you have tried codes of length 4 is 3.  \
             Your average and best number of guesses are 5.5 and 5, respectively."
        );
    }

    #[test]
    fn test_record_first_game_persists() {
        let store = MemoryStore::default();
        let mut history = History::new();

        let recorded = record_game(&mut history, &store, 4, 7);

        assert_eq!(recorded.notification, Notification::None);
        assert_eq!(recorded.record, record(1, 7, 7.0));
        assert_eq!(history[&4], recorded.record);
        assert_eq!(*store.saved.borrow(), history);
        assert_eq!(
            recorded.messages(),
            vec!["You cracked the code!  Number of guesses: 7"]
        );
    }

    #[test]
    fn test_record_rewrites_all_lengths() {
        let mut history = History::new();
        history.insert(3, record(2, 4, 5.0));
        history.insert(4, record(3, 5, 6.0));
        let store = MemoryStore::with_history(history.clone());

        let recorded = record_game(&mut history, &store, 4, 4);

        assert_eq!(recorded.notification, Notification::NewBest);
        let saved = store.saved.borrow();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[&3], record(2, 4, 5.0));
        assert_eq!(saved[&4], record(4, 4, 5.5));
        assert_eq!(
            recorded.messages()[1],
            "4 is a new best score for codes of length 4!"
        );
    }

    #[test]
    fn test_better_than_average_message_uses_previous_average() {
        let mut history = History::new();
        history.insert(4, record(3, 5, 6.0));
        let store = MemoryStore::default();

        let recorded = record_game(&mut history, &store, 4, 5);

        assert_eq!(recorded.notification, Notification::BetterThanAverage);
        assert_eq!(
            recorded.messages()[1],
            "5 is better than your average score of 6 for codes of length 4!"
        );
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        let store = MemoryStore {
            fail_save: true,
            ..MemoryStore::default()
        };
        let mut history = History::new();

        let recorded = record_game(&mut history, &store, 5, 9);

        assert_eq!(history[&5], record(1, 9, 9.0));
        assert_eq!(
            recorded.save_error.as_deref(),
            Some("Uh oh, the history file couldn't be updated")
        );
        assert_eq!(
            recorded.messages().last().map(String::as_str),
            Some("Uh oh, the history file couldn't be updated")
        );
    }

    #[test]
    fn test_format_stats_table() {
        assert_eq!(format_stats_table(&History::new()), "No games recorded yet\n");

        let mut history = History::new();
        history.insert(4, record(4, 4, 5.5));
        let table = format_stats_table(&history);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("average"));
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["4", "4", "4", "5.50"]);
    }
}
