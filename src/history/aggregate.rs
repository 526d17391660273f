//! Running best/average bookkeeping for finished games.

use super::models::{HistoryRecord, Notification};

/// Folds a finished game's score into the existing record for its code length.
pub fn update(existing: Option<&HistoryRecord>, score: u32) -> (HistoryRecord, Notification) {
    let Some(&HistoryRecord {
        games_played,
        best,
        average,
    }) = existing
    else {
        return (HistoryRecord::first(score), Notification::None);
    };

    let new_score = f64::from(score);

    let (best, notification) = if score < best {
        (score, Notification::NewBest)
    } else if new_score < average {
        (best, Notification::BetterThanAverage)
    } else {
        (best, Notification::None)
    };

    // Must use the game count from before this game
    let n = f64::from(games_played);
    let average = (average * n + new_score) / (n + 1.0);

    let record = HistoryRecord {
        games_played: games_played.saturating_add(1),
        best,
        average,
    };

    (record, notification)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(games_played: u32, best: u32, average: f64) -> HistoryRecord {
        HistoryRecord {
            games_played,
            best,
            average,
        }
    }

    #[test]
    fn test_first_game() {
        let (updated, notification) = update(None, 7);
        assert_eq!(updated, record(1, 7, 7.0));
        assert_eq!(notification, Notification::None);
    }

    #[test]
    fn test_new_best() {
        let (updated, notification) = update(Some(&record(3, 5, 6.0)), 4);
        assert_eq!(updated, record(4, 4, 5.5));
        assert_eq!(notification, Notification::NewBest);
    }

    #[test]
    fn test_better_than_average() {
        let (updated, notification) = update(Some(&record(3, 5, 6.0)), 5);
        assert_eq!(updated, record(4, 5, 5.75));
        assert_eq!(notification, Notification::BetterThanAverage);
    }

    #[test]
    fn test_equal_to_average_is_quiet() {
        let (updated, notification) = update(Some(&record(3, 5, 6.0)), 6);
        assert_eq!(updated, record(4, 5, 6.0));
        assert_eq!(notification, Notification::None);
    }

    #[test]
    fn test_worse_than_average() {
        let (updated, notification) = update(Some(&record(1, 4, 4.0)), 10);
        assert_eq!(updated, record(2, 4, 7.0));
        assert_eq!(notification, Notification::None);
    }

    #[test]
    fn test_new_best_wins_over_better_than_average() {
        let (_, notification) = update(Some(&record(2, 3, 8.0)), 2);
        assert_eq!(notification, Notification::NewBest);
    }

    #[test]
    fn test_game_count_saturates() {
        let (updated, notification) = update(Some(&record(u32::MAX, 3, 5.0)), 4);
        assert_eq!(updated.games_played, u32::MAX);
        assert_eq!(updated.best, 3);
        assert!(updated.average < 5.0);
        assert!(updated.is_valid());
        assert_eq!(notification, Notification::BetterThanAverage);
    }

    #[test]
    fn test_sequence_matches_plain_mean() {
        let scores = [9, 4, 6, 12, 3, 5];
        let mut current = None;
        for score in scores {
            let (updated, _) = update(current.as_ref(), score);
            current = Some(updated);
        }

        let current = current.unwrap();
        let mean = scores.iter().sum::<u32>() as f64 / scores.len() as f64;
        assert_eq!(current.games_played, scores.len() as u32);
        assert_eq!(current.best, 3);
        assert!((current.average - mean).abs() < 1e-9);
        assert!(current.is_valid());
    }
}
