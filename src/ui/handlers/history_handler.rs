//! History view state management.

use super::super::{app::App, types::GameMode};

/// Helper struct for entering and leaving the history view.
pub struct HistoryHandler<'a> {
    app: &'a mut App,
}

impl<'a> HistoryHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn toggle_history_mode(&mut self) {
        if self.app.mode == GameMode::History {
            self.exit_history_mode();
        } else {
            self.enter_history_mode();
        }
    }

    /// Shows the history, re-reading the store when no round is running.
    pub fn enter_history_mode(&mut self) {
        self.app.log("Switching to history mode");
        self.app.return_mode = self.app.mode;
        self.app.mode = GameMode::History;

        if !self.app.round_in_progress() {
            self.app.reload_history();
        }
    }

    pub fn exit_history_mode(&mut self) {
        self.app.mode = self.app.return_mode;
        self.app.log("Leaving history mode");
    }
}
