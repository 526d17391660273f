//! Round lifecycle: choosing a length, playing, recording the result.

use crate::{history, round::Round};

use super::super::{app::App, types::GameMode};

/// Helper struct for managing round state transitions.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Starts a round right away when the length is preset, otherwise asks for it.
    pub fn begin_setup(&mut self) {
        self.app.input.clear();
        self.app.last_result = None;

        match self.app.preset_length {
            Some(length) => self.start_round(length),
            None => {
                self.app.mode = GameMode::Setup;
                self.app.round = None;
                self.app.messages.clear();
            }
        }
    }

    pub fn start_round(&mut self, code_length: usize) {
        // Another session may have written to the store since the last load
        self.app.reload_history();
        self.app.messages = vec![history::describe(&self.app.history, code_length)];

        let code = self.app.codes.generate(code_length);
        tracing::info!("New round started with code length {}", code_length);
        self.app.log(format!("Starting new round ({} digits)", code_length));
        if self.app.reveal {
            self.app.log(format!("The code is {}", code));
        }

        self.app.round = Some(Round::new(code));
        self.app.last_result = None;
        self.app.input.clear();
        self.app.mode = GameMode::Game;
    }

    /// Scores a validated guess and records the game once it is solved.
    pub fn submit_guess(&mut self, guess: &str) {
        let Some(round) = self.app.round.as_mut() else {
            return;
        };

        let result = round.submit(guess);
        let code_length = round.code_length();
        let attempts = round.attempts();
        let solved = round.is_solved();

        self.app.log(format!(
            "Guess {}: {} {}",
            attempts,
            guess,
            result.feedback(code_length)
        ));
        self.app.input.clear();

        if solved {
            self.finish_round(code_length, attempts);
        }
    }

    fn finish_round(&mut self, code_length: usize, attempts: u32) {
        let recorded = history::record_game(
            &mut self.app.history,
            self.app.store.as_ref(),
            code_length,
            attempts,
        );

        for message in recorded.messages() {
            self.app.log(message);
        }
        self.app.messages.extend(recorded.messages());
        self.app.last_result = Some(recorded);
    }

    /// Drops an unfinished round and goes back to the menu.
    pub fn abandon_round(&mut self) {
        if self.app.round_in_progress() {
            let attempts = self.app.round.as_ref().map_or(0, |r| r.attempts());
            self.app
                .log(format!("Round abandoned after {} guesses", attempts));
        }
        self.app.round = None;
        self.app.last_result = None;
        self.app.messages.clear();
        self.app.input.clear();
        self.app.mode = GameMode::Menu;
    }
}
