//! Keyboard handling and input submission.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::code::{parse_code_length, validate_guess};

use super::super::{
    app::App,
    types::{GameMode, InputStatus},
};
use super::{GameHandler, HistoryHandler};

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('r' | 'R'), KeyModifiers::CONTROL) => {
                HistoryHandler::new(self.app).toggle_history_mode();
                return false;
            }

            _ => {}
        }

        match self.app.mode {
            GameMode::Menu => return self.handle_menu_key(key),
            GameMode::Instructions => self.app.mode = GameMode::Menu,
            GameMode::History => {
                if key.code == KeyCode::Esc {
                    HistoryHandler::new(self.app).exit_history_mode();
                }
            }
            GameMode::Setup | GameMode::Game => match key.code {
                KeyCode::Esc => GameHandler::new(self.app).abandon_round(),
                KeyCode::Enter => self.submit_input(),
                KeyCode::Backspace => {
                    self.app.input.pop();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.app.input.push(c)
                }
                _ => {}
            },
        }
        false
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('i' | 'I') => self.app.mode = GameMode::Instructions,
            KeyCode::Char('p' | 'P') => GameHandler::new(self.app).begin_setup(),
            KeyCode::Char('h' | 'H') => HistoryHandler::new(self.app).enter_history_mode(),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                self.app.log("Ok bye!");
                return true;
            }
            KeyCode::Char(c) => self.app.log(format!("I don't understand {:?}", c)),
            _ => {}
        }
        false
    }

    pub fn input_status(&self) -> InputStatus {
        self.app.input_status()
    }

    fn submit_input(&mut self) {
        // Enter on a solved board starts the next round
        if self.app.mode == GameMode::Game && !self.app.round_in_progress() {
            GameHandler::new(self.app).begin_setup();
            return;
        }

        if let InputStatus::Invalid(e) = self.input_status() {
            self.app
                .log(format!("Input rejected: {:?} ({})", self.app.input, e));
            return;
        }

        match self.app.mode {
            GameMode::Setup => {
                if let Ok(length) = parse_code_length(&self.app.input) {
                    GameHandler::new(self.app).start_round(length);
                }
            }
            GameMode::Game => {
                let Some(code_length) = self.app.round.as_ref().map(|r| r.code_length()) else {
                    return;
                };
                if let Ok(guess) = validate_guess(&self.app.input, code_length) {
                    let guess = guess.to_string();
                    GameHandler::new(self.app).submit_guess(&guess);
                }
            }
            _ => {}
        }
    }
}
