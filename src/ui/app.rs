use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    code::{CodeGenerator, InputError, parse_code_length, validate_guess},
    history::{self, GameRecorded, History, HistoryStore},
    round::Round,
};

use super::types::{GameMode, InputStatus, LogBuffer, UiOptions};

/// Main application state container.
pub struct App {
    pub(in crate::ui) mode: GameMode,
    /// Screen to go back to when leaving the history view.
    pub(in crate::ui) return_mode: GameMode,
    pub(in crate::ui) input: String,
    pub(in crate::ui) preset_length: Option<usize>,
    pub(in crate::ui) reveal: bool,
    pub(in crate::ui) round: Option<Round>,
    pub(in crate::ui) last_result: Option<GameRecorded>,
    /// Lines shown next to the board: history summary, then the outcome.
    pub(in crate::ui) messages: Vec<String>,
    pub(in crate::ui) history: History,
    pub(in crate::ui) store: Box<dyn HistoryStore>,
    pub(in crate::ui) codes: Box<dyn CodeGenerator>,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(
        store: Box<dyn HistoryStore>,
        codes: Box<dyn CodeGenerator>,
        options: UiOptions,
        logs: LogBuffer,
    ) -> Self {
        let mut app = Self {
            mode: GameMode::Menu,
            return_mode: GameMode::Menu,
            input: String::new(),
            preset_length: options.length,
            reveal: options.reveal,
            round: None,
            last_result: None,
            messages: Vec::new(),
            history: History::new(),
            store,
            codes,
            logs,
        };
        app.reload_history();
        app
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = event::read()?;
            if let Event::Key(key) = event {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    /// Re-reads the history from the store, keeping an empty one on failure.
    pub(in crate::ui) fn reload_history(&mut self) {
        let (history, error) = history::load_or_empty(self.store.as_ref());
        self.history = history;
        if let Some(message) = error {
            self.log(message);
        }
    }

    pub(in crate::ui) fn round_in_progress(&self) -> bool {
        self.round.as_ref().is_some_and(|r| !r.is_solved())
    }

    /// Live validation of the input line for the current screen.
    pub(in crate::ui) fn input_status(&self) -> InputStatus {
        let outcome = match self.mode {
            GameMode::Setup => parse_code_length(&self.input).map(|_| ()),
            GameMode::Game => match self.round {
                Some(ref round) if !round.is_solved() => {
                    validate_guess(&self.input, round.code_length()).map(|_| ())
                }
                _ => return InputStatus::Incomplete,
            },
            _ => return InputStatus::Incomplete,
        };

        match outcome {
            Ok(()) => InputStatus::Valid,
            Err(InputError::Empty) => InputStatus::Incomplete,
            Err(e) => InputStatus::Invalid(e),
        }
    }
}
