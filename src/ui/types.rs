use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use crate::code::InputError;

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.inner.lock().unwrap();
        buf.push_back(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.pop_front();
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap().iter().cloned().collect()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Input validation status.
#[derive(Debug, PartialEq, Eq)]
pub enum InputStatus {
    Incomplete,
    Invalid(InputError),
    Valid,
}

/// Which screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Instructions,
    /// Asking for the code length.
    Setup,
    Game,
    History,
}

/// Startup settings for the interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    pub length: Option<usize>,
    pub reveal: bool,
}
