//! Flat-file persistence for the per-length history.
//!
//! Each line holds one code length as `L:N:B:A`: the code length, games
//! played, best score and average score. Blank lines are ignored and
//! malformed lines are skipped with a warning.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, warn};

use super::models::{History, HistoryRecord};

/// Durable home of the history.
pub trait HistoryStore {
    fn load(&self) -> Result<History>;
    fn save(&self, history: &History) -> Result<()>;
}

/// History kept in a single text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for FileStore {
    fn load(&self) -> Result<History> {
        if !self.path.exists() {
            info!("Creating empty history file at {}", self.path.display());
            fs::write(&self.path, "")
                .with_context(|| format!("Failed to create {}", self.path.display()))
                .context("Uh oh, I couldn't create a history file for you")?;
            return Ok(History::new());
        }

        let content = fs::read(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))
            .context("Uh oh, your history file could not be read")?;

        Ok(parse_history_bytes(&content))
    }

    fn save(&self, history: &History) -> Result<()> {
        fs::write(&self.path, format_history(history))
            .with_context(|| format!("Failed to write {}", self.path.display()))
            .context("Uh oh, the history file couldn't be updated")?;

        info!(
            "Saved {} history entries to {}",
            history.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Parses the whole file, skipping lines that don't hold a valid record.
pub fn parse_history(content: &str) -> History {
    parse_history_bytes(content.as_bytes())
}

/// Like [`parse_history`], but each line is decoded on its own so a stray
/// non UTF-8 byte only costs the line it sits on.
pub fn parse_history_bytes(content: &[u8]) -> History {
    let mut history = History::new();

    for (index, raw) in content.split(|&b| b == b'\n').enumerate() {
        let Ok(line) = std::str::from_utf8(raw) else {
            warn!("Skipping history line {}: not valid UTF-8", index + 1);
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok((code_length, record)) => {
                if history.insert(code_length, record).is_some() {
                    warn!(
                        "History line {} repeats code length {}, keeping the later entry",
                        index + 1,
                        code_length
                    );
                }
            }
            Err(e) => warn!("Skipping history line {}: {:#}", index + 1, e),
        }
    }

    history
}

fn parse_line(line: &str) -> Result<(usize, HistoryRecord)> {
    let fields: Vec<&str> = line.split(':').map(str::trim).collect();
    let &[code_length, games_played, best, average] = fields.as_slice() else {
        bail!("expected 4 fields, found {}", fields.len());
    };

    let code_length: usize = code_length
        .parse()
        .with_context(|| format!("invalid code length {:?}", code_length))?;
    let record = HistoryRecord {
        games_played: games_played
            .parse()
            .with_context(|| format!("invalid game count {:?}", games_played))?,
        best: best
            .parse()
            .with_context(|| format!("invalid best score {:?}", best))?,
        average: average
            .parse()
            .with_context(|| format!("invalid average {:?}", average))?,
    };

    if code_length < 2 {
        return Err(anyhow!("code length {} is too short", code_length));
    }
    if !record.is_valid() {
        return Err(anyhow!("out of range values {:?}", record));
    }

    Ok((code_length, record))
}

/// Renders the history in file form, one line per code length.
pub fn format_history(history: &History) -> String {
    history
        .iter()
        .map(|(code_length, record)| {
            format!(
                "{}:{}:{}:{}\n",
                code_length, record.games_played, record.best, record.average
            )
        })
        .collect()
}
