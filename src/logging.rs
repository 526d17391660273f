//! File logging setup.
//!
//! The terminal belongs to the game, so log output goes to a daily rolling
//! file instead of stderr.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_FILE_PREFIX: &str = "codebreaker.log";

/// Platform data directory for log files, e.g. `~/.local/share/codebreaker/logs`.
pub fn default_log_dir() -> Result<PathBuf> {
    let mut path = dirs::data_dir().context("Unable to determine data directory for your platform")?;
    path.push("codebreaker");
    path.push("logs");
    Ok(path)
}

/// Installs the global subscriber. Keep the returned guard alive until exit
/// so buffered lines get flushed.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!("Logging to {}", log_dir.display());
    Ok(guard)
}

/// Sets up file logging when possible. The game runs fine without a log
/// file, so failures are reported on stderr and play continues.
pub fn init_or_warn(log_dir: Option<PathBuf>) -> Option<WorkerGuard> {
    let result = match log_dir {
        Some(dir) => init(&dir),
        None => default_log_dir().and_then(|dir| init(&dir)),
    };

    match result {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_dir_is_namespaced() {
        if let Ok(dir) = default_log_dir() {
            assert!(dir.ends_with("codebreaker/logs"));
        }
    }

    #[test]
    fn test_init_creates_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("nested").join("logs");

        // Another test may already own the global subscriber
        let _guard = init(&log_dir);

        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_unusable_log_dir_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let log_dir = blocker.join("logs");

        assert!(init(&log_dir).is_err());
        assert!(init_or_warn(Some(log_dir.clone())).is_none());
        assert!(!log_dir.exists());
    }
}
