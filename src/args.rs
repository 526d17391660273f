use std::path::PathBuf;

use clap::Parser;

/// Guess the secret numeric code.
#[derive(Parser, Debug)]
#[command(name = "codebreaker", version)]
pub struct Args {
    /// Use the line-by-line prompt instead of the full-screen interface
    #[arg(long)]
    pub plain: bool,

    /// Code length to play, skipping the length question
    #[arg(long, value_name = "DIGITS", value_parser = parse_length)]
    pub length: Option<usize>,

    /// History file (defaults to ~/CODEBREAKER.history)
    #[arg(long, value_name = "PATH", env = "CODEBREAKER_HISTORY")]
    pub history_file: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, value_name = "PATH", env = "CODEBREAKER_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Print your statistics per code length and exit
    #[arg(long)]
    pub stats: bool,

    /// Print statistics as JSON (with --stats)
    #[arg(long, requires = "stats")]
    pub json: bool,

    /// Show the secret code while playing
    #[arg(long)]
    pub reveal: bool,
}

fn parse_length(s: &str) -> Result<usize, String> {
    crate::code::parse_code_length(s).map_err(|e| e.to_string())
}
