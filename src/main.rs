use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use codebreaker::{
    args::Args,
    code::RandomCodes,
    history::{self, FileStore, HistoryStore},
    logging,
    plain::{self, PlainOptions},
    ui::{UiOptions, run_ui},
};

fn main() -> Result<()> {
    let args = Args::parse();

    let _guard = logging::init_or_warn(args.log_dir.clone());

    let history_path = match args.history_file.clone() {
        Some(path) => path,
        None => history::default_history_path()?,
    };
    let store = FileStore::new(history_path);
    tracing::info!("Using history file {}", store.path().display());

    if args.stats {
        return print_stats(&store, args.json);
    }

    if args.plain {
        let stdin = io::stdin();
        let mut codes = RandomCodes::new();
        let options = PlainOptions {
            length: args.length,
            reveal: args.reveal,
        };
        return plain::run(stdin.lock(), io::stdout(), &store, &mut codes, options);
    }

    let options = UiOptions {
        length: args.length,
        reveal: args.reveal,
    };
    run_ui(Box::new(store), Box::new(RandomCodes::new()), options)
}

fn print_stats(store: &FileStore, json: bool) -> Result<()> {
    let history = store.load()?;

    if json {
        let rows = history::stats_rows(&history);
        let text = serde_json::to_string_pretty(&rows).context("Failed to serialize history")?;
        println!("{}", text);
    } else {
        print!("{}", history::format_stats_table(&history));
    }

    Ok(())
}
