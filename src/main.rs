//! Guess the Number - terminal guessing game.
//!
//! Pick a difficulty, read the hints, and find the secret number before
//! your attempts run out.

#![warn(missing_docs)]

mod cli;
mod tui;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use guess_the_number::{RandomSecret, SecretSource, SeededSecret};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    init_tracing(&cli.log_file)?;

    info!(
        difficulty = cli.difficulty.label(),
        seed = ?cli.seed,
        "Launching Guess the Number"
    );

    let source: Box<dyn SecretSource> = match cli.seed {
        Some(seed) => Box::new(SeededSecret::new(seed)),
        None => Box::new(RandomSecret::new()),
    };

    tui::run(tui::App::new(cli.difficulty, source))
}

/// Routes log output to a file so it cannot corrupt the alternate screen.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
