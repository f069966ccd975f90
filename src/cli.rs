//! Command-line interface for guess_the_number.

use clap::Parser;
use guess_the_number::Difficulty;
use std::path::PathBuf;

/// Guess the Number - terminal guessing game with difficulty presets
#[derive(Parser, Debug)]
#[command(name = "guess_the_number")]
#[command(about = "Guess the secret number before your attempts run out", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Difficulty preset to start with
    #[arg(short, long, value_enum, default_value = "medium")]
    pub difficulty: Difficulty,

    /// Seed for a reproducible sequence of secret numbers
    #[arg(long)]
    pub seed: Option<u64>,

    /// File the TUI writes its logs to
    #[arg(long, default_value = "guess_the_number.log")]
    pub log_file: PathBuf,
}
