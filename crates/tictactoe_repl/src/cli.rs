//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe - play a game at the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe by typing commands", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start from a saved position, e.g. "XO..X...." (X, O, and . for empty)
    #[arg(short, long)]
    pub board: Option<String>,

    /// Tracing filter, used when RUST_LOG is unset (overrides the config file)
    #[arg(long)]
    pub log_filter: Option<String>,
}
