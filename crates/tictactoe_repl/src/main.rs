//! Tic-tac-toe - interactive terminal game.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_core::GameEngine;
use tictactoe_repl::{Cli, Repl, ReplConfig, parse_game};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ReplConfig::from_file(path)?,
        None => ReplConfig::default(),
    };
    if let Some(filter) = &cli.log_filter {
        config = config.with_log_filter(filter.as_str());
    }

    init_tracing(&config);

    let game = match &cli.board {
        Some(notation) => parse_game(notation)
            .with_context(|| format!("Cannot start from board {:?}", notation))?,
        None => GameEngine::new(),
    };

    run_repl(config, game)
}

/// Run the interactive loop on stdin/stdout
#[instrument(skip_all)]
fn run_repl(config: ReplConfig, game: GameEngine) -> Result<()> {
    info!("Starting tic-tac-toe REPL");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Repl::with_engine(config, game).run(stdin.lock(), stdout.lock())?;

    Ok(())
}

/// Install the tracing subscriber, logging to stderr so stdout stays clean
fn init_tracing(config: &ReplConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
