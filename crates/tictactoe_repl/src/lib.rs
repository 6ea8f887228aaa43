//! Line-oriented command interface for tic-tac-toe.
//!
//! # Architecture
//!
//! - **Command**: parses a line of text into a [`Command`]
//! - **Render**: board art and status line
//! - **Repl**: owns the current [`GameEngine`](tictactoe_core::GameEngine) and runs the loop
//! - **Config**: TOML settings for prompt, display, and logging
//! - **Notation**: restores a game from a compact board string
//!
//! # Example
//!
//! ```
//! use tictactoe_repl::{Repl, ReplConfig, Reply};
//!
//! let mut repl = Repl::new(ReplConfig::default());
//! assert_eq!(repl.eval("move X 4"), Reply::Message("OK".to_string()));
//! assert_eq!(repl.game_status(), "O goes next");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod notation;
mod render;
mod repl;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Commands
pub use command::{Command, CommandError, HELP};

// Crate-level exports - Configuration
pub use config::{ConfigError, ReplConfig};

// Crate-level exports - Board notation
pub use notation::{NotationError, parse_cells, parse_game, to_notation};

// Crate-level exports - Rendering
pub use render::{cell_symbol, draw_board, game_status};

// Crate-level exports - REPL
pub use repl::{Repl, Reply};
