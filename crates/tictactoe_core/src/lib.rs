//! Tic-tac-toe rules engine.
//!
//! This crate knows the rules and nothing else: no I/O, no rendering, no
//! opponent logic.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`] and [`Cell`]
//! - **Board**: nine cells, validated for turn consistency on construction
//! - **Rules**: pure winner detection and next-player inference
//! - **Engine**: [`GameEngine`], the only way to mutate a board
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, GameStatus, Mark};
//!
//! let mut game = GameEngine::new();
//! game.make_move(Mark::X, 4)?;
//! assert_eq!(game.status(), GameStatus::InProgress(Mark::O));
//!
//! let err = game.make_move(Mark::X, 0).unwrap_err();
//! assert_eq!(err.to_string(), "X has moved out of turn");
//! # Ok::<(), tictactoe_core::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod rules;
mod types;

// Crate-level exports - Domain types
pub use types::{Cell, Mark, mark_display_name};

// Crate-level exports - Board
pub use board::{Board, BoardRejection, CELL_COUNT, InvalidBoard, PieceCounts, validate};

// Crate-level exports - Rules
pub use rules::{TRIPLES, find_next_player, find_winner};

// Crate-level exports - Engine
pub use action::{InvalidMove, MoveRejection};
pub use engine::{GameEngine, GameStatus};
