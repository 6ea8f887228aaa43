//! Compact board notation for restoring a game from the command line.
//!
//! A board is written as its cells in row-major order, one character each:
//! `X` and `O` (either case) for marks and `.`, `_`, or `-` for empty cells.
//! Whitespace and `/` are ignored, so `"XO./.X./..O"` is the same board as
//! `"XO..X...O"`.

use derive_more::{Display, From};
use tictactoe_core::{Cell, GameEngine, InvalidBoard};
use tracing::instrument;

/// Board notation could not be turned into a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum NotationError {
    /// A character that is not a mark or an empty-cell marker.
    #[display("unexpected '{}' at cell {} (use X, O, or . for empty)", symbol, cell)]
    #[from(ignore)]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Cell index the character would have filled.
        cell: usize,
    },

    /// The cells parsed but do not form a valid board.
    #[display("{}", _0)]
    InvalidBoard(InvalidBoard),
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::InvalidBoard(err) => Some(err),
            NotationError::UnknownSymbol { .. } => None,
        }
    }
}

/// Parses notation into cells without validating them.
///
/// # Errors
///
/// Returns [`NotationError::UnknownSymbol`] for unrecognised characters.
pub fn parse_cells(notation: &str) -> Result<Vec<Cell>, NotationError> {
    notation
        .chars()
        .filter(|symbol| !symbol.is_whitespace() && *symbol != '/')
        .enumerate()
        .map(|(cell, symbol)| match symbol {
            'x' | 'X' => Ok(Cell::X),
            'o' | 'O' => Ok(Cell::O),
            '.' | '_' | '-' => Ok(Cell::Empty),
            _ => Err(NotationError::UnknownSymbol { symbol, cell }),
        })
        .collect()
}

/// Restores a game from board notation.
///
/// # Errors
///
/// Returns [`NotationError`] if the notation is malformed or describes a
/// board the engine rejects.
#[instrument]
pub fn parse_game(notation: &str) -> Result<GameEngine, NotationError> {
    let cells = parse_cells(notation)?;
    Ok(GameEngine::from_board(&cells)?)
}

/// Writes a board back out in notation, using `.` for empty cells.
pub fn to_notation(game: &GameEngine) -> String {
    game.board()
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        })
        .collect()
}
