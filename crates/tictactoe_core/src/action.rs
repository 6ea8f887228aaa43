//! Rejected moves.
//!
//! A rejected move is an expected outcome, not a fault: the engine reports
//! why it refused along with exactly what was attempted, and leaves the
//! board as it was.

use super::types::{Mark, mark_display_name};
use derive_more::{Display, Error};

/// Why the engine refused a move.
///
/// The display text of each variant is stable and safe to show to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// No piece was given.
    #[display("piece must be specified")]
    PieceUnspecified,

    /// The game has already been won.
    #[display("{} has already won", _0)]
    AlreadyWon(Mark),

    /// The board is full with no winner.
    #[display("the game is a draw")]
    Draw,

    /// The piece is not the one expected to move next.
    #[display("{} has moved out of turn", _0)]
    OutOfTurn(Mark),

    /// The position is not a cell index (0-8).
    #[display("invalid location")]
    InvalidLocation,

    /// The target cell already holds a mark.
    #[display("the space is already occupied")]
    Occupied,
}

/// An attempted move was illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{reason}")]
pub struct InvalidMove {
    reason: MoveRejection,
    piece: Option<Mark>,
    position: isize,
}

impl InvalidMove {
    /// Creates a new rejection for `piece` moving to `position`.
    pub fn new(reason: MoveRejection, piece: Option<Mark>, position: isize) -> Self {
        Self {
            reason,
            piece,
            position,
        }
    }

    /// Why the move was refused.
    pub fn reason(&self) -> MoveRejection {
        self.reason
    }

    /// The piece that attempted to move.
    pub fn piece(&self) -> Option<Mark> {
        self.piece
    }

    /// The position the piece attempted to move to.
    pub fn position(&self) -> isize {
        self.position
    }

    /// Reason plus the attempted move, e.g. `the space is already occupied: O at idx 4`.
    pub fn diagnostic(&self) -> String {
        format!(
            "{}: {} at idx {}",
            self.reason,
            mark_display_name(self.piece),
            self.position
        )
    }
}
