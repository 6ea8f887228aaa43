//! Tic-tac-toe game engine.
//!
//! [`GameEngine`] owns one board and is the only way to change it. Whether
//! the game is ongoing, won, or drawn is never stored; it is read off the
//! board by [`GameEngine::find_winner`] and [`GameEngine::find_next_player`]:
//!
//! - `find_next_player()` is `Some` while the game is in progress,
//! - `find_winner()` is `Some` once someone has won,
//! - both are `None` when the game is a draw.

use super::action::{InvalidMove, MoveRejection};
use super::board::{Board, CELL_COUNT, InvalidBoard, validate};
use super::rules;
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Where a game stands, derived from its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the mark is the player to move.
    InProgress(Mark),
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Checks if no further moves are possible.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
}

impl GameEngine {
    /// Starts a new game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a game from previously saved cells.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoard`] unless there are exactly nine cells and no
    /// player has moved twice in a row.
    #[instrument(skip(cells))]
    pub fn from_board(cells: &[Cell]) -> Result<Self, InvalidBoard> {
        let board = Board::from_cells(cells)?;
        debug!(?board, "Restored game");
        Ok(Self { board })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Finds the winner of the game, if there is one.
    pub fn find_winner(&self) -> Option<Mark> {
        rules::find_winner(&self.board)
    }

    /// Figures out which player moves next, or `None` if the game is over.
    pub fn find_next_player(&self) -> Option<Mark> {
        rules::find_next_player(&self.board)
    }

    /// Folds winner and next player into a single status.
    pub fn status(&self) -> GameStatus {
        match (self.find_winner(), self.find_next_player()) {
            (Some(winner), _) => GameStatus::Won(winner),
            (None, Some(next)) => GameStatus::InProgress(next),
            (None, None) => GameStatus::Draw,
        }
    }

    /// Moves a player's piece onto a cell.
    ///
    /// Conditions are checked in order and the first failure is reported:
    /// a piece must be given, the game must not be won or drawn, it must be
    /// that piece's turn, and the position must be an empty cell (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] carrying the reason, piece, and position. The
    /// board is untouched whenever an error is returned.
    pub fn make_move(
        &mut self,
        piece: impl Into<Option<Mark>>,
        position: isize,
    ) -> Result<(), InvalidMove> {
        self.place(piece.into(), position)
    }

    #[instrument(skip(self))]
    fn place(&mut self, piece: Option<Mark>, position: isize) -> Result<(), InvalidMove> {
        let (mark, index) = self.check_move(piece, position).map_err(|reason| {
            debug!(%reason, "Move rejected");
            InvalidMove::new(reason, piece, position)
        })?;

        self.board.place(index, mark);
        debug!(status = ?self.status(), "Move applied");
        debug_assert!(
            validate(self.board.cells()).is_ok(),
            "Turn consistency violated"
        );
        Ok(())
    }

    fn check_move(
        &self,
        piece: Option<Mark>,
        position: isize,
    ) -> Result<(Mark, usize), MoveRejection> {
        let piece = piece.ok_or(MoveRejection::PieceUnspecified)?;

        if let Some(winner) = self.find_winner() {
            return Err(MoveRejection::AlreadyWon(winner));
        }

        let next = self.find_next_player().ok_or(MoveRejection::Draw)?;
        if piece != next {
            return Err(MoveRejection::OutOfTurn(piece));
        }

        let index = usize::try_from(position)
            .ok()
            .filter(|&index| index < CELL_COUNT)
            .ok_or(MoveRejection::InvalidLocation)?;
        if !self.board.is_vacant(index) {
            return Err(MoveRejection::Occupied);
        }

        Ok((piece, index))
    }
}
