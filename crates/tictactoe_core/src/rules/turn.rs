//! Turn inference for tic-tac-toe.

use super::super::{Board, Mark};
use super::win::find_winner;
use tracing::instrument;

/// Figures out whose move is next.
///
/// Returns `None` once the game is over: either someone has won or the
/// board is full (a draw). Otherwise O moves when X is ahead and X moves
/// when the counts are level.
#[instrument(level = "trace", skip(board))]
pub fn find_next_player(board: &Board) -> Option<Mark> {
    if find_winner(board).is_some() {
        return None;
    }

    let counts = board.counts();
    if counts.empty() == 0 {
        return None; // draw
    }

    if counts.x() > counts.o() {
        Some(Mark::O)
    } else {
        Some(Mark::X)
    }
}
