//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use tracing::instrument;

/// Index triples that win when filled by one mark, in the order they are checked.
pub const TRIPLES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first completed triple in [`TRIPLES`] order, or
/// `None` if no triple is completed.
#[instrument(level = "trace", skip(board))]
pub fn find_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    TRIPLES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a].mark()?;
        (cells[a] == cells[b] && cells[a] == cells[c]).then_some(mark)
    })
}
