//! Board storage and turn-consistency validation.
//!
//! A [`Board`] can only be built empty or from cells that pass [`validate`],
//! so every board handed out by this crate is turn-consistent: X has played
//! either as many marks as O or exactly one more.

use super::types::{Cell, Mark};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of cells on a board.
pub const CELL_COUNT: usize = 9;

/// Why a set of cells is not a playable board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardRejection {
    /// The board does not have exactly nine cells.
    #[display("board must have exactly 9 elements")]
    WrongLength(usize),
    /// The given mark has played more often than alternation allows.
    #[display("{} has moved out of turn", _0)]
    OutOfTurn(Mark),
}

/// A caller-supplied board failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, Getters)]
#[display("{reason}")]
pub struct InvalidBoard {
    /// What was wrong with the board.
    reason: BoardRejection,
}

impl InvalidBoard {
    /// Creates a new validation failure.
    pub fn new(reason: BoardRejection) -> Self {
        Self { reason }
    }
}

/// Number of each kind of cell on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCounts {
    x: usize,
    o: usize,
    empty: usize,
}

impl PieceCounts {
    /// Counts the cells of a slice.
    pub fn of(cells: &[Cell]) -> Self {
        cells.iter().fold(Self::default(), |mut counts, cell| {
            match cell {
                Cell::Empty => counts.empty += 1,
                Cell::X => counts.x += 1,
                Cell::O => counts.o += 1,
            }
            counts
        })
    }

    /// Cells holding X.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Cells holding O.
    pub fn o(&self) -> usize {
        self.o
    }

    /// Cells nobody has played.
    pub fn empty(&self) -> usize {
        self.empty
    }

    /// Cells holding the given mark.
    pub fn of_mark(&self, mark: Mark) -> usize {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

/// Checks that `cells` describe a board reachable by X and O alternating,
/// X first.
///
/// Only counts are checked; geometrically impossible positions (two
/// completed lines, say) are accepted.
///
/// # Errors
///
/// Returns [`InvalidBoard`] if there are not exactly nine cells or if either
/// player has moved out of turn.
#[instrument(skip(cells), fields(len = cells.len()))]
pub fn validate(cells: &[Cell]) -> Result<(), InvalidBoard> {
    if cells.len() != CELL_COUNT {
        debug!("Rejecting board with wrong length");
        return Err(InvalidBoard::new(BoardRejection::WrongLength(cells.len())));
    }

    let counts = PieceCounts::of(cells);
    if counts.x() > counts.o() + 1 {
        debug!(x = counts.x(), o = counts.o(), "X is ahead by more than one");
        return Err(InvalidBoard::new(BoardRejection::OutOfTurn(Mark::X)));
    }
    if counts.o() > counts.x() {
        debug!(x = counts.x(), o = counts.o(), "O is ahead of X");
        return Err(InvalidBoard::new(BoardRejection::OutOfTurn(Mark::O)));
    }

    Ok(())
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from caller-supplied cells after validating them.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoard`] if the cells fail [`validate`].
    #[instrument(skip(cells))]
    pub fn from_cells(cells: &[Cell]) -> Result<Self, InvalidBoard> {
        validate(cells)?;
        let cells = <[Cell; CELL_COUNT]>::try_from(cells)
            .map_err(|_| InvalidBoard::new(BoardRejection::WrongLength(cells.len())))?;
        Ok(Self { cells })
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Indices of the empty cells, in ascending order.
    pub fn vacant_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    /// Counts each kind of cell.
    pub fn counts(&self) -> PieceCounts {
        PieceCounts::of(&self.cells)
    }

    /// Writes a mark into a cell. Legality is the engine's concern.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::from(mark);
        }
    }
}

impl TryFrom<&[Cell]> for Board {
    type Error = InvalidBoard;

    fn try_from(cells: &[Cell]) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = InvalidBoard;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        Self::from_cells(&cells)
    }
}

impl From<Board> for Vec<Cell> {
    fn from(board: Board) -> Self {
        board.cells.to_vec()
    }
}
