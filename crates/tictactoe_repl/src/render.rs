//! Text rendering of the board and game status.

use tictactoe_core::{Board, Cell, GameEngine, GameStatus};
use tracing::instrument;

const INDENT: &str = "  ";
const ROW_SEPARATOR: &str = "---+---+---";

/// Symbol drawn for a cell: `X`, `O`, or a space.
pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::X => 'X',
        Cell::O => 'O',
    }
}

/// Draws the board as monospace ASCII art.
///
/// Every line, including the last, ends with a newline:
///
/// ```text
///    X | O |
///   ---+---+---
///      | X |
///   ---+---+---
///      |   | O
/// ```
#[instrument(skip(board))]
pub fn draw_board(board: &Board) -> String {
    let separator = format!("{INDENT}{ROW_SEPARATOR}\n");
    board
        .cells()
        .chunks(3)
        .map(|row| {
            let row = row
                .iter()
                .map(|&cell| format!(" {} ", cell_symbol(cell)))
                .collect::<Vec<_>>()
                .join("|");
            format!("{INDENT}{row}\n")
        })
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Describes the state of the game in one line.
#[instrument(skip(game))]
pub fn game_status(game: &GameEngine) -> String {
    match game.status() {
        GameStatus::Won(winner) => format!("{} wins!", winner.name()),
        GameStatus::Draw => "The game is a draw".to_string(),
        GameStatus::InProgress(next) => format!("{} goes next", next.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Mark;

    #[test]
    fn test_draw_empty_board() {
        let expected = [
            "     |   |   \n",
            "  ---+---+---\n",
            "     |   |   \n",
            "  ---+---+---\n",
            "     |   |   \n",
        ]
        .concat();
        assert_eq!(draw_board(&Board::new()), expected);
    }

    #[test]
    fn test_draw_board_with_marks() {
        let mut game = GameEngine::new();
        game.make_move(Mark::X, 0).unwrap();
        game.make_move(Mark::O, 1).unwrap();
        game.make_move(Mark::X, 4).unwrap();
        game.make_move(Mark::O, 8).unwrap();

        let expected = [
            "   X | O |   \n",
            "  ---+---+---\n",
            "     | X |   \n",
            "  ---+---+---\n",
            "     |   | O \n",
        ]
        .concat();
        assert_eq!(draw_board(game.board()), expected);
    }

    #[test]
    fn test_status_lines() {
        let mut game = GameEngine::new();
        assert_eq!(game_status(&game), "X goes next");

        game.make_move(Mark::X, 0).unwrap();
        assert_eq!(game_status(&game), "O goes next");

        for (mark, position) in [(Mark::O, 3), (Mark::X, 1), (Mark::O, 4), (Mark::X, 2)] {
            game.make_move(mark, position).unwrap();
        }
        assert_eq!(game_status(&game), "X wins!");
    }
}
