//! Property tests for engine invariants over arbitrary play.

use proptest::prelude::*;
use tictactoe_core::{Cell, GameEngine, GameStatus, Mark, PieceCounts, validate};

/// Strategy: any nine cells, consistent or not.
fn cells_strategy() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec(
        prop_oneof![Just(Cell::Empty), Just(Cell::X), Just(Cell::O)],
        9,
    )
}

/// Strategy: a sequence of (piece, position) attempts, legal or not.
fn attempts_strategy() -> impl Strategy<Value = Vec<(Option<Mark>, isize)>> {
    prop::collection::vec(
        (
            prop_oneof![Just(None::<Mark>), Just(Some(Mark::X)), Just(Some(Mark::O))],
            -2isize..11,
        ),
        0..40,
    )
}

/// Exactly one of won, drawn, in progress holds.
fn status_is_exclusive(game: &GameEngine) -> bool {
    let winner = game.find_winner();
    let next = game.find_next_player();
    let drawn = winner.is_none() && next.is_none();
    [winner.is_some(), drawn, next.is_some()]
        .iter()
        .filter(|&&holds| holds)
        .count()
        == 1
}

proptest! {
    /// Accepted boards always have X level with O or one ahead.
    #[test]
    fn validate_enforces_alternation(cells in cells_strategy()) {
        let counts = PieceCounts::of(&cells);
        let alternating = counts.x() == counts.o() || counts.x() == counts.o() + 1;
        prop_assert_eq!(validate(&cells).is_ok(), alternating);
    }

    /// Legal play from empty never produces a board validation would reject.
    #[test]
    fn legal_play_stays_valid(picks in prop::collection::vec(0usize..9, 0..9)) {
        let mut game = GameEngine::new();
        for pick in picks {
            let Some(next) = game.find_next_player() else { break };
            let vacant: Vec<usize> = game.board().vacant_indices().collect();
            let index = vacant[pick % vacant.len()];
            let position = isize::try_from(index).unwrap();
            prop_assert!(game.make_move(next, position).is_ok());
            prop_assert!(validate(game.board().cells()).is_ok());
            prop_assert!(status_is_exclusive(&game));
            prop_assert!(GameEngine::from_board(game.board().cells()).is_ok());
        }
    }

    /// Rejected moves never touch the board; accepted ones fill exactly one cell.
    #[test]
    fn moves_are_atomic(attempts in attempts_strategy()) {
        let mut game = GameEngine::new();
        for (piece, position) in attempts {
            let before = game.clone();
            match game.make_move(piece, position) {
                Ok(()) => {
                    let filled = before.board().counts().empty() - game.board().counts().empty();
                    prop_assert_eq!(filled, 1);
                    prop_assert_eq!(before.status(), GameStatus::InProgress(piece.unwrap()));
                }
                Err(err) => {
                    prop_assert_eq!(&game, &before);
                    prop_assert_eq!(err.piece(), piece);
                    prop_assert_eq!(err.position(), position);
                }
            }
            prop_assert!(status_is_exclusive(&game));
        }
    }
}
