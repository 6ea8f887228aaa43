//! Game rules for tic-tac-toe.
//!
//! Pure functions deriving game facts from a board. Nothing here mutates
//! state or remembers history; turn order is recovered from piece counts.

pub mod turn;
pub mod win;

pub use turn::find_next_player;
pub use win::{TRIPLES, find_winner};
