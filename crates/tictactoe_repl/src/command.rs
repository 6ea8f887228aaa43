//! Parsing of REPL command lines.
//!
//! Commands are case-insensitive and whitespace-separated:
//!
//! - `new` - start a new game
//! - `move X 0` - move X (or O) to location 0 (through 8)
//! - `help` - list the commands
//! - `exit` (or `quit`) - leave the REPL

use derive_more::Display;
use std::str::FromStr;
use tictactoe_core::Mark;
use tracing::instrument;

/// Command verbs understood by the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
enum Verb {
    New,
    Move,
    Help,
    #[strum(serialize = "exit", serialize = "quit")]
    Exit,
}

/// A parsed REPL command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Discard the current game and start over.
    New,
    /// Place `piece` at `position`.
    Move {
        /// The mark being played.
        piece: Mark,
        /// Target cell index. Range checks are left to the engine.
        position: isize,
    },
    /// Show the available commands.
    Help,
    /// Leave the REPL.
    Exit,
}

/// A command line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// The first word is not a known command.
    #[display("Invalid command: {}", _0)]
    UnknownCommand(String),

    /// `move` was given something other than X or O.
    #[display("move: {} is not a valid piece (must be X or O)", _0)]
    InvalidPiece(String),

    /// `move` was given a location that is not an integer.
    #[display("move: {} is not a valid location (must be between 0 and 8)", _0)]
    InvalidLocation(String),

    /// `move` had no piece.
    #[display("move: a piece is required (must be X or O)")]
    MissingPiece,

    /// `move` had no location.
    #[display("move: a location is required (must be between 0 and 8)")]
    MissingLocation,
}

impl std::error::Error for CommandError {}

impl Command {
    /// Parses one line of input.
    ///
    /// Returns `Ok(None)` for a blank line. Words after the last expected
    /// argument are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for unknown commands or malformed `move`
    /// arguments.
    #[instrument]
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.to_lowercase();
        let mut words = line.split_whitespace();

        let Some(name) = words.next() else {
            return Ok(None);
        };

        let verb =
            Verb::from_str(name).map_err(|_| CommandError::UnknownCommand(name.to_string()))?;

        let command = match verb {
            Verb::New => Command::New,
            Verb::Help => Command::Help,
            Verb::Exit => Command::Exit,
            Verb::Move => {
                let piece = words.next().ok_or(CommandError::MissingPiece)?;
                let piece = Mark::from_str(piece)
                    .map_err(|_| CommandError::InvalidPiece(piece.to_string()))?;

                let position = words.next().ok_or(CommandError::MissingLocation)?;
                let position = position
                    .parse::<isize>()
                    .map_err(|_| CommandError::InvalidLocation(position.to_string()))?;

                Command::Move { piece, position }
            }
        };

        Ok(Some(command))
    }
}

/// One-line summary of each command, shown by `help`.
pub const HELP: &str = "\
Commands:
  new          start a new game
  move X 0     move X (or O) to location 0 (through 8)
  help         show this message
  exit         leave the game";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!(Command::parse("new"), Ok(Some(Command::New)));
        assert_eq!(Command::parse("HELP"), Ok(Some(Command::Help)));
        assert_eq!(Command::parse("exit"), Ok(Some(Command::Exit)));
        assert_eq!(Command::parse("  Quit "), Ok(Some(Command::Exit)));
    }

    #[test]
    fn test_parse_move_any_case() {
        let expected = Command::Move {
            piece: Mark::O,
            position: 1,
        };
        assert_eq!(Command::parse("MOVE O 1"), Ok(Some(expected)));
        assert_eq!(Command::parse("move o 1 extra words"), Ok(Some(expected)));
    }

    #[test]
    fn test_parse_move_keeps_out_of_range_location() {
        assert_eq!(
            Command::parse("move x -1"),
            Ok(Some(Command::Move {
                piece: Mark::X,
                position: -1
            }))
        );
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \t"), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse("foo bar baz").unwrap_err().to_string(),
            "Invalid command: foo"
        );
        assert_eq!(
            Command::parse("move foo 0").unwrap_err().to_string(),
            "move: foo is not a valid piece (must be X or O)"
        );
        assert_eq!(
            Command::parse("move X blah").unwrap_err().to_string(),
            "move: blah is not a valid location (must be between 0 and 8)"
        );
        assert_eq!(Command::parse("move"), Err(CommandError::MissingPiece));
        assert_eq!(Command::parse("move x"), Err(CommandError::MissingLocation));
    }
}
