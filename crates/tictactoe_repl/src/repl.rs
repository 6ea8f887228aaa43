//! Read-eval-print loop driving a single game at a time.

use super::command::{Command, HELP};
use super::config::ReplConfig;
use super::render::{draw_board, game_status};
use std::io::{self, BufRead, Write};
use tictactoe_core::GameEngine;
use tracing::{debug, info, instrument};

/// Response to one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the player.
    Message(String),
    /// Nothing to say; the line was blank.
    Silent,
    /// The player asked to leave.
    Exit,
}

/// Interactive tic-tac-toe session.
///
/// Owns the current game. `new` throws it away and starts another.
#[derive(Debug, Clone, Default)]
pub struct Repl {
    game: GameEngine,
    config: ReplConfig,
}

impl Repl {
    /// Creates a session with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: ReplConfig) -> Self {
        Self::with_engine(config, GameEngine::new())
    }

    /// Creates a session continuing an existing game.
    #[instrument(skip(config, game))]
    pub fn with_engine(config: ReplConfig, game: GameEngine) -> Self {
        Self { game, config }
    }

    /// Returns the current game.
    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Draws the current board as ASCII art.
    pub fn draw_board(&self) -> String {
        draw_board(self.game.board())
    }

    /// Describes the current game state in one line.
    pub fn game_status(&self) -> String {
        game_status(&self.game)
    }

    /// Parses and executes one command line.
    ///
    /// Successful commands answer `OK`; parse failures and refused moves
    /// answer with their reason.
    #[instrument(skip(self))]
    pub fn eval(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Reply::Silent,
            Err(err) => {
                debug!(%err, "Could not parse command");
                return Reply::Message(err.to_string());
            }
        };

        match command {
            Command::Exit => Reply::Exit,
            Command::Help => Reply::Message(HELP.to_string()),
            Command::New => {
                info!("Starting new game");
                self.game = GameEngine::new();
                Reply::Message("OK".to_string())
            }
            Command::Move { piece, position } => match self.game.make_move(piece, position) {
                Ok(()) => Reply::Message("OK".to_string()),
                Err(err) => {
                    debug!(diagnostic = %err.diagnostic(), "Move refused");
                    Reply::Message(err.to_string())
                }
            },
        }
    }

    /// Runs the loop until `exit` or end of input.
    ///
    /// Before each prompt the board and status are written to `output`
    /// (subject to configuration).
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading `input` or writing `output`.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        info!("REPL started");
        let mut line = String::new();

        loop {
            if *self.config.show_board() {
                writeln!(output, "{}", self.draw_board())?;
            }
            if *self.config.show_status() {
                writeln!(output, "{}", self.game_status())?;
            }
            write!(output, "{}", self.config.prompt())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input");
                writeln!(output)?;
                break;
            }

            match self.eval(&line) {
                Reply::Exit => break,
                Reply::Silent => {}
                Reply::Message(message) => writeln!(output, "{}\n", message)?,
            }
        }

        info!("REPL finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Mark;

    fn message(text: &str) -> Reply {
        Reply::Message(text.to_string())
    }

    #[test]
    fn test_eval_move_and_new() {
        let mut repl = Repl::default();
        assert_eq!(repl.eval("move x 4"), message("OK"));
        assert_eq!(repl.game().find_next_player(), Some(Mark::O));

        assert_eq!(repl.eval("new"), message("OK"));
        assert_eq!(repl.game(), &GameEngine::new());
    }

    #[test]
    fn test_eval_reports_engine_rejection() {
        let mut repl = Repl::default();
        assert_eq!(repl.eval("move o 4"), message("O has moved out of turn"));
        assert_eq!(repl.eval("move x 9"), message("invalid location"));
        assert_eq!(repl.eval("move x -1"), message("invalid location"));
    }

    #[test]
    fn test_eval_blank_help_exit() {
        let mut repl = Repl::default();
        assert_eq!(repl.eval("   "), Reply::Silent);
        assert_eq!(repl.eval("help"), message(HELP));
        assert_eq!(repl.eval("EXIT"), Reply::Exit);
    }

    #[test]
    fn test_run_until_exit() {
        let mut repl = Repl::default();
        let mut output = Vec::new();
        repl.run("move x 0\nexit\nmove o 1\n".as_bytes(), &mut output)
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("X goes next\n> OK\n\n"));
        assert!(output.contains("O goes next\n> "));
        assert_eq!(repl.game().find_next_player(), Some(Mark::O));
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let config = ReplConfig::from_toml("show_board = false\nprompt = \"$ \"").unwrap();
        let mut repl = Repl::new(config);
        let mut output = Vec::new();
        repl.run("bogus\n".as_bytes(), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "X goes next\n$ Invalid command: bogus\n\nX goes next\n$ \n"
        );
    }
}
