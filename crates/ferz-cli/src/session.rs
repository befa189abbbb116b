//! Interactive game session over line-oriented input and output.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use ferz_core::{Game, MoveParseError};

use crate::command::{Command, parse_command};
use crate::error::CliError;

const PROMPT: &str = "Enter move (e.g., 'e2e4') or 'q' to quit, 'l' for legal moves: ";

const HELP: &str = "\
Commands:
  e2e4, e7e8q   play a move (promotion letter q, r, b or n; queen if omitted)
  l, legal      list legal moves
  b, board      show the board
  h, history    list moves played
  n, new        start a new game
  ?, help       show this help
  q, quit       leave";

/// Display knobs for a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board before every prompt.
    pub show_board: bool,
    /// List the legal moves after a rejected move.
    pub show_legal_on_error: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            show_legal_on_error: false,
        }
    }
}

impl SessionConfig {
    /// Read overrides from the process environment.
    ///
    /// `FERZ_QUIET=1` hides the board between moves and `FERZ_HINTS=1` lists
    /// legal moves after a rejected one.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = |key: &str| {
            lookup(key).is_some_and(|v| matches!(v.trim(), "1" | "true" | "yes"))
        };
        let mut config = Self::default();
        if enabled("FERZ_QUIET") {
            config.show_board = false;
        }
        if enabled("FERZ_HINTS") {
            config.show_legal_on_error = true;
        }
        config
    }
}

/// A game played over a reader and a writer.
///
/// Reads one command per line until `quit`, end of input, or the end of
/// the game.
pub struct Session<R, W> {
    input: R,
    output: W,
    game: Game,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with a fresh game.
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            game: Game::new(),
            config,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop.
    pub fn run(&mut self) -> Result<(), CliError> {
        info!(config = ?self.config, "session started");

        while !self.game.is_over() {
            self.show_position()?;
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                info!("input closed");
                return Ok(());
            }

            match parse_command(&line) {
                Ok(Command::Quit) => {
                    info!(plies = self.game.history().len(), "quit requested");
                    return Ok(());
                }
                Ok(cmd) => self.dispatch(cmd)?,
                Err(CliError::InvalidMove { text, source }) => {
                    warn!(%text, error = %source, "unparseable input");
                    self.report_parse_error(&source)?;
                }
                Err(e) => return Err(e),
            }
        }

        self.show_position()?;
        writeln!(self.output, "Game over: {}", self.game.state())?;
        Ok(())
    }

    fn dispatch(&mut self, cmd: Command) -> Result<(), CliError> {
        debug!(?cmd, "command");
        match cmd {
            Command::Legal => self.print_legal_moves()?,
            Command::Board => writeln!(self.output, "{}", self.game.position().pretty())?,
            Command::History => self.print_history()?,
            Command::New => self.game.reset(),
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Move(mv) => match self.game.play(mv) {
                Ok(()) => {}
                Err(err) => {
                    debug!(%err, "move rejected");
                    writeln!(self.output, "Invalid move.")?;
                    if self.config.show_legal_on_error {
                        self.print_legal_moves()?;
                    }
                }
            },
            Command::Quit | Command::Empty => {}
        }
        Ok(())
    }

    fn show_position(&mut self) -> Result<(), CliError> {
        if self.config.show_board {
            writeln!(self.output, "{}", self.game.position().pretty())?;
        }
        writeln!(self.output, "{}", self.game.state())?;
        Ok(())
    }

    fn report_parse_error(&mut self, err: &MoveParseError) -> Result<(), CliError> {
        let text = match err {
            MoveParseError::InvalidPromotion { .. } => "Invalid promotion piece. Use q, r, b, or n.",
            _ => "Invalid move format. Please use format like 'e2e4' or 'e7e8q' for promotion.",
        };
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn print_legal_moves(&mut self) -> Result<(), CliError> {
        let moves: Vec<String> = self.game.legal_moves().iter().map(|mv| mv.to_string()).collect();
        writeln!(self.output, "Legal moves: {}", moves.join(" "))?;
        Ok(())
    }

    fn print_history(&mut self) -> Result<(), CliError> {
        if self.game.history().is_empty() {
            writeln!(self.output, "No moves played.")?;
            return Ok(());
        }
        for (i, pair) in self.game.history().chunks(2).enumerate() {
            match pair {
                [white, black] => writeln!(self.output, "{}. {white} {black}", i + 1)?,
                [white] => writeln!(self.output, "{}. {white}", i + 1)?,
                _ => {}
            }
        }
        Ok(())
    }
}
