//! Session command parsing.

use ferz_core::Move;

use crate::error::CliError;

/// A parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `q` / `quit` -- leave the session.
    Quit,
    /// `l` / `legal` -- list the legal moves.
    Legal,
    /// `b` / `board` -- print the board.
    Board,
    /// `h` / `history` -- list the moves played so far.
    History,
    /// `n` / `new` -- start a new game.
    New,
    /// `?` / `help` -- describe the commands.
    Help,
    /// A move in coordinate notation.
    Move(Move),
    /// A blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`].
///
/// Only the first whitespace-separated token counts. Anything that is not
/// a command keyword is parsed as a move.
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let Some(token) = line.split_whitespace().next() else {
        return Ok(Command::Empty);
    };

    match token {
        "q" | "quit" => Ok(Command::Quit),
        "l" | "legal" => Ok(Command::Legal),
        "b" | "board" => Ok(Command::Board),
        "h" | "history" => Ok(Command::History),
        "n" | "new" => Ok(Command::New),
        "?" | "help" => Ok(Command::Help),
        _ => token
            .parse::<Move>()
            .map(Command::Move)
            .map_err(|source| CliError::InvalidMove {
                text: token.to_string(),
                source,
            }),
    }
}
