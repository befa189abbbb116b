//! Error types for notation parsing, board validation, and game play.
//!
//! Rejected moves are not errors inside the rules engine: `attempt_move`
//! reports them as `false`. Only the [`Game`](crate::game::Game) layer lifts
//! a rejection into [`GameError`] for callers that want to use `?`.

use crate::chess_move::Move;
use crate::make_move::MoveOutcome;

/// A string that does not name a board square.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square: \"{found}\"")]
pub struct SquareParseError {
    /// The text that failed to parse.
    pub found: String,
}

/// Errors from parsing a move in coordinate notation (`e2e4`, `e7e8q`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    /// The text is not four or five characters long.
    #[error("expected 4 or 5 characters like 'e2e4' or 'e7e8q', found {length}")]
    WrongLength {
        /// Number of characters found.
        length: usize,
    },
    /// The origin or destination is not a board square.
    #[error(transparent)]
    InvalidSquare(#[from] SquareParseError),
    /// The fifth character is not one of q, r, b, n.
    #[error("invalid promotion piece '{character}', use q, r, b or n")]
    InvalidPromotion {
        /// The offending character.
        character: char,
    },
}

/// Errors from structural validation of a [`Position`](crate::position::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: u32,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}

/// Errors surfaced by [`Game`](crate::game::Game) when a move cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The move text could not be parsed.
    #[error("invalid move format: {0}")]
    Parse(#[from] MoveParseError),
    /// The move is well-formed but not legal in the current position.
    #[error("illegal move {mv}: {reason}")]
    Illegal {
        /// The rejected move.
        mv: Move,
        /// Where in the legality protocol it was rejected.
        reason: MoveOutcome,
    },
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
}
