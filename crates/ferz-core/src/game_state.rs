//! Game-state classification: checkmate, stalemate, draws, check.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Status of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// The side to move is checkmated.
    Checkmate { winner: Color },
    /// The side to move has no legal move but is not in check.
    Stalemate,
    /// Neither side has enough material to checkmate.
    InsufficientMaterial,
    /// The given side is in check and has a way out.
    Check(Color),
    /// Play continues with the given side to move.
    Normal(Color),
}

impl GameState {
    /// Return `true` if no further moves can be played.
    pub const fn is_game_over(self) -> bool {
        matches!(
            self,
            GameState::Checkmate { .. } | GameState::Stalemate | GameState::InsufficientMaterial
        )
    }

    /// Return `true` for either kind of draw.
    pub const fn is_draw(self) -> bool {
        matches!(self, GameState::Stalemate | GameState::InsufficientMaterial)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            GameState::Stalemate => f.write_str("Draw by stalemate"),
            GameState::InsufficientMaterial => f.write_str("Draw by insufficient material"),
            GameState::Check(color) => write!(f, "{color} is in check"),
            GameState::Normal(color) => write!(f, "{color} to move"),
        }
    }
}

impl Position {
    /// The side to move is in check and has no legal move.
    pub fn is_checkmate(&self) -> bool {
        self.is_check(self.side_to_move()) && !self.has_legal_move()
    }

    /// The side to move is not in check and has no legal move.
    pub fn is_stalemate(&self) -> bool {
        !self.is_check(self.side_to_move()) && !self.has_legal_move()
    }

    /// No pawn, rook, or queen is left and at most one bishop or knight
    /// remains in total, so checkmate is impossible.
    ///
    /// Covers king against king and a lone minor piece against a bare king.
    /// Two minor pieces (even same-colored bishops on opposite sides) do not
    /// count as insufficient.
    pub fn has_insufficient_material(&self) -> bool {
        let mut minors = 0;
        for (_, piece) in self.pieces() {
            match piece.kind() {
                PieceKind::King => {}
                kind if kind.is_minor() => minors += 1,
                _ => return false,
            }
        }
        minors <= 1
    }

    /// Stalemate or insufficient material.
    pub fn is_draw(&self) -> bool {
        self.is_stalemate() || self.has_insufficient_material()
    }

    /// Classify the position. Checkmate wins over stalemate, and stalemate
    /// over insufficient material.
    pub fn game_state(&self) -> GameState {
        let us = self.side_to_move();
        let in_check = self.is_check(us);
        let can_move = self.has_legal_move();

        match (in_check, can_move) {
            (true, false) => GameState::Checkmate { winner: !us },
            (false, false) => GameState::Stalemate,
            _ if self.has_insufficient_material() => GameState::InsufficientMaterial,
            (true, true) => GameState::Check(us),
            (false, true) => GameState::Normal(us),
        }
    }
}
