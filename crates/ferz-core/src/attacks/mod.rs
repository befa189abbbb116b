//! Attack and check detection.

mod tables;

pub(crate) use self::tables::{DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL};

use tracing::error;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Return `true` if any piece of the side opposing `defending` attacks `sq`.
    ///
    /// Attack patterns are cast outward from the target square: pawn
    /// diagonals, knight jumps, the first piece along each of the eight rays,
    /// and the adjacent squares for the enemy king. Read-only, so it is safe
    /// to call between an `execute` and its matching `undo`.
    pub fn is_attacked(&self, sq: Square, defending: Color) -> bool {
        let attacker = defending.flip();

        // A pawn of `attacker` hits `sq` from one step behind it, relative to
        // the attacker's direction of travel.
        let pawn = Piece::new(PieceKind::Pawn, attacker);
        let pawn_row = -attacker.forward();
        if [-1, 1]
            .into_iter()
            .filter_map(|dc| sq.offset(pawn_row, dc))
            .any(|from| self.piece_at(from) == Some(pawn))
        {
            return true;
        }

        if self.leaper_attacks(sq, &KNIGHT_OFFSETS, Piece::new(PieceKind::Knight, attacker)) {
            return true;
        }

        let queen = Piece::new(PieceKind::Queen, attacker);
        let rook = Piece::new(PieceKind::Rook, attacker);
        let bishop = Piece::new(PieceKind::Bishop, attacker);
        for (d_row, d_col) in ORTHOGONAL {
            if let Some(piece) = self.first_piece_along(sq, d_row, d_col)
                && (piece == rook || piece == queen)
            {
                return true;
            }
        }
        for (d_row, d_col) in DIAGONAL {
            if let Some(piece) = self.first_piece_along(sq, d_row, d_col)
                && (piece == bishop || piece == queen)
            {
                return true;
            }
        }

        self.leaper_attacks(sq, &KING_OFFSETS, Piece::new(PieceKind::King, attacker))
    }

    /// Like [`is_attacked`](Position::is_attacked), but an off-board square is never attacked.
    pub fn is_attacked_at(&self, sq: Option<Square>, defending: Color) -> bool {
        sq.is_some_and(|sq| self.is_attacked(sq, defending))
    }

    /// Return `true` if `color`'s king is attacked.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king. Every position reached through legal
    /// play has one, so a missing king means move execution went wrong.
    pub fn is_check(&self, color: Color) -> bool {
        let king_sq = self.king_square(color).unwrap_or_else(|| {
            error!(%color, "position has no king");
            panic!("position must have a {color} king");
        });
        self.is_attacked(king_sq, color)
    }

    /// Return `true` if `target` sits on one of `offsets` from `sq`.
    fn leaper_attacks(&self, sq: Square, offsets: &[(i8, i8)], target: Piece) -> bool {
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| sq.offset(d_row, d_col))
            .any(|from| self.piece_at(from) == Some(target))
    }

    /// Walk from `sq` (exclusive) in one direction; return the first piece met.
    fn first_piece_along(&self, sq: Square, d_row: i8, d_col: i8) -> Option<Piece> {
        let mut cur = sq.offset(d_row, d_col);
        while let Some(at) = cur {
            if let Some(piece) = self.piece_at(at) {
                return Some(piece);
            }
            cur = at.offset(d_row, d_col);
        }
        None
    }
}
