//! Castling bookkeeping: which kings and rooks have left their original squares.

use std::fmt;

use crate::color::Color;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both castling sides.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Recognize a castling side from the king's destination column.
    ///
    /// Only columns 6 (kingside) and 2 (queenside) are castling destinations.
    #[inline]
    pub const fn from_king_dest(col: u8) -> Option<CastleSide> {
        match col {
            6 => Some(CastleSide::KingSide),
            2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Column of the rook that castles on this side.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the rook lands on, which is also the square the king passes through.
    #[inline]
    pub const fn transit_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Return `(rook origin, rook destination)` on the given row.
    #[inline]
    pub fn rook_squares(self, row: u8) -> Option<(Square, Square)> {
        let src = Square::from_coords(row as i8, self.rook_col() as i8)?;
        let dst = Square::from_coords(row as i8, self.transit_col() as i8)?;
        Some((src, dst))
    }
}

/// Six "has moved" flags, two sides by {king, queenside rook, kingside rook}.
///
/// Bit layout: 0 = white king, 1 = white queenside rook, 2 = white kingside
/// rook, 3-5 the same for Black. A set bit means the piece has moved and
/// castling with it is no longer possible. Flags only ever get set by
/// playing moves; undoing a move restores the previous value wholesale.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleFlags(u8);

impl CastleFlags {
    /// Nothing has moved yet: the state at the start of a game.
    pub const UNMOVED: CastleFlags = CastleFlags(0);
    /// Every king and rook has moved; no castling for either side.
    pub const ALL_MOVED: CastleFlags = CastleFlags(0b11_1111);

    const KING: u8 = 0b001;
    const QUEEN_ROOK: u8 = 0b010;
    const KING_ROOK: u8 = 0b100;

    #[inline]
    const fn shift(color: Color) -> u8 {
        color.index() as u8 * 3
    }

    #[inline]
    const fn rook_bit(side: CastleSide) -> u8 {
        match side {
            CastleSide::KingSide => Self::KING_ROOK,
            CastleSide::QueenSide => Self::QUEEN_ROOK,
        }
    }

    /// Return the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Has `color`'s king moved?
    #[inline]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & (Self::KING << Self::shift(color)) != 0
    }

    /// Has `color`'s rook on the given side moved?
    #[inline]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.0 & (Self::rook_bit(side) << Self::shift(color)) != 0
    }

    /// Neither the king nor the rook on `side` has moved.
    #[inline]
    pub const fn can_castle(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    /// Return flags with `color`'s king marked as moved.
    #[inline]
    #[must_use]
    pub const fn with_king_moved(self, color: Color) -> CastleFlags {
        CastleFlags(self.0 | (Self::KING << Self::shift(color)))
    }

    /// Return flags with `color`'s rook on `side` marked as moved.
    #[inline]
    #[must_use]
    pub const fn with_rook_moved(self, color: Color, side: CastleSide) -> CastleFlags {
        CastleFlags(self.0 | (Self::rook_bit(side) << Self::shift(color)))
    }

    /// Render the castling moves still available, `KQkq`-style, `-` for none.
    pub fn rights_string(self) -> String {
        let mut s = String::with_capacity(4);
        for (color, king, queen) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
            if self.can_castle(color, CastleSide::KingSide) {
                s.push(king);
            }
            if self.can_castle(color, CastleSide::QueenSide) {
                s.push(queen);
            }
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }
}

impl fmt::Display for CastleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rights_string())
    }
}

impl fmt::Debug for CastleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleFlags({})", self.rights_string())
    }
}
