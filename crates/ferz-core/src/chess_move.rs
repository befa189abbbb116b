//! Chess move representation and coordinate notation.

use std::fmt;
use std::str::FromStr;

use crate::error::{MoveParseError, SquareParseError};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Queen = 0,
    Rook = 1,
    Bishop = 2,
    Knight = 3,
}

impl PromotionPiece {
    /// All promotion pieces, in the order legal-move enumeration emits them.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }

    /// Return the lowercase notation letter for this promotion.
    pub const fn letter(self) -> char {
        match self {
            PromotionPiece::Queen => 'q',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Knight => 'n',
        }
    }

    /// Parse a promotion letter (case-insensitive).
    pub fn from_letter(c: char) -> Option<PromotionPiece> {
        match c.to_ascii_lowercase() {
            'q' => Some(PromotionPiece::Queen),
            'r' => Some(PromotionPiece::Rook),
            'b' => Some(PromotionPiece::Bishop),
            'n' => Some(PromotionPiece::Knight),
            _ => None,
        }
    }
}

/// A move from one square to another, with an optional promotion piece.
///
/// Castling is written as the king's two-column move (`e1g1`) and en passant
/// as the capturing pawn's diagonal step; the position works out the side
/// effects. A promotion piece is only meaningful for a pawn reaching the far
/// rank; a pawn that gets there without one becomes a queen.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    promotion: Option<PromotionPiece>,
}

impl Move {
    /// Placeholder used to fill unused [`MoveList`](crate::MoveList) slots. Never legal.
    pub const NULL: Move = Move::new(Square::A8, Square::A8);

    /// Create a move without a promotion piece.
    pub const fn new(source: Square, dest: Square) -> Move {
        Move {
            source,
            dest,
            promotion: None,
        }
    }

    /// Create a move that promotes to `promo`.
    pub const fn new_promotion(source: Square, dest: Square, promo: PromotionPiece) -> Move {
        Move {
            source,
            dest,
            promotion: Some(promo),
        }
    }

    /// The origin square.
    pub const fn source(self) -> Square {
        self.source
    }

    /// The destination square.
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// The requested promotion piece, if any.
    pub const fn promotion(self) -> Option<PromotionPiece> {
        self.promotion
    }

    /// Return this move with its promotion piece replaced.
    pub const fn with_promotion(self, promo: PromotionPiece) -> Move {
        Move::new_promotion(self.source, self.dest, promo)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation: origin, destination, optional promotion letter.
    fn from_str(s: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 && chars.len() != 5 {
            return Err(MoveParseError::WrongLength { length: chars.len() });
        }

        let square = |pair: &[char]| -> Result<Square, SquareParseError> {
            let text: String = pair.iter().collect();
            text.parse()
        };
        let source = square(&chars[0..2])?;
        let dest = square(&chars[2..4])?;

        match chars.get(4) {
            None => Ok(Move::new(source, dest)),
            Some(&c) => {
                let promo = PromotionPiece::from_letter(c)
                    .ok_or(MoveParseError::InvalidPromotion { character: c })?;
                Ok(Move::new_promotion(source, dest, promo))
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Move, PromotionPiece};
    use crate::error::MoveParseError;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn accessors() {
        let mv = Move::new(Square::E2, Square::E4);
        assert_eq!(mv.source(), Square::E2);
        assert_eq!(mv.dest(), Square::E4);
        assert_eq!(mv.promotion(), None);

        let promo = mv.with_promotion(PromotionPiece::Knight);
        assert_eq!(promo.promotion(), Some(PromotionPiece::Knight));
        assert_eq!(promo.source(), Square::E2);
    }

    #[test]
    fn parse_plain_move() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv, Move::new(Square::E2, Square::E4));
    }

    #[test]
    fn parse_promotion_letters() {
        for promo in PromotionPiece::ALL {
            let text = format!("a7a8{}", promo.letter());
            let mv: Move = text.parse().unwrap();
            assert_eq!(mv.promotion(), Some(promo));
            assert_eq!(mv.to_string(), text);
        }
        // Upper-case promotion letters are accepted too.
        let mv: Move = "e7e8Q".parse().unwrap();
        assert_eq!(mv.promotion(), Some(PromotionPiece::Queen));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "e2e".parse::<Move>(),
            Err(MoveParseError::WrongLength { length: 3 })
        );
        assert!(matches!(
            "e2e4qq".parse::<Move>(),
            Err(MoveParseError::WrongLength { length: 6 })
        ));
        assert!(matches!(
            "e9e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare(_))
        ));
        assert!(matches!(
            "i2e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare(_))
        ));
        assert_eq!(
            "e7e8k".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { character: 'k' })
        );
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", Move::new(Square::G1, Square::F3)), "g1f3");
        let mv = Move::new_promotion(Square::E7, Square::E8, PromotionPiece::Queen);
        assert_eq!(format!("{mv}"), "e7e8q");
        assert_eq!(format!("{mv:?}"), "Move(e7e8q)");
    }

    #[test]
    fn promotion_piece_to_piece_kind() {
        assert_eq!(PromotionPiece::Knight.to_piece_kind(), PieceKind::Knight);
        assert_eq!(PromotionPiece::Bishop.to_piece_kind(), PieceKind::Bishop);
        assert_eq!(PromotionPiece::Rook.to_piece_kind(), PieceKind::Rook);
        assert_eq!(PromotionPiece::Queen.to_piece_kind(), PieceKind::Queen);
    }

    #[test]
    fn equality_and_hash() {
        let mv1 = Move::new(Square::E2, Square::E4);
        let mv2 = Move::new(Square::E2, Square::E4);
        let mv3 = mv1.with_promotion(PromotionPiece::Queen);

        let mut set = HashSet::new();
        set.insert(mv1);
        set.insert(mv2);
        assert_eq!(set.len(), 1);
        set.insert(mv3);
        assert_eq!(set.len(), 2);
    }
}
