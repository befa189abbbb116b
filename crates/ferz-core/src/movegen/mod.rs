//! Per-piece movement rules and legal move enumeration.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::chess_move::{Move, PromotionPiece};
use crate::make_move::MoveOutcome;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use self::king::king_can_move;
use self::knights::knight_can_move;
use self::pawns::pawn_can_move;
use self::sliders::{bishop_can_move, queen_can_move, rook_can_move};

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
pub struct MoveList {
    moves: [Move; 256],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; 256],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < 256);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Return `true` if `mv` is in the list.
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// Iterate over the moves in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Position {
    /// Return `true` if the piece on the origin square may move to the
    /// destination by its movement rules, ignoring whether its own king is
    /// left in check.
    ///
    /// An empty origin, a null move, or a destination holding a piece of the
    /// mover's own side is never pseudo-legal. A promotion piece on a move
    /// that is not a pawn reaching the far rank is ignored.
    pub fn is_pseudo_legal(&self, mv: Move) -> bool {
        let (src, dst) = (mv.source(), mv.dest());
        let Some(piece) = self.piece_at(src) else {
            return false;
        };
        if src == dst {
            return false;
        }
        if self.piece_at(dst).is_some_and(|target| target.color() == piece.color()) {
            return false;
        }

        let color = piece.color();
        match piece.kind() {
            PieceKind::Pawn => pawn_can_move(self, src, dst, color),
            PieceKind::Knight => knight_can_move(src, dst),
            PieceKind::Bishop => bishop_can_move(self, src, dst),
            PieceKind::Rook => rook_can_move(self, src, dst),
            PieceKind::Queen => queen_can_move(self, src, dst),
            PieceKind::King => king_can_move(self, src, dst, color),
        }
    }

    /// Enumerate every legal move for the side to move.
    ///
    /// Origins are scanned in square index order (a8 to h1) and, for each,
    /// destinations in the same order. A pawn reaching the far rank yields
    /// four moves, promoting to queen, rook, bishop, then knight. The
    /// speculative execute/undo runs on a private copy, so `self` is never
    /// touched.
    pub fn legal_moves(&self) -> MoveList {
        let mut list = MoveList::new();
        let mut scratch = *self;
        let us = self.side_to_move();

        for (src, piece) in self.pieces().filter(|&(_, piece)| piece.color() == us) {
            let promotes_on = (piece.kind() == PieceKind::Pawn).then(|| us.promotion_row());
            for dst in Square::all() {
                let mv = Move::new(src, dst);
                if scratch.probe(mv) != MoveOutcome::Legal {
                    continue;
                }
                if promotes_on == Some(dst.row()) {
                    for promo in PromotionPiece::ALL {
                        list.push(mv.with_promotion(promo));
                    }
                } else {
                    list.push(mv);
                }
            }
        }

        debug_assert_eq!(scratch, *self, "speculative moves must leave no trace");
        list
    }

    /// Return `true` if the side to move has at least one legal move.
    pub fn has_legal_move(&self) -> bool {
        let mut scratch = *self;
        let us = self.side_to_move();
        self.pieces()
            .filter(|&(_, piece)| piece.color() == us)
            .any(|(src, _)| Square::all().any(|dst| scratch.probe(Move::new(src, dst)).is_legal()))
    }
}
