//! Move execution, exact undo, and the legality commit protocol.

use std::fmt;

use tracing::{error, trace};

use crate::castle_rights::{CastleFlags, CastleSide};
use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Everything [`Position::undo`] needs to reverse one [`Position::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    moved: Piece,
    captured: Option<Piece>,
    castling: CastleFlags,
    en_passant: Option<Square>,
    en_passant_capture: bool,
}

impl Undo {
    /// The piece that moved, as it stood on the origin square.
    pub fn moved(&self) -> Piece {
        self.moved
    }

    /// The piece removed from the board, if any.
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Whether the capture was en passant.
    pub fn was_en_passant(&self) -> bool {
        self.en_passant_capture
    }
}

/// Where a move attempt stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// Every check passed.
    Legal,
    /// The origin square is empty or holds an opponent's piece.
    NotOwnPiece,
    /// The piece cannot reach the destination by its movement rules.
    IllegalForPiece,
    /// The move would leave the mover's own king attacked.
    LeavesKingInCheck,
}

impl MoveOutcome {
    /// Return `true` for [`MoveOutcome::Legal`].
    #[inline]
    pub const fn is_legal(self) -> bool {
        matches!(self, MoveOutcome::Legal)
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveOutcome::Legal => "legal move",
            MoveOutcome::NotOwnPiece => "no piece of the side to move on the origin square",
            MoveOutcome::IllegalForPiece => "the piece cannot move that way",
            MoveOutcome::LeavesKingInCheck => "the move leaves the king in check",
        };
        f.write_str(text)
    }
}

/// Return the castling side if `piece` moving `src` to `dst` is a castling king move.
fn castle_of(piece: Piece, src: Square, dst: Square) -> Option<CastleSide> {
    let (d_row, d_col) = src.delta(dst);
    if piece.kind() != PieceKind::King || d_row != 0 || d_col.abs() != 2 {
        return None;
    }
    CastleSide::from_king_dest(dst.col())
}

/// Square of the pawn taken by an en passant capture from `src` to `dst`.
fn en_passant_victim(src: Square, dst: Square) -> Option<Square> {
    Square::from_coords(src.row() as i8, dst.col() as i8)
}

/// Mark the rook on `sq` as moved if `sq` is its original corner.
fn mark_corner_rook(flags: CastleFlags, sq: Square, rook: Piece) -> CastleFlags {
    if rook.kind() != PieceKind::Rook || sq.row() != rook.color().back_row() {
        return flags;
    }
    CastleSide::ALL
        .into_iter()
        .filter(|side| side.rook_col() == sq.col())
        .fold(flags, |flags, side| flags.with_rook_moved(rook.color(), side))
}

impl Position {
    /// Apply `mv` to the board without any legality checks and without
    /// changing the side to move.
    ///
    /// Handles the side effects of the move: the rook hop when castling, the
    /// pawn taken en passant, promotion (to a queen when the move names no
    /// piece), the moved-piece flags, and the en passant target, which is set
    /// to the skipped square after a double pawn push and cleared otherwise.
    /// Pass the returned token to [`Position::undo`] to restore the board.
    ///
    /// # Panics
    ///
    /// Panics if the origin square is empty.
    pub fn execute(&mut self, mv: Move) -> Undo {
        let (src, dst) = (mv.source(), mv.dest());
        let moved = self.take(src).unwrap_or_else(|| {
            error!(%mv, "execute called with an empty origin square");
            panic!("cannot execute {mv}: no piece on {src}");
        });
        let color = moved.color();
        let mut undo = Undo {
            moved,
            captured: self.take(dst),
            castling: self.castling(),
            en_passant: self.en_passant(),
            en_passant_capture: false,
        };

        if moved.kind() == PieceKind::Pawn
            && undo.captured.is_none()
            && src.col() != dst.col()
            && self.en_passant() == Some(dst)
            && let Some(victim) = en_passant_victim(src, dst)
        {
            undo.captured = self.take(victim);
            undo.en_passant_capture = true;
        }

        if let Some(side) = castle_of(moved, src, dst)
            && let Some((rook_src, rook_dst)) = side.rook_squares(src.row())
        {
            let rook = self.take(rook_src);
            self.put(rook_dst, rook);
        }

        let placed = if moved.kind() == PieceKind::Pawn && dst.row() == color.promotion_row() {
            let promo = mv.promotion().unwrap_or(PromotionPiece::Queen);
            moved.with_kind(promo.to_piece_kind())
        } else {
            moved
        };
        self.put(dst, Some(placed));

        let mut flags = self.castling();
        if moved.kind() == PieceKind::King {
            flags = flags.with_king_moved(color);
        }
        flags = mark_corner_rook(flags, src, moved);
        if let Some(captured) = undo.captured {
            flags = mark_corner_rook(flags, dst, captured);
        }
        self.set_castling(flags);

        let (d_row, _) = src.delta(dst);
        let target = if moved.kind() == PieceKind::Pawn && d_row.abs() == 2 {
            src.offset(color.forward(), 0)
        } else {
            None
        };
        self.set_en_passant(target);

        undo
    }

    /// Reverse a prior [`Position::execute`] of `mv`.
    ///
    /// `undo` must be the token that execute returned, and no other change
    /// may have happened in between. The position afterwards equals the one
    /// before the execute in every field.
    pub fn undo(&mut self, mv: Move, undo: Undo) {
        let (src, dst) = (mv.source(), mv.dest());

        self.put(dst, None);
        self.put(src, Some(undo.moved));

        if undo.en_passant_capture {
            if let Some(victim) = en_passant_victim(src, dst) {
                self.put(victim, undo.captured);
            }
        } else {
            self.put(dst, undo.captured);
        }

        if let Some(side) = castle_of(undo.moved, src, dst)
            && let Some((rook_src, rook_dst)) = side.rook_squares(src.row())
        {
            let rook = self.take(rook_dst);
            self.put(rook_src, rook);
        }

        self.set_castling(undo.castling);
        self.set_en_passant(undo.en_passant);
    }

    /// Run the commit protocol for `mv` without committing it.
    ///
    /// Checks, in order: the origin holds a piece of the side to move, the
    /// move obeys that piece's movement rules, and executing it does not
    /// leave the mover's king attacked. Returns the first check that failed,
    /// or [`MoveOutcome::Legal`].
    pub fn check_move(&self, mv: Move) -> MoveOutcome {
        let mut scratch = *self;
        scratch.probe(mv)
    }

    /// Return `true` if `mv` is legal for the side to move.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.check_move(mv).is_legal()
    }

    /// Execute `mv`, hand the resulting board to `inspect`, then undo it.
    ///
    /// Returns `None` without touching the board if the origin does not
    /// hold a piece of the side to move or the piece cannot move that way.
    /// Self-check is not tested, so `inspect` can look at positions where
    /// the mover's king hangs.
    pub fn try_move<R>(&mut self, mv: Move, inspect: impl FnOnce(&Position) -> R) -> Option<R> {
        if self.structural_outcome(mv) != MoveOutcome::Legal {
            return None;
        }
        let undo = self.execute(mv);
        let result = inspect(self);
        self.undo(mv, undo);
        Some(result)
    }

    /// Play `mv` if it is legal and report how the attempt ended.
    ///
    /// On [`MoveOutcome::Legal`] the move stays on the board and the side to
    /// move flips. Any other outcome leaves the position exactly as it was.
    pub fn make_move(&mut self, mv: Move) -> MoveOutcome {
        self.run_protocol(mv, true)
    }

    /// Play `mv` if it is legal. Returns `false` and leaves the position
    /// unchanged otherwise.
    pub fn attempt_move(&mut self, mv: Move) -> bool {
        self.make_move(mv).is_legal()
    }

    /// Run the protocol on `self` and always roll back.
    pub(crate) fn probe(&mut self, mv: Move) -> MoveOutcome {
        self.run_protocol(mv, false)
    }

    fn structural_outcome(&self, mv: Move) -> MoveOutcome {
        let us = self.side_to_move();
        if !self.piece_at(mv.source()).is_some_and(|piece| piece.color() == us) {
            return MoveOutcome::NotOwnPiece;
        }
        if !self.is_pseudo_legal(mv) {
            return MoveOutcome::IllegalForPiece;
        }
        MoveOutcome::Legal
    }

    fn run_protocol(&mut self, mv: Move, commit: bool) -> MoveOutcome {
        let outcome = self.structural_outcome(mv);
        if outcome != MoveOutcome::Legal {
            if commit {
                trace!(%mv, %outcome, "move rejected");
            }
            return outcome;
        }

        let us: Color = self.side_to_move();
        let undo = self.execute(mv);
        if self.is_check(us) {
            self.undo(mv, undo);
            if commit {
                trace!(%mv, "move rejected: king left in check");
            }
            return MoveOutcome::LeavesKingInCheck;
        }

        if commit {
            self.set_side_to_move(!us);
            trace!(%mv, captured = ?undo.captured, "move committed");
        } else {
            self.undo(mv, undo);
        }
        MoveOutcome::Legal
    }
}
