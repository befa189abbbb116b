//! King movement rules, including castling.

use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Column the king starts on.
const KING_HOME_COL: u8 = 4;

/// Can a `color` king on `src` move to `dst`, ignoring self-check?
pub(super) fn king_can_move(pos: &Position, src: Square, dst: Square, color: Color) -> bool {
    let (d_row, d_col) = src.delta(dst);
    if d_row.abs() <= 1 && d_col.abs() <= 1 {
        return (d_row, d_col) != (0, 0);
    }
    castling_side(pos, src, dst, color).is_some()
}

/// Return the side being castled if `src` to `dst` is a permitted castling move.
///
/// Checked on the board before the move: the king and the rook on that side
/// have never moved, the king is not in check, the squares between them are
/// empty, the square the king crosses is not attacked, and the rook is
/// actually there. Whether the destination is attacked is left to the
/// self-check test that follows every move.
pub(super) fn castling_side(
    pos: &Position,
    src: Square,
    dst: Square,
    color: Color,
) -> Option<CastleSide> {
    let row = color.back_row();
    if src.row() != row || dst.row() != row || src.col() != KING_HOME_COL {
        return None;
    }
    let side = CastleSide::from_king_dest(dst.col())?;
    let flags = pos.castling();
    if !flags.can_castle(color, side) {
        return None;
    }

    let rook_sq = Square::from_coords(row as i8, side.rook_col() as i8)?;
    if pos.piece_at(rook_sq) != Some(Piece::new(PieceKind::Rook, color)) {
        return None;
    }

    let (lo, hi) = if side.rook_col() < KING_HOME_COL {
        (side.rook_col() + 1, KING_HOME_COL)
    } else {
        (KING_HOME_COL + 1, side.rook_col())
    };
    let between_clear = (lo..hi)
        .filter_map(|col| Square::from_coords(row as i8, col as i8))
        .all(|sq| pos.is_empty(sq));
    if !between_clear {
        return None;
    }

    if pos.is_attacked(src, color) {
        return None;
    }
    let transit = Square::from_coords(row as i8, side.transit_col() as i8);
    if pos.is_attacked_at(transit, color) {
        return None;
    }

    Some(side)
}
