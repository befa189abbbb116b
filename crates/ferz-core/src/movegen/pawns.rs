//! Pawn movement rules.

use crate::color::Color;
use crate::position::Position;
use crate::square::Square;

/// Can a `color` pawn on `src` move to `dst`, ignoring self-check?
///
/// Pushes need empty squares; diagonal steps need an enemy piece or the
/// en passant target. The caller has already ruled out a friendly piece on `dst`.
pub(super) fn pawn_can_move(pos: &Position, src: Square, dst: Square, color: Color) -> bool {
    let forward = color.forward();
    let (d_row, d_col) = src.delta(dst);

    match d_col {
        0 => {
            if !pos.is_empty(dst) {
                return false;
            }
            if d_row == forward {
                return true;
            }
            d_row == 2 * forward
                && src.row() == color.pawn_row()
                && src.offset(forward, 0).is_some_and(|mid| pos.is_empty(mid))
        }
        -1 | 1 if d_row == forward => match pos.piece_at(dst) {
            Some(target) => target.color() != color,
            None => pos.en_passant() == Some(dst),
        },
        _ => false,
    }
}
