//! Knight movement rules.

use crate::square::Square;

/// Is `src` to `dst` a knight jump?
pub(super) fn knight_can_move(src: Square, dst: Square) -> bool {
    let (d_row, d_col) = src.delta(dst);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}
