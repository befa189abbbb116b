//! Bishop, rook, and queen movement rules.

use crate::position::Position;
use crate::square::Square;

/// Are all squares strictly between `src` and `dst` empty?
///
/// `src` and `dst` must share a row, column, or diagonal.
pub(super) fn path_clear(pos: &Position, src: Square, dst: Square) -> bool {
    let (d_row, d_col) = src.delta(dst);
    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let mut cur = src.offset(step_row, step_col);
    while let Some(sq) = cur {
        if sq == dst {
            return true;
        }
        if !pos.is_empty(sq) {
            return false;
        }
        cur = sq.offset(step_row, step_col);
    }
    false
}

pub(super) fn bishop_can_move(pos: &Position, src: Square, dst: Square) -> bool {
    let (d_row, d_col) = src.delta(dst);
    d_row != 0 && d_row.abs() == d_col.abs() && path_clear(pos, src, dst)
}

pub(super) fn rook_can_move(pos: &Position, src: Square, dst: Square) -> bool {
    let (d_row, d_col) = src.delta(dst);
    (d_row == 0) != (d_col == 0) && path_clear(pos, src, dst)
}

pub(super) fn queen_can_move(pos: &Position, src: Square, dst: Square) -> bool {
    bishop_can_move(pos, src, dst) || rook_can_move(pos, src, dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn open_board() -> Position {
        Position::from_diagram(
            [
                "....k...", "........", "........", "...R....", "........", ".p......",
                "........", "....K...",
            ],
            Color::White,
        )
    }

    #[test]
    fn rook_lines() {
        let pos = open_board();
        assert!(rook_can_move(&pos, Square::D5, Square::D1));
        assert!(rook_can_move(&pos, Square::D5, Square::A5));
        assert!(rook_can_move(&pos, Square::D5, Square::H5));
        assert!(!rook_can_move(&pos, Square::D5, Square::E6));
        assert!(!rook_can_move(&pos, Square::D5, Square::D5));
    }

    #[test]
    fn bishop_diagonals_and_blockers() {
        let pos = open_board();
        assert!(bishop_can_move(&pos, Square::D5, Square::A8));
        assert!(bishop_can_move(&pos, Square::D5, Square::B3));
        // b3 holds a pawn, so a2 is behind it.
        assert!(!bishop_can_move(&pos, Square::D5, Square::A2));
        assert!(!bishop_can_move(&pos, Square::D5, Square::D7));
    }

    #[test]
    fn queen_combines_both() {
        let pos = open_board();
        assert!(queen_can_move(&pos, Square::D5, Square::D8));
        assert!(queen_can_move(&pos, Square::D5, Square::G8));
        assert!(!queen_can_move(&pos, Square::D5, Square::E7));
    }

    #[test]
    fn path_clear_ignores_endpoints() {
        let pos = Position::new_game();
        // Both endpoints are occupied but nothing stands between e1 and e2.
        assert!(path_clear(&pos, Square::E1, Square::E2));
        assert!(!path_clear(&pos, Square::A1, Square::A3));
        assert!(path_clear(&pos, Square::A2, Square::A7));
    }
}
