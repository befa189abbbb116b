//! The position: piece placement, side to move, castling flags, and en passant target.

use std::fmt;

use crate::castle_rights::CastleFlags;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank layout from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete rules state of a chess game.
///
/// The board is a 64-cell mailbox indexed by [`Square::index`] (row 0 is rank 8).
/// A `Position` is a plain value: copying it is cheap and two positions compare
/// equal only when every cell and every piece of auxiliary state matches.
///
/// Game play mutates a position only through [`Position::make_move`] and the
/// [`execute`](Position::execute)/[`undo`](Position::undo) pair. [`Position::put`]
/// exists for setting up test and study positions.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Position {
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
    castling: CastleFlags,
    en_passant: Option<Square>,
}

impl Position {
    /// Return the standard starting position with White to move.
    pub fn new_game() -> Position {
        let mut pos = Position::empty(Color::White);
        for color in Color::ALL {
            let back = color.back_row() as i8;
            let pawns = color.pawn_row() as i8;
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                let col = col as i8;
                if let Some(sq) = Square::from_coords(back, col) {
                    pos.put(sq, Some(Piece::new(kind, color)));
                }
                if let Some(sq) = Square::from_coords(pawns, col) {
                    pos.put(sq, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        pos
    }

    /// Alias for [`Position::new_game`].
    pub fn starting_position() -> Position {
        Position::new_game()
    }

    /// Return an empty board with `side_to_move` to play and no moved-piece flags.
    pub fn empty(side_to_move: Color) -> Position {
        Position {
            squares: [None; Square::COUNT],
            side_to_move,
            castling: CastleFlags::UNMOVED,
            en_passant: None,
        }
    }

    /// Place `piece` on `sq`, or clear it with `None`.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Return the position with its castling flags replaced.
    #[must_use]
    pub fn with_castle_flags(mut self, flags: CastleFlags) -> Position {
        self.castling = flags;
        self
    }

    /// Return the position with its en passant target replaced.
    #[must_use]
    pub fn with_en_passant(mut self, target: Option<Square>) -> Position {
        self.en_passant = target;
        self
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return the piece at signed coordinates; `None` for empty or off-board cells.
    #[inline]
    pub fn piece_at_coords(&self, row: i8, col: i8) -> Option<Piece> {
        Square::from_coords(row, col).and_then(|sq| self.piece_at(sq))
    }

    /// Return `true` if no piece stands on `sq`.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Iterate over every occupied square in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Return the square of `color`'s king, or `None` if it has none.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the moved-piece flags that govern castling.
    #[inline]
    pub fn castling(&self) -> CastleFlags {
        self.castling
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, flags: CastleFlags) {
        self.castling = flags;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Remove and return the piece on `sq`.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Validate the structural integrity of the position.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            let count = self.pieces().filter(|&(_, piece)| piece == king).count() as u32;
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }

        let pawn_on_back_rank = self.pieces().any(|(sq, piece)| {
            piece.kind() == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    /// Build a position from eight rows of piece letters, rank 8 first.
    ///
    /// `.` marks an empty square. Panics on malformed input; test use only.
    #[cfg(test)]
    pub(crate) fn from_diagram(rows: [&str; 8], side_to_move: Color) -> Position {
        let mut pos = Position::empty(side_to_move);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), 8, "row {row} must have 8 cells: {line:?}");
            for (col, c) in line.chars().enumerate() {
                let sq = Square::from_coords(row as i8, col as i8).unwrap();
                pos.put(sq, Piece::from_letter(c));
            }
        }
        pos
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new_game()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = Vec::with_capacity(8);
        for row in 0..8i8 {
            let line: String = (0..8i8)
                .map(|col| self.piece_at_coords(row, col).map_or('.', Piece::letter))
                .collect();
            rows.push(line);
        }
        f.debug_struct("Position")
            .field("board", &rows.join("/"))
            .field("side_to_move", &self.side_to_move)
            .field("castling", &self.castling)
            .field("en_passant", &self.en_passant)
            .finish()
    }
}

/// Wrapper for printing a position as a bordered 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Position);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BORDER: &str = "  +---+---+---+---+---+---+---+---+";
        writeln!(f, "{BORDER}")?;
        for row in 0..8i8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8i8 {
                let c = self.0.piece_at_coords(row, col).map_or(' ', Piece::letter);
                write!(f, " {c} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{BORDER}")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
