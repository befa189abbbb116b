//! Board ranks (1–8).

use std::fmt;

/// A rank on the chess board.
///
/// Rows are counted from Black's side: rank 8 is row 0 and rank 1 is row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// All ranks, 1 to 8.
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Return the board row of this rank (rank 8 = row 0).
    #[inline]
    pub const fn row(self) -> u8 {
        7 - self as u8
    }

    /// Create a rank from a board row, returning `None` outside 0..8.
    #[inline]
    pub const fn from_row(row: u8) -> Option<Rank> {
        match row {
            0 => Some(Rank::Rank8),
            1 => Some(Rank::Rank7),
            2 => Some(Rank::Rank6),
            3 => Some(Rank::Rank5),
            4 => Some(Rank::Rank4),
            5 => Some(Rank::Rank3),
            6 => Some(Rank::Rank2),
            7 => Some(Rank::Rank1),
            _ => None,
        }
    }

    /// Parse a rank digit `'1'..='8'`.
    #[inline]
    pub fn from_char(c: char) -> Option<Rank> {
        let digit = c.to_digit(10)?;
        if !(1..=8).contains(&digit) {
            return None;
        }
        Rank::from_row(8 - digit as u8)
    }

    /// Return the rank digit.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
