//! Board files (columns a–h).

use std::fmt;

/// A file on the chess board. File a is column 0, file h is column 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files, a to h.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Return the board column of this file.
    #[inline]
    pub const fn col(self) -> u8 {
        self as u8
    }

    /// Create a file from a board column, returning `None` outside 0..8.
    #[inline]
    pub const fn from_col(col: u8) -> Option<File> {
        match col {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Parse a file letter `'a'..='h'`.
    #[inline]
    pub fn from_char(c: char) -> Option<File> {
        if !c.is_ascii_lowercase() {
            return None;
        }
        File::from_col((c as u8).wrapping_sub(b'a'))
    }

    /// Return the file letter.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
