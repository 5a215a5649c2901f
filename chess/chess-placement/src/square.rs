//! Board squares.

use std::fmt;

/// A board square in FEN scan order.
///
/// `column` 0..8 is file a..h. `row` 0..8 is rank 8..1, so row 0 is the
/// first rank written in a FEN string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    column: u8,
    row: u8,
}

impl Square {
    /// Square at `(column, row)`, or `None` if either is 8 or more.
    #[must_use]
    pub const fn new(column: u8, row: u8) -> Option<Self> {
        if column < 8 && row < 8 {
            Some(Self { column, row })
        } else {
            None
        }
    }

    /// File index, 0 for a.
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Row index in FEN order, 0 for rank 8.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// File letter `a`..`h`.
    #[must_use]
    pub const fn file(self) -> char {
        (b'a' + self.column) as char
    }

    /// Rank number 1..=8.
    #[must_use]
    pub const fn rank(self) -> u8 {
        8 - self.row
    }

    /// `true` for squares whose top sits at the raised height.
    #[must_use]
    pub const fn is_raised(self) -> bool {
        (self.column + self.row) % 2 == 0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}
