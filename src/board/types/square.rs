//! Square type and board dimensions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of rows (ranks) on the board.
pub const ROWS: usize = 8;
/// Number of columns (files) on the board.
pub const COLS: usize = 4;
/// Total number of squares.
pub const SQUARE_COUNT: usize = ROWS * COLS;

/// A square on the board, represented as (row, col).
///
/// Row 0 is the top edge as seen by the player at the bottom, column 0 the
/// left edge. In notation the bottom-left square is `a1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < ROWS && col < COLS {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Returns true if the square lies on the 8x4 board
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < ROWS && self.1 < COLS
    }

    /// Step by a signed (row, col) delta, or `None` if that leaves the board
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.0.checked_add_signed(dr)?;
        let col = self.1.checked_add_signed(dc)?;
        Square::new(row, col)
    }

    /// Index 0-31, row-major
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * COLS + self.1
    }

    /// Square for a row-major index (0-31)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / COLS, idx % COLS)
    }

    /// Iterate all squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).map(Square::from_index)
    }
}

/// Off-board squares render as `?`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return f.write_str("?");
        }
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, ROWS - self.0)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= ROWS {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= COLS {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let col = match chars[0] {
            'a'..='d' => chars[0] as usize - 'a' as usize,
            _ => return Err(invalid()),
        };

        let rank = match chars[1] {
            '1'..='8' => chars[1] as usize - '0' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(ROWS - rank, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_counts_ranks_from_bottom() {
        assert_eq!(Square(7, 0).to_string(), "a1");
        assert_eq!(Square(0, 3).to_string(), "d8");
        assert_eq!("a1".parse::<Square>(), Ok(Square(7, 0)));
        assert_eq!("c5".parse::<Square>(), Ok(Square(3, 2)));
    }

    #[test]
    fn test_off_board_square_displays_placeholder() {
        assert_eq!(Square(9, 0).to_string(), "?");
        assert_eq!(Square(0, 200).to_string(), "?");
    }

    #[test]
    fn test_notation_rejects_files_past_d() {
        assert!("e2".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(0, 3).offset(0, 1), None);
        assert_eq!(Square(7, 3).offset(-2, -1), Some(Square(5, 2)));
    }

    #[test]
    fn test_try_from_bounds() {
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::RowOutOfBounds { row: 8 })
        );
        assert_eq!(
            Square::try_from((0, 4)),
            Err(SquareError::ColOutOfBounds { col: 4 })
        );
        assert_eq!(Square::try_from((3, 3)), Ok(Square(3, 3)));
    }

    #[test]
    fn test_index_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::from_index(sq.as_index()), sq);
        }
        assert_eq!(Square::all().count(), SQUARE_COUNT);
    }
}
