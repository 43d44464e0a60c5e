//! Compact set of board squares.

use std::fmt;

use super::square::{Square, SQUARE_COUNT};

/// A set of squares, one bit per square of the 8x4 board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(pub(crate) u32);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Create a set holding a single square
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(1 << sq.as_index())
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1 << sq.as_index();
    }

    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !(1 << sq.as_index());
    }

    /// Returns true if the given square is in the set.
    ///
    /// Off-board squares are never members.
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        sq.is_valid() && (self.0 & (1 << sq.as_index())) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: SquareSet) -> Self {
        SquareSet(self.0 | other.0)
    }

    /// Iterate the member squares in row-major order
    #[inline]
    #[must_use]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

/// Iterator over the squares of a [`SquareSet`]
pub struct SquareSetIter(u32);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        debug_assert!(idx < SQUARE_COUNT);
        Some(Square::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        self.iter()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = SquareSet::EMPTY;
        set.insert(Square(2, 1));
        set.insert(Square(7, 3));
        assert!(set.contains(Square(2, 1)));
        assert!(!set.contains(Square(2, 2)));
        assert_eq!(set.len(), 2);
        set.remove(Square(2, 1));
        assert!(!set.contains(Square(2, 1)));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Square(7, 3)]);
    }

    #[test]
    fn test_off_board_never_contained() {
        let set: SquareSet = Square::all().collect();
        assert_eq!(set.len(), SQUARE_COUNT);
        assert!(!set.contains(Square(8, 0)));
        assert!(!set.contains(Square(0, 4)));
    }
}
