use once_cell::sync::Lazy;

use super::{Square, SquareSet, SQUARE_COUNT};

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn step_table(deltas: &[(isize, isize)]) -> [SquareSet; SQUARE_COUNT] {
    let mut table = [SquareSet::EMPTY; SQUARE_COUNT];
    for (idx, entry) in table.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        *entry = deltas
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect();
    }
    table
}

/// Knight destinations from each square, ignoring occupancy
pub(crate) static KNIGHT_TARGETS: Lazy<[SquareSet; SQUARE_COUNT]> =
    Lazy::new(|| step_table(&KNIGHT_DELTAS));

/// King destinations from each square, ignoring occupancy
pub(crate) static KING_TARGETS: Lazy<[SquareSet; SQUARE_COUNT]> =
    Lazy::new(|| step_table(&KING_DELTAS));
