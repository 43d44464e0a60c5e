use super::super::{Board, Color, Square, SquareSet};

impl Board {
    /// Pawn pushes and diagonal captures.
    ///
    /// En passant is not produced here: it depends on the previous move,
    /// which only [`Game`](crate::board::Game) knows.
    pub(crate) fn pawn_range(&self, from: Square, color: Color) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        let dir = self.pawn_direction(color);

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                targets.insert(one);
                if from.row() == self.pawn_start_row(color) {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            targets.insert(two);
                        }
                    }
                }
            }
        }

        for sq in self.pawn_attacks(from, color) {
            if self.is_color(sq, color.opponent()) {
                targets.insert(sq);
            }
        }
        targets
    }

    /// The two forward diagonals, occupied or not
    pub(crate) fn pawn_attacks(&self, from: Square, color: Color) -> SquareSet {
        let dir = self.pawn_direction(color);
        [-1, 1]
            .into_iter()
            .filter_map(|dc| from.offset(dir, dc))
            .collect()
    }
}
