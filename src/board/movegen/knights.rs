use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, Square, SquareSet};

impl Board {
    pub(crate) fn knight_range(&self, from: Square, color: Color) -> SquareSet {
        self.without_own(KNIGHT_TARGETS[from.as_index()], color)
    }

    /// Drop squares held by `color` from a target set
    pub(crate) fn without_own(&self, targets: SquareSet, color: Color) -> SquareSet {
        targets
            .into_iter()
            .filter(|&sq| !self.is_color(sq, color))
            .collect()
    }
}
