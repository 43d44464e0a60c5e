use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Color, PieceKind, Square, SquareSet};

impl Board {
    /// One-step king moves. Castling is decided by the game, which tracks
    /// whether king and rook have moved.
    pub(crate) fn king_range(&self, from: Square, color: Color) -> SquareSet {
        self.without_own(KING_TARGETS[from.as_index()], color)
    }

    /// Every square `color` attacks on this board
    pub fn attacked_by(&self, color: Color) -> SquareSet {
        self.pieces_of(color)
            .fold(SquareSet::EMPTY, |acc, (sq, piece)| {
                acc.union(piece.attacks(sq, self))
            })
    }

    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        self.pieces_of(attacker)
            .any(|(sq, piece)| piece.attacks(sq, self).contains(square))
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king_sq| self.is_square_attacked(king_sq, color.opponent()))
    }

    /// Squares of `color`'s pieces that attack `square`
    pub fn attackers_of(&self, square: Square, color: Color) -> Vec<Square> {
        self.pieces_of(color)
            .filter(|(sq, piece)| piece.attacks(*sq, self).contains(square))
            .map(|(sq, _)| sq)
            .collect()
    }

    pub(crate) fn king_count(&self, color: Color) -> usize {
        self.pieces_of(color)
            .filter(|(_, p)| p.kind == PieceKind::King)
            .count()
    }
}
