//! Pseudo-legal range generation.
//!
//! A piece's range is every square it could move to given the occupancy of
//! the board, without regard to whose turn it is or to checks. Ranges never
//! contain squares held by the piece's own side and never leave the board.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Piece, PieceKind, Square, SquareSet};

impl Piece {
    /// Squares this piece could move to from `from`, ignoring checks.
    ///
    /// Castling and en passant are never part of a range.
    #[must_use]
    pub fn range(self, from: Square, board: &Board) -> SquareSet {
        if !from.is_valid() {
            return SquareSet::EMPTY;
        }
        match self.kind {
            PieceKind::Pawn => board.pawn_range(from, self.color),
            PieceKind::Knight => board.knight_range(from, self.color),
            PieceKind::Bishop => board.slider_range(from, self.color, SliderType::Bishop),
            PieceKind::Rook => board.slider_range(from, self.color, SliderType::Rook),
            PieceKind::Queen => board.slider_range(from, self.color, SliderType::Queen),
            PieceKind::King => board.king_range(from, self.color),
        }
    }

    /// Returns true if `to` is in this piece's range from `from`
    #[inline]
    #[must_use]
    pub fn can_move(self, from: Square, to: Square, board: &Board) -> bool {
        self.range(from, board).contains(to)
    }

    /// Squares this piece attacks from `from`.
    ///
    /// Identical to the range except for pawns, which attack both forward
    /// diagonals whether occupied or not and never attack straight ahead.
    #[must_use]
    pub fn attacks(self, from: Square, board: &Board) -> SquareSet {
        if !from.is_valid() {
            return SquareSet::EMPTY;
        }
        match self.kind {
            PieceKind::Pawn => board.pawn_attacks(from, self.color),
            _ => self.range(from, board),
        }
    }
}
