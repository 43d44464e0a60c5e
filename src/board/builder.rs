//! Fluent builder for constructing positions.
//!
//! Allows creating games piece by piece rather than from position notation.
//!
//! # Example
//! ```
//! use halfboard_chess::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let game = BoardBuilder::new()
//!     .piece(Square(7, 3), Color::White, PieceKind::King)
//!     .piece(Square(0, 3), Color::Black, PieceKind::King)
//!     .piece(Square(6, 0), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.king_position(Color::Black), Square(0, 3));
//! ```

use super::{Board, Color, Game, Piece, PieceKind, SetupError, Square};

/// A fluent builder for constructing [`Game`] positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    bottom: Color,
    side_to_move: Color,
    moved: Vec<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty builder: White at the bottom, White to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            bottom: Color::White,
            side_to_move: Color::White,
            moved: Vec::new(),
        }
    }

    /// Create a builder starting from the standard setup.
    #[must_use]
    pub fn starting_position(bottom: Color) -> Self {
        let mut builder = Self::new().bottom(bottom);
        builder.pieces = Board::new(bottom).pieces().collect();
        builder
    }

    /// Choose which color sits at the visual bottom.
    ///
    /// This decides pawn direction, so set it before relying on pawns.
    #[must_use]
    pub const fn bottom(mut self, color: Color) -> Self {
        self.bottom = color;
        self
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(color, kind)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Mark the piece on `square` as having moved (it can no longer castle).
    #[must_use]
    pub fn moved(mut self, square: Square) -> Self {
        self.moved.push(square);
        self
    }

    /// Validate and build the game.
    ///
    /// Off-board squares are ignored.
    pub fn build(self) -> Result<Game, SetupError> {
        let mut board = Board::empty(self.bottom);
        for (square, piece) in self.pieces {
            if square.is_valid() {
                board.set_piece(square, piece);
            }
        }
        Game::from_position(board, self.side_to_move, &self.moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameStatus;

    #[test]
    fn test_starting_position_matches_new_game() {
        let built = BoardBuilder::starting_position(Color::White).build().unwrap();
        assert_eq!(built, Game::new(Color::White));

        let built = BoardBuilder::starting_position(Color::Black).build().unwrap();
        assert_eq!(built, Game::new(Color::Black));
    }

    #[test]
    fn test_missing_king_is_rejected() {
        let err = BoardBuilder::new()
            .piece(Square(7, 3), Color::White, PieceKind::King)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::MissingKing {
                color: Color::Black
            }
        );
    }

    #[test]
    fn test_extra_king_is_rejected() {
        let err = BoardBuilder::new()
            .piece(Square(7, 3), Color::White, PieceKind::King)
            .piece(Square(7, 0), Color::White, PieceKind::King)
            .piece(Square(0, 3), Color::Black, PieceKind::King)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::ExtraKing {
                color: Color::White
            }
        );
    }

    #[test]
    fn test_pawn_on_back_rank_is_rejected() {
        let err = BoardBuilder::new()
            .piece(Square(7, 3), Color::White, PieceKind::King)
            .piece(Square(0, 3), Color::Black, PieceKind::King)
            .piece(Square(7, 1), Color::White, PieceKind::Pawn)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::PawnOnBackRank {
                square: Square(7, 1)
            }
        );

        // A promoting pawn only makes sense for the side still to choose.
        let err = BoardBuilder::new()
            .piece(Square(7, 3), Color::White, PieceKind::King)
            .piece(Square(2, 3), Color::Black, PieceKind::King)
            .piece(Square(0, 0), Color::White, PieceKind::Pawn)
            .side_to_move(Color::Black)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::PawnOnBackRank {
                square: Square(0, 0)
            }
        );
    }

    #[test]
    fn test_promoting_pawn_becomes_pending_choice() {
        let game = BoardBuilder::new()
            .piece(Square(7, 3), Color::White, PieceKind::King)
            .piece(Square(2, 3), Color::Black, PieceKind::King)
            .piece(Square(0, 0), Color::White, PieceKind::Pawn)
            .build()
            .unwrap();
        assert_eq!(
            game.status(),
            GameStatus::AwaitingPromotionChoice {
                square: Square(0, 0),
                color: Color::White
            }
        );
        assert_eq!(game.pending_promotion().map(|r| r.from), Some(Square(1, 0)));
    }

    #[test]
    fn test_two_promoting_pawns_are_rejected() {
        let err = BoardBuilder::new()
            .piece(Square(7, 3), Color::White, PieceKind::King)
            .piece(Square(2, 3), Color::Black, PieceKind::King)
            .piece(Square(0, 0), Color::White, PieceKind::Pawn)
            .piece(Square(0, 1), Color::White, PieceKind::Pawn)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::PawnOnBackRank {
                square: Square(0, 1)
            }
        );
    }

    #[test]
    fn test_waiting_side_in_check_is_rejected() {
        // Black king attacked by a white rook while White is to move.
        let err = BoardBuilder::new()
            .piece(Square(7, 3), Color::White, PieceKind::King)
            .piece(Square(0, 3), Color::Black, PieceKind::King)
            .piece(Square(4, 3), Color::White, PieceKind::Rook)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::OpponentInCheck {
                color: Color::Black
            }
        );
    }

    #[test]
    fn test_moved_marks_piece() {
        let game = BoardBuilder::starting_position(Color::White)
            .moved(Square(7, 0))
            .build()
            .unwrap();
        assert!(!game.is_unmoved(Square(7, 0)));
        assert!(game.is_unmoved(Square(7, 3)));
    }

    #[test]
    fn test_pieces_off_setup_squares_count_as_moved() {
        let game = BoardBuilder::new()
            .piece(Square(7, 3), Color::White, PieceKind::King)
            .piece(Square(0, 3), Color::Black, PieceKind::King)
            .piece(Square(7, 1), Color::White, PieceKind::Rook)
            .build()
            .unwrap();
        assert!(game.is_unmoved(Square(7, 3)));
        assert!(!game.is_unmoved(Square(7, 1)));
    }
}
