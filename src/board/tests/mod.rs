//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `range.rs` - Pseudo-legal ranges per piece kind
//! - `game_flow.rs` - Turn order, rejections and self-check filtering
//! - `special_moves.rs` - Castling, en passant and promotion
//! - `endings.rs` - Checkmate, stalemate, time forfeit and resignation
//! - `proptest.rs` - Property-based tests

mod range;

use crate::board::{BoardBuilder, Color, Game, PieceKind, Square};

/// White-to-move game holding exactly `pieces`, White at the bottom.
pub(super) fn position(pieces: &[(Square, Color, PieceKind)]) -> Game {
    pieces
        .iter()
        .fold(BoardBuilder::new(), |builder, &(sq, color, kind)| {
            builder.piece(sq, color, kind)
        })
        .build()
        .unwrap()
}
