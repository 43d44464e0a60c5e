//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use halfboard_chess::board::prelude::*;
//!
//! let game = Game::new(Color::Black);
//! assert_eq!(game.current_turn(), Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, Color, Game, GameStatus, MoveOutcome, MoveRecord, MoveRequest, Piece,
    PieceKind, Square, SquareSet,
};
