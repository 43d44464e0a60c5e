//! Half-board chess: board representation and rule engine.
//!
//! The board has 8 rows and 4 files. [`Game`] owns a [`Board`] and applies
//! the rules: pseudo-legal ranges per piece kind, self-check filtering,
//! castling, en passant, promotion, and checkmate/stalemate detection.
//! Every request returns a [`MoveOutcome`] value.
//!
//! # Example
//! ```
//! use halfboard_chess::board::{Color, Game, MoveOutcome, PieceKind, Square};
//!
//! let mut game = Game::new(Color::White);
//! let pawn = Square(6, 0);
//! assert_eq!(game.range(pawn).len(), 2);
//! let outcome = game.apply_move(pawn, Square(4, 0));
//! assert!(!outcome.is_rejected());
//! ```

/// Emits through the `log` facade when the `logging` feature is enabled.
macro_rules! engine_log {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::$level!($($arg)+);
    };
}

mod attack_tables;
mod builder;
mod error;
mod fen;
mod game;
mod movegen;
mod outcome;
pub mod prelude;
mod replay;
mod snapshot;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, GameError, PieceParseError, ReplayError, SetupError, SquareError};
pub use game::Game;
pub use outcome::{GameStatus, MoveOutcome};
pub use replay::Replay;
pub use snapshot::BoardSnapshot;
pub use state::Board;
pub use types::{
    Color, MoveRecord, MoveRequest, Piece, PieceKind, Special, Square, SquareSet, SquareSetIter,
    COLS, ROWS, SQUARE_COUNT,
};
