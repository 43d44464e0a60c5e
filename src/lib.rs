//! Rule engine for half-board chess, an 8x4 variant.
//!
//! Each side has a rook, knight, bishop and king on its back rank plus four
//! pawns. The [`board`] module holds the board and rules. The [`sync`]
//! module shares a game between threads.

pub mod board;
pub mod sync;

pub use board::{Board, Color, Game, MoveOutcome, MoveRecord, Piece, PieceKind, Square};
pub use sync::SharedGame;
