//! Core engine types.
//!
//! - `Piece`, `PieceKind` and `Color` - piece identity
//! - `Square` - (row, col) on the 8x4 board
//! - `SquareSet` - 32-bit square set used for ranges and attacks
//! - `MoveRecord`, `Special` and `MoveRequest` - committed and requested moves

mod moves;
mod piece;
mod square;
mod square_set;

pub use moves::{MoveRecord, MoveRequest, Special};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, COLS, ROWS, SQUARE_COUNT};
pub use square_set::{SquareSet, SquareSetIter};
