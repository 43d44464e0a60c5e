//! Error types for parsing, position setup and game control.
//!
//! Move rejections are not errors: they are reported through
//! [`MoveOutcome`](crate::board::MoveOutcome).

use std::fmt;

use super::{Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-3)
    ColOutOfBounds { col: usize },
    /// Invalid notation (expects a1-d8)
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-3)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for piece name parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceParseError {
    UnknownPiece { name: String },
}

impl fmt::Display for PieceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceParseError::UnknownPiece { name } => write!(f, "Unknown piece '{name}'"),
        }
    }
}

impl std::error::Error for PieceParseError {}

/// Error type for positions that cannot start or continue a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A side has no king
    MissingKing { color: Color },
    /// A side has more than one king
    ExtraKing { color: Color },
    /// A pawn stands on the first or last row
    PawnOnBackRank { square: Square },
    /// The side that just moved is still in check
    OpponentInCheck { color: Color },
    /// Snapshot grid does not have 8 rows of 4 cells
    BadDimensions { rows: usize, cols: usize },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingKing { color } => write!(f, "{color} has no king"),
            SetupError::ExtraKing { color } => write!(f, "{color} has more than one king"),
            SetupError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank at {square}")
            }
            SetupError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not their turn")
            }
            SetupError::BadDimensions { rows, cols } => {
                write!(f, "Board must be 8x4, found {rows}x{cols}")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Error type for position notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Missing placement or side-to-move field
    TooFewParts { found: usize },
    /// Fields past the bottom color
    TooManyParts { found: usize },
    /// Placement does not have 8 rows
    WrongRowCount { found: usize },
    /// A row describes more or fewer than 4 squares
    BadRowWidth { row: usize, width: usize },
    /// Invalid piece character in placement
    InvalidPiece { char: char },
    /// Invalid color field (must be 'w' or 'b')
    InvalidColor { found: String },
    /// Placement parsed but is not a playable position
    Setup(SetupError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "Position must have at least 2 parts, found {found}")
            }
            FenError::TooManyParts { found } => {
                write!(f, "Position must have at most 3 parts, found {found}")
            }
            FenError::WrongRowCount { found } => {
                write!(f, "Placement must have 8 rows, found {found}")
            }
            FenError::BadRowWidth { row, width } => {
                write!(f, "Row {row} describes {width} squares, expected 4")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in position")
            }
            FenError::InvalidColor { found } => {
                write!(f, "Invalid color '{found}', expected 'w' or 'b'")
            }
            FenError::Setup(err) => write!(f, "Invalid position: {err}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::Setup(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SetupError> for FenError {
    fn from(err: SetupError) -> Self {
        FenError::Setup(err)
    }
}

/// Error type for game control calls outside of move application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game already has a result
    AlreadyOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::AlreadyOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

/// Error type for replaying a recorded game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The engine rejected the recorded move at `index`
    Rejected { index: usize, reason: String },
    /// The record at `index` reaches the last rank without a promotion kind
    MissingPromotion { index: usize },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Rejected { index, reason } => {
                write!(f, "Recorded move {index} rejected: {reason}")
            }
            ReplayError::MissingPromotion { index } => {
                write!(f, "Recorded move {index} promotes without a piece choice")
            }
        }
    }
}

impl std::error::Error for ReplayError {}
