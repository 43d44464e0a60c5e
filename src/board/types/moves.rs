//! Move records and move requests.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, PieceKind};
use super::square::Square;

/// Special effects of a committed move beyond relocating one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Special {
    None,
    /// King and rook moved together
    Castling { rook_from: Square, rook_to: Square },
    /// Pawn captured a pawn that was not on the destination square
    EnPassant { captured_pawn: Square },
}

/// A committed move, as reported to callers for redraw and persistence.
///
/// `from`/`to` always describe the king for castling, whichever of the two
/// pieces was selected first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    /// 1-based ply number
    pub sequence: u32,
    pub color: Color,
    pub from: Square,
    pub to: Square,
    /// Kind standing on `to` after the move (the promoted kind, once resolved)
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub special: Special,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self.special, Special::Castling { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.special, Special::EnPassant { .. })
    }

    /// True for a pawn advancing two rows in one move
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece == PieceKind::Pawn
            && self.promotion.is_none()
            && self.from.col() == self.to.col()
            && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Every square whose contents changed
    #[must_use]
    pub fn updated_squares(&self) -> Vec<Square> {
        match self.special {
            Special::None => vec![self.from, self.to],
            Special::Castling { rook_from, rook_to } => {
                vec![self.from, self.to, rook_from, rook_to]
            }
            Special::EnPassant { captured_pawn } => vec![self.from, self.to, captured_pawn],
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.captured.is_some() { 'x' } else { '-' };
        write!(f, "{}. {}{}{}", self.sequence, self.from, sep, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.to_char().to_ascii_uppercase())?;
        }
        match self.special {
            Special::Castling { .. } => write!(f, " (castling)"),
            Special::EnPassant { .. } => write!(f, " (en passant)"),
            Special::None => Ok(()),
        }
    }
}

/// A requested move from any source: local input, a remote suggestion
/// service or a recorded game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    #[cfg_attr(feature = "serde", serde(default))]
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        MoveRequest {
            from,
            to,
            promotion: None,
        }
    }

    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        MoveRequest {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

impl From<&MoveRecord> for MoveRequest {
    fn from(record: &MoveRecord) -> Self {
        MoveRequest {
            from: record.from,
            to: record.to,
            promotion: record.promotion,
        }
    }
}
