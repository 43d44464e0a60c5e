//! Move outcomes, game status and the end-of-game classifier.

use std::fmt;

use super::{Color, Game, MoveRecord, PieceKind, Special, Square};

/// Result of a move or promotion request.
///
/// Rejections (`IllegalMove`, `MoveIntoCheckRejected`, `GameAlreadyOver`,
/// `InvalidPromotionChoice`) leave the game untouched. Every other variant
/// reports a state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece cannot reach the destination, it is not the mover's piece,
    /// or a promotion choice is still pending.
    IllegalMove,
    /// The move would leave the mover's own king attacked.
    MoveIntoCheckRejected { message: String },
    /// The game already has a result.
    GameAlreadyOver,
    /// Promotion kind is King or Pawn, or no promotion is pending.
    InvalidPromotionChoice,
    /// An ordinary move was committed and the turn passed.
    Applied {
        record: MoveRecord,
        captured: Option<PieceKind>,
        /// The side now to move is in check
        check: bool,
    },
    /// King and rook moved together. The four squares are king origin,
    /// king destination, rook origin and rook destination.
    AppliedCastling {
        record: MoveRecord,
        updated_positions: [Square; 4],
        check: bool,
    },
    /// A pawn captured en passant; the captured pawn stood on
    /// `captured_pawn_position`, not on the destination.
    AppliedEnPassant {
        record: MoveRecord,
        captured_pawn_position: Square,
        check: bool,
    },
    /// A pawn reached its last row and waits for
    /// [`Game::resolve_promotion`]. The turn has not passed.
    PromotionRequired { square: Square, color: Color },
    /// The side now to move is in check with no legal reply.
    Checkmate {
        winner: Color,
        message: String,
        record: MoveRecord,
    },
    /// The side now to move has no legal reply and is not in check.
    Stalemate { message: String, record: MoveRecord },
}

impl MoveOutcome {
    /// Returns true if the request was refused without any state change
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(
            self,
            MoveOutcome::IllegalMove
                | MoveOutcome::MoveIntoCheckRejected { .. }
                | MoveOutcome::GameAlreadyOver
                | MoveOutcome::InvalidPromotionChoice
        )
    }

    /// Returns true if the game ended with this outcome
    #[must_use]
    pub const fn ends_game(&self) -> bool {
        matches!(
            self,
            MoveOutcome::Checkmate { .. } | MoveOutcome::Stalemate { .. }
        )
    }

    /// The committed move, if any
    #[must_use]
    pub const fn record(&self) -> Option<&MoveRecord> {
        match self {
            MoveOutcome::Applied { record, .. }
            | MoveOutcome::AppliedCastling { record, .. }
            | MoveOutcome::AppliedEnPassant { record, .. }
            | MoveOutcome::Checkmate { record, .. }
            | MoveOutcome::Stalemate { record, .. } => Some(record),
            _ => None,
        }
    }

    /// Squares a presentation layer has to redraw
    #[must_use]
    pub fn updated_squares(&self) -> Vec<Square> {
        match self {
            MoveOutcome::AppliedCastling {
                updated_positions, ..
            } => updated_positions.to_vec(),
            MoveOutcome::PromotionRequired { square, .. } => vec![*square],
            _ => self
                .record()
                .map(MoveRecord::updated_squares)
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::IllegalMove => write!(f, "Illegal move"),
            MoveOutcome::MoveIntoCheckRejected { message } => f.write_str(message),
            MoveOutcome::GameAlreadyOver => write!(f, "The game is already over"),
            MoveOutcome::InvalidPromotionChoice => write!(f, "Invalid promotion choice"),
            MoveOutcome::Applied { record, .. }
            | MoveOutcome::AppliedCastling { record, .. }
            | MoveOutcome::AppliedEnPassant { record, .. } => write!(f, "{record}"),
            MoveOutcome::PromotionRequired { square, color } => {
                write!(f, "{color} pawn on {square} must be promoted")
            }
            MoveOutcome::Checkmate { message, .. } | MoveOutcome::Stalemate { message, .. } => {
                f.write_str(message)
            }
        }
    }
}

/// Where the game stands between requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { turn: Color },
    AwaitingPromotionChoice { square: Square, color: Color },
    Ended {
        winner: Option<Color>,
        reason: String,
    },
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self, GameStatus::Ended { .. })
    }
}

pub(crate) fn checkmate_message(winner: Color) -> String {
    format!("Checkmate! {winner} wins.")
}

pub(crate) const STALEMATE_MESSAGE: &str = "Stalemate! The game is a draw.";

impl Game {
    /// Classify the position after `record` was committed and the turn
    /// passed to the defender.
    pub(crate) fn classify(&mut self, record: MoveRecord) -> MoveOutcome {
        let defender = self.current_turn();
        let check = self.is_in_check(defender);

        if !self.has_legal_move(defender) {
            if check {
                let message = checkmate_message(record.color);
                self.end(Some(record.color), message.clone());
                return MoveOutcome::Checkmate {
                    winner: record.color,
                    message,
                    record,
                };
            }
            self.end(None, STALEMATE_MESSAGE.to_string());
            return MoveOutcome::Stalemate {
                message: STALEMATE_MESSAGE.to_string(),
                record,
            };
        }

        match record.special {
            Special::None => MoveOutcome::Applied {
                record,
                captured: record.captured,
                check,
            },
            Special::Castling { rook_from, rook_to } => MoveOutcome::AppliedCastling {
                record,
                updated_positions: [record.from, record.to, rook_from, rook_to],
                check,
            },
            Special::EnPassant { captured_pawn } => MoveOutcome::AppliedEnPassant {
                record,
                captured_pawn_position: captured_pawn,
                check,
            },
        }
    }

    /// Every legal `(from, to)` of the side to move.
    ///
    /// Castling appears as the king's two-square move, en passant as the
    /// pawn's diagonal step. Empty once the game is over or while a
    /// promotion choice is pending.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        if self.is_over() || self.pending_promotion().is_some() {
            return Vec::new();
        }
        self.legal_moves_for(self.current_turn())
    }

    /// Legal destinations of the piece on `from`, including castling and
    /// en passant.
    #[must_use]
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        self.legal_moves()
            .into_iter()
            .filter(|(f, _)| *f == from)
            .map(|(_, to)| to)
            .collect()
    }

    pub(crate) fn legal_moves_for(&self, color: Color) -> Vec<(Square, Square)> {
        let board = self.board();
        let mut moves = Vec::new();
        for (from, piece) in board.pieces_of(color) {
            for to in piece.range(from, board) {
                if !self.exposes_king(color, from, to, None) {
                    moves.push((from, to));
                }
            }
            match piece.kind {
                PieceKind::Pawn => {
                    for to in board.pawn_attacks(from, color) {
                        if let Some(victim) = self.en_passant_victim(piece, from, to) {
                            if !self.exposes_king(color, from, to, Some(victim)) {
                                moves.push((from, to));
                            }
                        }
                    }
                }
                PieceKind::King => {
                    for (rook_sq, rook) in board.pieces_of(color) {
                        if rook.kind == PieceKind::Rook && rook_sq.row() == from.row() {
                            if let Ok(plan) = self.plan_castle(from, rook_sq) {
                                moves.push((from, plan.king_to));
                            }
                        }
                    }
                }
                _ => {}
            }
        }
        moves
    }

    pub(crate) fn has_legal_move(&self, color: Color) -> bool {
        !self.legal_moves_for(color).is_empty()
    }
}
