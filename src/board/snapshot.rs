//! Plain-data view of a position for presentation layers and persistence.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Game, MoveOutcome, MoveRequest, Piece, SetupError, Square, COLS, ROWS};

/// Grid of cells, row 0 at the top edge, plus whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSnapshot {
    pub cells: Vec<Vec<Option<Piece>>>,
    pub current_turn: Color,
    pub bottom: Color,
}

impl BoardSnapshot {
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells.get(sq.row())?.get(sq.col()).copied().flatten()
    }
}

impl Game {
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let board = self.board();
        let cells = (0..ROWS)
            .map(|row| (0..COLS).map(|col| board.piece_at(Square(row, col))).collect())
            .collect();
        BoardSnapshot {
            cells,
            current_turn: self.current_turn(),
            bottom: board.bottom(),
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// Move history is not part of a snapshot: pieces on their setup squares
    /// count as unmoved and no en-passant capture is available.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, SetupError> {
        let rows = snapshot.cells.len();
        let bad_width = snapshot.cells.iter().map(Vec::len).find(|&w| w != COLS);
        if rows != ROWS || bad_width.is_some() {
            return Err(SetupError::BadDimensions {
                rows,
                cols: bad_width.unwrap_or(COLS),
            });
        }

        let mut board = Board::empty(snapshot.bottom);
        for (row, cells) in snapshot.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(piece) = cell {
                    board.set_piece(Square(row, col), *piece);
                }
            }
        }
        Game::from_position(board, snapshot.current_turn, &[])
    }

    /// Apply a request, resolving the promotion in the same call when the
    /// request names a piece kind.
    ///
    /// Without a kind, a pawn reaching the last row leaves the game waiting
    /// in [`MoveOutcome::PromotionRequired`]. A request naming King or Pawn
    /// is refused before anything moves.
    pub fn apply_request(&mut self, request: &MoveRequest) -> MoveOutcome {
        if request.promotion.is_some_and(|kind| !kind.is_promotion_choice()) {
            return MoveOutcome::InvalidPromotionChoice;
        }
        let outcome = self.apply_move(request.from, request.to);
        match (&outcome, request.promotion) {
            (MoveOutcome::PromotionRequired { .. }, Some(kind)) => self.resolve_promotion(kind),
            _ => outcome,
        }
    }
}
