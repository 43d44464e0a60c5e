use std::fmt;

use super::{Color, Piece, PieceKind, Square, COLS, ROWS};

/// Back row from the bottom player's left (file a) to right (file d).
/// The top player's back row mirrors it vertically.
pub(crate) const BACK_RANK: [PieceKind; COLS] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
];

/// The 8x4 grid of optional occupants.
///
/// Mutation is crate-private: pieces only move through
/// [`Game`](crate::board::Game), which enforces the rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; COLS]; ROWS],
    bottom: Color,
}

impl Board {
    /// Standard starting layout with `bottom` nearest row 7.
    pub fn new(bottom: Color) -> Self {
        let mut board = Board::empty(bottom);
        for sq in Square::all() {
            if let Some(piece) = board.setup_piece_at(sq) {
                board.set_piece(sq, piece);
            }
        }
        board
    }

    pub(crate) fn empty(bottom: Color) -> Self {
        Board {
            cells: [[None; COLS]; ROWS],
            bottom,
        }
    }

    /// The color whose pieces start at the visual bottom (rows 6-7)
    #[inline]
    pub fn bottom(&self) -> Color {
        self.bottom
    }

    /// Occupant of a square; `None` for empty or off-board squares
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if sq.is_valid() {
            self.cells[sq.0][sq.1]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns true if `sq` holds a piece of `color`
    #[inline]
    pub fn is_color(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color == color)
    }

    /// All occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Occupied squares of one color
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.0][sq.1] = Some(piece);
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.0][sq.1].take()
    }

    /// Move the occupant of `from` to `to`, returning whatever stood on `to`.
    pub(crate) fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.remove_piece(from);
        let captured = self.remove_piece(to);
        self.cells[to.0][to.1] = moving;
        captured
    }

    /// Row delta of a pawn step for `color`
    #[inline]
    pub fn pawn_direction(&self, color: Color) -> isize {
        if color == self.bottom {
            -1
        } else {
            1
        }
    }

    /// Row from which `color`'s pawns may advance two squares
    #[inline]
    pub fn pawn_start_row(&self, color: Color) -> usize {
        if color == self.bottom {
            ROWS - 2
        } else {
            1
        }
    }

    /// Row on which `color`'s pawns promote
    #[inline]
    pub fn promotion_row(&self, color: Color) -> usize {
        if color == self.bottom {
            0
        } else {
            ROWS - 1
        }
    }

    /// Row holding `color`'s back rank at setup
    #[inline]
    pub fn home_row(&self, color: Color) -> usize {
        self.promotion_row(color.opponent())
    }

    /// The piece the standard setup places on `sq` under this orientation
    pub(crate) fn setup_piece_at(&self, sq: Square) -> Option<Piece> {
        let color = if sq.row() >= ROWS / 2 {
            self.bottom
        } else {
            self.bottom.opponent()
        };
        if sq.row() == self.home_row(color) {
            Some(Piece::new(color, BACK_RANK[sq.col()]))
        } else if sq.row() == self.pawn_start_row(color) {
            Some(Piece::new(color, PieceKind::Pawn))
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+")?;
        for row in 0..ROWS {
            write!(f, "{} |", ROWS - row)?;
            for col in 0..COLS {
                let c = self.cells[row][col].map_or(' ', Piece::to_char);
                write!(f, " {c} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d")
    }
}
