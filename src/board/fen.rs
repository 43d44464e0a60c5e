//! Compact position notation.
//!
//! `"<placement> <side to move> [<bottom color>]"`, where the placement lists
//! rows from the top edge down, separated by `/`, with digits 1-4 for runs
//! of empty squares. Uppercase letters are White. The bottom color defaults
//! to White. The starting position is `rnbk/pppp/4/4/4/4/PPPP/RNBK w w`.

use super::{Board, Color, FenError, Game, Piece, Square, COLS, ROWS};

fn parse_color(field: &str) -> Result<Color, FenError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        other => Err(FenError::InvalidColor {
            found: other.to_string(),
        }),
    }
}

const fn color_char(color: Color) -> char {
    match color {
        Color::White => 'w',
        Color::Black => 'b',
    }
}

impl Game {
    /// Parse a position. Pieces standing on their setup squares may still
    /// castle; no en-passant capture is available on the first move.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }
        if parts.len() > 3 {
            return Err(FenError::TooManyParts { found: parts.len() });
        }
        let side_to_move = parse_color(parts[1])?;
        let bottom = match parts.get(2) {
            Some(field) => parse_color(field)?,
            None => Color::White,
        };

        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != ROWS {
            return Err(FenError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty(bottom);
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= COLS {
                    return Err(FenError::BadRowWidth {
                        row,
                        width: col + 1,
                    });
                }
                board.set_piece(Square(row, col), piece);
                col += 1;
            }
            if col != COLS {
                return Err(FenError::BadRowWidth { row, width: col });
            }
        }

        Ok(Game::from_position(board, side_to_move, &[])?)
    }

    /// Render the position in the notation accepted by [`Game::from_fen`].
    #[must_use]
    pub fn to_fen(&self) -> String {
        let board = self.board();
        let mut placement = String::new();
        for row in 0..ROWS {
            if row > 0 {
                placement.push('/');
            }
            let mut empty = 0;
            for col in 0..COLS {
                match board.piece_at(Square(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
        }
        format!(
            "{} {} {}",
            placement,
            color_char(self.current_turn()),
            color_char(board.bottom())
        )
    }
}
