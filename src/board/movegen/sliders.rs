use super::super::attack_tables::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Board, Color, Square, SquareSet};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl Board {
    pub(crate) fn slider_range(&self, from: Square, color: Color, slider: SliderType) -> SquareSet {
        match slider {
            SliderType::Bishop => self.ray_range(from, color, &BISHOP_DIRECTIONS),
            SliderType::Rook => self.ray_range(from, color, &ROOK_DIRECTIONS),
            SliderType::Queen => self
                .ray_range(from, color, &ROOK_DIRECTIONS)
                .union(self.ray_range(from, color, &BISHOP_DIRECTIONS)),
        }
    }

    /// Walk each ray until the edge or the first occupant, which is
    /// included only if it belongs to the other side.
    fn ray_range(&self, from: Square, color: Color, directions: &[(isize, isize)]) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        for &(dr, dc) in directions {
            let mut cur = from;
            while let Some(next) = cur.offset(dr, dc) {
                match self.piece_at(next) {
                    None => targets.insert(next),
                    Some(p) => {
                        if p.color != color {
                            targets.insert(next);
                        }
                        break;
                    }
                }
                cur = next;
            }
        }
        targets
    }
}
