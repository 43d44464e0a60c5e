//! Step-by-step playback of a recorded move list.
//!
//! A replay starts from the standard setup and feeds the recorded requests
//! to a fresh [`Game`] one at a time, so a viewer can pace the playback.
//!
//! # Example
//! ```
//! use halfboard_chess::board::{Color, MoveRequest, Replay, Square};
//!
//! let moves = vec![
//!     MoveRequest::new(Square(6, 0), Square(4, 0)),
//!     MoveRequest::new(Square(1, 0), Square(3, 0)),
//! ];
//! let game = Replay::new(Color::White, moves).run().unwrap();
//! assert_eq!(game.ply(), 2);
//! ```

use super::{Color, Game, MoveOutcome, MoveRecord, MoveRequest, ReplayError};

#[derive(Clone, Debug)]
pub struct Replay {
    game: Game,
    moves: Vec<MoveRequest>,
    cursor: usize,
}

impl Replay {
    #[must_use]
    pub fn new(bottom: Color, moves: Vec<MoveRequest>) -> Self {
        Replay {
            game: Game::new(bottom),
            moves,
            cursor: 0,
        }
    }

    /// Replay committed records, e.g. the history of another game.
    #[must_use]
    pub fn from_records(bottom: Color, records: &[MoveRecord]) -> Self {
        Self::new(bottom, records.iter().map(MoveRequest::from).collect())
    }

    /// The game as of the last step
    #[inline]
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len() - self.cursor
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.moves.len()
    }

    /// Apply the next recorded move.
    ///
    /// Returns `None` once every move has been played. After an error the
    /// replay stops; a rejected move leaves the game as it was.
    pub fn step(&mut self) -> Option<Result<MoveOutcome, ReplayError>> {
        let request = *self.moves.get(self.cursor)?;
        let index = self.cursor;
        self.cursor += 1;

        let outcome = self.game.apply_request(&request);
        let result = match outcome {
            MoveOutcome::PromotionRequired { .. } => Err(ReplayError::MissingPromotion { index }),
            ref rejected if rejected.is_rejected() => Err(ReplayError::Rejected {
                index,
                reason: rejected.to_string(),
            }),
            applied => Ok(applied),
        };
        if result.is_err() {
            engine_log!(warn, "replay stopped at move {index}");
            self.cursor = self.moves.len();
        }
        Some(result)
    }

    /// Play every remaining move and return the final game.
    pub fn run(mut self) -> Result<Game, ReplayError> {
        while let Some(step) = self.step() {
            step?;
        }
        Ok(self.game)
    }
}
