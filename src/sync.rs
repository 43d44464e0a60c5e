//! Synchronization utilities for sharing a game between threads.
//!
//! A presentation layer typically has an input thread applying moves and a
//! clock thread that may end the game on time. [`SharedGame`] wraps the
//! game in a lock so both see one consistent state.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{BoardSnapshot, Color, Game, GameError, MoveOutcome, PieceKind, Square};

/// A cloneable, thread-safe handle to one [`Game`].
///
/// Clones share the same game. Every call takes the lock for its duration
/// only, so a request is applied atomically.
#[derive(Clone, Debug)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    /// Start a shared game from the standard setup.
    #[must_use]
    pub fn standard(bottom: Color) -> Self {
        Self::new(Game::new(bottom))
    }

    /// Run `f` with shared access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        let game = self.0.lock();
        f(&game)
    }

    /// Run `f` with exclusive access to the game.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut game = self.0.lock();
        f(&mut game)
    }

    pub fn apply_move(&self, from: Square, to: Square) -> MoveOutcome {
        self.with_mut(|game| game.apply_move(from, to))
    }

    pub fn resolve_promotion(&self, kind: PieceKind) -> MoveOutcome {
        self.with_mut(|game| game.resolve_promotion(kind))
    }

    /// End the game on time for the side to move.
    pub fn time_forfeit(&self) -> Result<(), GameError> {
        self.with_mut(Game::time_forfeit)
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.with(Game::snapshot)
    }

    /// A copy of the current game state
    #[must_use]
    pub fn to_game(&self) -> Game {
        self.with(Game::clone)
    }

    /// Returns true if both handles point to the same game.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &SharedGame) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}
