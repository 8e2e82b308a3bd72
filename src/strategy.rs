//! Move-choosing strategies.
//!
//! A [`Strategy`] picks a move for whoever is to act in a game's current
//! state. Both minimax engines are strategies; [`RandomStrategy`] is a
//! seeded uniform baseline.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};
use crate::rules::{Game, GameState, MoveOf};
use crate::search::{IterativeMinimax, RecursiveMinimax};

/// Strategy trait.
///
/// Implementations must not change the game; the caller applies the
/// returned move.
pub trait Strategy<G: Game> {
    /// Choose a move for the player to act in `game`'s current state.
    ///
    /// Returns `Error::TerminalPosition` if there is nothing to choose.
    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>>;
}

impl<G: Game> Strategy<G> for RecursiveMinimax {
    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>> {
        self.search(game).map(|r| r.best_move)
    }
}

impl<G: Game> Strategy<G> for IterativeMinimax {
    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>> {
        self.search(game).map(|r| r.best_move)
    }
}

/// Uniformly random legal moves.
///
/// Uses ChaCha8, so the same seed replays the same choices.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Create a strategy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<G: Game> Strategy<G> for RandomStrategy {
    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>> {
        let state = game.current_state();
        if game.is_over(state) {
            return Err(Error::terminal(state));
        }
        state
            .possible_moves()
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| Error::terminal(state))
    }
}
