//! Game contracts implemented by every concrete game.
//!
//! Games implement [`GameState`] and [`Game`] to define:
//! - Legal moves for each state
//! - How moves produce successor states
//! - Terminal and win conditions
//!
//! The search calls into these traits but never interprets
//! game-specific concepts directly.

pub mod game;
pub mod state;

pub use game::{Game, GameResult, MoveOf};
pub use state::GameState;
