//! # rust-minimax
//!
//! A generic game-tree search engine for two-player, perfect-information,
//! zero-sum games with sequential moves.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The search sees a game only through the
//!    [`GameState`] and [`Game`] traits: legal moves, successor states,
//!    terminal detection and the winner.
//!
//! 2. **Two Equivalent Engines**: Recursive and iterative minimax return
//!    the same values and the same move for every position.
//!
//! 3. **Pure Evaluation**: Searches take the game by shared reference and
//!    pass successor states explicitly. A search never mutates the game.
//!
//! ## Architecture
//!
//! - **Negamax Values**: every position is worth -1, 0 or +1 to the
//!   player who moved into it, encoded as [`Outcome`].
//!
//! - **Structural Transpositions**: the recursive engine memoizes by
//!   state `Eq + Hash`, so positions reached by different move orders
//!   are evaluated once.
//!
//! - **Arena Move Tree**: the iterative engine stores its nodes in a flat
//!   arena and drives them with a stack of indices.
//!
//! ## Modules
//!
//! - `core`: Players and outcome values
//! - `rules`: Game and game-state contracts
//! - `search`: Recursive and iterative minimax
//! - `strategy`: Move-choosing strategies
//! - `play`: Playing games out between strategies
//! - `games`: Reference games (Subtract Square, Chopsticks, Stonehenge)

pub mod core;
pub mod error;
pub mod games;
pub mod play;
pub mod rules;
pub mod search;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{Outcome, Player};

pub use crate::error::{Error, Result};

pub use crate::rules::{Game, GameResult, GameState, MoveOf};

pub use crate::search::{
    iterative_minimax, recursive_minimax,
    IterativeMinimax, RecursiveMinimax,
    SearchConfig, SearchResult, SearchStats,
    MoveTree, MoveNode, NodeId, NodePhase, TreeStats,
    TranspositionMemo,
};

pub use crate::strategy::{RandomStrategy, Strategy};

pub use crate::play::{play_match, MatchRecord};
