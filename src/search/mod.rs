//! Exhaustive minimax search for rust-minimax.
//!
//! ## Overview
//!
//! Two engines compute the same game-theoretic value for every move and
//! pick the same move:
//!
//! - [`RecursiveMinimax`]: depth-first negamax with a per-search
//!   transposition memo and a +1 cut
//! - [`IterativeMinimax`]: the same evaluation driven by an explicit
//!   stack over an arena of move-tree nodes, for game trees deeper than
//!   the call stack allows
//!
//! Both search to the end of the game: there is no depth limit, no
//! heuristic evaluation and no pruning beyond the +1 cut. Both require a
//! finite, acyclic game tree below the searched position.
//!
//! ## Usage
//!
//! ```rust
//! use rust_minimax::core::Player;
//! use rust_minimax::games::subtract_square::SubtractSquare;
//! use rust_minimax::search::{iterative_minimax, recursive_minimax, RecursiveMinimax};
//!
//! let game = SubtractSquare::new(Player::P1, 10);
//!
//! // One-shot helpers return just the move
//! assert_eq!(recursive_minimax(&game)?, iterative_minimax(&game)?);
//!
//! // A search context also reports values and statistics
//! let mut search = RecursiveMinimax::default();
//! let result = search.search(&game)?;
//! println!("{} scores {}", result.best_move, result.value);
//! # Ok::<(), rust_minimax::Error>(())
//! ```

pub mod config;
pub mod iterative;
pub mod memo;
pub mod node;
pub mod recursive;
pub mod result;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::SearchConfig;
pub use iterative::IterativeMinimax;
pub use memo::TranspositionMemo;
pub use node::{MoveNode, NodeId, NodePhase};
pub use recursive::RecursiveMinimax;
pub use result::SearchResult;
pub use stats::SearchStats;
pub use tree::{MoveTree, TreeStats};

use crate::core::{Outcome, Player};
use crate::error::Result;
use crate::rules::{Game, GameState, MoveOf};

/// Best move for the player to act, by recursive minimax.
///
/// Returns `Error::TerminalPosition` if the current state is over.
pub fn recursive_minimax<G: Game>(game: &G) -> Result<MoveOf<G>> {
    RecursiveMinimax::default().search(game).map(|r| r.best_move)
}

/// Best move for the player to act, by iterative minimax.
///
/// Returns `Error::TerminalPosition` if the current state is over.
pub fn iterative_minimax<G: Game>(game: &G) -> Result<MoveOf<G>> {
    IterativeMinimax::default().search(game).map(|r| r.best_move)
}

/// Value of a terminal `state` for `mover`, the player whose move
/// produced it.
pub(crate) fn terminal_value<G: Game>(game: &G, state: &G::State, mover: Player) -> Outcome {
    if game.is_winner_in(state, mover) {
        Outcome::Win
    } else if game.is_winner_in(state, state.current_player()) {
        Outcome::Loss
    } else {
        Outcome::Draw
    }
}
