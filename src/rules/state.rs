//! Game state contract.
//!
//! A state is an immutable snapshot: a position plus the player to move.
//! States are compared and hashed structurally, which is what the search
//! uses as its transposition key.

use std::fmt::Debug;
use std::hash::Hash;

use crate::core::Player;
use crate::error::Result;

/// Game state trait.
///
/// ## Implementation Notes
///
/// - `possible_moves`: empty exactly when the state is terminal
/// - `make_move`: returns a new state, never mutates `self`
/// - `Eq`/`Hash`: must cover the player to move and every positional
///   field, so equal states are interchangeable in the search
pub trait GameState: Clone + Eq + Hash + Debug {
    /// Opaque move token accepted by `make_move`.
    type Move: Clone + Eq + Hash + Debug;

    /// The player to act in this state.
    fn current_player(&self) -> Player;

    /// Legal moves, in a deterministic order.
    fn possible_moves(&self) -> Vec<Self::Move>;

    /// Successor state after `mv`.
    ///
    /// Returns `Error::InvalidMove` if `mv` is not legal here.
    fn make_move(&self, mv: &Self::Move) -> Result<Self>;

    /// Check whether `mv` is among the legal moves.
    fn is_valid_move(&self, mv: &Self::Move) -> bool {
        self.possible_moves().contains(mv)
    }

    /// A state with no legal moves is terminal.
    fn is_terminal(&self) -> bool {
        self.possible_moves().is_empty()
    }
}
