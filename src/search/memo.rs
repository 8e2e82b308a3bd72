//! Transposition memo for the recursive engine.
//!
//! Maps a state to its value for the player who moved *into* it. Keys
//! are the states themselves (structural `Eq + Hash`), so two move
//! orders reaching the same position share one entry.
//!
//! A memo lives for exactly one top-level search and is owned by it.

use rustc_hash::FxHashMap;

use crate::core::Outcome;
use crate::rules::GameState;

/// Per-search cache of position values.
#[derive(Clone, Debug)]
pub struct TranspositionMemo<S: GameState> {
    values: FxHashMap<S, Outcome>,
}

impl<S: GameState> TranspositionMemo<S> {
    /// Create an empty memo.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty memo with room for `capacity` positions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Look up a previously computed value.
    #[inline]
    #[must_use]
    pub fn get(&self, state: &S) -> Option<Outcome> {
        self.values.get(state).copied()
    }

    /// Record the value of `state`.
    #[inline]
    pub fn insert(&mut self, state: S, value: Outcome) {
        self.values.insert(state, value);
    }

    /// Number of cached positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the memo is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: GameState> Default for TranspositionMemo<S> {
    fn default() -> Self {
        Self::new()
    }
}
