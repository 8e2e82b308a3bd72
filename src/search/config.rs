//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Search configuration parameters.
///
/// None of these change the value of any position. They only change how
/// much work a search does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cache position values by state in the recursive engine.
    /// Collapses subtrees reached through different move orders.
    pub memoize: bool,

    /// Stop scanning a position's replies once one scores +1.
    /// A forced win for the replying side cannot be improved upon.
    pub short_circuit: bool,

    /// Initial capacity of the transposition memo.
    pub memo_capacity: usize,

    /// Initial capacity of the iterative engine's node arena.
    pub tree_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            short_circuit: true,
            memo_capacity: 1024,
            tree_capacity: 1024,
        }
    }
}

impl SearchConfig {
    /// Create a new config with memoization toggled.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Create a new config with the +1 cut toggled.
    pub fn with_short_circuit(mut self, short_circuit: bool) -> Self {
        self.short_circuit = short_circuit;
        self
    }

    /// Create a new config with a custom memo capacity.
    pub fn with_memo_capacity(mut self, capacity: usize) -> Self {
        self.memo_capacity = capacity;
        self
    }

    /// Create a new config with a custom arena capacity.
    pub fn with_tree_capacity(mut self, capacity: usize) -> Self {
        self.tree_capacity = capacity;
        self
    }

    /// Plain exhaustive minimax: no memo, no cut.
    pub fn exhaustive() -> Self {
        Self::default().with_memoize(false).with_short_circuit(false)
    }
}
