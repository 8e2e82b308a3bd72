//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions whose value was computed (memo hits excluded).
    pub positions_evaluated: u64,

    /// Terminal positions scored.
    pub terminal_positions: u64,

    /// Lookups answered by the transposition memo.
    pub memo_hits: u64,

    /// Entries in the memo when the search finished.
    pub memo_entries: usize,

    /// Move-tree nodes allocated (iterative engine).
    pub nodes_allocated: usize,

    /// Deepest ply reached below the root.
    pub max_depth: u32,

    /// Largest explicit stack size (iterative engine).
    pub max_stack_depth: usize,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of position lookups served by the memo.
    #[must_use]
    pub fn memo_hit_rate(&self) -> f64 {
        let lookups = self.memo_hits + self.positions_evaluated;
        if lookups == 0 {
            0.0
        } else {
            self.memo_hits as f64 / lookups as f64
        }
    }

    /// Calculate positions evaluated per second.
    #[must_use]
    pub fn positions_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.positions_evaluated as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    pub(crate) fn record_depth(&mut self, depth: u32) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }
}
