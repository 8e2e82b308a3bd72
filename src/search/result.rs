//! Search results.

use crate::core::Outcome;

use super::stats::SearchStats;

/// Outcome of one top-level search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<M> {
    /// The chosen move.
    pub best_move: M,

    /// Value of `best_move` for the player to act.
    pub value: Outcome,

    /// Every evaluated root move with its value, in enumeration order.
    ///
    /// The recursive engine stops after the first winning move when the
    /// +1 cut is enabled, so this may be a prefix of the legal moves.
    pub move_values: Vec<(M, Outcome)>,

    /// Statistics for this search.
    pub stats: SearchStats,
}

impl<M: Clone> SearchResult<M> {
    /// Build a result from scored root moves.
    ///
    /// Picks the highest value; ties go to the earliest move. Returns
    /// `None` if no move was scored.
    pub(crate) fn from_move_values(move_values: Vec<(M, Outcome)>, stats: SearchStats) -> Option<Self> {
        let best = best_index(&move_values)?;
        let (best_move, value) = move_values[best].clone();
        Some(Self {
            best_move,
            value,
            move_values,
            stats,
        })
    }

    /// Value recorded for `mv`, if it was evaluated.
    #[must_use]
    pub fn value_of(&self, mv: &M) -> Option<Outcome>
    where
        M: PartialEq,
    {
        self.move_values.iter().find(|(m, _)| m == mv).map(|&(_, v)| v)
    }
}

/// Index of the first maximal value.
fn best_index<M>(move_values: &[(M, Outcome)]) -> Option<usize> {
    let mut best: Option<(usize, Outcome)> = None;
    for (i, &(_, value)) in move_values.iter().enumerate() {
        match best {
            Some((_, b)) if value <= b => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}
