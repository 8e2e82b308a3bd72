//! Game-theoretic outcome values.
//!
//! Minimax values are always one of {-1, 0, +1}. Encoding them as an
//! enum keeps the value range closed: negation and ordering are total
//! and no arithmetic can produce anything else.

use serde::{Deserialize, Serialize};

/// Outcome of a position from one player's point of view.
///
/// Ordered `Loss < Draw < Win`, so `max` picks the best outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i8)]
pub enum Outcome {
    /// Forced loss (-1).
    Loss = -1,
    /// Draw (0).
    Draw = 0,
    /// Forced win (+1).
    Win = 1,
}

impl Outcome {
    /// The numeric score, -1, 0 or +1.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// The same outcome seen by the opponent.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Outcome::Loss => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
            Outcome::Win => Outcome::Loss,
        }
    }

    /// Convert a numeric score. Returns `None` outside {-1, 0, +1}.
    #[must_use]
    pub const fn from_value(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Outcome::Loss),
            0 => Some(Outcome::Draw),
            1 => Some(Outcome::Win),
            _ => None,
        }
    }

    /// Negamax combination: the value of a position for the player who
    /// moved into it, given the values its own mover can reach.
    ///
    /// Returns `None` for an empty iterator.
    pub fn negamax<I: IntoIterator<Item = Outcome>>(children: I) -> Option<Self> {
        children.into_iter().max().map(Outcome::flip)
    }
}

impl std::ops::Neg for Outcome {
    type Output = Outcome;

    fn neg(self) -> Self::Output {
        self.flip()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.value())
    }
}
