//! Player identification for two-player games.
//!
//! ## Player
//!
//! Exactly two symmetric identifiers, `P1` and `P2`. `other()` flips
//! between them, which is all a negamax search ever needs to know.

use serde::{Deserialize, Serialize};

/// One of the two players of a sequential game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// First player ("p1").
    P1,
    /// Second player ("p2").
    P2,
}

impl Player {
    /// Both players, in seat order.
    pub const ALL: [Player; 2] = [Player::P1, Player::P2];

    /// The opponent of this player.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Pick the starting player from a "p1 starts" flag.
    #[must_use]
    pub const fn from_p1_starts(p1_starts: bool) -> Self {
        if p1_starts {
            Player::P1
        } else {
            Player::P2
        }
    }

    /// Short name, `"p1"` or `"p2"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
