//! Subtract Square implementation.

use crate::core::Player;
use crate::error::{Error, Result};
use crate::rules::{Game, GameState};

const INSTRUCTIONS: &str = "Start from a number. Take turns subtracting a perfect square \
no larger than the current number. The player who reaches 0 wins.";

/// A Subtract Square position: the number left and the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubtractSquareState {
    player: Player,
    number: u32,
}

impl SubtractSquareState {
    /// Create a position.
    #[must_use]
    pub const fn new(player: Player, number: u32) -> Self {
        Self { player, number }
    }

    /// The number left.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }
}

/// Check whether `n` is a positive perfect square.
fn is_square(n: u32) -> bool {
    let root = (n as f64).sqrt() as u64;
    n > 0 && (root.saturating_sub(1)..=root + 1).any(|r| r * r == n as u64)
}

impl GameState for SubtractSquareState {
    type Move = u32;

    fn current_player(&self) -> Player {
        self.player
    }

    fn possible_moves(&self) -> Vec<u32> {
        (1u64..)
            .map(|k| k * k)
            .take_while(|&sq| sq <= self.number as u64)
            .map(|sq| sq as u32)
            .collect()
    }

    fn make_move(&self, mv: &u32) -> Result<Self> {
        if !is_square(*mv) || *mv > self.number {
            return Err(Error::invalid_move(mv, self));
        }
        Ok(Self {
            player: self.player.other(),
            number: self.number - mv,
        })
    }

    fn is_valid_move(&self, mv: &u32) -> bool {
        is_square(*mv) && *mv <= self.number
    }

    fn is_terminal(&self) -> bool {
        self.number == 0
    }
}

impl std::fmt::Display for SubtractSquareState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} turn to move. Current number is {}", self.player, self.number)
    }
}

/// Subtract Square game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubtractSquare {
    state: SubtractSquareState,
}

impl SubtractSquare {
    /// Start a game from `number` with `starting` to move.
    #[must_use]
    pub const fn new(starting: Player, number: u32) -> Self {
        Self {
            state: SubtractSquareState::new(starting, number),
        }
    }
}

impl Game for SubtractSquare {
    type State = SubtractSquareState;

    fn current_state(&self) -> &SubtractSquareState {
        &self.state
    }

    fn set_current_state(&mut self, state: SubtractSquareState) {
        self.state = state;
    }

    fn instructions(&self) -> &str {
        INSTRUCTIONS
    }

    fn parse_move(&self, text: &str) -> Result<u32> {
        text.trim()
            .parse()
            .map_err(|_| Error::invalid_move(text, &self.state))
    }
}
