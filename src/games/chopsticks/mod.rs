//! Chopsticks.
//!
//! The finger game:
//! - Each player starts with one finger on each hand
//! - On your turn: tap an opponent's hand with one of yours
//! - Counts wrap mod 5, and a hand at 0 is out of play
//! - Leave the opponent with no fingers to win

mod game;

pub use game::{Chopsticks, ChopsticksMove, ChopsticksState, Hand};
