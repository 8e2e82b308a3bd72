//! Stonehenge.
//!
//! A ley-line capture game on a hexagonal-ish board:
//! - Players alternately claim empty cells
//! - Holding at least half of a ley-line's cells captures it for good
//! - Capturing at least half of all ley-lines wins immediately
//!
//! The early win condition is the interesting part for the search:
//! `is_over` is true before the board is full. It stays monotonic because
//! a decided position reports no legal moves.

mod game;
pub mod layout;

pub use game::{Stonehenge, StonehengeState};
pub use layout::{Direction, Layout};
