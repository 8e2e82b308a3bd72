//! Subtract Square.
//!
//! A one-heap subtraction game used to exercise the search:
//! - Play starts from a non-negative number
//! - On your turn: subtract any perfect square not exceeding it
//! - The player who brings the number to 0 wins
//!
//! Its move graph is acyclic and full of transpositions, which makes it
//! a good workload for the memo.

mod game;

pub use game::{SubtractSquare, SubtractSquareState};
