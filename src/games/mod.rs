//! Reference games.
//!
//! Concrete rule sets live outside the search; these implement the
//! [`Game`](crate::rules::Game) contract to exercise and demonstrate it.

pub mod chopsticks;
pub mod stonehenge;
pub mod subtract_square;
