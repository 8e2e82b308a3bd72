//! Core engine types: players and outcome values.
//!
//! These are game-agnostic. Concrete games name their players with
//! [`Player`] and the search reports every value as an [`Outcome`].

pub mod outcome;
pub mod player;

pub use outcome::Outcome;
pub use player::Player;
