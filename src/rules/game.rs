//! Game contract.
//!
//! A game wraps a current state and decides, for any state, whether
//! play is over and who won. The search only ever reaches game rules
//! through this trait and [`GameState`].

use crate::core::Player;
use crate::error::{Error, Result};

use super::state::GameState;

/// Move type of a game's states.
pub type MoveOf<G> = <<G as Game>::State as GameState>::Move;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Neither player won.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// The winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Game trait.
///
/// Games implement this to expose terminal and winner detection.
///
/// ## Implementation Notes
///
/// - `is_over`: defaults to "no legal moves". Games with an early win
///   condition may override it, but it must stay monotonic: once true
///   for a state, it is true for every state play can continue into.
/// - `is_winner_in`: must be false for both players on non-terminal
///   states. The default declares the player *not* to move the winner
///   of a terminal state (the player who cannot move loses).
pub trait Game {
    /// State type wrapped by this game.
    type State: GameState;

    /// The current state.
    fn current_state(&self) -> &Self::State;

    /// Replace the current state.
    fn set_current_state(&mut self, state: Self::State);

    /// Human-readable rules.
    fn instructions(&self) -> &str;

    /// Parse a move written as text.
    ///
    /// Only checks the move's shape, not its legality in any state.
    /// Returns `Error::InvalidMove` for text that names no move.
    fn parse_move(&self, text: &str) -> Result<MoveOf<Self>>
    where
        Self: Sized;

    /// Check whether play is over in `state`.
    fn is_over(&self, state: &Self::State) -> bool {
        state.is_terminal()
    }

    /// Check whether `player` has won in `state`.
    fn is_winner_in(&self, state: &Self::State, player: Player) -> bool {
        self.is_over(state) && state.current_player() != player
    }

    /// Check whether `player` has won the current state.
    fn is_winner(&self, player: Player) -> bool {
        self.is_winner_in(self.current_state(), player)
    }

    /// Result of `state`, or `None` while play continues.
    fn result_of(&self, state: &Self::State) -> Option<GameResult> {
        if !self.is_over(state) {
            return None;
        }
        let winner = Player::ALL.into_iter().find(|&p| self.is_winner_in(state, p));
        Some(winner.map_or(GameResult::Draw, GameResult::Winner))
    }

    /// Play `mv` from the current state and advance to the successor.
    ///
    /// Returns `Error::InvalidMove` without touching the current state
    /// if `mv` is not legal.
    fn apply_move(&mut self, mv: &MoveOf<Self>) -> Result<()>
    where
        Self: Sized,
    {
        let current = self.current_state();
        if !current.is_valid_move(mv) {
            return Err(Error::invalid_move(mv, current));
        }
        let next = current.make_move(mv)?;
        self.set_current_state(next);
        Ok(())
    }
}
