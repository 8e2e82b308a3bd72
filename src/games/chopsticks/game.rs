//! Chopsticks implementation.

use std::str::FromStr;

use crate::core::Player;
use crate::error::{Error, Result};
use crate::rules::{Game, GameState};

const FINGERS: u8 = 5;

const INSTRUCTIONS: &str = "Both players start with two hands each with one finger. \
On your turn, tap one of the opponent's hands with one of yours: the tapped hand now \
holds (your fingers + its fingers) mod 5. Empty hands can neither tap nor be tapped. \
Leave the opponent with two empty hands to win. Moves are two letters, l or r: your \
hand first, then theirs.";

/// A hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    const BOTH: [Hand; 2] = [Hand::Left, Hand::Right];

    const fn index(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }

    const fn letter(self) -> char {
        match self {
            Hand::Left => 'l',
            Hand::Right => 'r',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'l' => Some(Hand::Left),
            'r' => Some(Hand::Right),
            _ => None,
        }
    }
}

/// Tap the opponent's `target` hand with the mover's `attacker` hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChopsticksMove {
    pub attacker: Hand,
    pub target: Hand,
}

impl ChopsticksMove {
    /// Create a move.
    #[must_use]
    pub const fn new(attacker: Hand, target: Hand) -> Self {
        Self { attacker, target }
    }
}

impl std::fmt::Display for ChopsticksMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.attacker.letter(), self.target.letter())
    }
}

impl FromStr for ChopsticksMove {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut letters = s.trim().chars().map(Hand::from_letter);
        match (letters.next(), letters.next(), letters.next()) {
            (Some(Some(attacker)), Some(Some(target)), None) => Ok(Self { attacker, target }),
            _ => Err(Error::InvalidMove {
                mv: s.to_string(),
                state: "chopsticks".to_string(),
            }),
        }
    }
}

/// A Chopsticks position.
///
/// Hands are stored from the mover's side: `current` belongs to the
/// player to move, `other` to their opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChopsticksState {
    player: Player,
    current: [u8; 2],
    other: [u8; 2],
}

impl ChopsticksState {
    /// Create a position. Finger counts are taken mod 5.
    #[must_use]
    pub fn new(player: Player, current: [u8; 2], other: [u8; 2]) -> Self {
        Self {
            player,
            current: current.map(|f| f % FINGERS),
            other: other.map(|f| f % FINGERS),
        }
    }

    /// Opening position: one finger on every hand.
    #[must_use]
    pub fn initial(player: Player) -> Self {
        Self::new(player, [1, 1], [1, 1])
    }

    /// Hands of `player`, as `[left, right]`.
    #[must_use]
    pub fn hands(&self, player: Player) -> [u8; 2] {
        if player == self.player {
            self.current
        } else {
            self.other
        }
    }
}

impl GameState for ChopsticksState {
    type Move = ChopsticksMove;

    fn current_player(&self) -> Player {
        self.player
    }

    fn possible_moves(&self) -> Vec<ChopsticksMove> {
        let mut moves = Vec::with_capacity(4);
        for attacker in Hand::BOTH {
            if self.current[attacker.index()] == 0 {
                continue;
            }
            for target in Hand::BOTH {
                if self.other[target.index()] != 0 {
                    moves.push(ChopsticksMove::new(attacker, target));
                }
            }
        }
        moves
    }

    fn make_move(&self, mv: &ChopsticksMove) -> Result<Self> {
        let fingers = self.current[mv.attacker.index()];
        let tapped = self.other[mv.target.index()];
        if fingers == 0 || tapped == 0 {
            return Err(Error::invalid_move(mv, self));
        }

        let mut hit = self.other;
        hit[mv.target.index()] = (fingers + tapped) % FINGERS;
        Ok(Self {
            player: self.player.other(),
            current: hit,
            other: self.current,
        })
    }
}

impl std::fmt::Display for ChopsticksState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [l1, r1] = self.hands(Player::P1);
        let [l2, r2] = self.hands(Player::P2);
        write!(f, "p1: left {l1}-{r1} right ; p2: left {l2}-{r2} right")
    }
}

/// Chopsticks game.
///
/// The move graph has cycles (finger counts wrap mod 5), so exhaustive
/// search only finishes from positions whose subtree is finite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chopsticks {
    state: ChopsticksState,
}

impl Chopsticks {
    /// Start a game from the opening position.
    #[must_use]
    pub fn new(starting: Player) -> Self {
        Self::from_state(ChopsticksState::initial(starting))
    }

    /// Start a game from an arbitrary position.
    #[must_use]
    pub fn from_state(state: ChopsticksState) -> Self {
        Self { state }
    }
}

impl Game for Chopsticks {
    type State = ChopsticksState;

    fn current_state(&self) -> &ChopsticksState {
        &self.state
    }

    fn set_current_state(&mut self, state: ChopsticksState) {
        self.state = state;
    }

    fn instructions(&self) -> &str {
        INSTRUCTIONS
    }

    fn parse_move(&self, text: &str) -> Result<ChopsticksMove> {
        text.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(s: &str) -> ChopsticksMove {
        s.parse().unwrap()
    }

    #[test]
    fn test_possible_moves() {
        let state = ChopsticksState::initial(Player::P1);
        let moves: Vec<String> = state.possible_moves().iter().map(|m| m.to_string()).collect();
        assert_eq!(moves, vec!["ll", "lr", "rl", "rr"]);

        let state = ChopsticksState::new(Player::P1, [0, 1], [1, 1]);
        let moves: Vec<String> = state.possible_moves().iter().map(|m| m.to_string()).collect();
        assert_eq!(moves, vec!["rl", "rr"]);
    }

    #[test]
    fn test_make_move() {
        let state = ChopsticksState::initial(Player::P1);
        let next = state.make_move(&mv("ll")).unwrap();

        assert_eq!(next.current_player(), Player::P2);
        assert_eq!(next.to_string(), "p1: left 1-1 right ; p2: left 2-1 right");
        assert_eq!(state, ChopsticksState::initial(Player::P1));
    }

    #[test]
    fn test_fingers_wrap() {
        let state = ChopsticksState::new(Player::P2, [3, 1], [4, 2]);
        let next = state.make_move(&mv("rl")).unwrap();

        // p1's left: 4 + 1 = 5 -> 0
        assert_eq!(next.hands(Player::P1), [0, 2]);
        assert_eq!(next.hands(Player::P2), [3, 1]);
    }

    #[test]
    fn test_invalid_move() {
        let state = ChopsticksState::new(Player::P1, [0, 1], [1, 0]);
        assert!(matches!(state.make_move(&mv("ll")), Err(Error::InvalidMove { .. })));
        assert!(matches!(state.make_move(&mv("rr")), Err(Error::InvalidMove { .. })));
        assert!(state.make_move(&mv("rl")).is_ok());
    }

    #[test]
    fn test_parse() {
        assert_eq!(mv("LR"), ChopsticksMove::new(Hand::Left, Hand::Right));
        assert!("l".parse::<ChopsticksMove>().is_err());
        assert!("lrl".parse::<ChopsticksMove>().is_err());
        assert!("lx".parse::<ChopsticksMove>().is_err());
    }

    #[test]
    fn test_winner() {
        let mut game = Chopsticks::from_state(ChopsticksState::new(Player::P1, [1, 1], [4, 0]));
        assert!(!game.is_over(game.current_state()));

        game.apply_move(&mv("rl")).unwrap();

        assert!(game.is_over(game.current_state()));
        assert!(game.is_winner(Player::P1));
        assert!(!game.is_winner(Player::P2));
    }
}
