//! Playing games out between two strategies.

use log::debug;

use crate::core::Player;
use crate::error::Result;
use crate::rules::{Game, GameState, MoveOf};
use crate::strategy::Strategy;

/// Record of one played game.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchRecord<M> {
    /// Moves in the order they were played.
    pub moves: Vec<(Player, M)>,

    /// Winner, if the game finished with one.
    pub winner: Option<Player>,

    /// Whether the game reached a terminal state.
    pub finished: bool,
}

impl<M> MatchRecord<M> {
    /// Number of moves played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Play `game` forward from its current state until it is over or
/// `max_plies` moves have been made.
///
/// `p1` moves whenever `Player::P1` is to act, `p2` otherwise. The game
/// is left at the final state. Errors from a strategy or an illegal move
/// stop the match.
pub fn play_match<G, A, B>(
    game: &mut G,
    p1: &mut A,
    p2: &mut B,
    max_plies: usize,
) -> Result<MatchRecord<MoveOf<G>>>
where
    G: Game,
    A: Strategy<G> + ?Sized,
    B: Strategy<G> + ?Sized,
{
    let mut moves = Vec::new();
    while moves.len() < max_plies && !game.is_over(game.current_state()) {
        let player = game.current_state().current_player();
        let mv = match player {
            Player::P1 => p1.choose_move(game)?,
            Player::P2 => p2.choose_move(game)?,
        };
        game.apply_move(&mv)?;
        moves.push((player, mv));
    }

    let result = game.result_of(game.current_state());
    let record = MatchRecord {
        moves,
        winner: result.and_then(|r| r.winner()),
        finished: result.is_some(),
    };
    debug!(
        "match over after {} plies: finished={}, winner={:?}",
        record.plies(),
        record.finished,
        record.winner
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::subtract_square::SubtractSquare;
    use crate::search::RecursiveMinimax;
    use crate::strategy::RandomStrategy;

    #[test]
    fn test_play_to_end() {
        let mut game = SubtractSquare::new(Player::P1, 20);
        let record = play_match(&mut game, &mut RandomStrategy::new(1), &mut RandomStrategy::new(2), 100).unwrap();

        assert!(record.finished);
        assert!(record.winner.is_some());
        assert_eq!(game.current_state().number(), 0);
        // Whoever moved last reached 0
        assert_eq!(record.winner, record.moves.last().map(|&(p, _)| p));
    }

    #[test]
    fn test_ply_limit() {
        let mut game = SubtractSquare::new(Player::P1, 20);
        let record = play_match(&mut game, &mut RandomStrategy::new(1), &mut RandomStrategy::new(2), 1).unwrap();

        assert_eq!(record.plies(), 1);
        assert!(!record.finished);
        assert_eq!(record.winner, None);
    }

    #[test]
    fn test_minimax_beats_random_from_won_position() {
        // 3 is a win for the player to move
        let mut game = SubtractSquare::new(Player::P2, 3);
        let record = play_match(&mut game, &mut RandomStrategy::new(5), &mut RecursiveMinimax::default(), 10).unwrap();

        assert_eq!(record.winner, Some(Player::P2));
    }

    #[test]
    fn test_already_over() {
        let mut game = SubtractSquare::new(Player::P1, 0);
        let record = play_match(&mut game, &mut RandomStrategy::new(1), &mut RandomStrategy::new(2), 10).unwrap();

        assert_eq!(record.plies(), 0);
        assert!(record.finished);
        assert_eq!(record.winner, Some(Player::P2));
    }
}
