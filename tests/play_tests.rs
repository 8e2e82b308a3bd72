//! Integration tests for playing whole games between strategies.

use rust_minimax::core::{Outcome, Player};
use rust_minimax::games::chopsticks::{Chopsticks, ChopsticksState};
use rust_minimax::games::stonehenge::Stonehenge;
use rust_minimax::games::subtract_square::SubtractSquare;
use rust_minimax::play::play_match;
use rust_minimax::rules::Game;
use rust_minimax::search::{IterativeMinimax, RecursiveMinimax};
use rust_minimax::strategy::{RandomStrategy, Strategy};

#[test]
fn test_minimax_never_loses_a_won_position() {
    // Whatever the opponent does, a position valued +1 stays won.
    for number in [1, 3, 4, 6, 8, 9, 11, 13, 14, 16, 18, 19] {
        let game = SubtractSquare::new(Player::P1, number);
        let value = RecursiveMinimax::default().search(&game).unwrap().value;
        assert_eq!(value, Outcome::Win, "{number} should be won");

        for seed in 0..5 {
            let mut game = game.clone();
            let record = play_match(
                &mut game,
                &mut RecursiveMinimax::default(),
                &mut RandomStrategy::new(seed),
                100,
            )
            .unwrap();
            assert_eq!(record.winner, Some(Player::P1), "{number} lost with seed {seed}");
        }
    }
}

#[test]
fn test_self_play_matches_root_value() {
    let game = Stonehenge::new(Player::P1, 2).unwrap();
    let value = RecursiveMinimax::default().search(&game).unwrap().value;

    let mut played = game.clone();
    let record = play_match(
        &mut played,
        &mut RecursiveMinimax::default(),
        &mut IterativeMinimax::default(),
        100,
    )
    .unwrap();

    assert!(record.finished);
    let expected = match value {
        Outcome::Win => Some(Player::P1),
        Outcome::Loss => Some(Player::P2),
        Outcome::Draw => None,
    };
    assert_eq!(record.winner, expected);
}

#[test]
fn test_moves_alternate() {
    let mut game = Stonehenge::new(Player::P2, 2).unwrap();
    let record = play_match(&mut game, &mut RandomStrategy::new(3), &mut RandomStrategy::new(4), 100).unwrap();

    assert!(record.finished);
    assert!(game.is_over(game.current_state()));
    for (i, (player, _)) in record.moves.iter().enumerate() {
        let expected = if i % 2 == 0 { Player::P2 } else { Player::P1 };
        assert_eq!(*player, expected);
    }
}

#[test]
fn test_boxed_strategies() {
    let mut strategies: Vec<Box<dyn Strategy<SubtractSquare>>> = vec![
        Box::new(RecursiveMinimax::default()),
        Box::new(IterativeMinimax::default()),
        Box::new(RandomStrategy::new(11)),
    ];

    for strategy in &mut strategies {
        let mut game = SubtractSquare::new(Player::P1, 12);
        let mut opponent = RandomStrategy::new(0);
        let record = play_match(&mut game, &mut **strategy, &mut opponent, 200).unwrap();

        assert!(record.finished);
        assert_eq!(game.current_state().number(), 0);
    }
}

#[test]
fn test_chopsticks_ply_limit() {
    // Random play in chopsticks can cycle, so cap it.
    let mut game = Chopsticks::from_state(ChopsticksState::initial(Player::P1));
    let record = play_match(&mut game, &mut RandomStrategy::new(8), &mut RandomStrategy::new(9), 40).unwrap();

    assert!(record.plies() <= 40);
    assert_eq!(record.finished, game.is_over(game.current_state()));
    for (_, mv) in &record.moves {
        assert_eq!(mv.to_string().len(), 2);
    }
}
