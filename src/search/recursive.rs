//! Recursive minimax with a transposition memo.
//!
//! Depth-first negamax over the game contract. A move's score is from
//! the point of view of the player making it:
//!
//! - terminal successor: +1 if the mover won, -1 if the opponent won,
//!   0 otherwise
//! - otherwise: the negation of the opponent's best reply
//!
//! The game is only read. Successor positions are explicit values passed
//! down the recursion, so the caller's game is never repointed and has
//! nothing to restore.

use std::time::Instant;

use log::{debug, trace};

use crate::core::Outcome;
use crate::error::{Error, Result};
use crate::rules::{Game, GameState, MoveOf};

use super::config::SearchConfig;
use super::memo::TranspositionMemo;
use super::result::SearchResult;
use super::stats::SearchStats;
use super::terminal_value;

/// Recursive minimax search context.
///
/// Owns configuration and the statistics of the last search. The memo is
/// created fresh for each top-level call and dropped when it returns.
#[derive(Clone, Debug, Default)]
pub struct RecursiveMinimax {
    /// Search configuration.
    config: SearchConfig,

    /// Statistics from the last search.
    stats: SearchStats,
}

impl RecursiveMinimax {
    /// Create a new recursive search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Search the game's current state for the best move.
    ///
    /// Returns the first move scoring +1 if there is one, otherwise the
    /// highest-scoring move, ties going to the earliest enumerated.
    ///
    /// Returns `Error::TerminalPosition` if the current state is over.
    pub fn search<G: Game>(&mut self, game: &G) -> Result<SearchResult<MoveOf<G>>> {
        let start = Instant::now();
        self.stats.reset();

        let root = game.current_state();
        let moves = root.possible_moves();
        if moves.is_empty() || game.is_over(root) {
            return Err(Error::terminal(root));
        }
        debug!(
            "recursive minimax: {} candidate moves for {} from {:?}",
            moves.len(),
            root.current_player(),
            root
        );

        let mut scorer = Scorer::new(game, &self.config, &mut self.stats);
        let mut move_values = Vec::with_capacity(moves.len());
        for mv in moves {
            let value = scorer.score(root, &mv, 1)?;
            move_values.push((mv, value));
            if value == Outcome::Win && self.config.short_circuit {
                break;
            }
        }
        let memo_entries = scorer.memo.len();
        self.stats.memo_entries = memo_entries;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!("recursive minimax finished: {:?}", self.stats);
        SearchResult::from_move_values(move_values, self.stats.clone()).ok_or_else(|| Error::terminal(root))
    }

    /// Score a single move from the game's current state.
    ///
    /// `mv` is expected to be legal; an illegal move surfaces the game's
    /// `Error::InvalidMove`.
    pub fn score<G: Game>(&mut self, game: &G, mv: &MoveOf<G>) -> Result<Outcome> {
        self.stats.reset();
        let mut scorer = Scorer::new(game, &self.config, &mut self.stats);
        let value = scorer.score(game.current_state(), mv, 1)?;
        let memo_entries = scorer.memo.len();
        self.stats.memo_entries = memo_entries;
        Ok(value)
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// State of one top-level search: the game, its private memo and the
/// statistics being collected.
struct Scorer<'a, G: Game> {
    game: &'a G,
    config: &'a SearchConfig,
    stats: &'a mut SearchStats,
    memo: TranspositionMemo<G::State>,
}

impl<'a, G: Game> Scorer<'a, G> {
    fn new(game: &'a G, config: &'a SearchConfig, stats: &'a mut SearchStats) -> Self {
        Self {
            game,
            config,
            stats,
            memo: TranspositionMemo::with_capacity(config.memo_capacity),
        }
    }

    /// Value of playing `mv` in `state`, for the player making it.
    fn score(&mut self, state: &G::State, mv: &MoveOf<G>, depth: u32) -> Result<Outcome> {
        let next = state.make_move(mv)?;
        self.stats.record_depth(depth);

        if self.config.memoize {
            if let Some(value) = self.memo.get(&next) {
                self.stats.memo_hits += 1;
                trace!("memo hit at depth {}: {:?} = {}", depth, next, value);
                return Ok(value);
            }
        }
        self.stats.positions_evaluated += 1;

        let replies = next.possible_moves();
        let value = if replies.is_empty() || self.game.is_over(&next) {
            self.stats.terminal_positions += 1;
            terminal_value(self.game, &next, state.current_player())
        } else {
            let mut best = Outcome::Loss;
            for reply in &replies {
                best = best.max(self.score(&next, reply, depth + 1)?);
                if best == Outcome::Win && self.config.short_circuit {
                    break;
                }
            }
            -best
        };

        if self.config.memoize {
            self.memo.insert(next, value);
        }
        Ok(value)
    }
}
