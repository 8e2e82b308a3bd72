//! Iterative minimax over an explicit stack of move-tree nodes.
//!
//! Produces the same values and the same move as the recursive engine,
//! but call-stack depth stays constant however deep the game tree goes.
//!
//! ## Algorithm
//!
//! Post-order depth-first traversal. The top node of the stack is
//! inspected without popping it:
//!
//! 1. Terminal: score it like a terminal successor, pop.
//! 2. Unvisited: create one child per legal move (each owning its own
//!    successor snapshot) and push them all above it.
//! 3. Expanded: every child has been popped with a value, so the node's
//!    value is the negation of the best child value; pop.
//!
//! The arena owns all nodes; the stack only holds `NodeId`s.

use std::time::Instant;

use log::{debug, trace};

use crate::core::Outcome;
use crate::error::{Error, Result};
use crate::rules::{Game, GameState, MoveOf};

use super::config::SearchConfig;
use super::node::{MoveNode, NodeId, NodePhase};
use super::result::SearchResult;
use super::stats::SearchStats;
use super::terminal_value;
use super::tree::{MoveTree, TreeStats};

/// Iterative minimax search context.
#[derive(Clone, Debug, Default)]
pub struct IterativeMinimax {
    /// Search configuration.
    config: SearchConfig,

    /// Statistics from the last search.
    stats: SearchStats,

    /// Shape of the last search's move tree.
    tree_stats: Option<TreeStats>,
}

impl IterativeMinimax {
    /// Create a new iterative search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
            tree_stats: None,
        }
    }

    /// Search the game's current state for the best move.
    ///
    /// Returns the highest-valued root move, ties going to the earliest
    /// enumerated. The tree is dropped before returning.
    ///
    /// Returns `Error::TerminalPosition` if the current state is over.
    pub fn search<G: Game>(&mut self, game: &G) -> Result<SearchResult<MoveOf<G>>> {
        let start = Instant::now();
        self.stats.reset();
        self.tree_stats = None;

        let root_state = game.current_state();
        if root_state.is_terminal() || game.is_over(root_state) {
            return Err(Error::terminal(root_state));
        }
        debug!(
            "iterative minimax: searching for {} from {:?}",
            root_state.current_player(),
            root_state
        );

        let mut tree = MoveTree::with_capacity(root_state.clone(), self.config.tree_capacity);
        let mut stack = vec![tree.root()];

        while let Some(&top) = stack.last() {
            self.stats.max_stack_depth = self.stats.max_stack_depth.max(stack.len());
            let node = tree.get(top);
            let phase = node.phase;

            match phase {
                NodePhase::Unvisited => {
                    let replies = node.state.possible_moves();
                    if replies.is_empty() || game.is_over(&node.state) {
                        let mover = node.state.current_player().other();
                        let value = terminal_value(game, &node.state, mover);
                        self.stats.terminal_positions += 1;
                        self.finish(&mut tree, top, value);
                        stack.pop();
                    } else {
                        self.expand(&mut tree, &mut stack, top, replies)?;
                    }
                }
                NodePhase::Expanded => {
                    debug_assert!(tree.children(top).all(MoveNode::is_valued));
                    let best = tree.children(top).filter_map(MoveNode::value).max();
                    let value = match best {
                        Some(best) => -best,
                        None => terminal_value(game, &node.state, node.state.current_player().other()),
                    };
                    self.finish(&mut tree, top, value);
                    stack.pop();
                }
                NodePhase::Valued(_) => {
                    debug_assert!(false, "valued node {top} left on the stack");
                    stack.pop();
                }
            }
        }

        let move_values: Vec<_> = tree
            .children(tree.root())
            .filter_map(|child| Some((child.move_made.clone()?, child.value()?)))
            .collect();

        self.stats.nodes_allocated = tree.len();
        self.stats.time_us = start.elapsed().as_micros() as u64;
        let tree_stats = tree.stats();
        debug!("iterative minimax finished: {:?}, tree {:?}", self.stats, tree_stats);
        self.tree_stats = Some(tree_stats);

        SearchResult::from_move_values(move_values, self.stats.clone())
            .ok_or_else(|| Error::terminal(root_state))
    }

    /// Create `node`'s children, one per legal move, and push them.
    fn expand<S: GameState>(
        &mut self,
        tree: &mut MoveTree<S>,
        stack: &mut Vec<NodeId>,
        node: NodeId,
        replies: Vec<S::Move>,
    ) -> Result<()> {
        let depth = tree.get(node).depth + 1;
        self.stats.record_depth(depth);

        for mv in replies {
            let child_state = tree.get(node).state.make_move(&mv)?;
            let child = tree.add_child(node, MoveNode::new(child_state, Some(mv), depth));
            stack.push(child);
        }
        tree.get_mut(node).phase = NodePhase::Expanded;
        Ok(())
    }

    /// Assign a node its final value.
    fn finish<S: GameState>(&mut self, tree: &mut MoveTree<S>, node: NodeId, value: Outcome) {
        trace!("node {} valued {}", node, value);
        self.stats.positions_evaluated += 1;
        tree.get_mut(node).phase = NodePhase::Valued(value);
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Shape of the move tree built by the last successful search.
    #[must_use]
    pub fn tree_stats(&self) -> Option<&TreeStats> {
        self.tree_stats.as_ref()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::games::subtract_square::SubtractSquare;

    #[test]
    fn test_search_single_move() {
        let game = SubtractSquare::new(Player::P1, 2);
        let mut search = IterativeMinimax::default();

        let result = search.search(&game).unwrap();

        assert_eq!(result.best_move, 1);
        assert_eq!(result.value, Outcome::Loss);
    }

    #[test]
    fn test_search_prefers_first_winning_move() {
        // From 9: taking 1 hands the opponent a won 8, taking 4 leaves
        // a lost 5, taking 9 wins outright.
        let game = SubtractSquare::new(Player::P1, 9);
        let mut search = IterativeMinimax::default();

        let result = search.search(&game).unwrap();

        assert_eq!(result.best_move, 4);
        assert_eq!(result.value, Outcome::Win);
        assert_eq!(
            result.move_values,
            vec![(1, Outcome::Loss), (4, Outcome::Win), (9, Outcome::Win)]
        );
    }

    #[test]
    fn test_search_terminal_is_error() {
        let game = SubtractSquare::new(Player::P2, 0);
        let mut search = IterativeMinimax::default();

        assert!(matches!(search.search(&game), Err(Error::TerminalPosition { .. })));
        assert!(search.tree_stats().is_none());
    }

    #[test]
    fn test_every_node_valued() {
        let game = SubtractSquare::new(Player::P1, 6);
        let mut search = IterativeMinimax::default();

        search.search(&game).unwrap();

        let tree = search.tree_stats().unwrap();
        assert_eq!(tree.valued_count, tree.node_count);
        assert_eq!(search.stats().nodes_allocated, tree.node_count);
        assert_eq!(search.stats().positions_evaluated as usize, tree.node_count);
    }

    #[test]
    fn test_tree_shape() {
        // 3 -> 2 -> 1 -> 0 is the only line of play
        let game = SubtractSquare::new(Player::P1, 3);
        let mut search = IterativeMinimax::default();

        let result = search.search(&game).unwrap();

        let tree = search.tree_stats().unwrap();
        assert_eq!(tree.node_count, 4);
        assert_eq!(tree.max_depth, 3);
        assert_eq!(tree.leaf_count, 1);
        assert_eq!(result.value, Outcome::Win);
        assert_eq!(search.stats().max_stack_depth, 4);
    }
}
