//! Shared test fixtures: an explicit, acyclic game graph.
//!
//! Nodes are numbered so every move leads to a higher-numbered node,
//! which keeps the graph acyclic. Several paths may reach one node, so
//! graphs also exercise transpositions.

#![allow(dead_code)]

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use proptest::prelude::*;

use rust_minimax::{Error, Game, GameState, Outcome, Player, Result};

/// Who wins at a terminal node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The player who made the last move wins.
    MoverWins,
    /// The player to move (who cannot) wins.
    ToMoveWins,
    /// Nobody wins.
    Draw,
}

#[derive(Clone, Debug)]
pub struct GraphNode {
    /// Target node of each move; the move is its index here.
    pub moves: Vec<usize>,
    /// Result if this node has no moves.
    pub verdict: Verdict,
}

/// A position: a node plus the player to move.
#[derive(Clone, Debug)]
pub struct GraphState {
    nodes: Arc<Vec<GraphNode>>,
    node: usize,
    player: Player,
}

impl GraphState {
    pub fn node(&self) -> usize {
        self.node
    }
}

impl PartialEq for GraphState {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.player == other.player
    }
}

impl Eq for GraphState {}

impl Hash for GraphState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
        self.player.hash(state);
    }
}

impl GameState for GraphState {
    type Move = usize;

    fn current_player(&self) -> Player {
        self.player
    }

    fn possible_moves(&self) -> Vec<usize> {
        (0..self.nodes[self.node].moves.len()).collect()
    }

    fn make_move(&self, mv: &usize) -> Result<Self> {
        let target = *self.nodes[self.node]
            .moves
            .get(*mv)
            .ok_or_else(|| Error::invalid_move(mv, self.node))?;
        Ok(Self {
            nodes: Arc::clone(&self.nodes),
            node: target,
            player: self.player.other(),
        })
    }
}

/// Game over an explicit graph.
#[derive(Clone, Debug)]
pub struct GraphGame {
    state: GraphState,
}

impl GraphGame {
    pub fn new(nodes: Vec<GraphNode>, starting: Player) -> Self {
        for (i, node) in nodes.iter().enumerate() {
            assert!(node.moves.iter().all(|&t| t > i && t < nodes.len()), "graph must be acyclic");
        }
        Self {
            state: GraphState {
                nodes: Arc::new(nodes),
                node: 0,
                player: starting,
            },
        }
    }

    /// Root with two moves: `A` wins on the spot for the mover, `B`
    /// hands the opponent the win. `a_first` picks the move order.
    pub fn two_choice(a_first: bool) -> Self {
        let win = GraphNode { moves: vec![], verdict: Verdict::MoverWins };
        let lose = GraphNode { moves: vec![], verdict: Verdict::ToMoveWins };
        let (first, second) = if a_first { (win, lose) } else { (lose, win) };
        Self::new(
            vec![GraphNode { moves: vec![1, 2], verdict: Verdict::Draw }, first, second],
            Player::P1,
        )
    }

    /// Exact value of every move at the root, for the player to act,
    /// by plain negamax straight off the graph.
    pub fn reference_values(&self) -> Vec<Outcome> {
        let nodes = &self.state.nodes;
        nodes[self.state.node]
            .moves
            .iter()
            .map(|&target| reference_value(nodes, target))
            .collect()
    }
}

/// Value of `node` for the player who moved into it.
fn reference_value(nodes: &[GraphNode], node: usize) -> Outcome {
    let n = &nodes[node];
    if n.moves.is_empty() {
        return match n.verdict {
            Verdict::MoverWins => Outcome::Win,
            Verdict::ToMoveWins => Outcome::Loss,
            Verdict::Draw => Outcome::Draw,
        };
    }
    let best = n.moves.iter().map(|&t| reference_value(nodes, t)).max().unwrap();
    -best
}

impl Game for GraphGame {
    type State = GraphState;

    fn current_state(&self) -> &GraphState {
        &self.state
    }

    fn set_current_state(&mut self, state: GraphState) {
        self.state = state;
    }

    fn instructions(&self) -> &str {
        "Follow the arrows."
    }

    fn parse_move(&self, text: &str) -> Result<usize> {
        text.trim().parse().map_err(|_| Error::invalid_move(text, self.state.node))
    }

    fn is_winner_in(&self, state: &GraphState, player: Player) -> bool {
        if !self.is_over(state) {
            return false;
        }
        match state.nodes[state.node].verdict {
            Verdict::MoverWins => player != state.player,
            Verdict::ToMoveWins => player == state.player,
            Verdict::Draw => false,
        }
    }
}

/// Random acyclic graph games with a non-terminal root.
pub fn arb_graph_game() -> impl Strategy<Value = GraphGame> {
    (2usize..14).prop_flat_map(|n| {
        let node = (prop::collection::vec(any::<usize>(), 0..4), 0u8..3);
        (prop::collection::vec(node, n), any::<bool>()).prop_map(move |(raw, p1_starts)| {
            let nodes = raw
                .into_iter()
                .enumerate()
                .map(|(i, (targets, verdict))| {
                    let remaining = n - i - 1;
                    let mut moves: Vec<usize> = if remaining == 0 {
                        Vec::new()
                    } else {
                        targets.iter().map(|t| i + 1 + t % remaining).collect()
                    };
                    if i == 0 && moves.is_empty() {
                        moves.push(1);
                    }
                    let verdict = match verdict {
                        0 => Verdict::MoverWins,
                        1 => Verdict::ToMoveWins,
                        _ => Verdict::Draw,
                    };
                    GraphNode { moves, verdict }
                })
                .collect();
            GraphGame::new(nodes, Player::from_p1_starts(p1_starts))
        })
    })
}
