//! Move-tree node structures for the iterative engine.
//!
//! Uses arena-based allocation with index references (NodeId). Each node
//! owns its own state snapshot, so no two nodes alias a position.

use smallvec::SmallVec;

use crate::core::Outcome;
use crate::rules::GameState;

/// Index into the MoveTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Lifecycle of a node: unvisited, then expanded, then valued.
///
/// Transitions only move forward, and each happens at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodePhase {
    /// Created but not yet inspected.
    Unvisited,
    /// Children created and pushed; waiting for their values.
    Expanded,
    /// Final value assigned.
    Valued(Outcome),
}

/// A node in the move tree.
#[derive(Clone, Debug)]
pub struct MoveNode<S: GameState> {
    /// Snapshot of the position at this node.
    pub state: S,

    /// Move that produced this node (None for root).
    pub move_made: Option<S::Move>,

    /// Depth in tree (root = 0).
    pub depth: u32,

    /// Where this node is in its lifecycle.
    pub phase: NodePhase,

    /// Child nodes, in move enumeration order.
    pub children: SmallVec<[NodeId; 8]>,
}

impl<S: GameState> MoveNode<S> {
    /// Create a new node for `state` reached by `move_made`.
    pub fn new(state: S, move_made: Option<S::Move>, depth: u32) -> Self {
        Self {
            state,
            move_made,
            depth,
            phase: NodePhase::Unvisited,
            children: SmallVec::new(),
        }
    }

    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self::new(state, None, 0)
    }

    /// The node's value, once assigned.
    ///
    /// Values are from the point of view of the player who moved into
    /// this node.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<Outcome> {
        match self.phase {
            NodePhase::Valued(v) => Some(v),
            _ => None,
        }
    }

    /// Check if the node has been valued.
    #[inline]
    #[must_use]
    pub fn is_valued(&self) -> bool {
        matches!(self.phase, NodePhase::Valued(_))
    }

    /// Check if the node's children have been created.
    #[inline]
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::games::subtract_square::SubtractSquareState;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "NodeId(5)");
    }

    #[test]
    fn test_node_root() {
        let node = MoveNode::root(SubtractSquareState::new(Player::P1, 4));

        assert!(node.move_made.is_none());
        assert_eq!(node.depth, 0);
        assert_eq!(node.phase, NodePhase::Unvisited);
        assert!(!node.is_expanded());
        assert!(!node.is_valued());
        assert_eq!(node.value(), None);
    }

    #[test]
    fn test_node_value() {
        let mut node = MoveNode::new(SubtractSquareState::new(Player::P2, 0), Some(4), 1);
        node.phase = NodePhase::Valued(Outcome::Win);

        assert!(node.is_valued());
        assert_eq!(node.value(), Some(Outcome::Win));
        assert_eq!(node.move_made, Some(4));
    }
}
