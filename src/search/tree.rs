//! Arena-based move tree.
//!
//! Uses a flat `Vec<MoveNode>` with index-based references. The arena
//! owns every node; the iterative engine's stack only holds `NodeId`s.

use super::node::{MoveNode, NodeId};
use crate::rules::GameState;

/// Arena-based move tree.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
/// Dropping the tree drops every node and snapshot at once.
#[derive(Clone, Debug)]
pub struct MoveTree<S: GameState> {
    /// All nodes in the tree.
    nodes: Vec<MoveNode<S>>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl<S: GameState> MoveTree<S> {
    /// Create a new tree with a root node.
    pub fn new(root_state: S) -> Self {
        Self::with_capacity(root_state, 1)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(root_state: S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MoveNode::root(root_state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MoveNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MoveNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MoveNode<S>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, node: MoveNode<S>) -> NodeId {
        let id = self.alloc(node);
        self.get_mut(parent).children.push(id);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MoveNode<S> {
        self.get(self.root)
    }

    /// Children of a node, in enumeration order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &MoveNode<S>> + '_ {
        self.get(id).children.iter().map(move |&c| self.get(c))
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MoveNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let valued_count = self.nodes.iter().filter(|n| n.is_valued()).count();
        let leaf_count = self.nodes.iter().filter(|n| n.children.is_empty()).count();
        let total_children: usize = self.nodes.iter().map(|n| n.children.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            valued_count,
            leaf_count,
            total_children,
        }
    }
}

/// Statistics about the move tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u32,

    /// Nodes with a final value.
    pub valued_count: usize,

    /// Nodes without children (terminal positions once searched).
    pub leaf_count: usize,

    /// Total parent-child links.
    pub total_children: usize,
}

impl TreeStats {
    /// Average children per interior node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let interior = self.node_count - self.leaf_count;
        if interior == 0 {
            0.0
        } else {
            self.total_children as f64 / interior as f64
        }
    }
}
