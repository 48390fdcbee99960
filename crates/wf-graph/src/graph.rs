//! Core graph data structures.

use std::collections::HashMap;
use wf_core::NodeId;

/// Edge cost in whole currency units. Unsigned by construction: the
/// relaxation algorithm requires non-negative weights.
pub type Cost = u64;

/// A node in the travel network (a named place).
///
/// Nodes are minimal: identity plus a unique human-readable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
}

/// One direction of an undirected edge, stored in the owning node's
/// adjacency slice. The mirror entry lives in `to`'s slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfEdge {
    pub cost: Cost,
    pub to: NodeId,
}

/// The graph: a validated, immutable weighted undirected network.
///
/// The graph stores:
/// - All nodes in a vector (indexed by their IDs).
/// - Compact adjacency: for each node, its incident half-edges.
/// - A name index for resolving user-supplied node names.
///
/// Immutable after construction; queries borrow it read-only.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,

    /// Offsets for node->edge adjacency: node i's half-edges are in
    /// edges[edge_offsets[i]..edge_offsets[i+1]].
    pub(crate) edge_offsets: Vec<usize>,

    /// Flat list of half-edges, grouped by owning node and sorted by
    /// (cost, neighbor) within each group for determinism.
    pub(crate) edges: Vec<HalfEdge>,

    pub(crate) name_index: HashMap<String, NodeId>,
}

impl Graph {
    /// Return all nodes, in ID order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index() as usize)
    }

    /// Resolve a node name to its ID. Unknown names return None; for
    /// traversal purposes an unknown node behaves like a node with no
    /// edges, so callers typically report "unreachable" rather than error.
    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name).copied()
    }

    /// Half-edges incident to a node.
    ///
    /// An out-of-range ID gets the empty slice. Callers must treat "no
    /// entry" and "known node, zero edges" identically.
    pub fn neighbors(&self, node_id: NodeId) -> &[HalfEdge] {
        let idx = node_id.index() as usize;
        if idx >= self.nodes.len() {
            return &[];
        }
        let start = self.edge_offsets[idx];
        let end = self.edge_offsets[idx + 1];
        &self.edges[start..end]
    }
}
