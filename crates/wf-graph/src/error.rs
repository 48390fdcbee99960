//! Graph-specific error types.

use wf_core::{NodeId, WfError};

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge refers to a node that doesn't exist.
    #[error("Edge refers to non-existent node {node}")]
    InvalidNodeRef { node: NodeId },

    /// An edge connects a node to itself.
    #[error("Self-loop on node {node}")]
    SelfLoop { node: NodeId },

    /// Two nodes share the same name.
    #[error("Duplicate node name: {name}")]
    DuplicateName { name: String },

    /// A node's stored ID doesn't match its position in the node table.
    #[error("Node at index {expected} carries ID {node}")]
    MisplacedNode { node: NodeId, expected: usize },

    /// Adjacency offsets don't cover the node table.
    #[error("Adjacency offsets inconsistent (have {have}, need {need})")]
    BadOffsets { have: usize, need: usize },

    /// A half-edge has no mirror entry of equal cost at the far endpoint.
    #[error("Edge {node} -> {to} (cost {cost}) has no symmetric counterpart")]
    AsymmetricEdge { node: NodeId, to: NodeId, cost: u64 },
}

impl From<GraphError> for WfError {
    fn from(err: GraphError) -> Self {
        WfError::Invariant {
            what: err.to_string(),
        }
    }
}
