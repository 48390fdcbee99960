//! Graph validation logic.

use std::collections::{HashMap, HashSet};
use wf_core::WfResult;

use crate::builder::EdgeRec;
use crate::error::GraphError;
use crate::graph::{HalfEdge, Node};

/// Validate the node table and edge list: IDs contiguous, names unique,
/// edge endpoints exist, no self-loops.
pub(crate) fn validate_structure(nodes: &[Node], edges: &[EdgeRec]) -> WfResult<()> {
    // Node IDs must be contiguous and match their indices
    for (i, node) in nodes.iter().enumerate() {
        if node.id.index() as usize != i {
            return Err(GraphError::MisplacedNode {
                node: node.id,
                expected: i,
            }
            .into());
        }
    }

    // Node names must be unique
    let mut seen: HashSet<&str> = HashSet::new();
    for node in nodes {
        if !seen.insert(node.name.as_str()) {
            return Err(GraphError::DuplicateName {
                name: node.name.clone(),
            }
            .into());
        }
    }

    // Edge endpoints must exist and differ
    for rec in edges {
        for endpoint in [rec.a, rec.b] {
            if endpoint.index() as usize >= nodes.len() {
                return Err(GraphError::InvalidNodeRef { node: endpoint }.into());
            }
        }
        if rec.a == rec.b {
            return Err(GraphError::SelfLoop { node: rec.a }.into());
        }
    }

    Ok(())
}

/// Validate adjacency lists: offsets cover every node, every half-edge
/// points at a real node, and every half-edge has a mirror of equal cost.
pub(crate) fn validate_adjacency(
    nodes: &[Node],
    edge_offsets: &[usize],
    edges: &[HalfEdge],
) -> WfResult<()> {
    if edge_offsets.len() != nodes.len() + 1 {
        return Err(GraphError::BadOffsets {
            have: edge_offsets.len(),
            need: nodes.len() + 1,
        }
        .into());
    }

    // Count each directed (from, to, cost) triple
    let mut counts: HashMap<(u32, u32, u64), usize> = HashMap::new();
    for node in nodes {
        let idx = node.id.index() as usize;
        for edge in &edges[edge_offsets[idx]..edge_offsets[idx + 1]] {
            if edge.to.index() as usize >= nodes.len() {
                return Err(GraphError::InvalidNodeRef { node: edge.to }.into());
            }
            *counts
                .entry((node.id.index(), edge.to.index(), edge.cost))
                .or_default() += 1;
        }
    }

    // Undirected symmetry: every (u, v, c) needs a matching (v, u, c)
    for (&(u, v, cost), &n) in &counts {
        let mirrored = counts.get(&(v, u, cost)).copied().unwrap_or(0);
        if mirrored != n {
            return Err(GraphError::AsymmetricEdge {
                node: wf_core::Id::from_index(u),
                to: wf_core::Id::from_index(v),
                cost,
            }
            .into());
        }
    }

    Ok(())
}
