//! Incremental graph builder.

use std::collections::HashMap;
use wf_core::{NodeId, WfResult};

use crate::graph::{Cost, Graph, HalfEdge, Node};
use crate::validate;

/// An undirected edge as recorded by the builder, before it is expanded
/// into its two half-edges.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EdgeRec {
    pub a: NodeId,
    pub b: NodeId,
    pub cost: Cost,
}

/// Builder for constructing a travel network incrementally.
///
/// Use `add_node` and `add_edge` to build up the network, then call
/// `build()` to validate and freeze it into an immutable `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    name_index: HashMap<String, NodeId>,
    edges: Vec<EdgeRec>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named node and return its ID.
    ///
    /// Adding a name that already exists returns the existing node's ID,
    /// so edge lists can mention places freely without pre-declaring them.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let name = name.into();
        if let Some(&id) = self.name_index.get(&name) {
            return id;
        }
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.name_index.insert(name.clone(), id);
        self.nodes.push(Node { id, name });
        id
    }

    /// Add an undirected edge between two nodes.
    ///
    /// The edge is traversable in both directions at the same cost; both
    /// half-edges are materialized by `build()`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, cost: Cost) {
        self.edges.push(EdgeRec { a, b, cost });
    }

    /// Build and validate the network, returning an immutable `Graph`.
    ///
    /// This performs validation and constructs compact adjacency lists.
    pub fn build(self) -> WfResult<Graph> {
        // First validate the edge list against the node table
        validate::validate_structure(&self.nodes, &self.edges)?;

        // Expand undirected edges into per-node half-edge slices
        let (edge_offsets, edges) = Self::build_adjacency(&self.nodes, &self.edges);

        // Validate adjacency symmetry and consistency
        validate::validate_adjacency(&self.nodes, &edge_offsets, &edges)?;

        Ok(Graph {
            nodes: self.nodes,
            edge_offsets,
            edges,
            name_index: self.name_index,
        })
    }

    /// Build compact adjacency lists: each undirected edge contributes one
    /// half-edge to each endpoint.
    fn build_adjacency(nodes: &[Node], edges: &[EdgeRec]) -> (Vec<usize>, Vec<HalfEdge>) {
        // Group half-edges by owning node
        let mut per_node: HashMap<NodeId, Vec<HalfEdge>> = HashMap::new();
        for rec in edges {
            per_node.entry(rec.a).or_default().push(HalfEdge {
                cost: rec.cost,
                to: rec.b,
            });
            per_node.entry(rec.b).or_default().push(HalfEdge {
                cost: rec.cost,
                to: rec.a,
            });
        }

        // Sort each node's list for determinism
        for list in per_node.values_mut() {
            list.sort_by_key(|e| (e.cost, e.to.index()));
        }

        // Build offsets and flat list
        let mut offsets = Vec::with_capacity(nodes.len() + 1);
        let mut flat = Vec::new();
        offsets.push(0);

        for node in nodes {
            if let Some(list) = per_node.get(&node.id) {
                flat.extend_from_slice(list);
            }
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}
