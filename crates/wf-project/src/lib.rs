//! wf-project: network definitions for wayfare.
//!
//! Loads travel networks from YAML, validates them, and compiles them
//! into the immutable [`wf_graph::Graph`] the engine queries. Ships a
//! built-in sample network so the tools work without a file.

pub mod sample;
pub mod schema;

pub use sample::sample_network;
pub use schema::{EdgeDef, NetworkDef};

use std::path::Path;
use wf_graph::{Graph, GraphBuilder};

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    /// Negative edge cost is a fatal configuration error: the relaxation
    /// algorithm's correctness depends on non-negative weights.
    #[error("Negative cost {cost} on edge {a} - {b}")]
    NegativeCost { a: String, b: String, cost: i64 },

    #[error("Graph construction failed: {0}")]
    Graph(#[from] wf_core::WfError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ProjectResult<T> = Result<T, ProjectError>;

/// Read and parse a network definition from a YAML file.
pub fn load_network(path: &Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_yaml::from_str(&content)?;
    Ok(def)
}

/// Compile a definition into an immutable graph.
///
/// Node names are interned in order of appearance: declared nodes first,
/// then edge endpoints. Refuses to build on a negative cost.
pub fn build_graph(def: &NetworkDef) -> ProjectResult<Graph> {
    let mut builder = GraphBuilder::new();
    for name in &def.nodes {
        builder.add_node(name.as_str());
    }
    for edge in &def.edges {
        let cost: u64 = edge
            .cost
            .try_into()
            .map_err(|_| ProjectError::NegativeCost {
                a: edge.a.clone(),
                b: edge.b.clone(),
                cost: edge.cost,
            })?;
        let a = builder.add_node(edge.a.as_str());
        let b = builder.add_node(edge.b.as_str());
        builder.add_edge(a, b, cost);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_cost_is_fatal() {
        let def = NetworkDef {
            version: 1,
            name: "bad".into(),
            nodes: Vec::new(),
            edges: vec![EdgeDef {
                a: "A".into(),
                b: "B".into(),
                cost: -5,
            }],
        };
        let err = build_graph(&def).unwrap_err();
        assert!(matches!(err, ProjectError::NegativeCost { cost: -5, .. }));
    }

    #[test]
    fn declared_nodes_precede_edge_nodes() {
        let def = NetworkDef {
            version: 1,
            name: "t".into(),
            nodes: vec!["Island".into()],
            edges: vec![EdgeDef {
                a: "A".into(),
                b: "B".into(),
                cost: 1,
            }],
        };
        let graph = build_graph(&def).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.node_by_name("Island").map(|n| n.index()), Some(0));
    }
}
