//! wf-graph: the static travel network for wayfare.
//!
//! Provides:
//! - Core graph data structures (Node, HalfEdge, Graph)
//! - Incremental graph builder with construction-time validation
//!
//! The graph is undirected and weighted: every edge appears in both
//! endpoints' adjacency lists with the same cost, and that symmetry is
//! checked when the graph is built, not rediscovered at query time.
//!
//! # Example
//!
//! ```
//! use wf_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_node("Canada");
//! let b = builder.add_node("France");
//! builder.add_edge(a, b, 700);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.nodes().len(), 2);
//! assert_eq!(graph.neighbors(a).len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use graph::{Cost, Graph, HalfEdge, Node};
