//! Single-source shortest-path engine for the wayfare travel network.
//!
//! This crate computes minimum-cost distances from a source node to all
//! reachable nodes by priority-ordered edge relaxation (Dijkstra), records
//! one predecessor per improved node for path provenance, and answers two
//! query shapes on top of the same pass:
//!
//! - [`route`]: cost and itinerary between a source and a target
//! - [`within_budget`]: every destination reachable under a cost ceiling
//!
//! Each query builds fresh working state; the graph is borrowed read-only
//! and never mutated.

pub mod dijkstra;
pub mod query;

pub use dijkstra::ShortestPaths;
pub use query::{route, within_budget, Destination, Route};
