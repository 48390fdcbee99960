//! Network definition schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub version: u32,
    pub name: String,
    /// Places with no connections still belong to the network; anything
    /// listed here exists even if no edge mentions it.
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

/// One undirected connection. Listed once per pair; both directions are
/// derived when the graph is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDef {
    pub a: String,
    pub b: String,
    /// Signed in the schema so a negative cost surfaces as a validation
    /// error with context instead of a YAML parse failure.
    pub cost: i64,
}
