//! Built-in sample travel network.

use crate::schema::{EdgeDef, NetworkDef};

/// The default 12-country travel network, usable without any file.
pub fn sample_network() -> NetworkDef {
    let edges = [
        ("Bangladesh", "Canada", 200),
        ("Bangladesh", "Denmark", 800),
        ("Canada", "Argentina", 900),
        ("Canada", "France", 700),
        ("Canada", "England", 1300),
        ("Denmark", "Germany", 300),
        ("Denmark", "Sweden", 900),
        ("France", "Argentina", 1100),
        ("France", "Spain", 500),
        ("France", "Italy", 500),
        ("France", "Germany", 200),
        ("England", "Norway", 1500),
        ("Spain", "Portugal", 700),
    ];

    NetworkDef {
        version: 1,
        name: "sample travel network".into(),
        nodes: Vec::new(),
        edges: edges
            .into_iter()
            .map(|(a, b, cost)| EdgeDef {
                a: a.into(),
                b: b.into(),
                cost,
            })
            .collect(),
    }
}
