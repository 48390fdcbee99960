//! Point-to-point and budget-filtered queries over one relaxation pass.

use wf_core::NodeId;
use wf_graph::{Cost, Graph};

use crate::dijkstra::ShortestPaths;

/// A priced itinerary between a source and a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub cost: Cost,
    /// Node sequence from source to target inclusive.
    pub path: Vec<NodeId>,
}

/// A destination reachable within a budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub node: NodeId,
    pub cost: Cost,
    pub path: Vec<NodeId>,
}

/// Cheapest route from `source` to `target`.
///
/// Returns None when no path exists; that is a legitimate outcome, not an
/// error. Unknown nodes behave as nodes with zero edges and so come back
/// unreachable.
pub fn route(graph: &Graph, source: NodeId, target: NodeId) -> Option<Route> {
    let sp = ShortestPaths::compute(graph, source);
    let cost = sp.distance(target)?;
    let path = sp.path(target)?;
    Some(Route { cost, path })
}

/// Every destination reachable from `source` at a total cost of at most
/// `budget`, excluding the source itself.
///
/// One relaxation pass serves the whole enumeration. The result is sorted
/// by node name so output is stable regardless of heap tie order.
pub fn within_budget(graph: &Graph, source: NodeId, budget: Cost) -> Vec<Destination> {
    let sp = ShortestPaths::compute(graph, source);

    let mut out = Vec::new();
    for node in graph.nodes() {
        if node.id == source {
            continue;
        }
        let Some(cost) = sp.distance(node.id) else {
            continue;
        };
        if cost > budget {
            continue;
        }
        let Some(path) = sp.path(node.id) else {
            continue;
        };
        out.push(Destination {
            node: node.id,
            cost,
            path,
        });
    }

    out.sort_by(|a, b| {
        let name = |d: &Destination| graph.node(d.node).map(|n| n.name.as_str()).unwrap_or("");
        name(a).cmp(&name(b))
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_graph::GraphBuilder;

    fn diamond() -> (Graph, NodeId, NodeId, NodeId, NodeId) {
        // A --1-- B --1-- D, A --5-- C --1-- D
        let mut builder = GraphBuilder::new();
        let a = builder.add_node("A");
        let b = builder.add_node("B");
        let c = builder.add_node("C");
        let d = builder.add_node("D");
        builder.add_edge(a, b, 1);
        builder.add_edge(b, d, 1);
        builder.add_edge(a, c, 5);
        builder.add_edge(c, d, 1);
        (builder.build().unwrap(), a, b, c, d)
    }

    #[test]
    fn route_picks_cheapest_path() {
        let (graph, a, b, _c, d) = diamond();
        let r = route(&graph, a, d).unwrap();
        assert_eq!(r.cost, 2);
        assert_eq!(r.path, vec![a, b, d]);
    }

    #[test]
    fn route_to_unreachable_is_none() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node("A");
        let island = builder.add_node("Island");
        let b = builder.add_node("B");
        builder.add_edge(a, b, 1);
        let graph = builder.build().unwrap();

        assert!(route(&graph, a, island).is_none());
    }

    #[test]
    fn within_budget_excludes_source_and_respects_ceiling() {
        let (graph, a, b, _c, d) = diamond();

        let close = within_budget(&graph, a, 1);
        assert_eq!(close.len(), 1);
        assert_eq!(close[0].node, b);
        assert_eq!(close[0].cost, 1);

        let wider = within_budget(&graph, a, 2);
        let nodes: Vec<NodeId> = wider.iter().map(|d| d.node).collect();
        assert_eq!(nodes, vec![b, d]);
        assert!(wider.iter().all(|dest| dest.node != a));
    }

    #[test]
    fn within_budget_zero_is_empty() {
        let (graph, a, ..) = diamond();
        assert!(within_budget(&graph, a, 0).is_empty());
    }

    #[test]
    fn within_budget_ceiling_is_inclusive() {
        let (graph, a, b, ..) = diamond();
        let exact = within_budget(&graph, a, 1);
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].node, b);
    }

    #[test]
    fn within_budget_sorted_by_name() {
        let mut builder = GraphBuilder::new();
        let hub = builder.add_node("Hub");
        let z = builder.add_node("Zurich");
        let m = builder.add_node("Madrid");
        builder.add_edge(hub, z, 1);
        builder.add_edge(hub, m, 2);
        let graph = builder.build().unwrap();

        let dests = within_budget(&graph, hub, 10);
        let names: Vec<&str> = dests
            .iter()
            .map(|d| graph.node(d.node).unwrap().name.as_str())
            .collect();
        assert_eq!(names, vec!["Madrid", "Zurich"]);
    }

    #[test]
    fn disconnected_node_excluded_at_any_ceiling() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node("A");
        let b = builder.add_node("B");
        builder.add_node("Island");
        builder.add_edge(a, b, 1);
        let graph = builder.build().unwrap();

        for budget in [0, 1, 1_000_000] {
            assert!(
                within_budget(&graph, a, budget)
                    .iter()
                    .all(|d| graph.node(d.node).unwrap().name != "Island")
            );
        }
    }
}
