//! Integration tests for wf-graph.

use wf_graph::GraphBuilder;

#[test]
fn build_minimal_network() {
    // Build: A --5-- B
    let mut builder = GraphBuilder::new();
    let a = builder.add_node("A");
    let b = builder.add_node("B");
    builder.add_edge(a, b, 5);

    let graph = builder.build().unwrap();

    assert_eq!(graph.nodes().len(), 2);

    // Both directions present at the same cost
    let a_edges = graph.neighbors(a);
    assert_eq!(a_edges.len(), 1);
    assert_eq!(a_edges[0].to, b);
    assert_eq!(a_edges[0].cost, 5);

    let b_edges = graph.neighbors(b);
    assert_eq!(b_edges.len(), 1);
    assert_eq!(b_edges[0].to, a);
    assert_eq!(b_edges[0].cost, 5);
}

#[test]
fn chain_adjacency_degrees() {
    // Build: A --1-- B --2-- C
    let mut builder = GraphBuilder::new();
    let a = builder.add_node("A");
    let b = builder.add_node("B");
    let c = builder.add_node("C");
    builder.add_edge(a, b, 1);
    builder.add_edge(b, c, 2);

    let graph = builder.build().unwrap();

    assert_eq!(graph.neighbors(a).len(), 1);
    assert_eq!(graph.neighbors(b).len(), 2);
    assert_eq!(graph.neighbors(c).len(), 1);
}

#[test]
fn parallel_edges_are_kept() {
    // Two distinct connections between the same pair at different prices.
    let mut builder = GraphBuilder::new();
    let a = builder.add_node("A");
    let b = builder.add_node("B");
    builder.add_edge(a, b, 10);
    builder.add_edge(a, b, 3);

    let graph = builder.build().unwrap();
    let costs: Vec<u64> = graph.neighbors(a).iter().map(|e| e.cost).collect();
    assert_eq!(costs, vec![3, 10]);
}

#[test]
fn nodes_mentioned_only_in_edges_exist() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_node("Canada");
    let b = builder.add_node("France");
    builder.add_edge(a, b, 700);
    let graph = builder.build().unwrap();

    assert!(graph.node_by_name("France").is_some());
    assert_eq!(graph.node_by_name("France"), Some(b));
}
