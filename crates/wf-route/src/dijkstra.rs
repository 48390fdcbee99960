//! Priority-ordered single-source relaxation.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;
use wf_core::NodeId;
use wf_graph::{Cost, Graph};

/// Distances and predecessors from one source over the whole graph.
///
/// Per query, each node moves through three states: unvisited (no
/// distance), frontier (tentative distance queued for expansion), settled
/// (extracted as the cheapest frontier entry; its distance is final).
/// With non-negative edge costs a settled node is never improved again.
///
/// The result is owned by the caller and never shared across queries;
/// every call to [`ShortestPaths::compute`] allocates fresh maps.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: NodeId,
    dist: Vec<Option<Cost>>,
    prev: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    /// Run the relaxation algorithm from `source` over the full graph.
    ///
    /// A source that isn't in the graph settles nothing: every node stays
    /// unreached, which downstream reports as "no path".
    pub fn compute(graph: &Graph, source: NodeId) -> Self {
        let n = graph.node_count();
        let mut dist: Vec<Option<Cost>> = vec![None; n];
        let mut prev: Vec<Option<NodeId>> = vec![None; n];

        // Min-heap of (tentative distance, node index); ties break on index,
        // which never affects final distances.
        let mut heap: BinaryHeap<Reverse<(Cost, u32)>> = BinaryHeap::new();

        if (source.index() as usize) < n {
            dist[source.index() as usize] = Some(0);
            heap.push(Reverse((0, source.index())));
        }

        let mut settled = 0_usize;
        while let Some(Reverse((d, u))) = heap.pop() {
            // Lazy deletion: a cheaper entry for this node was already
            // processed, so this one is stale.
            match dist[u as usize] {
                Some(best) if d > best => continue,
                _ => {}
            }
            settled += 1;

            let node = NodeId::from_index(u);
            for edge in graph.neighbors(node) {
                let v = edge.to.index() as usize;
                let candidate = d + edge.cost;
                // Strict < keeps the first predecessor recorded for a given
                // distance; an equal-cost candidate never overwrites.
                let improved = match dist[v] {
                    Some(cur) => candidate < cur,
                    None => true,
                };
                if improved {
                    dist[v] = Some(candidate);
                    prev[v] = Some(node);
                    heap.push(Reverse((candidate, edge.to.index())));
                }
            }
        }

        debug!(source = source.index(), nodes = n, settled, "relaxation complete");
        Self { source, dist, prev }
    }

    /// The source this pass was computed from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Final minimum cost from the source, or None when unreached.
    pub fn distance(&self, node: NodeId) -> Option<Cost> {
        self.dist.get(node.index() as usize).copied().flatten()
    }

    /// The shortest path from the source to `node`, source first.
    ///
    /// Reconstructed by walking predecessor links back from `node` and
    /// reversing once; returns None when the node is unreached. The
    /// source's own path is `[source]`.
    pub fn path(&self, node: NodeId) -> Option<Vec<NodeId>> {
        self.distance(node)?;
        let mut path = vec![node];
        let mut cur = node;
        while let Some(p) = self.prev.get(cur.index() as usize).copied().flatten() {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }
}
