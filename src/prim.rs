/// Prim's minimum spanning tree builder in its dense form: grow a single
/// tree outward from a start vertex, annexing the cheapest fringe edge at
/// every step. Vertices unreachable from the start keep an infinite key and
/// are left out, so a disconnected input yields the start's component only.

use crate::graph::{Edge, Graph};
use crate::spanning::SpanningTree;

/// Build a minimum spanning tree of the component containing `start`.
///
/// Keys live in dense arrays scanned linearly each round, so the cost is
/// O(V^2 + E) regardless of edge count. The scan keeps the first minimum it
/// sees, which makes the result deterministic for a fixed edge list.
/// Accepted edges are oriented parent to child, in annexation order.
///
/// # Panics
///
/// Panics when `start >= graph.vertex_count()`. Start-vertex validation is
/// the caller's job; here it is a precondition, not an error kind.
pub fn prim_mst(graph: &Graph, start: usize) -> SpanningTree {
    let vertex_count = graph.vertex_count();
    assert!(
        start < vertex_count,
        "start vertex {} out of range for {} vertices",
        start,
        vertex_count
    );

    let adjacency = graph.adjacency();

    let mut key = vec![f64::INFINITY; vertex_count];
    let mut parent: Vec<Option<usize>> = vec![None; vertex_count];
    let mut in_tree = vec![false; vertex_count];
    key[start] = 0.0;

    let mut tree = SpanningTree::empty(vertex_count);

    for _ in 0..vertex_count {
        // Cheapest vertex on the fringe. Strict `<` keeps the first minimum
        // on ties and never selects an untouched (infinite-key) vertex.
        let mut next = None;
        let mut min_key = f64::INFINITY;
        for v in 0..vertex_count {
            if !in_tree[v] && key[v] < min_key {
                min_key = key[v];
                next = Some(v);
            }
        }

        // Everything still outside the tree is unreachable from `start`
        let Some(u) = next else {
            break;
        };

        in_tree[u] = true;
        if let Some(p) = parent[u] {
            tree.accept(Edge::new(p, u, key[u]));
        }

        for &(v, weight) in &adjacency[u] {
            if !in_tree[v] && weight < key[v] {
                key[v] = weight;
                parent[v] = Some(u);
            }
        }
    }

    log::debug!(
        "prim: start={}, annexed {} of {} vertices, spanning={}",
        start,
        tree.edge_count() + 1,
        vertex_count,
        tree.is_spanning()
    );

    tree
}
