/// Kruskal's minimum spanning tree builder: sort edges by weight, greedily
/// accept every edge that joins two distinct components, reject every edge
/// that would close a cycle. Disconnected inputs yield a minimum spanning
/// forest (one tree per component).

use ordered_float::OrderedFloat;

use crate::graph::Graph;
use crate::spanning::SpanningTree;
use crate::union_find::DisjointSet;

/// Build a minimum spanning tree (or forest) over `graph`.
///
/// The sort is stable, so equal-weight edges are considered in input order
/// and the result is deterministic for a fixed edge list. The graph itself
/// is never mutated; edge indices are sorted instead.
pub fn kruskal_mst(graph: &Graph) -> SpanningTree {
    let vertex_count = graph.vertex_count();
    let edges = graph.edges();

    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by_key(|&i| OrderedFloat(edges[i].weight));

    let mut components = DisjointSet::new(vertex_count);
    let mut tree = SpanningTree::empty(vertex_count);
    let mut rejected = 0usize;

    for &i in &order {
        let edge = edges[i];

        // union reports false when both endpoints already share a component;
        // self-loops land there trivially
        if components.union(edge.source, edge.destination) {
            tree.accept(edge);
            if tree.edge_count() == vertex_count - 1 {
                break;
            }
        } else {
            rejected += 1;
        }
    }

    log::debug!(
        "kruskal: {} edges in, {} accepted, {} rejected, spanning={}",
        edges.len(),
        tree.edge_count(),
        rejected,
        tree.is_spanning()
    );

    tree
}
