/// Synthetic graph generation for property tests, benches, and random CLI
/// inputs. Generic over `rand::Rng` so callers decide between a fixed seed
/// and entropy.

use crate::graph::{Edge, Graph};
use rand::Rng;

/// Generate `edge_count` edges with independent uniform endpoints and
/// uniform weights in `[1.0, 100.0)`. Self-loops and duplicate edges can
/// and do occur; the builders tolerate both.
///
/// # Panics
///
/// Panics when `vertex_count` is zero.
pub fn random_graph<R: Rng>(vertex_count: usize, edge_count: usize, rng: &mut R) -> Graph {
    assert!(vertex_count > 0, "cannot generate a graph with no vertices");

    let mut edges = Vec::with_capacity(edge_count);

    for _ in 0..edge_count {
        edges.push(Edge::new(
            rng.gen_range(0..vertex_count),
            rng.gen_range(0..vertex_count),
            rng.gen_range(1.0..100.0),
        ));
    }

    Graph::new(vertex_count, edges).expect("generated endpoints are in range")
}

/// Generate a connected graph: a random spanning tree (each vertex attaches
/// to a uniformly chosen earlier vertex) plus `extra_edges` uniform extras.
///
/// # Panics
///
/// Panics when `vertex_count` is zero.
pub fn random_connected_graph<R: Rng>(
    vertex_count: usize,
    extra_edges: usize,
    rng: &mut R,
) -> Graph {
    assert!(vertex_count > 0, "cannot generate a graph with no vertices");

    let mut edges = Vec::with_capacity(vertex_count - 1 + extra_edges);

    for v in 1..vertex_count {
        edges.push(Edge::new(rng.gen_range(0..v), v, rng.gen_range(1.0..100.0)));
    }

    for _ in 0..extra_edges {
        edges.push(Edge::new(
            rng.gen_range(0..vertex_count),
            rng.gen_range(0..vertex_count),
            rng.gen_range(1.0..100.0),
        ));
    }

    Graph::new(vertex_count, edges).expect("generated endpoints are in range")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kruskal::kruskal_mst;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_graph_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_graph(20, 50, &mut rng);

        assert_eq!(graph.vertex_count(), 20);
        assert_eq!(graph.edge_count(), 50);
        for edge in graph.edges() {
            assert!(edge.source < 20 && edge.destination < 20);
            assert!(edge.weight >= 1.0 && edge.weight < 100.0);
        }
    }

    #[test]
    fn test_connected_graph_spans() {
        let mut rng = StdRng::seed_from_u64(11);
        let graph = random_connected_graph(40, 25, &mut rng);

        assert_eq!(graph.edge_count(), 39 + 25);
        assert!(kruskal_mst(&graph).is_spanning());
    }

    #[test]
    fn test_fixed_seed_reproduces() {
        let a = random_graph(10, 30, &mut StdRng::seed_from_u64(3));
        let b = random_graph(10, 30, &mut StdRng::seed_from_u64(3));

        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn test_single_vertex_tree() {
        let mut rng = StdRng::seed_from_u64(0);
        let graph = random_connected_graph(1, 0, &mut rng);

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }
}
