// Scenario tests for the Prim builder over whole graphs
use spantree::graph::{Edge, Graph};
use spantree::kruskal::kruskal_mst;
use spantree::prim::prim_mst;

/// Helper to build a fixture graph
fn graph(vertex_count: usize, triples: &[(usize, usize, f64)]) -> Graph {
    Graph::from_triples(vertex_count, triples).expect("fixture graph must be valid")
}

#[test]
fn test_textbook_nine_vertex_graph_all_starts() {
    let graph = graph(
        9,
        &[
            (0, 1, 4.0),
            (0, 7, 8.0),
            (1, 2, 8.0),
            (1, 7, 11.0),
            (2, 3, 7.0),
            (2, 8, 2.0),
            (2, 5, 4.0),
            (3, 4, 9.0),
            (3, 5, 14.0),
            (4, 5, 10.0),
            (5, 6, 2.0),
            (6, 7, 1.0),
            (6, 8, 6.0),
            (7, 8, 7.0),
        ],
    );

    // Tie-breaking may pick different edges per start, but every minimum
    // spanning tree of this graph weighs 37
    for start in 0..9 {
        let tree = prim_mst(&graph, start);
        assert!(tree.is_spanning(), "start {} must span", start);
        assert_eq!(tree.total_weight(), 37.0, "start {} total", start);
    }
}

#[test]
fn test_annexation_order_on_a_path() {
    // Path 0 - 1 - 2 - 3 started from the middle: both sides grow in key
    // order, each accepted edge oriented parent to child
    let graph = graph(4, &[(0, 1, 5.0), (1, 2, 1.0), (2, 3, 2.0)]);

    let tree = prim_mst(&graph, 2);

    assert_eq!(
        tree.edges(),
        &[
            Edge::new(2, 1, 1.0),
            Edge::new(2, 3, 2.0),
            Edge::new(1, 0, 5.0),
        ]
    );
    assert_eq!(tree.total_weight(), 8.0);
}

#[test]
fn test_forest_excludes_other_components() {
    // Two triangles; starting inside the second covers only the second
    let graph = graph(
        7,
        &[
            (0, 1, 1.0),
            (1, 2, 2.0),
            (0, 2, 3.0),
            (3, 4, 1.0),
            (4, 5, 2.0),
            (3, 5, 9.0),
        ],
    );

    let tree = prim_mst(&graph, 4);

    assert!(!tree.is_spanning());
    assert_eq!(tree.edges(), &[Edge::new(4, 3, 1.0), Edge::new(4, 5, 2.0)]);
    assert_eq!(tree.total_weight(), 3.0);
}

#[test]
fn test_star_center_vs_leaf_start() {
    // A star tree must use every edge; only orientation and order change
    // with the start vertex
    let graph = graph(
        6,
        &[
            (0, 1, 1.0),
            (0, 2, 2.0),
            (0, 3, 3.0),
            (0, 4, 4.0),
            (0, 5, 5.0),
        ],
    );

    let from_center = prim_mst(&graph, 0);
    let from_leaf = prim_mst(&graph, 5);

    assert_eq!(from_center.total_weight(), 15.0);
    assert_eq!(from_leaf.total_weight(), 15.0);
    assert_eq!(from_leaf.edges()[0], Edge::new(5, 0, 5.0));
}

#[test]
fn test_agrees_with_kruskal_on_generated_graph() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use spantree::generate::random_connected_graph;

    let mut rng = StdRng::seed_from_u64(99);
    let graph = random_connected_graph(200, 400, &mut rng);

    let kruskal = kruskal_mst(&graph);
    let prim = prim_mst(&graph, 0);

    assert!(kruskal.is_spanning());
    assert!(prim.is_spanning());

    let diff = (kruskal.total_weight() - prim.total_weight()).abs();
    assert!(
        diff < 1e-6,
        "totals diverge: {} vs {}",
        kruskal.total_weight(),
        prim.total_weight()
    );
}
