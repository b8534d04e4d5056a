// Scenario tests for the Kruskal builder over whole graphs
use spantree::graph::{Edge, Graph};
use spantree::kruskal::kruskal_mst;

/// Helper to build a fixture graph
fn graph(vertex_count: usize, triples: &[(usize, usize, f64)]) -> Graph {
    Graph::from_triples(vertex_count, triples).expect("fixture graph must be valid")
}

#[test]
fn test_textbook_nine_vertex_graph() {
    // Classic nine-vertex example; its minimum total is 37
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

    let tree = kruskal_mst(&graph);

    assert!(tree.is_spanning());
    assert_eq!(tree.edge_count(), 8);
    assert_eq!(tree.total_weight(), 37.0);
}

#[test]
fn test_forest_over_two_triangles() {
    // Two components plus an isolated vertex: two edges survive per
    // triangle and the result is a forest, not an error
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

    let tree = kruskal_mst(&graph);

    assert!(!tree.is_spanning());
    assert_eq!(tree.edge_count(), 4);
    assert_eq!(tree.total_weight(), 6.0);
    assert_eq!(
        tree.edges(),
        &[
            Edge::new(0, 1, 1.0),
            Edge::new(3, 4, 1.0),
            Edge::new(1, 2, 2.0),
            Edge::new(4, 5, 2.0),
        ]
    );
}

#[test]
fn test_uniform_weights_accept_input_order() {
    // Complete graph on four vertices, every edge the same weight: the
    // stable sort keeps input order, so the first three acyclic edges win
    let graph = graph(
        4,
        &[
            (0, 1, 5.0),
            (0, 2, 5.0),
            (0, 3, 5.0),
            (1, 2, 5.0),
            (1, 3, 5.0),
            (2, 3, 5.0),
        ],
    );

    let tree = kruskal_mst(&graph);

    assert_eq!(
        tree.edges(),
        &[
            Edge::new(0, 1, 5.0),
            Edge::new(0, 2, 5.0),
            Edge::new(0, 3, 5.0),
        ]
    );
}

#[test]
fn test_parallel_edges_collapse_to_cheapest() {
    let graph = graph(
        3,
        &[
            (0, 1, 9.0),
            (0, 1, 4.0),
            (0, 1, 6.0),
            (1, 2, 2.0),
            (2, 1, 8.0),
        ],
    );

    let tree = kruskal_mst(&graph);

    assert_eq!(tree.edges(), &[Edge::new(1, 2, 2.0), Edge::new(0, 1, 4.0)]);
    assert_eq!(tree.total_weight(), 6.0);
}

#[test]
fn test_negative_weights_accepted_first() {
    let graph = graph(3, &[(0, 1, -5.0), (1, 2, 3.0), (0, 2, -1.0)]);

    let tree = kruskal_mst(&graph);

    assert_eq!(tree.edges(), &[Edge::new(0, 1, -5.0), Edge::new(0, 2, -1.0)]);
    assert_eq!(tree.total_weight(), -6.0);
}

#[test]
fn test_fractional_weights_sum_exactly() {
    let graph = graph(3, &[(0, 1, 0.5), (1, 2, 0.25), (0, 2, 4.0)]);

    let tree = kruskal_mst(&graph);

    assert_eq!(tree.total_weight(), 0.75);
}

#[test]
fn test_generated_connected_graph_spans() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use spantree::generate::random_connected_graph;

    let mut rng = StdRng::seed_from_u64(42);
    let graph = random_connected_graph(500, 1500, &mut rng);

    let tree = kruskal_mst(&graph);

    assert!(tree.is_spanning());
    assert_eq!(tree.edge_count(), 499);
}
