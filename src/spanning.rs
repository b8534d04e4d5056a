use crate::graph::Edge;

/// Result of a spanning-tree computation: the accepted edges in acceptance
/// order plus their total weight. When the input graph is disconnected the
/// result holds fewer than `vertex_count - 1` edges and describes a minimum
/// spanning forest (Kruskal) or the start vertex's component (Prim). That
/// is a valid result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    total_weight: f64,
    vertex_count: usize,
}

impl SpanningTree {
    pub(crate) fn empty(vertex_count: usize) -> Self {
        SpanningTree {
            edges: Vec::new(),
            total_weight: 0.0,
            vertex_count,
        }
    }

    pub(crate) fn accept(&mut self, edge: Edge) {
        self.total_weight += edge.weight;
        self.edges.push(edge);
    }

    /// Accepted edges in acceptance order, at most `vertex_count - 1`
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Vertex count of the graph this tree was computed over
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// True iff every vertex is connected: `edge_count == vertex_count - 1`
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.vertex_count - 1
    }
}
