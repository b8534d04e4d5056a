/// Undirected weighted graph model shared by both spanning-tree builders.
///
/// All input validation happens once, at `Graph::new`. A constructed `Graph`
/// is immutable, so any number of computations may read it concurrently.

use std::fmt;

/// A weighted undirected edge: `(u, v, w)` and `(v, u, w)` are equivalent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub destination: usize,
    pub weight: f64,
}

impl Edge {
    pub fn new(source: usize, destination: usize, weight: f64) -> Self {
        Edge {
            source,
            destination,
            weight,
        }
    }

    /// Self-loops are never part of a spanning tree
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} == {}", self.source, self.destination, self.weight)
    }
}

/// Rejection reasons for malformed graph input. Construction is the single
/// validation point; no malformed graph ever reaches a builder.
#[derive(Debug, PartialEq)]
pub enum GraphError {
    NoVertices,

    InvalidEdge {
        index: usize,
        source: usize,
        destination: usize,
        vertex_count: usize,
    },

    InvalidWeight {
        index: usize,
        source: usize,
        destination: usize,
    },
}

// Manual impls rather than `thiserror::Error`: these variants carry a vertex
// index field named `source`, which the derive would otherwise treat as an
// error cause and require to implement `std::error::Error`.
impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NoVertices => {
                write!(f, "graph must have at least one vertex")
            }
            GraphError::InvalidEdge {
                index,
                source,
                destination,
                vertex_count,
            } => write!(
                f,
                "edge {index} ({source} -- {destination}) references a vertex outside [0, {vertex_count})"
            ),
            GraphError::InvalidWeight {
                index,
                source,
                destination,
            } => write!(
                f,
                "edge {index} ({source} -- {destination}) has a non-finite weight"
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// A fixed vertex universe `[0, vertex_count)` plus an ordered edge list.
/// Duplicate edges and self-loops are allowed; the builders handle both.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Validate and construct. Fails with the offending edge named when an
    /// endpoint is out of range or a weight is NaN or infinite.
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::NoVertices);
        }

        for (index, edge) in edges.iter().enumerate() {
            if edge.source >= vertex_count || edge.destination >= vertex_count {
                return Err(GraphError::InvalidEdge {
                    index,
                    source: edge.source,
                    destination: edge.destination,
                    vertex_count,
                });
            }
            if !edge.weight.is_finite() {
                return Err(GraphError::InvalidWeight {
                    index,
                    source: edge.source,
                    destination: edge.destination,
                });
            }
        }

        Ok(Graph {
            vertex_count,
            edges,
        })
    }

    /// Construct from `(source, destination, weight)` triples
    pub fn from_triples(
        vertex_count: usize,
        triples: &[(usize, usize, f64)],
    ) -> Result<Self, GraphError> {
        let edges = triples
            .iter()
            .map(|&(source, destination, weight)| Edge::new(source, destination, weight))
            .collect();
        Self::new(vertex_count, edges)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Neighbor lists derived from the edge list, both directions per edge.
    /// Self-loops contribute a single `(v, w)` entry on their own vertex.
    pub fn adjacency(&self) -> Vec<Vec<(usize, f64)>> {
        let mut adjacency = vec![Vec::new(); self.vertex_count];

        for edge in &self.edges {
            adjacency[edge.source].push((edge.destination, edge.weight));
            if !edge.is_self_loop() {
                adjacency[edge.destination].push((edge.source, edge.weight));
            }
        }

        adjacency
    }
}
