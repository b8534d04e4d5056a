/// Edge-list reading and spanning-tree rendering
///
/// The text format is line oriented and whitespace separated. `#` lines and
/// blank lines are comments. An optional `vertices N` directive ahead of the
/// edges fixes the vertex count and makes endpoints integer indices; without
/// it, endpoints are arbitrary labels interned in first-seen order. Edge
/// lines are `SOURCE DEST WEIGHT`. The token `vertices` is reserved in both
/// modes.

use crate::graph::{Edge, Graph};
use crate::labels::VertexLabels;
use crate::spanning::SpanningTree;
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Write};
use std::path::Path;

/// A parsed edge list: the graph plus its label registry (labeled mode
/// only; `None` after a `vertices N` directive).
#[derive(Debug, Clone)]
pub struct EdgeListDocument {
    pub graph: Graph,
    pub labels: Option<VertexLabels>,
}

/// Open a file as a boxed BufRead, with `-` standing for stdin
pub fn open_edge_list_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();

    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(stdin())));
    }

    let file = File::open(path)?;
    Ok(Box::new(BufReader::new(file)))
}

/// Parse an edge list into a validated graph.
///
/// Malformed lines fail with the 1-based line number named. Vertex-range
/// and weight validation beyond what parsing can see happens in
/// `Graph::new`, which this calls last.
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<EdgeListDocument> {
    let mut declared_vertices: Option<usize> = None;
    let mut labels = VertexLabels::new();
    let mut triples: Vec<(usize, usize, f64)> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();

        if fields[0] == "vertices" {
            if !triples.is_empty() {
                bail!(
                    "line {}: vertices directive must precede all edges",
                    line_number
                );
            }
            if declared_vertices.is_some() {
                bail!("line {}: repeated vertices directive", line_number);
            }
            if fields.len() != 2 {
                bail!("line {}: expected `vertices N`", line_number);
            }
            let count: usize = fields[1].parse().with_context(|| {
                format!(
                    "line {}: vertex count {:?} is not an integer",
                    line_number, fields[1]
                )
            })?;
            declared_vertices = Some(count);
            continue;
        }

        if fields.len() != 3 {
            bail!(
                "line {}: expected `SOURCE DEST WEIGHT`, found {} fields",
                line_number,
                fields.len()
            );
        }

        let weight: f64 = fields[2].parse().with_context(|| {
            format!(
                "line {}: weight {:?} is not a number",
                line_number, fields[2]
            )
        })?;

        let (source, destination) = match declared_vertices {
            Some(count) => (
                parse_vertex_index(fields[0], count, line_number)?,
                parse_vertex_index(fields[1], count, line_number)?,
            ),
            None => (
                labels.get_or_assign(fields[0]),
                labels.get_or_assign(fields[1]),
            ),
        };

        triples.push((source, destination, weight));
    }

    let (vertex_count, labels) = match declared_vertices {
        Some(count) => (count, None),
        None => (labels.len(), Some(labels)),
    };

    let graph = Graph::from_triples(vertex_count, &triples)?;

    Ok(EdgeListDocument { graph, labels })
}

fn parse_vertex_index(token: &str, vertex_count: usize, line_number: usize) -> Result<usize> {
    let index: usize = token.parse().with_context(|| {
        format!(
            "line {}: vertex {:?} is not an integer index",
            line_number, token
        )
    })?;
    if index >= vertex_count {
        bail!(
            "line {}: vertex {} is out of range for {} declared vertices",
            line_number,
            index,
            vertex_count
        );
    }
    Ok(index)
}

/// Read an edge list from a file (or stdin for `-`)
pub fn read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<EdgeListDocument> {
    let path = path.as_ref();
    let input = open_edge_list_input(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    parse_edge_list(input).with_context(|| format!("failed to parse {}", path.display()))
}

/// Render one accepted edge as `u -- v == w`, resolving labels when present
pub fn render_edge(edge: &Edge, labels: Option<&VertexLabels>) -> String {
    match labels {
        Some(labels) => {
            let source = labels.name(edge.source).unwrap_or("?");
            let destination = labels.name(edge.destination).unwrap_or("?");
            format!("{} -- {} == {}", source, destination, edge.weight)
        }
        None => edge.to_string(),
    }
}

/// Write a computed tree: accepted edges in acceptance order, then the
/// weight and spanning trailers
pub fn write_tree<W: Write>(
    writer: &mut W,
    tree: &SpanningTree,
    labels: Option<&VertexLabels>,
) -> Result<()> {
    for edge in tree.edges() {
        writeln!(writer, "{}", render_edge(edge, labels))?;
    }
    writeln!(writer, "# total weight: {}", tree.total_weight())?;
    writeln!(writer, "# spanning: {}", tree.is_spanning())?;
    Ok(())
}
