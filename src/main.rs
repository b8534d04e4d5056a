use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::io::Write;

use spantree::edge_list::{read_edge_list_file, write_tree, EdgeListDocument};
use spantree::generate::random_graph;
use spantree::kruskal::kruskal_mst;
use spantree::prim::prim_mst;
use spantree::spanning::SpanningTree;

/// Parse a number that may have metric suffix (k/K=1000, m/M=1e6, g/G=1e9)
fn parse_metric_number(s: &str) -> Result<u32, String> {
    if s.is_empty() {
        return Err("Empty string".to_string());
    }

    let (num_part, suffix) = if s.ends_with(|c: char| c.is_ascii_alphabetic()) {
        let last_char = s.chars().last().unwrap();
        (&s[..s.len() - last_char.len_utf8()], Some(last_char))
    } else {
        (s, None)
    };

    let base: f64 = num_part
        .parse()
        .map_err(|e| format!("Invalid number: {e}"))?;

    let multiplier = match suffix {
        Some('k') | Some('K') => 1000.0,
        Some('m') | Some('M') => 1_000_000.0,
        Some('g') | Some('G') => 1_000_000_000.0,
        Some(c) => {
            return Err(format!(
                "Unknown suffix '{c}'. Use k/K (1000), m/M (1e6), or g/G (1e9)"
            ))
        }
        None => 1.0,
    };

    let result = base * multiplier;

    if result > u32::MAX as f64 {
        return Err(format!("Value {result} too large for u32"));
    }

    Ok(result as u32)
}

/// Parse a `VERTICES,EDGES` pair for --random, metric suffixes allowed
fn parse_random_spec(s: &str) -> Result<(usize, usize), String> {
    let Some((vertices, edges)) = s.split_once(',') else {
        return Err("expected VERTICES,EDGES (e.g. 10k,1M)".to_string());
    };

    let vertices = parse_metric_number(vertices.trim())?;
    let edges = parse_metric_number(edges.trim())?;

    if vertices == 0 {
        return Err("vertex count must be nonzero".to_string());
    }

    Ok((vertices as usize, edges as usize))
}

/// spantree - Minimum spanning trees and forests over weighted edge lists
///
/// Reads line-oriented edge lists (or generates random graphs), runs
/// Kruskal's or Prim's builder, and prints the accepted edges followed by
/// total-weight and spanning trailers.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Edge-list files (stdin when none; `-` reads stdin explicitly)
    #[clap(value_name = "EDGE_LIST")]
    inputs: Vec<String>,

    /// Generate a uniform random graph instead of reading input
    #[clap(long = "random", value_name = "N,M", conflicts_with = "inputs", value_parser = parse_random_spec)]
    random: Option<(usize, usize)>,

    /// Seed for --random (entropy when not given)
    #[clap(long = "seed", requires = "random")]
    seed: Option<u64>,

    /// MST algorithm: kruskal, prim, or both (cross-checked)
    #[clap(short = 'a', long = "algorithm", default_value = "kruskal")]
    algorithm: String,

    /// Prim start vertex: an index, or a label when the input is labeled
    #[clap(short = 'r', long = "root")]
    root: Option<String>,

    /// Output file (stdout if not specified)
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Quiet mode (no per-input summaries on stderr)
    #[clap(long = "quiet")]
    quiet: bool,

    /// Number of threads for processing multiple inputs in parallel
    #[clap(short = 't', long = "threads", default_value = "8")]
    threads: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Algorithm {
    Kruskal,
    Prim,
    Both,
}

fn parse_algorithm(name: &str) -> Result<Algorithm> {
    match name.to_lowercase().as_str() {
        "kruskal" | "k" => Ok(Algorithm::Kruskal),
        "prim" | "p" => Ok(Algorithm::Prim),
        "both" => Ok(Algorithm::Both),
        other => bail!("unknown algorithm '{}'. Use kruskal, prim, or both", other),
    }
}

/// Turn a --root argument into a vertex index, label-first in labeled mode
fn resolve_root(root_spec: Option<&str>, document: &EdgeListDocument, name: &str) -> Result<usize> {
    let vertex_count = document.graph.vertex_count();

    let Some(spec) = root_spec else {
        return Ok(0);
    };

    let root = if let Some(labels) = &document.labels {
        match labels.resolve(spec) {
            Some(index) => index,
            None => spec.parse().with_context(|| {
                format!(
                    "{}: root {:?} is neither a known label nor an index",
                    name, spec
                )
            })?,
        }
    } else {
        spec.parse()
            .with_context(|| format!("{}: root {:?} is not a vertex index", name, spec))?
    };

    if root >= vertex_count {
        bail!(
            "{}: root {} is out of range for {} vertices",
            name,
            root,
            vertex_count
        );
    }

    Ok(root)
}

/// Equal-weight edge choices can differ between the builders, so totals are
/// compared with room for float summation order.
fn totals_agree(a: &SpanningTree, b: &SpanningTree) -> bool {
    let (a, b) = (a.total_weight(), b.total_weight());
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Run the selected builder(s) over one parsed document. Returns the output
/// block and the stderr summary line.
fn run_one(
    name: &str,
    document: &EdgeListDocument,
    algorithm: Algorithm,
    root_spec: Option<&str>,
) -> Result<(String, String)> {
    let graph = &document.graph;
    let labels = document.labels.as_ref();

    let mut body = Vec::new();

    let tree = match algorithm {
        Algorithm::Kruskal => {
            let tree = kruskal_mst(graph);
            write_tree(&mut body, &tree, labels)?;
            tree
        }
        Algorithm::Prim => {
            let root = resolve_root(root_spec, document, name)?;
            let tree = prim_mst(graph, root);
            write_tree(&mut body, &tree, labels)?;
            tree
        }
        Algorithm::Both => {
            let root = resolve_root(root_spec, document, name)?;
            let kruskal = kruskal_mst(graph);
            let prim = prim_mst(graph, root);

            // On a connected graph both must find the same minimum total.
            // Disconnected graphs are excluded: Prim only spans the root's
            // component while Kruskal spans them all.
            if kruskal.is_spanning() && !totals_agree(&kruskal, &prim) {
                bail!(
                    "{}: kruskal and prim disagree on total weight ({} vs {})",
                    name,
                    kruskal.total_weight(),
                    prim.total_weight()
                );
            }

            writeln!(body, "# algorithm: kruskal")?;
            write_tree(&mut body, &kruskal, labels)?;
            writeln!(body, "# algorithm: prim")?;
            write_tree(&mut body, &prim, labels)?;
            kruskal
        }
    };

    let summary = format!(
        "{}: {} vertices, {} edges in, {} accepted, total weight {}, {}",
        name,
        graph.vertex_count(),
        graph.edge_count(),
        tree.edge_count(),
        tree.total_weight(),
        if tree.is_spanning() {
            "spanning tree"
        } else {
            "spanning forest"
        }
    );

    Ok((String::from_utf8(body)?, summary))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let algorithm = parse_algorithm(&args.algorithm)?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()?;

    let reports: Vec<(String, Result<(String, String)>)> =
        if let Some((vertices, edges)) = args.random {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let graph = random_graph(vertices, edges, &mut rng);
            let document = EdgeListDocument {
                graph,
                labels: None,
            };
            let name = format!("random({},{})", vertices, edges);
            let result = run_one(&name, &document, algorithm, args.root.as_deref());
            vec![(name, result)]
        } else {
            let mut inputs = args.inputs.clone();

            // No inputs and an interactive terminal means the user wants help
            if inputs.is_empty() {
                use std::io::IsTerminal;
                if std::io::stdin().is_terminal() {
                    use clap::CommandFactory;
                    Args::command().print_help()?;
                    std::process::exit(0);
                }
                inputs.push("-".to_string());
            }

            inputs
                .par_iter()
                .map(|path| {
                    let result = read_edge_list_file(path).and_then(|document| {
                        run_one(path, &document, algorithm, args.root.as_deref())
                    });
                    (path.clone(), result)
                })
                .collect()
        };

    let multiple = reports.len() > 1;

    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            std::fs::File::create(path).with_context(|| format!("failed to create {}", path))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    for (name, result) in reports {
        let (body, summary) = result?;
        if multiple {
            writeln!(output, "# input: {}", name)?;
        }
        output.write_all(body.as_bytes())?;
        if !args.quiet {
            eprintln!("[spantree] {}", summary);
        }
    }

    Ok(())
}
