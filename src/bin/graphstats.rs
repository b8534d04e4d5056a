/// graphstats - Statistics for weighted edge lists
///
/// Counts vertices, edges, self-loops, components, and weight ranges for
/// one edge list, or prints a before/after comparison of two.
use anyhow::Result;
use clap::Parser;
use std::collections::HashSet;

use spantree::edge_list::{read_edge_list_file, EdgeListDocument};
use spantree::union_find::DisjointSet;

#[derive(Parser)]
#[clap(name = "graphstats", about = "Statistics for weighted edge lists")]
struct Args {
    /// First edge-list file
    file1: String,

    /// Optional second file for comparison
    file2: Option<String>,

    /// Show per-component membership
    #[clap(short = 'd', long)]
    detailed: bool,
}

#[derive(Debug)]
struct GraphStats {
    vertex_count: usize,
    edge_count: usize,
    self_loops: usize,
    duplicate_edges: usize,
    isolated_vertices: usize,
    total_weight: f64,
    min_weight: f64,
    max_weight: f64,
    component_count: usize,
    largest_component: usize,
    components: Vec<Vec<usize>>,
}

/// Walk the edge list once, tracking degrees, weight extremes, repeated
/// endpoint pairs, and component structure
fn collect_stats(document: &EdgeListDocument) -> GraphStats {
    let graph = &document.graph;
    let vertex_count = graph.vertex_count();

    let mut components = DisjointSet::new(vertex_count);
    let mut seen_pairs = HashSet::new();
    let mut degree = vec![0usize; vertex_count];

    let mut self_loops = 0;
    let mut duplicate_edges = 0;
    let mut total_weight = 0.0;
    let mut min_weight = f64::INFINITY;
    let mut max_weight = f64::NEG_INFINITY;

    for edge in graph.edges() {
        if edge.is_self_loop() {
            self_loops += 1;
        }

        // Duplicates are repeats of an unordered endpoint pair
        let pair = (
            edge.source.min(edge.destination),
            edge.source.max(edge.destination),
        );
        if !seen_pairs.insert(pair) {
            duplicate_edges += 1;
        }

        degree[edge.source] += 1;
        if !edge.is_self_loop() {
            degree[edge.destination] += 1;
        }

        total_weight += edge.weight;
        min_weight = min_weight.min(edge.weight);
        max_weight = max_weight.max(edge.weight);

        components.union(edge.source, edge.destination);
    }

    if graph.edge_count() == 0 {
        min_weight = 0.0;
        max_weight = 0.0;
    }

    let sets = components.sets();
    let largest_component = sets.iter().map(|set| set.len()).max().unwrap_or(0);
    let isolated_vertices = degree.iter().filter(|&&d| d == 0).count();

    GraphStats {
        vertex_count,
        edge_count: graph.edge_count(),
        self_loops,
        duplicate_edges,
        isolated_vertices,
        total_weight,
        min_weight,
        max_weight,
        component_count: sets.len(),
        largest_component,
        components: sets,
    }
}

fn vertex_name(vertex: usize, document: &EdgeListDocument) -> String {
    match &document.labels {
        Some(labels) => labels.name(vertex).unwrap_or("?").to_string(),
        None => vertex.to_string(),
    }
}

fn print_stats(path: &str, document: &EdgeListDocument, stats: &GraphStats, detailed: bool) {
    let mean_weight = if stats.edge_count > 0 {
        stats.total_weight / stats.edge_count as f64
    } else {
        0.0
    };

    println!("\nStatistics for {path}:");
    println!("{}", "=".repeat(60));
    println!(
        "Vertices:              {:>12}",
        format_number(stats.vertex_count)
    );
    println!(
        "Edges:                 {:>12}",
        format_number(stats.edge_count)
    );
    println!(
        "Self-loops:            {:>12}",
        format_number(stats.self_loops)
    );
    println!(
        "Duplicate edges:       {:>12}",
        format_number(stats.duplicate_edges)
    );
    println!(
        "Isolated vertices:     {:>12}",
        format_number(stats.isolated_vertices)
    );
    println!(
        "Connected components:  {:>12}",
        format_number(stats.component_count)
    );
    println!(
        "Largest component:     {:>12}",
        format_number(stats.largest_component)
    );
    println!("Total weight:          {:>12.2}", stats.total_weight);
    println!(
        "Weight min/mean/max:   {:>12}",
        format!("{}/{:.2}/{}", stats.min_weight, mean_weight, stats.max_weight)
    );

    if detailed && stats.component_count > 0 {
        println!("\nPer-component membership:");
        println!("{}", "-".repeat(60));
        let mut components = stats.components.clone();
        components.sort_by_key(|set| std::cmp::Reverse(set.len()));

        for (rank, members) in components.iter().enumerate() {
            let rendered: Vec<String> = members
                .iter()
                .map(|&v| vertex_name(v, document))
                .collect();
            println!(
                "component {:>3} ({:>4} vertices): {}",
                rank,
                members.len(),
                rendered.join(" ")
            );
        }
    }
}

fn compare_stats(file1: &str, file2: &str, stats1: &GraphStats, stats2: &GraphStats) {
    println!("\nComparison: {file1} vs {file2}");
    println!("{}", "=".repeat(60));

    print_comparison("Vertices", stats1.vertex_count, stats2.vertex_count);
    print_comparison("Edges", stats1.edge_count, stats2.edge_count);
    print_comparison("Self-loops", stats1.self_loops, stats2.self_loops);
    print_comparison(
        "Duplicate edges",
        stats1.duplicate_edges,
        stats2.duplicate_edges,
    );
    print_comparison(
        "Connected components",
        stats1.component_count,
        stats2.component_count,
    );
    print_comparison(
        "Isolated vertices",
        stats1.isolated_vertices,
        stats2.isolated_vertices,
    );

    println!("\nTotal weight:");
    println!("  {:30} {:>12.2}", file1, stats1.total_weight);
    println!("  {:30} {:>12.2}", file2, stats2.total_weight);
    println!(
        "  {:30} {:>+12.2}",
        "Change",
        stats2.total_weight - stats1.total_weight
    );
}

fn print_comparison(label: &str, val1: usize, val2: usize) {
    println!("\n{label}:");
    println!("  {:30} {:>12}", "Before", format_number(val1));
    println!("  {:30} {:>12}", "After", format_number(val2));

    let diff = val2 as i64 - val1 as i64;
    let pct = if val1 > 0 {
        100.0 * diff as f64 / val1 as f64
    } else {
        0.0
    };
    println!(
        "  {:30} {:>12} ({:+.1}%)",
        "Change",
        format_signed(diff),
        pct
    );
}

fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

fn format_signed(n: i64) -> String {
    if n >= 0 {
        format!("+{}", format_number(n as usize))
    } else {
        format!("-{}", format_number((-n) as usize))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let document1 = read_edge_list_file(&args.file1)?;
    let stats1 = collect_stats(&document1);

    if let Some(file2) = args.file2 {
        let document2 = read_edge_list_file(&file2)?;
        let stats2 = collect_stats(&document2);
        compare_stats(&args.file1, &file2, &stats1, &stats2);
    } else {
        print_stats(&args.file1, &document1, &stats1, args.detailed);
    }

    Ok(())
}
