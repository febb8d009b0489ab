//! Builds a graph from the command line and prints what an editor front end
//! would show for it: the adjacency listing, both traversals, and the
//! shortest paths from the start vertex.
//!
//! Usage:
//!   cargo run --example graph_report -- A-B:4 A-C:1 C>B:1 --start A
//!
//! `A-B` connects both ways, `A>B` connects from A to B only.  The weight
//! after `:` is optional and defaults to 1; weights that are not numbers are
//! kept and reported when shortest paths are computed.

use std::process;

use clap::Parser;
use labelgraph::{
    Graph, Strategy, Weight,
    report::{adjacency_report, shortest_paths_report, traversal_report},
};

/// Build a graph from edge specifications and report on it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edges, as `A-B[:weight]` (undirected) or `A>B[:weight]` (directed)
    #[arg(required = true)]
    edges: Vec<String>,

    /// Start vertex for traversals and shortest paths (defaults to the
    /// first vertex mentioned)
    #[arg(long)]
    start: Option<String>,

    /// Print only this traversal (`breadth_first` or `depth_first`)
    #[arg(long)]
    strategy: Option<String>,
}

struct EdgeSpec {
    start: String,
    end: String,
    weight: Weight,
    directed: bool,
}

fn parse_edge(spec: &str) -> Option<EdgeSpec> {
    let (ends, weight) = match spec.split_once(':') {
        Some((ends, weight)) => (ends, parse_weight(weight)),
        None => (spec, Weight::default()),
    };
    let (directed, (start, end)) = match ends.split_once('>') {
        Some(pair) => (true, pair),
        None => (false, ends.split_once('-')?),
    };
    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() || end.is_empty() {
        return None;
    }
    Some(EdgeSpec {
        start: start.to_string(),
        end: end.to_string(),
        weight,
        directed,
    })
}

fn parse_weight(text: &str) -> Weight {
    if let Ok(i) = text.parse::<i64>() {
        Weight::Int(i)
    } else if let Ok(r) = text.parse::<f64>() {
        Weight::Real(r)
    } else {
        Weight::from(text)
    }
}

fn main() {
    labelgraph::init_tracing();
    let args = Args::parse();

    let mut graph: Graph = Graph::new();
    for spec in &args.edges {
        let Some(edge) = parse_edge(spec) else {
            eprintln!("Invalid edge specification: {spec}");
            process::exit(2);
        };
        if edge.directed {
            graph.add_connection(&edge.start, &edge.end, edge.weight);
        } else {
            graph.add_undirected_connection(&edge.start, &edge.end, edge.weight);
        }
    }

    let Some(start) = args
        .start
        .clone()
        .or_else(|| graph.labels().next().map(str::to_string))
    else {
        eprintln!("The graph is empty");
        process::exit(2);
    };

    println!("{}", adjacency_report(&graph));
    match args.strategy.as_deref() {
        Some(name) => match graph.traverse_by_name(&start, name) {
            Ok(traversal) => {
                let title = match traversal.strategy() {
                    Strategy::BreadthFirst => "Breadth-first",
                    Strategy::DepthFirst => "Depth-first",
                };
                println!("{}\n", traversal_report(title, traversal));
            }
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        },
        None => {
            println!(
                "{}\n",
                traversal_report("Breadth-first", graph.breadth_first_iterator(&start))
            );
            println!(
                "{}\n",
                traversal_report("Depth-first", graph.depth_first_iterator(&start))
            );
        }
    }

    match graph.shortest_paths(&start) {
        Ok(paths) => print!("Shortest paths from {start}:\n{}", shortest_paths_report(&paths)),
        Err(err) => {
            eprintln!("Cannot compute shortest paths: {err}");
            process::exit(1);
        }
    }
}
