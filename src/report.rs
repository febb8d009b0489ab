//! Plain-text renderings of graph queries, in the form an editor front end
//! shows them to the user.

use std::fmt::Write as _;

use crate::{Graph, path::ShortestPaths, vertex::Vertex};

/// Separator placed between consecutive labels of a traversal or path.
pub const ARROW: &str = " \u{279E} ";

/// Renders the adjacency listing under a heading.  An empty graph renders as
/// an empty string.
pub fn adjacency_report<D>(graph: &Graph<D>) -> String {
    if graph.is_empty() {
        return String::new();
    }
    format!("Adjacency:\n{}", graph.describe())
}

/// Renders a traversal as a heading followed by the visited labels joined by
/// arrows.
pub fn traversal_report<'g, D: 'g>(
    title: &str,
    traversal: impl IntoIterator<Item = &'g Vertex<D>>,
) -> String {
    let labels = traversal
        .into_iter()
        .map(Vertex::label)
        .collect::<Vec<_>>()
        .join(ARROW);
    format!("{title}:\n{labels}")
}

/// Renders one line per reachable target: its distance and its path.
pub fn shortest_paths_report(paths: &ShortestPaths) -> String {
    let width = paths.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for (target, route) in paths {
        let _ = writeln!(
            out,
            "{target:<width$} {:>6} : {}",
            format_distance(route.distance),
            route.path.join(ARROW)
        );
    }
    out
}

fn format_distance(distance: f64) -> String {
    if distance.fract() == 0.0 && distance.abs() < 1e15 {
        format!("{}", distance as i64)
    } else {
        format!("{distance}")
    }
}
