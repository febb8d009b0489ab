use std::collections::{HashMap, HashSet, VecDeque};

use quickcheck::{Arbitrary, Gen};

use crate::{Graph, tracing_support::init_tracing, weight::Weight};

const LABELS: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H"];

/// A random graph over a small label alphabet, with non-negative integer
/// weights so that path lengths compare exactly.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 4;
        let num_connections = usize::arbitrary(g) % 24;
        let mut graph = Graph::new();
        for _ in 0..num_vertices {
            graph.add_vertex(g.choose(LABELS).copied().unwrap_or("A"));
        }
        for _ in 0..num_connections {
            let start = g.choose(LABELS).copied().unwrap_or("A");
            let end = g.choose(LABELS).copied().unwrap_or("B");
            let weight = i64::from(u8::arbitrary(g) % 10);
            if bool::arbitrary(g) {
                graph.add_connection(start, end, weight);
            } else {
                graph.add_undirected_connection(start, end, weight);
            }
        }
        ArbGraph { graph }
    }
}

impl ArbGraph {
    /// Picks an existing label, if the graph has any.
    pub fn pick_label(&self, index: usize) -> Option<String> {
        let labels: Vec<_> = self.graph.labels().collect();
        (!labels.is_empty()).then(|| labels[index % labels.len()].to_string())
    }
}

/// Asserts the dual-store invariant and the set semantics of adjacency
/// entries.
pub fn check_graph_consistency<D>(graph: &Graph<D>) {
    init_tracing();
    let vertex_labels: HashSet<&str> = graph.labels().collect();
    let adjacency_labels: HashSet<&str> = graph.adjacency_labels().collect();
    assert_eq!(vertex_labels.len(), graph.num_vertices());
    assert_eq!(vertex_labels, adjacency_labels);

    for label in graph.labels() {
        assert_eq!(graph.vertex(label).map(|v| v.label()), Some(label));
        let connections = graph.connections(label);
        for (i, connection) in connections.iter().enumerate() {
            assert!(
                graph.contains(&connection.target),
                "{label} points at missing vertex {}",
                connection.target
            );
            assert!(
                !connections[i + 1..].contains(connection),
                "duplicate connection {label} -> {connection}"
            );
        }
    }
}

/// Labels reachable from `start` by following connections, `start` included.
pub fn reachable_from<D>(graph: &Graph<D>, start: &str) -> HashSet<String> {
    let mut seen = HashSet::new();
    if !graph.contains(start) {
        return seen;
    }
    let mut queue = VecDeque::from([start.to_string()]);
    while let Some(label) = queue.pop_front() {
        if seen.insert(label.clone()) {
            queue.extend(graph.neighbors(&label).map(str::to_string));
        }
    }
    seen
}

/// Single-source distances by repeated relaxation, independent of the
/// Dijkstra implementation under test.
pub fn relaxed_distances<D>(graph: &Graph<D>, start: &str) -> HashMap<String, f64> {
    let mut distances = HashMap::from([(start.to_string(), 0.0)]);
    for _ in 0..graph.num_vertices() {
        for (source, connection) in graph.all_connections() {
            let Some(&base) = distances.get(source) else {
                continue;
            };
            let weight = connection.weight.as_distance().unwrap_or(f64::INFINITY);
            let candidate = base + weight;
            let entry = distances
                .entry(connection.target.clone())
                .or_insert(f64::INFINITY);
            if candidate < *entry {
                *entry = candidate;
            }
        }
    }
    distances
}

/// The lightest weight among the connections from `start` to `end`.
pub fn lightest_weight<D>(graph: &Graph<D>, start: &str, end: &str) -> Option<f64> {
    graph
        .connections(start)
        .iter()
        .filter(|c| c.target == end)
        .filter_map(|c| c.weight.as_distance())
        .min_by(f64::total_cmp)
}

/// Every stored connection as sortable text triples.
pub fn connection_set<D>(graph: &Graph<D>) -> Vec<(String, String, String)> {
    let mut all: Vec<_> = graph
        .all_connections()
        .map(|(source, c)| (source.to_string(), c.target.clone(), c.weight.to_string()))
        .collect();
    all.sort();
    all
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[quickcheck]
    fn prop_random_graphs_are_consistent(arb: ArbGraph) -> bool {
        check_graph_consistency(&arb.graph);
        true
    }

    #[quickcheck]
    fn prop_start_distance_is_zero(arb: ArbGraph, index: usize) -> bool {
        let Some(start) = arb.pick_label(index) else {
            return true;
        };
        let paths = arb.graph.shortest_paths(&start).unwrap();
        paths[start.as_str()].distance == 0.0 && paths[start.as_str()].path == vec![start.clone()]
    }

    #[quickcheck]
    fn prop_shortest_distances_are_minimal(arb: ArbGraph, index: usize) -> bool {
        let Some(start) = arb.pick_label(index) else {
            return true;
        };
        let graph = &arb.graph;
        let paths = graph.shortest_paths(&start).unwrap();
        let expected = relaxed_distances(graph, &start);
        let reachable = reachable_from(graph, &start);
        paths.len() == reachable.len()
            && paths
                .iter()
                .all(|(target, route)| expected.get(target) == Some(&route.distance))
    }

    #[quickcheck]
    fn prop_shortest_paths_follow_connections(arb: ArbGraph, index: usize) -> bool {
        let Some(start) = arb.pick_label(index) else {
            return true;
        };
        let graph = &arb.graph;
        let paths = graph.shortest_paths(&start).unwrap();
        paths.values().all(|route| {
            let total: Option<f64> = route
                .path
                .windows(2)
                .map(|pair| lightest_weight(graph, &pair[0], &pair[1]))
                .sum();
            route.start() == start && total == Some(route.distance)
        })
    }

    #[quickcheck]
    fn prop_traversals_visit_reachable_once(arb: ArbGraph, index: usize) -> bool {
        let Some(start) = arb.pick_label(index) else {
            return true;
        };
        let graph = &arb.graph;
        let reachable = reachable_from(graph, &start);
        let bfs = graph.breadth_first_traversal(&start);
        let dfs: Vec<_> = graph
            .depth_first_iterator(&start)
            .map(|v| v.label().to_string())
            .collect();
        let bfs_set: HashSet<_> = bfs.iter().cloned().collect();
        let dfs_set: HashSet<_> = dfs.iter().cloned().collect();
        bfs.len() == reachable.len()
            && dfs.len() == reachable.len()
            && bfs_set == reachable
            && dfs_set == reachable
            && bfs.first() == Some(&start)
            && dfs.first() == Some(&start)
    }

    #[quickcheck]
    fn prop_bfs_levels_never_decrease(arb: ArbGraph, index: usize) -> bool {
        let Some(start) = arb.pick_label(index) else {
            return true;
        };
        let mut iter = arb.graph.breadth_first_iterator(&start);
        let mut levels = Vec::new();
        while let Some(vertex) = iter.next() {
            levels.push(iter.level(vertex.label()).unwrap_or(usize::MAX));
        }
        levels.windows(2).all(|w| w[0] <= w[1]) && levels.first() == Some(&0)
    }

    #[quickcheck]
    fn prop_remove_vertex_leaves_no_references(arb: ArbGraph, index: usize) -> bool {
        let Some(label) = arb.pick_label(index) else {
            return true;
        };
        let mut graph = arb.graph;
        graph.remove_vertex(&label).unwrap();
        check_graph_consistency(&graph);
        !graph.contains(&label) && graph.all_connections().all(|(_, c)| c.target != label)
    }

    #[quickcheck]
    fn prop_add_connection_is_idempotent(arb: ArbGraph, weight: u8) -> bool {
        let mut graph = arb.graph;
        let weight = Weight::from(weight);
        graph.add_connection("A", "B", weight.clone());
        let before = connection_set(&graph);
        let added = graph.add_connection("A", "B", weight);
        !added && connection_set(&graph) == before
    }

    #[quickcheck]
    fn prop_remove_then_add_restores_connection(arb: ArbGraph, index: usize) -> bool {
        let graph = &arb.graph;
        // Only a lone one-way connection is restored by re-adding it.
        let candidates: Vec<_> = graph
            .all_connections()
            .filter(|(source, c)| {
                c.target != *source
                    && !graph.has_connection(&c.target, source)
                    && graph.neighbors(source).filter(|t| *t == c.target).count() == 1
            })
            .map(|(source, c)| (source.to_string(), c.clone()))
            .collect();
        if candidates.is_empty() {
            return true;
        }
        let (source, connection) = candidates[index % candidates.len()].clone();
        let mut graph = arb.graph.clone();
        let before = connection_set(&graph);
        graph.remove_edge(&source, &connection.target);
        graph.add_connection(&source, &connection.target, connection.weight);
        connection_set(&graph) == before
    }

    #[quickcheck]
    fn prop_invalid_weight_blocks_every_query(arb: ArbGraph, index: usize) -> bool {
        let Some(start) = arb.pick_label(index) else {
            return true;
        };
        let mut graph = arb.graph;
        graph.add_connection("X", "Y", "abc");
        graph.shortest_paths(&start).is_err()
    }
}
