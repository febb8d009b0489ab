use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::{
    Graph,
    error::{GraphError, Result},
    tracing_support::{debug, info_span},
};

/// The shortest route found from a start vertex to one target.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Total weight of the path.
    pub distance: f64,
    /// Labels from the start vertex to the target, both inclusive.
    pub path: Vec<String>,
}

impl ShortestPath {
    pub fn start(&self) -> &str {
        self.path.first().map_or("", String::as_str)
    }

    pub fn target(&self) -> &str {
        self.path.last().map_or("", String::as_str)
    }

    /// Number of connections on the path.
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shortest paths keyed by target label, in vertex insertion order.  Only
/// reachable targets are present.
pub type ShortestPaths = IndexMap<String, ShortestPath>;

/// Checks that every weight in the graph is a non-negative real number,
/// reporting the first one that is not.
pub(crate) fn validate_weights<D>(graph: &Graph<D>) -> Result<()> {
    let _span = info_span!("validate_weights").entered();
    for (source, connection) in graph.all_connections() {
        if connection.weight.as_distance().is_none() {
            return Err(GraphError::InvalidWeight {
                from: source.to_string(),
                to: connection.target.clone(),
                weight: connection.weight.clone(),
            });
        }
    }
    Ok(())
}

/// Dijkstra's algorithm, selecting the closest unvisited vertex by a linear
/// scan.  Ties go to the vertex inserted first.
pub(crate) fn shortest_paths<D>(graph: &Graph<D>, start: &str) -> Result<ShortestPaths> {
    let _span = info_span!("shortest_paths", start).entered();
    validate_weights(graph)?;
    let start = graph
        .vertex(start)
        .map(|v| v.label())
        .ok_or_else(|| GraphError::UnknownVertex(start.to_string()))?;

    let mut distances: HashMap<&str, f64> = graph.labels().map(|l| (l, f64::INFINITY)).collect();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut unvisited: Vec<&str> = graph.labels().collect();
    let mut visited: HashSet<&str> = HashSet::with_capacity(unvisited.len());
    distances.insert(start, 0.0);

    while !unvisited.is_empty() {
        let Some((index, current, current_distance)) = unvisited
            .iter()
            .enumerate()
            .map(|(i, &label)| (i, label, distances[label]))
            .min_by(|a, b| a.2.total_cmp(&b.2))
        else {
            break;
        };
        if current_distance.is_infinite() {
            // Everything left is unreachable.
            break;
        }
        unvisited.remove(index);
        visited.insert(current);

        for connection in graph.connections(current) {
            let neighbor = connection.target.as_str();
            if visited.contains(neighbor) {
                continue;
            }
            // Validated above.
            let Some(weight) = connection.weight.as_distance() else {
                continue;
            };
            let candidate = current_distance + weight;
            if candidate < distances[neighbor] {
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, current);
            }
        }
    }

    let result: ShortestPaths = graph
        .labels()
        .filter(|label| distances[label].is_finite())
        .map(|label| {
            let mut path = vec![label.to_string()];
            let mut current = label;
            while let Some(&previous) = predecessors.get(current) {
                path.push(previous.to_string());
                current = previous;
            }
            path.reverse();
            let entry = ShortestPath {
                distance: distances[label],
                path,
            };
            (label.to_string(), entry)
        })
        .collect();
    debug!(start, reachable = result.len(), "computed shortest paths");
    Ok(result)
}
