//! The [`Graph`] type: a vertex store and an adjacency store keyed by
//! string labels.
//!
//! This module provides:
//!
//! - Mutation: [`Graph::add_vertex`], [`Graph::add_connection`],
//!   [`Graph::remove_edge`], [`Graph::remove_vertex`],
//!   [`Graph::set_vertex_data`], [`Graph::clear`]
//! - Queries: [`Graph::shortest_paths`], [`Graph::breadth_first_traversal`],
//!   [`Graph::breadth_first_iterator`], [`Graph::depth_first_iterator`],
//!   [`Graph::traverse`], [`Graph::describe`]
//!
//! Every label present in the vertex store is also a key of the adjacency
//! store, and every neighbor named in an adjacency entry has a vertex.  All
//! mutations preserve this.
//!
//! Both stores iterate in insertion order, so [`Graph::describe`] and the
//! traversal orders are deterministic for a given sequence of mutations.
//!
//! Traversal iterators borrow the graph immutably, so the graph cannot be
//! mutated while one is being consumed.
use std::fmt::{self, Debug, Display, Formatter};

use derivative::Derivative;
use indexmap::IndexMap;

use crate::{
    error::{GraphError, Result},
    path::{self, ShortestPaths},
    search::{BreadthFirst, DepthFirst, Strategy, Traversal},
    tracing_support::debug,
    vertex::Vertex,
    weight::{DEFAULT_WEIGHT, Weight},
};

/// One outgoing adjacency entry: the neighbor's label and the weight of the
/// connection to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub target: String,
    pub weight: Weight,
}

impl Connection {
    pub fn new(target: impl Into<String>, weight: impl Into<Weight>) -> Self {
        Self {
            target: target.into(),
            weight: weight.into(),
        }
    }
}

impl Display for Connection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', {})", self.target, self.weight)
    }
}

/// A weighted graph whose vertices are identified by string labels.
///
/// Connections are directed.  Each vertex's outgoing connections form a set
/// of `(target, weight)` pairs: the same pair is never stored twice, but two
/// connections to the same target with different weights coexist.  An
/// undirected connection is two directed ones, see
/// [`Graph::add_undirected_connection`].
#[derive(Derivative)]
#[derivative(Default(bound = "", new = "true"), Clone(bound = "D: Clone"))]
pub struct Graph<D = ()> {
    vertices: IndexMap<String, Vertex<D>>,
    neighbors: IndexMap<String, Vec<Connection>>,
}

impl<D> Graph<D> {
    /// Registers `label` in both stores if it is not already present.
    /// Returns true if the vertex is new.
    fn ensure_vertex(&mut self, label: &str) -> bool {
        if self.vertices.contains_key(label) {
            return false;
        }
        self.vertices
            .insert(label.to_string(), Vertex::new(label.to_string()));
        self.neighbors.entry(label.to_string()).or_default();
        true
    }

    /// Adds an isolated vertex.  Returns false if the label already exists.
    pub fn add_vertex(&mut self, label: &str) -> bool {
        let added = self.ensure_vertex(label);
        if added {
            debug!(label, "added vertex");
        }
        added
    }

    /// Adds a directed connection from `start` to `end`, creating either
    /// vertex if it does not exist.  Returns false if the identical
    /// `(end, weight)` pair was already present for `start`.
    pub fn add_connection(&mut self, start: &str, end: &str, weight: impl Into<Weight>) -> bool {
        let weight = weight.into();
        self.ensure_vertex(start);
        self.ensure_vertex(end);
        let entries = self.neighbors.entry(start.to_string()).or_default();
        if entries
            .iter()
            .any(|c| c.target == end && c.weight == weight)
        {
            return false;
        }
        debug!(start, end, %weight, "added connection");
        entries.push(Connection::new(end, weight));
        true
    }

    /// Adds a directed connection with the default weight of 1.
    pub fn connect(&mut self, start: &str, end: &str) -> bool {
        self.add_connection(start, end, DEFAULT_WEIGHT)
    }

    /// Adds a connection in both directions with the same weight.  Returns
    /// true if either direction was new.
    pub fn add_undirected_connection(
        &mut self,
        a: &str,
        b: &str,
        weight: impl Into<Weight>,
    ) -> bool {
        let weight = weight.into();
        let forward = self.add_connection(a, b, weight.clone());
        let backward = self.add_connection(b, a, weight);
        forward || backward
    }

    /// Removes every connection from `start` to `end` and from `end` to
    /// `start`, whatever their weight.  Returns the number of entries
    /// removed; removing a connection that does not exist is not an error.
    pub fn remove_edge(&mut self, start: &str, end: &str) -> usize {
        let mut removed = 0;
        for (from, to) in [(start, end), (end, start)] {
            if let Some(entries) = self.neighbors.get_mut(from) {
                let before = entries.len();
                entries.retain(|c| c.target != to);
                removed += before - entries.len();
            }
        }
        debug!(start, end, removed, "removed edge");
        removed
    }

    /// Removes a vertex, its outgoing connections, and every connection
    /// pointing at it.
    pub fn remove_vertex(&mut self, label: &str) -> Result<Vertex<D>> {
        let vertex = self
            .vertices
            .shift_remove(label)
            .ok_or_else(|| GraphError::UnknownVertex(label.to_string()))?;
        self.neighbors.shift_remove(label);
        for entries in self.neighbors.values_mut() {
            entries.retain(|c| c.target != label);
        }
        debug!(label, "removed vertex");
        Ok(vertex)
    }

    /// Sets a vertex's payload.  Does nothing if the label is unknown.
    /// Returns true if the payload was set.
    pub fn set_vertex_data(&mut self, label: &str, data: D) -> bool {
        match self.vertices.get_mut(label) {
            Some(vertex) => {
                vertex.data = Some(data);
                true
            }
            None => false,
        }
    }

    /// Removes every vertex and connection.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.neighbors.clear();
    }

    pub fn vertex(&self, label: &str) -> Option<&Vertex<D>> {
        self.vertices.get(label)
    }

    pub fn vertex_mut(&mut self, label: &str) -> Option<&mut Vertex<D>> {
        self.vertices.get_mut(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    /// Returns the vertex labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.keys().map(String::as_str)
    }

    /// Returns the vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<D>> + '_ {
        self.vertices.values()
    }

    /// Returns the outgoing connections of `label`, or an empty slice if the
    /// label is unknown.
    pub fn connections(&self, label: &str) -> &[Connection] {
        self.neighbors.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the labels of the vertices `label` connects to.  A neighbor
    /// reached through several weights is listed once per weight.
    pub fn neighbors(&self, label: &str) -> impl Iterator<Item = &str> + '_ {
        self.connections(label).iter().map(|c| c.target.as_str())
    }

    pub fn has_connection(&self, start: &str, end: &str) -> bool {
        self.connections(start).iter().any(|c| c.target == end)
    }

    /// Iterates over every stored connection as `(source, connection)`.
    pub fn all_connections(&self) -> impl Iterator<Item = (&str, &Connection)> + '_ {
        self.neighbors
            .iter()
            .flat_map(|(source, entries)| entries.iter().map(move |c| (source.as_str(), c)))
    }

    #[cfg(test)]
    pub(crate) fn adjacency_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.neighbors.keys().map(String::as_str)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_connections(&self) -> usize {
        self.neighbors.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Lists each vertex's outgoing connections, one vertex per line, with
    /// labels padded to a common width:
    ///
    /// ```text
    /// A ➞ ('B', 4), ('C', 1)
    /// B ➞
    /// ```
    pub fn describe(&self) -> String {
        let width = self
            .neighbors
            .keys()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for (label, entries) in &self.neighbors {
            let entries = entries
                .iter()
                .map(Connection::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("{label:<width$} \u{279E} {entries}\n"));
        }
        out
    }

    // Queries

    /// Computes the shortest distance and path from `start` to every vertex
    /// reachable from it, using Dijkstra's algorithm.
    ///
    /// Every weight in the graph is validated first, so a malformed weight
    /// anywhere fails the query with [`GraphError::InvalidWeight`], even if
    /// it is not reachable from `start`.  An unknown `start` fails with
    /// [`GraphError::UnknownVertex`].
    pub fn shortest_paths(&self, start: &str) -> Result<ShortestPaths> {
        path::shortest_paths(self, start)
    }

    /// Returns the labels visited by a breadth-first traversal from `start`.
    pub fn breadth_first_traversal(&self, start: &str) -> Vec<String> {
        self.breadth_first_iterator(start)
            .map(|v| v.label().to_string())
            .collect()
    }

    /// Lazily visits the vertices reachable from `start` in breadth-first
    /// order.  An unknown `start` visits nothing.
    pub fn breadth_first_iterator(&self, start: &str) -> BreadthFirst<'_, D> {
        BreadthFirst::new(self, start)
    }

    /// Lazily visits the vertices reachable from `start` in (stack-based)
    /// depth-first order.  An unknown `start` visits nothing.
    pub fn depth_first_iterator(&self, start: &str) -> DepthFirst<'_, D> {
        DepthFirst::new(self, start)
    }

    /// Lazily visits the vertices reachable from `start` using the given
    /// strategy.
    pub fn traverse(&self, start: &str, strategy: Strategy) -> Traversal<'_, D> {
        match strategy {
            Strategy::BreadthFirst => Traversal::BreadthFirst(self.breadth_first_iterator(start)),
            Strategy::DepthFirst => Traversal::DepthFirst(self.depth_first_iterator(start)),
        }
    }

    /// Like [`Graph::traverse`], with the strategy given by name
    /// (`"breadth_first"` or `"depth_first"`).
    pub fn traverse_by_name(&self, start: &str, strategy: &str) -> Result<Traversal<'_, D>> {
        Ok(self.traverse(start, strategy.parse()?))
    }
}

impl<D> Display for Graph<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl<D: Debug> Debug for Graph<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices.values().collect::<Vec<_>>())
            .field("neighbors", &self.neighbors)
            .finish()
    }
}
