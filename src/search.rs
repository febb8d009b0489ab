use std::{
    collections::{HashMap, HashSet, VecDeque},
    str::FromStr,
};

use crate::{
    Graph,
    error::GraphError,
    tracing_support::info_span,
    vertex::Vertex,
};

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Breadth-first iterator over the vertices reachable from a start label.
///
/// Besides the visiting order, the iterator records the level of every
/// vertex it has discovered: the start is at level 0 and a neighbor is one
/// level below the vertex that first discovered it.
pub struct BreadthFirst<'g, D> {
    graph: &'g Graph<D>,
    visited: HashSet<&'g str>,
    queue: VecDeque<&'g str>,
    levels: HashMap<&'g str, usize>,
}

impl<'g, D> BreadthFirst<'g, D> {
    pub(crate) fn new(graph: &'g Graph<D>, start: &str) -> Self {
        let _span = info_span!("breadth_first", start).entered();
        let mut queue = VecDeque::new();
        let mut levels = HashMap::new();
        // Only a known start can be visited; the stored key outlives `start`.
        if let Some(vertex) = graph.vertex(start) {
            queue.push_back(vertex.label());
            levels.insert(vertex.label(), 0);
        }
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            queue,
            levels,
        }
    }

    /// Returns the level at which `label` was discovered, if it has been
    /// discovered yet.
    pub fn level(&self, label: &str) -> Option<usize> {
        self.levels.get(label).copied()
    }
}

impl<'g, D> Iterator for BreadthFirst<'g, D> {
    type Item = &'g Vertex<D>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(label) = self.queue.pop_front() {
            if !self.visited.insert(label) {
                continue;
            }
            let level = self.levels.get(label).copied().unwrap_or(0);
            for connection in self.graph.connections(label) {
                let neighbor = connection.target.as_str();
                if !self.visited.contains(neighbor) {
                    self.levels.entry(neighbor).or_insert(level + 1);
                    self.queue.push_back(neighbor);
                }
            }
            if let Some(vertex) = self.graph.vertex(label) {
                return Some(vertex);
            }
        }
        None
    }
}

/// Depth-first iterator over the vertices reachable from a start label.
///
/// Uses an explicit stack: the neighbors of a vertex are pushed in adjacency
/// order and therefore popped in reverse adjacency order.
pub struct DepthFirst<'g, D> {
    graph: &'g Graph<D>,
    visited: HashSet<&'g str>,
    stack: Vec<&'g str>,
}

impl<'g, D> DepthFirst<'g, D> {
    pub(crate) fn new(graph: &'g Graph<D>, start: &str) -> Self {
        let _span = info_span!("depth_first", start).entered();
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack: graph.vertex(start).map(Vertex::label).into_iter().collect(),
        }
    }
}

impl<'g, D> Iterator for DepthFirst<'g, D> {
    type Item = &'g Vertex<D>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(label) = self.stack.pop() {
            if !self.visited.insert(label) {
                continue;
            }
            for connection in self.graph.connections(label) {
                let neighbor = connection.target.as_str();
                if !self.visited.contains(neighbor) {
                    self.stack.push(neighbor);
                }
            }
            if let Some(vertex) = self.graph.vertex(label) {
                return Some(vertex);
            }
        }
        None
    }
}

/// A traversal order accepted by [`Graph::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    #[default]
    BreadthFirst,
    DepthFirst,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth_first",
            Strategy::DepthFirst => "depth_first",
        }
    }
}

impl FromStr for Strategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadth_first" => Ok(Strategy::BreadthFirst),
            "depth_first" => Ok(Strategy::DepthFirst),
            other => Err(GraphError::UnknownStrategy(other.to_string())),
        }
    }
}

/// A traversal in either order, as returned by [`Graph::traverse`].
pub enum Traversal<'g, D> {
    BreadthFirst(BreadthFirst<'g, D>),
    DepthFirst(DepthFirst<'g, D>),
}

impl<'g, D> Traversal<'g, D> {
    pub fn strategy(&self) -> Strategy {
        match self {
            Traversal::BreadthFirst(_) => Strategy::BreadthFirst,
            Traversal::DepthFirst(_) => Strategy::DepthFirst,
        }
    }
}

impl<'g, D> Iterator for Traversal<'g, D> {
    type Item = &'g Vertex<D>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::BreadthFirst(iter) => iter.next(),
            Traversal::DepthFirst(iter) => iter.next(),
        }
    }
}
