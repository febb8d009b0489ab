//! Weighted graphs whose vertices are identified by string labels.
//!
//! A [`Graph`] holds directed, weighted connections and answers three kinds
//! of query: single-source shortest paths ([`Graph::shortest_paths`]), and
//! breadth-first and depth-first traversals exposed as lazy iterators
//! ([`Graph::breadth_first_iterator`], [`Graph::depth_first_iterator`],
//! [`Graph::traverse`]).
//!
//! ```
//! use labelgraph::Graph;
//!
//! let mut graph: Graph = Graph::new();
//! graph.add_connection("A", "B", 4);
//! graph.add_connection("A", "C", 1);
//! graph.add_connection("C", "B", 1);
//!
//! let paths = graph.shortest_paths("A").unwrap();
//! assert_eq!(paths["B"].distance, 2.0);
//! assert_eq!(paths["B"].path, ["A", "C", "B"]);
//!
//! assert_eq!(graph.breadth_first_traversal("A"), ["A", "B", "C"]);
//! ```
pub mod error;
pub mod graph;
pub mod path;
pub mod prelude;
pub mod report;
pub mod search;
pub mod tracing_support;
pub mod vertex;
pub mod weight;

#[cfg(test)]
mod graph_test_support;

pub use error::{GraphError, Result};
pub use graph::{Connection, Graph};
pub use path::{ShortestPath, ShortestPaths};
pub use search::{BreadthFirst, DepthFirst, Strategy, Traversal};
pub use tracing_support::init_tracing;
pub use vertex::Vertex;
pub use weight::{DEFAULT_WEIGHT, Weight};
