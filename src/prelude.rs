pub use crate::error::{GraphError, Result};
pub use crate::graph::{Connection, Graph};
pub use crate::path::{ShortestPath, ShortestPaths};
pub use crate::search::{BreadthFirst, DepthFirst, Strategy, Traversal};
pub use crate::vertex::Vertex;
pub use crate::weight::Weight;
