use crate::weight::Weight;

/// Errors returned by graph queries and mutations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// The operation referenced a label that is not in the graph.
    #[error("unknown vertex: {0:?}")]
    UnknownVertex(String),
    /// A stored connection weight is not a non-negative real number.
    #[error(
        "weight of the edge {from}-{to} is {weight}; every edge weight must be a non-negative real number"
    )]
    InvalidWeight {
        from: String,
        to: String,
        weight: Weight,
    },
    /// The traversal strategy name is not recognized.
    #[error("unknown traversal strategy: {0:?} (expected \"breadth_first\" or \"depth_first\")")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
