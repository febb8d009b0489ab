use std::fmt::{self, Debug, Display, Formatter};

use derivative::Derivative;

/// A labelled vertex.  There is exactly one `Vertex` per label in a
/// [`Graph`](crate::Graph).
///
/// `data` is a payload owned by the caller; graph algorithms never read or
/// write it.
#[derive(Derivative)]
#[derivative(Clone(bound = "D: Clone"), PartialEq(bound = "D: PartialEq"))]
pub struct Vertex<D = ()> {
    label: String,
    pub data: Option<D>,
}

impl<D> Vertex<D> {
    pub(crate) fn new(label: String) -> Self {
        Self { label, data: None }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<D: Debug> Debug for Vertex<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => write!(f, "Vertex({}, {:?})", self.label, data),
            None => write!(f, "Vertex({})", self.label),
        }
    }
}

impl<D: Debug> Display for Vertex<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}
