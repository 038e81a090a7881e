//! Handles identifying vertices in a graph.
//!
//! A [`VertexId`] is the position of the vertex in the ordered vertex
//! sequence of the graph. Removing a vertex shifts the positions of all
//! vertices added after it, and the graph re-maps every handle it stores.
//! Handles held outside of the graph are not updated.

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// Returns the handle that this one becomes once the vertex `removed` is
    /// removed from the graph, or `None` if it is `removed` itself.
    pub(crate) fn shifted_after_removal(self, removed: VertexId) -> Option<Self> {
        use std::cmp::Ordering;

        match self.0.cmp(&removed.0) {
            Ordering::Less => Some(self),
            Ordering::Equal => None,
            Ordering::Greater => Some(Self(self.0 - 1)),
        }
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0
    }
}
