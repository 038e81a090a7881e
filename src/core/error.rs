use thiserror::Error;

/// The error returned when a graph operation is rejected.
///
/// A rejected operation never leaves the graph partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A vertex with the same value is already in the graph.
    #[error("vertex already exists")]
    DuplicateVertex,

    /// The referenced vertex is not in the graph.
    #[error("vertex does not exist")]
    VertexNotFound,

    /// The edge between the given endpoints already exists.
    #[error("edge already exists")]
    DuplicateEdge,

    /// There is no edge between the given endpoints.
    #[error("edge does not exist")]
    EdgeNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
