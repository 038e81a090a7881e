//! Building blocks of the graph: vertex handles, weights, the vertex itself
//! and the error type.

pub mod error;
pub mod id;
pub mod vertex;
pub mod weight;

pub use error::{Error, Result};
pub use id::VertexId;
pub use vertex::{Color, Vertex};
pub use weight::{Weight, Weighted};
