//! Weighted directed and undirected graphs with classic traversal and
//! shortest-path algorithms.
//!
//! Vertices carry arbitrary unique values and are addressed by them. The
//! algorithms annotate the vertices in place:
//!
//! ```
//! use graphwalk::Graph;
//!
//! let mut graph = Graph::new_undirected();
//!
//! for value in ["a", "b", "c"] {
//!     graph.add_vertex(value).unwrap();
//! }
//!
//! graph
//!     .extend_with_edges([("a", "b", 4), ("a", "c", 2), ("c", "b", 1)])
//!     .unwrap();
//!
//! graph.bfs(&"a").unwrap();
//! assert_eq!(graph.vertex_by_value(&"b").unwrap().distance(), Some(1));
//!
//! graph.dijkstra(&"a").unwrap();
//! assert_eq!(graph.vertex_by_value(&"b").unwrap().distance(), Some(3));
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;

pub use graph::Graph;

pub mod prelude {
    pub use crate::{
        algo::{AllPairsPredecessors, PathReconstruction, Predecessors},
        core::{Color, Error, Vertex, VertexId, Weight},
        Graph,
    };
}
