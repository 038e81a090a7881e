//! Graph algorithms.
//!
//! The algorithms are run through the methods of [`Graph`](crate::Graph).
//! They either annotate the vertices ([`bfs`](crate::Graph::bfs),
//! [`dfs`](crate::Graph::dfs), [`dijkstra`](crate::Graph::dijkstra)) or
//! return their result ([`dijkstra`](crate::Graph::dijkstra),
//! [`floyd_warshall`](crate::Graph::floyd_warshall)).

mod bfs;
mod dfs;
pub mod shortest_paths;

pub(crate) use bfs::bfs;
pub(crate) use dfs::dfs;
pub(crate) use shortest_paths::{dijkstra, floyd_warshall};

pub use shortest_paths::{AllPairsPredecessors, PathReconstruction, Predecessors};
