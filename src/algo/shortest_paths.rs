//! Find [shortest paths] and the predecessors on them.
//!
//! Single source shortest paths are found by [Dijkstra's
//! algorithm](crate::Graph::dijkstra), which requires non-negative edge
//! weights. Shortest paths between all pairs of vertices are found by the
//! [Floyd-Warshall algorithm](crate::Graph::floyd_warshall), which also
//! supports negative edge weights, but not negative cycles.
//!
//! [shortest paths]: https://en.wikipedia.org/wiki/Shortest_path_problem
//!
//! # Examples
//!
//! ```
//! use graphwalk::Graph;
//!
//! let mut graph = Graph::new_directed();
//!
//! for v in 1..=4 {
//!     graph.add_vertex(v).unwrap();
//! }
//!
//! graph
//!     .extend_with_edges([(1, 2, 5), (1, 3, 1), (3, 2, 2), (2, 4, 1)])
//!     .unwrap();
//!
//! let all_pairs = graph.floyd_warshall();
//! let (one, four) = (graph.id_of(&1).unwrap(), graph.id_of(&4).unwrap());
//!
//! let path = all_pairs
//!     .reconstruct(one, four)
//!     .map(|v| *graph[v].value())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(path, vec![2, 3, 1]);
//! ```

use std::ops::Index;

use crate::core::VertexId;

mod dijkstra;
mod floyd_warshall;

pub(crate) use dijkstra::dijkstra;
pub(crate) use floyd_warshall::floyd_warshall;

/// Predecessors on the shortest paths from a single source vertex.
///
/// Every vertex of the graph has an entry. The entry is `None` for the source
/// itself and for vertices that were not reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predecessors {
    source: VertexId,
    pred: Vec<Option<VertexId>>,
}

impl Predecessors {
    pub(crate) fn new(source: VertexId, pred: Vec<Option<VertexId>>) -> Self {
        Self { source, pred }
    }

    /// Source vertex where the search was started.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the predecessor of the vertex on its shortest path from the
    /// source, or `None` if it's the source, it was not reached or it was not
    /// in the graph at the time of the run.
    pub fn get(&self, vertex: VertexId) -> Option<VertexId> {
        self.pred.get(vertex.as_usize()).copied().flatten()
    }

    /// Returns the number of entries, which is the number of vertices in the
    /// graph.
    pub fn len(&self) -> usize {
        self.pred.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pred.is_empty()
    }

    /// Returns an iterator over all vertices and their predecessors.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Option<VertexId>)> + '_ {
        self.pred
            .iter()
            .enumerate()
            .map(|(i, pred)| (VertexId::from(i), *pred))
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order, excluding the given vertex.
    ///
    /// The iterator is empty if the given vertex is the source or if it was
    /// not reached.
    pub fn reconstruct(&self, to: VertexId) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            lookup: Lookup::Single(self),
            remaining: self.pred.len(),
        }
    }
}

/// Unlike [`Predecessors::get`], panics if the vertex was not in the graph at
/// the time of the run.
impl Index<VertexId> for Predecessors {
    type Output = Option<VertexId>;

    fn index(&self, index: VertexId) -> &Self::Output {
        &self.pred[index.as_usize()]
    }
}

/// Predecessors on the shortest paths between all pairs of vertices.
///
/// Both the rows and the columns are indexed by the vertex position, as in
/// [`Graph::vertices`](crate::Graph::vertices). The entry at `(i, j)` is the
/// vertex preceding `j` on the shortest path from `i` to `j`, or `None` if
/// `i == j` or there is no path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairsPredecessors {
    size: usize,
    pred: Vec<Option<VertexId>>,
}

impl AllPairsPredecessors {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            pred: vec![None; size * size],
        }
    }

    /// Number of rows (and columns) of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the predecessor of `to` on the shortest path from `from`, or
    /// `None` if `from == to`, there is no path or any of the vertices was not
    /// in the graph at the time of the run.
    pub fn get(&self, from: VertexId, to: VertexId) -> Option<VertexId> {
        if from.as_usize() < self.size && to.as_usize() < self.size {
            self.pred[self.index(from, to)]
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, from: VertexId, to: VertexId, pred: Option<VertexId>) {
        let index = self.index(from, to);
        self.pred[index] = pred;
    }

    /// Returns the predecessors on the shortest paths from the given vertex.
    ///
    /// # Panics
    ///
    /// Panics if the vertex was not in the graph at the time of the run.
    pub fn row(&self, from: VertexId) -> &[Option<VertexId>] {
        let start = self.index(from, VertexId::new(0));
        &self.pred[start..start + self.size]
    }

    /// Returns an iterator over all rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<VertexId>]> + '_ {
        // `chunks` panics on zero chunk size.
        self.pred.chunks(self.size.max(1))
    }

    /// Returns an iterator over vertices on the path from `to` back to `from`,
    /// excluding `to`.
    ///
    /// The iterator is empty if `from == to` or there is no path.
    pub fn reconstruct(&self, from: VertexId, to: VertexId) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            lookup: Lookup::AllPairs(self, from),
            remaining: self.size,
        }
    }

    fn index(&self, row: VertexId, col: VertexId) -> usize {
        assert!(row.as_usize() < self.size && col.as_usize() < self.size);
        row.as_usize() * self.size + col.as_usize()
    }
}

/// Unlike [`AllPairsPredecessors::get`], panics if any of the vertices was
/// not in the graph at the time of the run.
impl Index<(VertexId, VertexId)> for AllPairsPredecessors {
    type Output = Option<VertexId>;

    fn index(&self, (from, to): (VertexId, VertexId)) -> &Self::Output {
        &self.pred[self.index(from, to)]
    }
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`Predecessors::reconstruct`] and
/// [`AllPairsPredecessors::reconstruct`].
#[derive(Debug, Clone)]
pub struct PathReconstruction<'a> {
    curr: VertexId,
    lookup: Lookup<'a>,
    // A simple path never has more vertices than the graph. This bounds the
    // iteration when predecessors form a cycle, which happens only with
    // negative cycles.
    remaining: usize,
}

#[derive(Debug, Clone, Copy)]
enum Lookup<'a> {
    Single(&'a Predecessors),
    AllPairs(&'a AllPairsPredecessors, VertexId),
}

impl Iterator for PathReconstruction<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let pred = match self.lookup {
            Lookup::Single(pred) => pred.get(self.curr),
            Lookup::AllPairs(matrix, from) => matrix.get(from, self.curr),
        }?;

        self.curr = pred;
        self.remaining -= 1;
        Some(pred)
    }
}
