use std::fmt;

use super::id::VertexId;

/// Traversal state of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Not discovered yet.
    #[default]
    White,
    /// Discovered, but its neighbors are not processed yet.
    Gray,
    /// Fully processed.
    Black,
}

/// A vertex of a [`Graph`](crate::Graph).
///
/// Besides the user value and outgoing edges, a vertex carries annotations
/// written by the algorithms. The annotations describe the result of the most
/// recent algorithm run only:
///
/// * [BFS](crate::Graph::bfs) writes color, distance (in hops) and parent,
/// * [DFS](crate::Graph::dfs) writes color, discovery and finishing times and
///   parent,
/// * [Dijkstra](crate::Graph::dijkstra) writes distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<T, W> {
    value: T,
    pub(crate) color: Color,
    pub(crate) distance: Option<W>,
    pub(crate) discovery_time: Option<usize>,
    pub(crate) finishing_time: Option<usize>,
    pub(crate) parent: Option<VertexId>,
    pub(crate) adjacent: Vec<(VertexId, W)>,
}

impl<T, W: Copy> Vertex<T, W> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            color: Color::default(),
            distance: None,
            discovery_time: None,
            finishing_time: None,
            parent: None,
            adjacent: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Hop count after BFS, shortest distance after Dijkstra. `None` means
    /// infinity, that is, the vertex was not reached.
    pub fn distance(&self) -> Option<W> {
        self.distance
    }

    pub fn discovery_time(&self) -> Option<usize> {
        self.discovery_time
    }

    pub fn finishing_time(&self) -> Option<usize> {
        self.finishing_time
    }

    /// The vertex from which this one was discovered in the last BFS or DFS.
    pub fn parent(&self) -> Option<VertexId> {
        self.parent
    }

    /// Outgoing edges as pairs of neighbor and edge weight, in the order the
    /// edges were added.
    pub fn adjacent(&self) -> impl Iterator<Item = (VertexId, W)> + '_ {
        self.adjacent.iter().copied()
    }

    pub fn weight_to(&self, neighbor: VertexId) -> Option<W> {
        self.adjacent
            .iter()
            .find(|(id, _)| *id == neighbor)
            .map(|(_, weight)| *weight)
    }

    pub fn is_adjacent(&self, neighbor: VertexId) -> bool {
        self.weight_to(neighbor).is_some()
    }

    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    pub(crate) fn connect(&mut self, neighbor: VertexId, weight: W) {
        self.adjacent.push((neighbor, weight));
    }

    pub(crate) fn disconnect(&mut self, neighbor: VertexId) -> Option<W> {
        let index = self.adjacent.iter().position(|(id, _)| *id == neighbor)?;
        // Keep the insertion order, traversals depend on it.
        Some(self.adjacent.remove(index).1)
    }

    /// Drops the edge to `removed` and shifts the handles of the vertices that
    /// were after it.
    pub(crate) fn relocate_after_removal(&mut self, removed: VertexId) {
        self.adjacent.retain_mut(|(id, _)| match id.shifted_after_removal(removed) {
            Some(shifted) => {
                *id = shifted;
                true
            }
            None => false,
        });

        self.parent = self
            .parent
            .and_then(|parent| parent.shifted_after_removal(removed));
    }
}

impl<T: fmt::Display, W> fmt::Display for Vertex<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
