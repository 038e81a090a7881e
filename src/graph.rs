use std::{borrow::Borrow, hash::Hash, ops::Index};

use rustc_hash::FxHashMap;

use crate::{
    algo::{
        self,
        shortest_paths::{AllPairsPredecessors, Predecessors},
    },
    core::{Error, Result, Vertex, VertexId, Weight},
};

/// An ordered collection of uniquely valued vertices connected by weighted
/// edges.
///
/// Vertices are identified by their values on the public API. Internally, and
/// in algorithm outputs, they are referred to by [`VertexId`], which is the
/// position of the vertex in [`vertices`](Graph::vertices).
///
/// Whether the graph is directed is decided at construction. In an undirected
/// graph, every edge is stored in the adjacency of both of its endpoints.
///
/// # Examples
///
/// ```
/// use graphwalk::Graph;
///
/// let mut graph = Graph::new_undirected();
///
/// for city in ["Prague", "Vienna", "Munich", "Rome"] {
///     graph.add_vertex(city).unwrap();
/// }
///
/// graph.add_edge(&"Prague", &"Vienna", 293).unwrap();
/// graph.add_edge(&"Prague", &"Munich", 385).unwrap();
/// graph.add_edge(&"Vienna", &"Munich", 402).unwrap();
/// graph.add_edge(&"Munich", &"Rome", 924).unwrap();
///
/// let predecessors = graph.dijkstra(&"Prague").unwrap();
/// let rome = graph.id_of(&"Rome").unwrap();
///
/// assert_eq!(graph[rome].distance(), Some(1309));
///
/// let path = predecessors
///     .reconstruct(rome)
///     .map(|v| *graph[v].value())
///     .collect::<Vec<_>>();
/// assert_eq!(path, vec!["Munich", "Prague"]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T, W = i64> {
    vertices: Vec<Vertex<T, W>>,
    index: FxHashMap<T, VertexId>,
    directed: bool,
}

impl<T, W> Graph<T, W> {
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            directed,
        }
    }

    pub fn new_directed() -> Self {
        Self::new(true)
    }

    pub fn new_undirected() -> Self {
        Self::new(false)
    }

    pub fn with_capacity(directed: bool, vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            index: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            directed,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Vertices in the order they were added.
    pub fn vertices(&self) -> &[Vertex<T, W>] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T, W>> {
        self.vertices.get(id.as_usize())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        let entries = self.vertices.iter().map(|v| v.adjacent.len()).sum::<usize>();

        if self.directed {
            entries
        } else {
            // Undirected self-loops are stored only once.
            let loops = self
                .vertices
                .iter()
                .enumerate()
                .filter(|(i, v)| v.adjacent.iter().any(|(id, _)| id.as_usize() == *i))
                .count();

            (entries - loops) / 2 + loops
        }
    }

    pub(crate) fn index_len(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex<T, W>] {
        &mut self.vertices
    }
}

impl<T, W> Graph<T, W>
where
    T: Clone + Eq + Hash,
    W: Weight,
{
    /// Returns the handle of the vertex with given value.
    pub fn id_of<Q>(&self, value: &Q) -> Option<VertexId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(value).copied()
    }

    pub fn vertex_by_value<Q>(&self, value: &Q) -> Option<&Vertex<T, W>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.id_of(value).map(|id| &self.vertices[id.as_usize()])
    }

    pub fn contains_vertex<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(value)
    }

    pub fn contains_edge<Q>(&self, source: &Q, destination: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.id_of(source), self.id_of(destination)) {
            (Some(src), Some(dst)) => self.vertices[src.as_usize()].is_adjacent(dst),
            _ => false,
        }
    }

    pub(crate) fn resolve<Q>(&self, value: &Q) -> Result<VertexId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.id_of(value).ok_or(Error::VertexNotFound)
    }

    /// Appends a new vertex with no edges.
    pub fn add_vertex(&mut self, value: T) -> Result<VertexId> {
        if self.index.contains_key(&value) {
            return Err(Error::DuplicateVertex);
        }

        let id = VertexId::new(self.vertices.len());
        self.index.insert(value.clone(), id);
        self.vertices.push(Vertex::new(value));

        log::trace!("added vertex {id:?}");
        Ok(id)
    }

    /// Removes the vertex together with all edges incident to it, both
    /// outgoing and incoming, and returns its value.
    ///
    /// Vertices added after the removed one move one position forward, so
    /// their handles change.
    pub fn remove_vertex<Q>(&mut self, value: &Q) -> Result<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.index.remove(value).ok_or(Error::VertexNotFound)?;
        let vertex = self.vertices.remove(removed.as_usize());

        for id in self.index.values_mut() {
            if let Some(shifted) = id.shifted_after_removal(removed) {
                *id = shifted;
            }
        }

        for vertex in self.vertices.iter_mut() {
            vertex.relocate_after_removal(removed);
        }

        log::trace!("removed vertex {removed:?}");
        Ok(vertex.into_value())
    }

    /// Adds an edge from `source` to `destination`. In an undirected graph,
    /// the reverse direction is added as well.
    pub fn add_edge<Q>(&mut self, source: &Q, destination: &Q, weight: W) -> Result<()>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let src = self.resolve(source)?;
        let dst = self.resolve(destination)?;

        if self.vertices[src.as_usize()].is_adjacent(dst) {
            return Err(Error::DuplicateEdge);
        }

        self.vertices[src.as_usize()].connect(dst, weight);

        if !self.directed && src != dst {
            self.vertices[dst.as_usize()].connect(src, weight);
        }

        log::trace!("added edge {src:?} -> {dst:?} with weight {weight:?}");
        Ok(())
    }

    /// Removes the edge from `source` to `destination` and returns its weight.
    /// In an undirected graph, the reverse direction is removed as well.
    pub fn remove_edge<Q>(&mut self, source: &Q, destination: &Q) -> Result<W>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let src = self.resolve(source)?;
        let dst = self.resolve(destination)?;

        let weight = self.vertices[src.as_usize()]
            .disconnect(dst)
            .ok_or(Error::EdgeNotFound)?;

        if !self.directed && src != dst {
            self.vertices[dst.as_usize()].disconnect(src);
        }

        log::trace!("removed edge {src:?} -> {dst:?}");
        Ok(weight)
    }

    /// Adds all edges from the iterator, stopping at the first failure. Edges
    /// added before the failure are kept.
    pub fn extend_with_edges<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = (T, T, W)>,
    {
        for (source, destination, weight) in iter {
            self.add_edge(&source, &destination, weight)?;
        }

        Ok(())
    }

    /// Runs breadth-first search from `source`.
    ///
    /// Afterwards, every vertex reachable from `source` is
    /// [black](crate::core::Color::Black), has the number of hops from
    /// `source` as its distance and its parent is the previous vertex on one
    /// of the shortest paths. Vertices that are not reachable stay white with
    /// infinite distance.
    pub fn bfs<Q>(&mut self, source: &Q) -> Result<()>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let source = self.resolve(source)?;
        algo::bfs(self.vertices_mut(), source);
        Ok(())
    }

    /// Runs depth-first search from `source`.
    ///
    /// Assigns discovery and finishing times to every vertex reachable from
    /// `source`. The search does not continue to vertices which are not
    /// reachable; they stay white and without times.
    pub fn dfs<Q>(&mut self, source: &Q) -> Result<()>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let source = self.resolve(source)?;
        algo::dfs(self.vertices_mut(), source);
        Ok(())
    }

    /// Finds shortest paths from `source` using Dijkstra's algorithm.
    ///
    /// The distances are written to the vertices, the predecessors on the
    /// shortest paths are returned. The edge weights must not be negative,
    /// otherwise the result is unspecified.
    pub fn dijkstra<Q>(&mut self, source: &Q) -> Result<Predecessors>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let source = self.resolve(source)?;
        Ok(algo::dijkstra(self.vertices_mut(), source))
    }

    /// Finds shortest paths between all pairs of vertices using the
    /// Floyd-Warshall algorithm.
    ///
    /// Negative edge weights are allowed, negative cycles are not (the result
    /// is unspecified).
    pub fn floyd_warshall(&self) -> AllPairsPredecessors {
        algo::floyd_warshall(self.vertices())
    }
}

impl<T, W> Default for Graph<T, W> {
    fn default() -> Self {
        Self::new_undirected()
    }
}

impl<T, W> Index<VertexId> for Graph<T, W> {
    type Output = Vertex<T, W>;

    fn index(&self, id: VertexId) -> &Self::Output {
        &self.vertices[id.as_usize()]
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::infra::{
        proptest::{graph_directed, graph_undirected},
        testing::{check_consistency, init_logging},
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn create_graph(directed: bool, vertex_count: i32) -> Graph<i32> {
        init_logging();

        let mut graph = Graph::new(directed);
        for value in 1..=vertex_count {
            graph.add_vertex(value).unwrap();
        }
        graph
    }

    #[test]
    fn construct_without_hashable_values() {
        // Construction does not require the value bounds of the mutations.
        let graph = Graph::<Vec<f64>, i64>::with_capacity(true, 8);

        assert!(graph.is_empty());
        assert!(graph.is_directed());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn with_capacity_then_fill() {
        let mut graph = Graph::<i32>::with_capacity(false, 2);

        for value in 1..=4 {
            graph.add_vertex(value).unwrap();
        }

        assert_eq!(graph.vertex_count(), 4);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn add_vertex() {
        let mut graph = create_graph(false, 0);

        assert_eq!(graph.add_vertex(1), Ok(v(0)));
        assert_eq!(graph.add_vertex(2), Ok(v(1)));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.id_of(&2), Some(v(1)));
        assert_eq!(graph[v(0)].value(), &1);
    }

    #[test]
    fn add_vertex_twice() {
        let mut graph = create_graph(false, 1);

        assert_matches!(graph.add_vertex(1), Err(Error::DuplicateVertex));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn add_edge_undirected() {
        let mut graph = create_graph(false, 3);

        graph.add_edge(&1, &2, 3).unwrap();
        graph.add_edge(&1, &3, 2).unwrap();

        assert_eq!(graph[v(0)].degree(), 2);
        assert_eq!(graph[v(1)].adjacent().collect::<Vec<_>>(), vec![(v(0), 3)]);
        assert_eq!(graph[v(2)].adjacent().collect::<Vec<_>>(), vec![(v(0), 2)]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn add_edge_directed() {
        let mut graph = create_graph(true, 3);

        graph.add_edge(&1, &2, 3).unwrap();
        graph.add_edge(&1, &3, 2).unwrap();

        assert_eq!(graph[v(0)].degree(), 2);
        assert_eq!(graph[v(1)].degree(), 0);
        assert_eq!(graph[v(2)].degree(), 0);
        assert!(graph.contains_edge(&1, &2));
        assert!(!graph.contains_edge(&2, &1));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn add_edge_twice() {
        let mut graph = create_graph(false, 2);

        graph.add_edge(&1, &2, 1).unwrap();

        assert_matches!(graph.add_edge(&1, &2, 1), Err(Error::DuplicateEdge));
        assert_matches!(graph.add_edge(&2, &1, 5), Err(Error::DuplicateEdge));
        assert_eq!(graph[v(0)].weight_to(v(1)), Some(1));
    }

    #[test]
    fn add_edge_opposite_direction_in_directed() {
        let mut graph = create_graph(true, 2);

        graph.add_edge(&1, &2, 1).unwrap();
        graph.add_edge(&2, &1, 7).unwrap();

        assert_eq!(graph[v(1)].weight_to(v(0)), Some(7));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn add_edge_missing_vertex() {
        let mut graph = create_graph(false, 1);

        assert_matches!(graph.add_edge(&1, &2, 1), Err(Error::VertexNotFound));
        assert_matches!(graph.add_edge(&2, &1, 1), Err(Error::VertexNotFound));
        assert_eq!(graph[v(0)].degree(), 0);
    }

    #[test]
    fn add_edge_negative_weight() {
        let mut graph = create_graph(true, 2);

        graph.add_edge(&1, &2, -4).unwrap();
        assert_eq!(graph[v(0)].weight_to(v(1)), Some(-4));
    }

    #[test]
    fn self_loop_undirected() {
        let mut graph = create_graph(false, 2);

        graph.add_edge(&1, &1, 5).unwrap();
        graph.add_edge(&1, &2, 1).unwrap();

        assert_eq!(graph[v(0)].degree(), 2);
        assert_eq!(graph.edge_count(), 2);
        check_consistency(&graph).unwrap();

        assert_eq!(graph.remove_edge(&1, &1), Ok(5));
        assert_eq!(graph[v(0)].degree(), 1);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_vertex() {
        let mut graph = create_graph(false, 2);

        assert_eq!(graph.remove_vertex(&1), Ok(1));
        assert_eq!(graph.remove_vertex(&2), Ok(2));
        assert!(graph.is_empty());
    }

    #[test]
    fn remove_vertex_missing() {
        let mut graph = create_graph(false, 1);

        assert_matches!(graph.remove_vertex(&2), Err(Error::VertexNotFound));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn remove_vertex_strips_incoming_edges() {
        let mut graph = create_graph(true, 4);

        graph.add_edge(&1, &2, 1).unwrap();
        graph.add_edge(&3, &2, 1).unwrap();
        graph.add_edge(&2, &4, 1).unwrap();
        graph.add_edge(&3, &4, 9).unwrap();

        graph.remove_vertex(&2).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.id_of(&3), Some(v(1)));
        assert_eq!(graph.id_of(&4), Some(v(2)));
        assert_eq!(graph[v(0)].degree(), 0);
        assert_eq!(graph[v(1)].adjacent().collect::<Vec<_>>(), vec![(v(2), 9)]);
        assert!(graph.contains_edge(&3, &4));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_vertex_keeps_order() {
        let mut graph = create_graph(false, 5);

        graph.remove_vertex(&3).unwrap();

        let values = graph.vertices().iter().map(|v| *v.value()).collect::<Vec<_>>();
        assert_eq!(values, vec![1, 2, 4, 5]);
    }

    #[test]
    fn remove_edge() {
        let mut graph = create_graph(false, 3);

        graph.add_edge(&1, &2, 5).unwrap();
        graph.add_edge(&1, &3, 2).unwrap();

        assert_eq!(graph.remove_edge(&1, &2), Ok(5));
        assert_eq!(graph.remove_edge(&3, &1), Ok(2));

        for vertex in graph.vertices() {
            assert_eq!(vertex.degree(), 0);
        }
    }

    #[test]
    fn remove_edge_missing() {
        let mut graph = create_graph(true, 2);

        graph.add_edge(&1, &2, 5).unwrap();

        assert_matches!(graph.remove_edge(&2, &1), Err(Error::EdgeNotFound));
        assert_matches!(graph.remove_edge(&1, &3), Err(Error::VertexNotFound));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn extend_with_edges_stops_on_error() {
        let mut graph = create_graph(false, 3);

        let result = graph.extend_with_edges([(1, 2, 1), (2, 3, 1), (2, 1, 1), (1, 3, 1)]);

        assert_matches!(result, Err(Error::DuplicateEdge));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn borrowed_lookup() {
        let mut graph = Graph::<String, u32>::new_directed();

        graph.add_vertex("a".to_string()).unwrap();
        graph.add_vertex("b".to_string()).unwrap();
        graph.add_edge("a", "b", 3).unwrap();

        assert!(graph.contains_vertex("a"));
        assert!(graph.contains_edge("a", "b"));
        assert_eq!(graph.vertex_by_value("b").map(|v| v.value().as_str()), Some("b"));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_remove_vertex_consistent_directed(graph in graph_directed(any::<u8>().prop_map(i64::from)), index in any::<usize>()) {
            let mut graph = graph;
            let n = graph.vertex_count();
            prop_assume!(n > 0);

            let value = *graph[v(index % n)].value();
            graph.remove_vertex(&value).unwrap();

            prop_assert_eq!(graph.vertex_count(), n - 1);
            prop_assert!(check_consistency(&graph).is_ok());
            for vertex in graph.vertices() {
                prop_assert!(vertex.adjacent().all(|(id, _)| id.as_usize() < n - 1));
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_remove_vertex_consistent_undirected(graph in graph_undirected(any::<u8>().prop_map(i64::from)), index in any::<usize>()) {
            let mut graph = graph;
            let n = graph.vertex_count();
            prop_assume!(n > 0);

            let value = *graph[v(index % n)].value();
            graph.remove_vertex(&value).unwrap();

            prop_assert!(check_consistency(&graph).is_ok());
            prop_assert!(!graph.contains_vertex(&value));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_add_edge_symmetric_undirected(graph in graph_undirected(any::<u8>().prop_map(i64::from)), weight in any::<i64>()) {
            let mut graph = graph;
            let n = graph.vertex_count();
            prop_assume!(n > 1);

            let a = *graph[v(0)].value();
            let b = *graph[v(n - 1)].value();

            if graph.add_edge(&a, &b, weight).is_ok() {
                prop_assert_eq!(graph[v(n - 1)].weight_to(v(0)), Some(weight));
                prop_assert_eq!(graph[v(0)].weight_to(v(n - 1)), Some(weight));
            }
            prop_assert!(check_consistency(&graph).is_ok());
        }
    }
}
