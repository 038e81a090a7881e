use std::hash::Hash;

use thiserror::Error;

use crate::{
    core::{
        weight::{add_dist, improves},
        VertexId, Weight,
    },
    Graph,
};

/// The sample graph used across tests: five vertices `1..=5` with edges
/// 1-2 (4), 1-3 (2), 2-4 (1), 3-4 (5), 4-5 (3).
pub fn create_sample(directed: bool) -> Graph<i32> {
    let mut graph = Graph::with_capacity(directed, 5);

    for value in 1..=5 {
        graph.add_vertex(value).unwrap();
    }

    graph
        .extend_with_edges([(1, 2, 4), (1, 3, 2), (2, 4, 1), (3, 4, 5), (4, 5, 3)])
        .unwrap();

    graph
}

/// Directed path `0 -> 1 -> ... -> vertex_count - 1` with unit weights.
pub fn create_path(vertex_count: usize) -> Graph<usize> {
    let mut graph = Graph::with_capacity(true, vertex_count);

    for value in 0..vertex_count {
        graph.add_vertex(value).unwrap();
    }

    for value in 1..vertex_count {
        graph.add_edge(&(value - 1), &value, 1).unwrap();
    }

    graph
}

/// Complete graph on vertices `0..vertex_count` with all weights equal to
/// `weight`.
pub fn create_complete<W: Weight>(directed: bool, vertex_count: usize, weight: W) -> Graph<usize, W> {
    let mut graph = Graph::with_capacity(directed, vertex_count);

    for value in 0..vertex_count {
        graph.add_vertex(value).unwrap();
    }

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v {
                continue;
            }

            if !directed && v < u {
                continue;
            }

            graph.add_edge(&u, &v, weight).unwrap();
        }
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("value index size ({0}) is not equal to vertex count ({1})")]
    IndexSizeMismatch(usize, usize),
    #[error("value of vertex {0} is indexed under a different position")]
    IndexInvalid(usize),
    #[error("vertex {0} has an edge to nonexistent vertex {1}")]
    DanglingEdge(usize, usize),
    #[error("vertex {0} has multiple edges to vertex {1}")]
    MultiEdge(usize, usize),
    #[error("edge {0} -> {1} has no reverse counterpart with equal weight")]
    AsymmetricEdge(usize, usize),
    #[error("vertex {0} has nonexistent parent {1}")]
    DanglingParent(usize, usize),
}

/// Verifies the structural invariants of the graph.
pub fn check_consistency<T, W>(graph: &Graph<T, W>) -> Result<(), ConsistencyCheckError>
where
    T: Clone + Eq + Hash,
    W: Weight,
{
    let n = graph.vertex_count();
    let vertices = graph.vertices();

    let indexed = graph.index_len();
    if indexed != n {
        return Err(ConsistencyCheckError::IndexSizeMismatch(indexed, n));
    }

    for (i, vertex) in vertices.iter().enumerate() {
        if graph.id_of(vertex.value()) != Some(VertexId::new(i)) {
            return Err(ConsistencyCheckError::IndexInvalid(i));
        }

        if let Some(parent) = vertex.parent() {
            if parent.as_usize() >= n {
                return Err(ConsistencyCheckError::DanglingParent(i, parent.as_usize()));
            }
        }

        let mut seen = Vec::with_capacity(vertex.degree());

        for (j, weight) in vertex.adjacent() {
            let j = j.as_usize();

            if j >= n {
                return Err(ConsistencyCheckError::DanglingEdge(i, j));
            }

            if seen.contains(&j) {
                return Err(ConsistencyCheckError::MultiEdge(i, j));
            }
            seen.push(j);

            if !graph.is_directed() && vertices[j].weight_to(VertexId::new(i)) != Some(weight) {
                return Err(ConsistencyCheckError::AsymmetricEdge(i, j));
            }
        }
    }

    Ok(())
}

/// Shortest distances from `source` found by enumerating all simple paths.
///
/// Exponential, suitable only for small graphs. With negative cycles, the
/// result is the shortest simple path, unlike in the real algorithms.
pub fn shortest_distances_brute_force<T, W: Weight>(
    graph: &Graph<T, W>,
    source: VertexId,
) -> Vec<Option<W>> {
    fn explore<T, W: Weight>(
        graph: &Graph<T, W>,
        vertex: VertexId,
        dist: W,
        on_path: &mut [bool],
        best: &mut [Option<W>],
    ) {
        if improves(Some(dist), best[vertex.as_usize()]) {
            best[vertex.as_usize()] = Some(dist);
        }

        for (next, weight) in graph[vertex].adjacent() {
            let Some(next_dist) = dist.checked_add(weight) else {
                continue;
            };

            if !on_path[next.as_usize()] {
                on_path[next.as_usize()] = true;
                explore(graph, next, next_dist, on_path, best);
                on_path[next.as_usize()] = false;
            }
        }
    }

    let n = graph.vertex_count();
    let mut best = vec![None; n];
    let mut on_path = vec![false; n];

    on_path[source.as_usize()] = true;
    explore(graph, source, W::zero(), &mut on_path, &mut best);

    best
}

/// Sums the edge weights along the path given as a sequence of predecessors
/// from `to` back to `from`. Returns `None` if the sequence does not end in
/// `from` or uses a nonexistent edge.
pub fn path_weight<T, W, I>(graph: &Graph<T, W>, from: VertexId, to: VertexId, preds: I) -> Option<W>
where
    W: Weight,
    I: IntoIterator<Item = VertexId>,
{
    let mut total = Some(W::zero());
    let mut curr = to;

    for pred in preds {
        total = add_dist(total, graph[pred].weight_to(curr));
        curr = pred;
    }

    if curr == from {
        total
    } else {
        None
    }
}

#[cfg(test)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
pub fn to_petgraph<T, W: Weight>(graph: &Graph<T, W>) -> petgraph::Graph<(), W, petgraph::Directed> {
    use petgraph::graph::NodeIndex;

    let mut pg = petgraph::Graph::with_capacity(graph.vertex_count(), 0);

    for _ in graph.vertices() {
        pg.add_node(());
    }

    // Undirected edges are already stored in both directions. Self-loops never
    // lie on a shortest path without a negative cycle.
    for (i, vertex) in graph.vertices().iter().enumerate() {
        for (j, weight) in vertex.adjacent() {
            if i != j.as_usize() {
                pg.add_edge(NodeIndex::new(i), NodeIndex::new(j.as_usize()), weight);
            }
        }
    }

    pg
}
