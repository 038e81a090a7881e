//! Strategies generating random graphs for property-based tests.
//!
//! Vertex values are `0..n` in insertion order, so the value of a vertex is
//! equal to its position.

use proptest::{collection::vec, sample::Index, strategy::Strategy};

use crate::{core::Weight, Graph};

pub const DEFAULT_MAX_VERTICES: usize = 16;

pub fn graph_directed<S>(weight: S) -> impl Strategy<Value = Graph<u32, S::Value>>
where
    S: Strategy,
    S::Value: Weight,
{
    graph(true, weight, DEFAULT_MAX_VERTICES)
}

pub fn graph_undirected<S>(weight: S) -> impl Strategy<Value = Graph<u32, S::Value>>
where
    S: Strategy,
    S::Value: Weight,
{
    graph(false, weight, DEFAULT_MAX_VERTICES)
}

/// Random graph with up to `max_vertices` vertices and up to three times as
/// many edges. Multi-edges in the generated sequence are ignored.
pub fn graph<S>(
    directed: bool,
    weight: S,
    max_vertices: usize,
) -> impl Strategy<Value = Graph<u32, S::Value>>
where
    S: Strategy,
    S::Value: Weight,
{
    let edges = vec(
        (proptest::arbitrary::any::<Index>(), proptest::arbitrary::any::<Index>(), weight),
        0..=3 * max_vertices,
    );

    (0..=max_vertices, edges).prop_map(move |(vertex_count, edges)| {
        let mut graph = Graph::with_capacity(directed, vertex_count);

        for value in 0..vertex_count as u32 {
            // Values are unique by construction.
            let _ = graph.add_vertex(value);
        }

        if vertex_count > 0 {
            for (src, dst, weight) in edges {
                let src = src.index(vertex_count) as u32;
                let dst = dst.index(vertex_count) as u32;
                let _ = graph.add_edge(&src, &dst, weight);
            }
        }

        graph
    })
}
