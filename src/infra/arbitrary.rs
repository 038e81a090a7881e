use std::{fmt, hash::Hash};

use arbitrary::Arbitrary;

use crate::{
    core::{Error, VertexId, Weight},
    Graph,
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

/// A random graph operation. Existing vertices are referred to by their
/// position modulo the vertex count.
#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<T, W> {
    AddVertex(T),
    RemoveVertex(Index),
    AddEdge(Index, Index, W),
    RemoveEdge(Index, Index),
    AddEdgeAbsent(Index, T, W),
    Bfs(Index),
    Dfs(Index),
    Dijkstra(Index),
    FloydWarshall,
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<T, W> {
    AddVertex(Result<VertexId, Error>),
    RemoveVertex(Result<T, Error>),
    AddEdge(Result<(), Error>),
    RemoveEdge(Result<W, Error>),
    Algorithm(Result<(), Error>),
    Skipped,
}

impl<T, W> MutOp<T, W>
where
    T: Clone + Eq + Hash,
    W: Weight,
{
    pub fn apply(self, graph: &mut Graph<T, W>) -> MutOpResult<T, W> {
        let n = graph.vertex_count();
        let value_at = |graph: &Graph<T, W>, index: Index| {
            index
                .get(n)
                .map(|i| graph[VertexId::new(i)].value().clone())
        };

        match self {
            MutOp::AddVertex(value) => MutOpResult::AddVertex(graph.add_vertex(value)),
            MutOp::RemoveVertex(index) => match value_at(&*graph, index) {
                Some(value) => MutOpResult::RemoveVertex(graph.remove_vertex(&value)),
                None => MutOpResult::Skipped,
            },
            MutOp::AddEdge(src, dst, weight) => {
                match (value_at(&*graph, src), value_at(&*graph, dst)) {
                    (Some(src), Some(dst)) => {
                        MutOpResult::AddEdge(graph.add_edge(&src, &dst, weight))
                    }
                    _ => MutOpResult::Skipped,
                }
            }
            MutOp::RemoveEdge(src, dst) => match (value_at(&*graph, src), value_at(&*graph, dst)) {
                (Some(src), Some(dst)) => MutOpResult::RemoveEdge(graph.remove_edge(&src, &dst)),
                _ => MutOpResult::Skipped,
            },
            MutOp::AddEdgeAbsent(src, dst, weight) => match value_at(&*graph, src) {
                // The destination might exist by chance, the result is then
                // the same as for `AddEdge`.
                Some(src) => MutOpResult::AddEdge(graph.add_edge(&src, &dst, weight)),
                None => MutOpResult::Skipped,
            },
            MutOp::Bfs(index) => match value_at(&*graph, index) {
                Some(source) => MutOpResult::Algorithm(graph.bfs(&source)),
                None => MutOpResult::Skipped,
            },
            MutOp::Dfs(index) => match value_at(&*graph, index) {
                Some(source) => MutOpResult::Algorithm(graph.dfs(&source)),
                None => MutOpResult::Skipped,
            },
            MutOp::Dijkstra(index) => match value_at(&*graph, index) {
                Some(source) => MutOpResult::Algorithm(graph.dijkstra(&source).map(|_| ())),
                None => MutOpResult::Skipped,
            },
            MutOp::FloydWarshall => {
                graph.floyd_warshall();
                MutOpResult::Algorithm(Ok(()))
            }
        }
    }
}

impl<T, W> MutOp<T, W> {
    pub fn map_weight<U, F>(self, f: F) -> MutOp<T, U>
    where
        F: FnOnce(W) -> U,
    {
        match self {
            MutOp::AddVertex(value) => MutOp::AddVertex(value),
            MutOp::RemoveVertex(index) => MutOp::RemoveVertex(index),
            MutOp::AddEdge(src, dst, weight) => MutOp::AddEdge(src, dst, f(weight)),
            MutOp::RemoveEdge(src, dst) => MutOp::RemoveEdge(src, dst),
            MutOp::AddEdgeAbsent(src, dst, weight) => MutOp::AddEdgeAbsent(src, dst, f(weight)),
            MutOp::Bfs(index) => MutOp::Bfs(index),
            MutOp::Dfs(index) => MutOp::Dfs(index),
            MutOp::Dijkstra(index) => MutOp::Dijkstra(index),
            MutOp::FloydWarshall => MutOp::FloydWarshall,
        }
    }
}

pub struct MutOpsSeq<T, W>(pub Vec<MutOp<T, W>>);

impl<'a, T, W> Arbitrary<'a> for MutOpsSeq<T, W>
where
    T: Arbitrary<'a>,
    W: Arbitrary<'a>,
{
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Vec::arbitrary(u).map(MutOpsSeq)
    }

    fn arbitrary_take_rest(u: arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Vec::arbitrary_take_rest(u).map(MutOpsSeq)
    }
}

impl<T, W> IntoIterator for MutOpsSeq<T, W> {
    type Item = MutOp<T, W>;
    type IntoIter = std::vec::IntoIter<MutOp<T, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: fmt::Debug, W: fmt::Debug> fmt::Debug for MutOpsSeq<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")
    }
}
