use fastrand::Rng;
use petgraph::prelude::*;
use rustc_hash::FxHashSet;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Edge list of a random graph on vertices `0..vertex_count`.
///
/// The graph contains the path `0 -> 1 -> ... -> vertex_count - 1`, so that
/// every vertex is reachable from vertex 0. The remaining edges have random
/// endpoints in both directions, until the average out-degree reaches
/// `degree`. There are no self-loops and no parallel edges.
pub struct RandomGraph {
    directed: bool,
    vertex_count: usize,
    edges: Vec<(usize, usize, u32)>,
}

impl RandomGraph {
    pub fn new(directed: bool, vertex_count: usize, degree: usize, rng: &mut Rng) -> Self {
        let max_edges = if directed {
            vertex_count * vertex_count.saturating_sub(1)
        } else {
            vertex_count * vertex_count.saturating_sub(1) / 2
        };
        let edge_count = (vertex_count * degree).min(max_edges);

        let key = |u: usize, v: usize| if directed { (u, v) } else { (u.min(v), u.max(v)) };

        let mut seen = FxHashSet::default();
        let mut edges = Vec::with_capacity(edge_count);

        for u in 1..vertex_count {
            seen.insert(key(u - 1, u));
            edges.push((u - 1, u, rng.u32(1..100)));
        }

        while edges.len() < edge_count {
            let u = rng.usize(0..vertex_count);
            let v = rng.usize(0..vertex_count);

            if u != v && seen.insert(key(u, v)) {
                edges.push((u, v, rng.u32(1..100)));
            }
        }

        Self {
            directed,
            vertex_count,
            edges,
        }
    }

    pub fn graphwalk(&self) -> graphwalk::Graph<usize, u32> {
        let mut graph = graphwalk::Graph::with_capacity(self.directed, self.vertex_count);

        for value in 0..self.vertex_count {
            graph.add_vertex(value).unwrap();
        }

        for &(u, v, weight) in self.edges.iter() {
            graph.add_edge(&u, &v, weight).unwrap();
        }

        graph
    }

    pub fn petgraph<Ty: petgraph::EdgeType>(&self) -> petgraph::Graph<usize, u32, Ty> {
        assert_eq!(self.directed, Ty::is_directed());

        let mut graph = petgraph::Graph::with_capacity(self.vertex_count, self.edges.len());

        for value in 0..self.vertex_count {
            graph.add_node(value);
        }

        for &(u, v, weight) in self.edges.iter() {
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), weight);
        }

        graph
    }
}

pub fn random_graph(directed: bool, vertex_count: usize, degree: usize) -> RandomGraph {
    RandomGraph::new(directed, vertex_count, degree, &mut Rng::with_seed(RANDOM_SEED))
}
