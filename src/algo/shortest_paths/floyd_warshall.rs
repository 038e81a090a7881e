use crate::core::{
    weight::{add_dist, improves, Weight},
    Vertex, VertexId,
};

use super::AllPairsPredecessors;

pub fn floyd_warshall<T, W: Weight>(vertices: &[Vertex<T, W>]) -> AllPairsPredecessors {
    let n = vertices.len();
    log::debug!("floyd-warshall over {n} vertices");

    let v = VertexId::new;

    // Row-major n x n matrix, `None` stands for infinity.
    let mut dist: Vec<Option<W>> = vec![None; n * n];
    let mut pred = AllPairsPredecessors::new(n);

    for i in 0..n {
        dist[i * n + i] = Some(W::zero());
    }

    for (i, vertex) in vertices.iter().enumerate() {
        for (j, weight) in vertex.adjacent() {
            let j = j.as_usize();

            // The path from a vertex to itself is always empty.
            if i == j {
                continue;
            }

            dist[i * n + j] = Some(weight);
            pred.set(v(i), v(j), Some(v(i)));
        }
    }

    for k in 0..n {
        for i in 0..n {
            let dist_ik = dist[i * n + k];

            // Skip if there is no path from i to k, any sum would be infinity
            // anyway.
            if dist_ik.is_none() {
                continue;
            }

            for j in 0..n {
                let candidate = add_dist(dist_ik, dist[k * n + j]);

                if improves(candidate, dist[i * n + j]) {
                    dist[i * n + j] = candidate;
                    // The last hop is the same as on the path from k to j.
                    pred.set(v(i), v(j), pred.get(v(k), v(j)));
                }
            }
        }
    }

    log::debug!("floyd-warshall over {n} vertices finished");
    pred
}
