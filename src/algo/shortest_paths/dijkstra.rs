use std::{cmp::Reverse, collections::BinaryHeap};

use fixedbitset::FixedBitSet;

use crate::core::{
    weight::{improves, Weight, Weighted},
    Vertex, VertexId,
};

use super::Predecessors;

pub fn dijkstra<T, W: Weight>(vertices: &mut [Vertex<T, W>], source: VertexId) -> Predecessors {
    log::debug!("dijkstra from {source:?} over {} vertices", vertices.len());

    for vertex in vertices.iter_mut() {
        vertex.distance = None;
    }
    vertices[source.as_usize()].distance = Some(W::zero());

    // Vertex ids are contiguous, so a bit set is enough for the finished set.
    let mut finished = FixedBitSet::with_capacity(vertices.len());
    let mut pred = vec![None; vertices.len()];
    let mut queue = BinaryHeap::new();

    // Only reached vertices are in the queue. Vertices with infinite distance
    // would be extracted last and could not improve anything.
    queue.push(Reverse(Weighted(source, W::zero())));

    while let Some(Reverse(Weighted(vertex, vertex_dist))) = queue.pop() {
        // Improved vertices are pushed again, outdated entries are skipped.
        if finished.put(vertex.as_usize()) {
            continue;
        }

        for k in 0..vertices[vertex.as_usize()].adjacent.len() {
            let (next, weight) = vertices[vertex.as_usize()].adjacent[k];

            if finished.contains(next.as_usize()) {
                continue;
            }

            // An overflowing distance is infinite and never improves.
            let Some(next_dist) = vertex_dist.checked_add(weight) else {
                continue;
            };
            let neighbor = &mut vertices[next.as_usize()];

            // Relaxation operation. If the distance is better than what we had
            // so far, update it.
            if improves(Some(next_dist), neighbor.distance) {
                neighbor.distance = Some(next_dist);
                pred[next.as_usize()] = Some(vertex);
                queue.push(Reverse(Weighted(next, next_dist)));
            }
        }
    }

    log::debug!(
        "dijkstra from {source:?} reached {} vertices",
        finished.count_ones(..)
    );

    Predecessors::new(source, pred)
}
