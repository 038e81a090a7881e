use std::collections::VecDeque;

use crate::core::{Color, Vertex, VertexId, Weight};

pub fn bfs<T, W: Weight>(vertices: &mut [Vertex<T, W>], source: VertexId) {
    log::debug!("bfs from {source:?} over {} vertices", vertices.len());

    for (i, vertex) in vertices.iter_mut().enumerate() {
        if i != source.as_usize() {
            vertex.color = Color::White;
            vertex.distance = None;
            vertex.parent = None;
        }
    }

    let root = &mut vertices[source.as_usize()];
    root.color = Color::Gray;
    root.distance = Some(W::zero());
    root.parent = None;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    let mut reached = 1usize;

    while let Some(vertex) = queue.pop_front() {
        // A hop count out of the range of `W` is infinite.
        let next_dist = vertices[vertex.as_usize()]
            .distance
            .and_then(|d| d.checked_add(W::one()));

        // Index-based loop, the neighbors are mutated while iterating.
        for k in 0..vertices[vertex.as_usize()].adjacent.len() {
            let (next, _) = vertices[vertex.as_usize()].adjacent[k];
            let neighbor = &mut vertices[next.as_usize()];

            if neighbor.color == Color::White {
                neighbor.color = Color::Gray;
                neighbor.distance = next_dist;
                neighbor.parent = Some(vertex);
                queue.push_back(next);
                reached += 1;
            }
        }

        vertices[vertex.as_usize()].color = Color::Black;
    }

    log::debug!("bfs from {source:?} reached {reached} vertices");
}
