use crate::core::{Color, Vertex, VertexId};

/// Depth-first search from a single source, assigning discovery and finishing
/// times.
///
/// Implemented with an explicit stack instead of recursion so that deep
/// graphs do not exhaust the call stack. Each stack frame remembers the
/// position in the adjacency of its vertex, which yields the same visiting
/// order and times as the recursive formulation.
pub fn dfs<T, W: Copy>(vertices: &mut [Vertex<T, W>], source: VertexId) {
    log::debug!("dfs from {source:?} over {} vertices", vertices.len());

    for vertex in vertices.iter_mut() {
        vertex.color = Color::White;
        vertex.parent = None;
        vertex.discovery_time = None;
        vertex.finishing_time = None;
    }

    let mut time = 0;
    let mut stack = Vec::new();

    discover(&mut vertices[source.as_usize()], &mut time);
    stack.push((source, 0));

    while let Some((vertex, next_index)) = stack.last_mut() {
        let vertex = *vertex;
        let adjacent = &vertices[vertex.as_usize()].adjacent;

        let next = adjacent[*next_index..]
            .iter()
            .position(|(id, _)| vertices[id.as_usize()].color == Color::White)
            .map(|offset| *next_index + offset);

        match next {
            Some(index) => {
                let (next, _) = adjacent[index];
                *next_index = index + 1;

                let neighbor = &mut vertices[next.as_usize()];
                neighbor.parent = Some(vertex);
                discover(neighbor, &mut time);
                stack.push((next, 0));
            }
            None => {
                stack.pop();

                let vertex = &mut vertices[vertex.as_usize()];
                vertex.color = Color::Black;
                time += 1;
                vertex.finishing_time = Some(time);
            }
        }
    }

    log::debug!("dfs from {source:?} finished at time {time}");
}

fn discover<T, W>(vertex: &mut Vertex<T, W>, time: &mut usize) {
    *time += 1;
    vertex.discovery_time = Some(*time);
    vertex.color = Color::Gray;
}
