use graphwalk::prelude::*;

fn value_of(graph: &Graph<i32>, id: Option<VertexId>) -> String {
    match id {
        Some(id) => graph[id].to_string(),
        None => "-".to_string(),
    }
}

fn fmt_option<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "inf".to_string(), |value| value.to_string())
}

fn main() -> Result<(), Error> {
    let mut graph = Graph::new_undirected();

    for value in 1..=5 {
        graph.add_vertex(value)?;
    }

    graph.extend_with_edges([
        (1, 2, 2),
        (1, 3, 4),
        (2, 4, 7),
        (3, 4, 3),
        (4, 5, 1),
        (1, 5, 20),
    ])?;

    graph.bfs(&1)?;

    println!("BFS:");
    for vertex in graph.vertices() {
        println!(
            "{} {:?} {} {}",
            vertex,
            vertex.color(),
            fmt_option(vertex.distance()),
            value_of(&graph, vertex.parent())
        );
    }

    println!();

    graph.dfs(&1)?;

    println!("DFS:");
    for vertex in graph.vertices() {
        println!(
            "{} {:?} {} {} {}",
            vertex,
            vertex.color(),
            fmt_option(vertex.discovery_time()),
            fmt_option(vertex.finishing_time()),
            value_of(&graph, vertex.parent())
        );
    }

    println!();

    let predecessors = graph.dijkstra(&1)?;

    println!("Dijkstra:");
    for (id, pred) in predecessors.iter() {
        println!(
            "vertex: {} prev: {} distance: {}",
            graph[id],
            value_of(&graph, pred),
            fmt_option(graph[id].distance())
        );
    }

    println!();

    let all_pairs = graph.floyd_warshall();

    println!("Floyd-Warshall:");
    for row in all_pairs.rows() {
        let row = row
            .iter()
            .map(|pred| value_of(&graph, *pred))
            .collect::<Vec<_>>();
        println!("{}", row.join(" "));
    }

    let from = VertexId::new(0);
    let to = VertexId::new(4);
    let path = std::iter::once(to)
        .chain(all_pairs.reconstruct(from, to))
        .map(|id| graph[id].to_string())
        .collect::<Vec<_>>();
    println!();
    println!("shortest path from {} to {}: {}", graph[from], graph[to], path.join(" <- "));

    Ok(())
}
