//! Walk through the breadth-first queries on small fixed inputs.
//!
//! Run: cargo run --bin tour

use wavefront_core::{Graph, Grid, Point};
use wavefront_demos::init_logging;
use wavefront_paths::display::{AdjacencyDump, PathOverlay, format_path, format_traversal};
use wavefront_paths::{
    connected_components, grid_path, is_connected, levels, shortest_distance, shortest_path,
    traverse, vertices_at_distance,
};

fn show_distance(label: &str, d: Option<usize>) {
    match d {
        Some(d) => println!("{label}: {d}"),
        None => println!("{label}: unreachable"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = init_logging()?;

    println!("== Undirected graph");
    let mut g = Graph::undirected();
    g.extend([(1, 2), (2, 3), (1, 4), (4, 3), (3, 5)]);
    println!("{}", AdjacencyDump(&g));
    println!("{}", format_traversal("BFS Traversal from 1", &traverse(&g, 1)));
    println!("{}", format_path("Shortest path 1 -> 5", shortest_path(&g, 1, 5).as_deref()));
    show_distance("Shortest distance 1 -> 5", shortest_distance(&g, 1, 5));
    println!("{}", format_traversal("At distance 2 from 1", &vertices_at_distance(&g, 1, 2)));
    for (d, level) in levels(&g, 1).iter().enumerate() {
        println!("{}", format_traversal(&format!("Level {d}"), level));
    }
    println!("Connected: {}", is_connected(&g));

    println!();
    println!("== Missing vertex");
    println!("{}", format_traversal("BFS Traversal from 42", &traverse(&g, 42)));
    show_distance("Shortest distance 42 -> 1", shortest_distance(&g, 42, 1));

    println!();
    println!("== Components");
    g.add_edge(6, 7);
    g.add_vertex(8);
    for (i, c) in connected_components(&g).iter().enumerate() {
        println!("{}", format_traversal(&format!("Component {i}"), c));
    }
    println!("Connected: {}", is_connected(&g));

    println!();
    println!("== Directed graph");
    let mut dg = Graph::directed();
    dg.extend([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);
    println!("{}", AdjacencyDump(&dg));
    println!("{}", format_path("Path d -> a", shortest_path(&dg, "d", "a").as_deref()));
    println!("{}", format_path("Path a -> d", shortest_path(&dg, "a", "d").as_deref()));

    println!();
    println!("== Grid");
    let grid = Grid::from_rows(&[[0u8, 0, 0], [1, 1, 0], [0, 0, 0]])?;
    let path = grid_path(&grid, Point::new(0, 0), Point::new(2, 0));
    println!("{}", format_path("Grid path", path.as_deref()));
    if let Some(p) = &path {
        println!(
            "{}",
            PathOverlay {
                grid: &grid,
                path: p,
            }
        );
    }
    Ok(())
}
