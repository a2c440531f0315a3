//! Breadth-first queries over any [`Adjacency`] with hashable vertices.
//!
//! Every query is total: unknown vertices, unreachable targets and
//! disconnected graphs give an empty `Vec` or `None`, never a panic.

use std::hash::Hash;

use wavefront_core::Graph;

use crate::frontier::{Flow, Frontier, OnDequeue, OnDiscover, Outcome};
use crate::marks::{HashMarks, Marks};
use crate::traits::Adjacency;

fn frontier<V: Clone + Eq + Hash>() -> Frontier<V, HashMarks<V>> {
    Frontier::new(HashMarks::new())
}

/// Vertices reachable from `start`, in breadth-first discovery order.
///
/// Empty if `start` is not in `space`.
pub fn traverse<A>(space: &A, start: A::Vertex) -> Vec<A::Vertex>
where
    A: Adjacency,
    A::Vertex: Hash,
{
    if !space.contains(&start) {
        log::debug!("traverse: start vertex not in graph");
        return Vec::new();
    }
    let mut order = Vec::new();
    frontier().run(
        space,
        start,
        &mut OnDequeue(|v: &A::Vertex, _: usize| {
            order.push(v.clone());
            Flow::Continue
        }),
    );
    order
}

/// A shortest path from `start` to `target`, both included.
///
/// Returns `Some(vec![start])` when `start == target`, and `None` when
/// either endpoint is unknown or `target` is unreachable.
pub fn shortest_path<A>(space: &A, start: A::Vertex, target: A::Vertex) -> Option<Vec<A::Vertex>>
where
    A: Adjacency,
    A::Vertex: Hash,
{
    if !space.contains(&start) || !space.contains(&target) {
        log::debug!("shortest_path: endpoint not in graph");
        return None;
    }
    if start == target {
        return Some(vec![start]);
    }
    let mut f = frontier();
    let outcome = f.run(
        space,
        start,
        &mut OnDequeue(|v: &A::Vertex, _: usize| {
            if *v == target { Flow::Stop } else { Flow::Continue }
        }),
    );
    match outcome {
        Outcome::Stopped => f.path_to(&target),
        Outcome::Exhausted => None,
    }
}

/// Number of edges on a shortest path from `start` to `target`.
///
/// The search ends as soon as `target` is discovered, without expanding it.
/// Returns `Some(0)` when `start == target`, and `None` when either endpoint
/// is unknown or `target` is unreachable.
pub fn shortest_distance<A>(space: &A, start: A::Vertex, target: A::Vertex) -> Option<usize>
where
    A: Adjacency,
    A::Vertex: Hash,
{
    if !space.contains(&start) || !space.contains(&target) {
        log::debug!("shortest_distance: endpoint not in graph");
        return None;
    }
    if start == target {
        return Some(0);
    }
    let mut found = None;
    frontier().run(
        space,
        start,
        &mut OnDiscover(|v: &A::Vertex, _: &A::Vertex, depth: usize| {
            if *v == target {
                found = Some(depth);
                Flow::Stop
            } else {
                Flow::Continue
            }
        }),
    );
    found
}

/// Vertices exactly `distance` edges away from `start`, in discovery order.
///
/// Nothing beyond that level is expanded. `distance == 0` gives
/// `vec![start]`; an unknown `start` gives an empty `Vec`.
pub fn vertices_at_distance<A>(space: &A, start: A::Vertex, distance: usize) -> Vec<A::Vertex>
where
    A: Adjacency,
    A::Vertex: Hash,
{
    if !space.contains(&start) {
        log::debug!("vertices_at_distance: start vertex not in graph");
        return Vec::new();
    }
    if distance == 0 {
        return vec![start];
    }
    let mut level = Vec::new();
    frontier().run(
        space,
        start,
        &mut OnDequeue(|v: &A::Vertex, depth: usize| {
            if depth == distance {
                level.push(v.clone());
                Flow::Prune
            } else {
                Flow::Continue
            }
        }),
    );
    level
}

/// Every level set around `start`: `levels[d]` holds the vertices at
/// distance `d`, in discovery order.
///
/// Empty if `start` is unknown; otherwise `levels[0] == vec![start]`.
pub fn levels<A>(space: &A, start: A::Vertex) -> Vec<Vec<A::Vertex>>
where
    A: Adjacency,
    A::Vertex: Hash,
{
    let mut levels: Vec<Vec<A::Vertex>> = Vec::new();
    if !space.contains(&start) {
        log::debug!("levels: start vertex not in graph");
        return levels;
    }
    frontier().run(
        space,
        start,
        &mut OnDequeue(|v: &A::Vertex, depth: usize| {
            if levels.len() <= depth {
                levels.push(Vec::new());
            }
            levels[depth].push(v.clone());
            Flow::Continue
        }),
    );
    levels
}

/// Every vertex reachable from `start` paired with its distance, in
/// discovery order.
pub fn distances<A>(space: &A, start: A::Vertex) -> Vec<(A::Vertex, usize)>
where
    A: Adjacency,
    A::Vertex: Hash,
{
    if !space.contains(&start) {
        log::debug!("distances: start vertex not in graph");
        return Vec::new();
    }
    let mut out = Vec::new();
    frontier().run(
        space,
        start,
        &mut OnDequeue(|v: &A::Vertex, depth: usize| {
            out.push((v.clone(), depth));
            Flow::Continue
        }),
    );
    out
}

/// Largest distance from `start` to any vertex it reaches, or `None` if
/// `start` is unknown.
pub fn eccentricity<A>(space: &A, start: A::Vertex) -> Option<usize>
where
    A: Adjacency,
    A::Vertex: Hash,
{
    if !space.contains(&start) {
        return None;
    }
    let mut max = 0usize;
    frontier().run(
        space,
        start,
        &mut OnDequeue(|_: &A::Vertex, depth: usize| {
            max = max.max(depth);
            Flow::Continue
        }),
    );
    Some(max)
}

/// Whether a traversal from the first vertex reaches every vertex.
///
/// An empty graph is connected. For directed graphs this only checks
/// reachability from the first vertex.
pub fn is_connected<V: Clone + Eq + Hash>(graph: &Graph<V>) -> bool {
    match graph.vertices().first() {
        None => true,
        Some(first) => traverse(graph, first.clone()).len() == graph.vertex_count(),
    }
}

/// Split the vertices into connected components.
///
/// Vertices are taken in enumeration order; each one not yet assigned seeds
/// a traversal, and the vertices it reaches that are still unassigned form
/// one component, in discovery order. The components always partition
/// [`Graph::vertices`]. On directed graphs a component is the set of
/// still-unassigned vertices reachable from its seed.
pub fn connected_components<V: Clone + Eq + Hash>(graph: &Graph<V>) -> Vec<Vec<V>> {
    let mut components = Vec::new();
    let mut f: Frontier<V, HashMarks<V>> = frontier();
    for seed in graph.vertices() {
        if f.marks().is_discovered(seed) {
            continue;
        }
        let mut component = Vec::new();
        f.run(
            graph,
            seed.clone(),
            &mut OnDequeue(|v: &V, _: usize| {
                component.push(v.clone());
                Flow::Continue
            }),
        );
        components.push(component);
    }
    log::debug!(
        "connected_components: {} components over {} vertices",
        components.len(),
        graph.vertex_count()
    );
    components
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn diamond() -> Graph<i32> {
        [(1, 2), (2, 3), (1, 4), (4, 3)].into_iter().collect()
    }

    fn random_graph(n: i32, p: f64, directed: bool) -> Graph<i32> {
        let mut g = Graph::new(directed);
        for u in 0..n {
            g.add_vertex(u);
            for v in 0..n {
                if u != v && rand::random_bool(p) {
                    g.add_edge(u, v);
                }
            }
        }
        g
    }

    #[test]
    fn diamond_shortest_path() {
        let g = diamond();
        let path = shortest_path(&g, 1, 3).unwrap();
        assert_eq!(path, vec![1, 2, 3]);
        assert_eq!(shortest_distance(&g, 1, 3), Some(2));
    }

    #[test]
    fn unknown_start_gives_no_result() {
        let g = diamond();
        assert!(traverse(&g, 99).is_empty());
        assert_eq!(shortest_distance(&g, 99, 1), None);
        assert_eq!(shortest_distance(&g, 1, 99), None);
        assert_eq!(shortest_path(&g, 99, 1), None);
        assert!(vertices_at_distance(&g, 99, 1).is_empty());
        assert!(levels(&g, 99).is_empty());
        assert!(distances(&g, 99).is_empty());
        assert_eq!(eccentricity(&g, 99), None);
    }

    #[test]
    fn start_equals_target() {
        let g = diamond();
        assert_eq!(shortest_path(&g, 2, 2), Some(vec![2]));
        assert_eq!(shortest_distance(&g, 2, 2), Some(0));
        assert_eq!(vertices_at_distance(&g, 2, 0), vec![2]);
    }

    #[test]
    fn isolated_vertex_is_its_own_world() {
        let mut g = diamond();
        g.add_vertex(7);
        assert_eq!(traverse(&g, 7), vec![7]);
        assert_eq!(shortest_path(&g, 1, 7), None);
        assert_eq!(shortest_distance(&g, 1, 7), None);
        assert_eq!(shortest_path(&g, 7, 7), Some(vec![7]));
    }

    #[test]
    fn traversal_order_follows_insertion() {
        let mut g = Graph::undirected();
        g.add_edge(0, 3);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 4);
        g.add_edge(3, 5);
        assert_eq!(traverse(&g, 0), vec![0, 3, 1, 2, 5, 4]);
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut g = Graph::directed();
        g.add_edge('a', 'b');
        g.add_edge('b', 'c');
        assert_eq!(traverse(&g, 'a'), vec!['a', 'b', 'c']);
        assert_eq!(traverse(&g, 'c'), vec!['c']);
        assert_eq!(shortest_distance(&g, 'a', 'c'), Some(2));
        assert_eq!(shortest_distance(&g, 'c', 'a'), None);
        assert!(is_connected(&g));
        g.add_edge('d', 'c');
        assert!(!is_connected(&g));
    }

    #[test]
    fn self_loop_distance() {
        let mut g = Graph::directed();
        g.add_edge(1, 1);
        g.add_edge(1, 2);
        assert_eq!(shortest_distance(&g, 1, 2), Some(1));
        assert_eq!(traverse(&g, 1), vec![1, 2]);
    }

    #[test]
    fn parallel_edges_are_harmless() {
        let mut g = Graph::undirected();
        g.add_edge(1, 2);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        assert_eq!(traverse(&g, 1), vec![1, 2, 3]);
        assert_eq!(shortest_path(&g, 1, 3), Some(vec![1, 2, 3]));
    }

    #[test]
    fn level_sets() {
        let g = diamond();
        assert_eq!(vertices_at_distance(&g, 1, 1), vec![2, 4]);
        assert_eq!(vertices_at_distance(&g, 1, 2), vec![3]);
        assert!(vertices_at_distance(&g, 1, 3).is_empty());
        assert_eq!(levels(&g, 1), vec![vec![1], vec![2, 4], vec![3]]);
        assert_eq!(distances(&g, 1), vec![(1, 0), (2, 1), (4, 1), (3, 2)]);
        assert_eq!(eccentricity(&g, 1), Some(2));
    }

    #[test]
    fn components_of_disjoint_pieces() {
        let mut g = Graph::undirected();
        g.add_edge(1, 2);
        g.add_edge(3, 4);
        g.add_edge(4, 5);
        g.add_vertex(6);
        assert_eq!(
            connected_components(&g),
            vec![vec![1, 2], vec![3, 4, 5], vec![6]]
        );
        assert!(!is_connected(&g));
    }

    #[test]
    fn empty_graph() {
        let g: Graph<i32> = Graph::undirected();
        assert!(is_connected(&g));
        assert!(connected_components(&g).is_empty());
    }

    #[test]
    fn directed_components_still_partition() {
        let mut g = Graph::directed();
        g.add_vertex(2);
        g.add_edge(1, 2);
        let comps = connected_components(&g);
        assert_eq!(comps, vec![vec![2], vec![1]]);
    }

    #[test]
    fn distance_matches_path_length() {
        for _ in 0..20 {
            let g = random_graph(12, 0.15, rand::random_bool(0.5));
            for &s in g.vertices() {
                for &t in g.vertices() {
                    let d = shortest_distance(&g, s, t);
                    let p = shortest_path(&g, s, t);
                    assert_eq!(d, p.as_ref().map(|p| p.len() - 1), "{s} -> {t}");
                    if let Some(p) = p {
                        assert_eq!(p.first(), Some(&s));
                        assert_eq!(p.last(), Some(&t));
                        for w in p.windows(2) {
                            assert!(g.neighbors(&w[0]).contains(&w[1]));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn traversal_is_union_of_levels() {
        for _ in 0..20 {
            let g = random_graph(15, 0.1, false);
            for &s in g.vertices() {
                let order = traverse(&g, s);
                let unique: HashSet<_> = order.iter().copied().collect();
                assert_eq!(unique.len(), order.len());

                let ecc = eccentricity(&g, s).unwrap();
                let mut union = Vec::new();
                for d in 0..=ecc {
                    let level = vertices_at_distance(&g, s, d);
                    assert!(!level.is_empty());
                    union.extend(level);
                }
                assert!(vertices_at_distance(&g, s, ecc + 1).is_empty());
                assert_eq!(union, order);
            }
        }
    }

    #[test]
    fn components_partition_vertices() {
        for _ in 0..20 {
            let g = random_graph(20, 0.05, rand::random_bool(0.5));
            let comps = connected_components(&g);
            let mut seen = HashSet::new();
            for c in &comps {
                assert!(!c.is_empty());
                for v in c {
                    assert!(seen.insert(*v), "{v} in two components");
                }
            }
            assert_eq!(seen.len(), g.vertex_count());
            if !g.is_directed() {
                assert_eq!(is_connected(&g), comps.len() == 1);
            }
        }
    }

    #[test]
    fn frontier_discovers_whole_component() {
        let g = diamond();
        let mut f = frontier();
        f.run(&g, 1, &mut ());
        assert!(g.vertices().iter().all(|v| f.marks().is_discovered(v)));
    }
}
