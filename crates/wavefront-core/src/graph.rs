//! Adjacency-list graph over generic vertex keys.
//!
//! [`Graph`] only stores vertices and edges. Traversal lives in the
//! `wavefront-paths` crate.

use std::collections::HashMap;
use std::hash::Hash;

/// An adjacency-list graph, directed or undirected.
///
/// Neighbour lists keep insertion order and are not deduplicated, so
/// parallel edges are allowed. Vertices are enumerated in the order they
/// were first referenced.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    slots: HashMap<V, usize>,
    vertices: Vec<V>,
    adjacency: Vec<Vec<V>>,
    directed: bool,
}

impl<V: Clone + Eq + Hash> Default for Graph<V> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V: Clone + Eq + Hash> Graph<V> {
    /// Create an empty graph. When `directed` is false every edge is stored
    /// in both directions.
    pub fn new(directed: bool) -> Self {
        Self {
            slots: HashMap::new(),
            vertices: Vec::new(),
            adjacency: Vec::new(),
            directed,
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Whether edges are one-way.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    fn slot(&mut self, v: V) -> usize {
        if let Some(&i) = self.slots.get(&v) {
            return i;
        }
        let i = self.vertices.len();
        self.slots.insert(v.clone(), i);
        self.vertices.push(v);
        self.adjacency.push(Vec::new());
        i
    }

    /// Ensure `v` is present. Adding an existing vertex does nothing.
    pub fn add_vertex(&mut self, v: V) {
        self.slot(v);
    }

    /// Append `to` to the neighbours of `from`, and `from` to the neighbours
    /// of `to` if the graph is undirected.
    ///
    /// Both endpoints are created if absent.
    pub fn add_edge(&mut self, from: V, to: V) {
        let fi = self.slot(from.clone());
        let ti = self.slot(to.clone());
        self.adjacency[fi].push(to);
        if !self.directed {
            self.adjacency[ti].push(from);
        }
    }

    /// Neighbours of `v` in insertion order. Unknown vertices have none.
    #[inline]
    pub fn neighbors(&self, v: &V) -> &[V] {
        match self.slots.get(v) {
            Some(&i) => &self.adjacency[i],
            None => &[],
        }
    }

    /// Whether `v` has been added, directly or through an edge.
    #[inline]
    pub fn has_vertex(&self, v: &V) -> bool {
        self.slots.contains_key(v)
    }

    /// All vertices in first-reference order.
    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored adjacency entries. An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Whether the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over `(vertex, neighbours)` in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
        self.vertices
            .iter()
            .zip(self.adjacency.iter().map(Vec::as_slice))
    }
}

impl<V: Clone + Eq + Hash> Extend<(V, V)> for Graph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }
}

/// Collects edges into an undirected graph.
impl<V: Clone + Eq + Hash> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut g = Self::undirected();
        g.extend(iter);
        g
    }
}
