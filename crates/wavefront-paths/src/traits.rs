use std::hash::Hash;

use wavefront_core::{Graph, Grid, Point};

use crate::neighbors::Moves;

/// Neighbour enumeration over a vertex space. This is all the traversal
/// engine needs to know about a graph.
pub trait Adjacency {
    /// Vertex key type.
    type Vertex: Clone + Eq;

    /// Whether `v` is a vertex of this space. Traversals starting outside
    /// the space produce no result.
    fn contains(&self, v: &Self::Vertex) -> bool;

    /// Append neighbours of `v` into `buf`, in the order the traversal should
    /// visit them. The caller clears `buf` before calling.
    fn neighbors(&self, v: &Self::Vertex, buf: &mut Vec<Self::Vertex>);
}

impl<V: Clone + Eq + Hash> Adjacency for Graph<V> {
    type Vertex = V;

    #[inline]
    fn contains(&self, v: &V) -> bool {
        self.has_vertex(v)
    }

    #[inline]
    fn neighbors(&self, v: &V, buf: &mut Vec<V>) {
        buf.extend_from_slice(Graph::neighbors(self, v));
    }
}

/// A grid on its own is 4-connected: a cell's neighbours are the passable
/// cells directly up, down, left and right of it.
impl Adjacency for Grid {
    type Vertex = Point;

    #[inline]
    fn contains(&self, p: &Point) -> bool {
        self.is_passable(*p)
    }

    #[inline]
    fn neighbors(&self, p: &Point, buf: &mut Vec<Point>) {
        Moves::Cardinal.push_neighbors(*p, |n| self.is_passable(n), buf);
    }
}

/// A grid viewed with a configurable move set.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    pub grid: &'a Grid,
    pub moves: Moves,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid, moves: Moves) -> Self {
        Self { grid, moves }
    }
}

impl Adjacency for GridPather<'_> {
    type Vertex = Point;

    #[inline]
    fn contains(&self, p: &Point) -> bool {
        self.grid.is_passable(*p)
    }

    #[inline]
    fn neighbors(&self, p: &Point, buf: &mut Vec<Point>) {
        self.moves
            .push_neighbors(*p, |n| self.grid.is_passable(n), buf);
    }
}
