//! Breadth-first search on grids with dense, reusable state.

use wavefront_core::{Grid, Point, Range};

use crate::frontier::{Flow, Frontier, OnDequeue, Outcome};
use crate::marks::DenseMarks;
use crate::traits::Adjacency;

/// A position with its BFS distance, returned from [`GridSearch::distance_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: usize,
}

/// Sentinel for "not reached" in the distance map and component labels.
const NONE: usize = usize::MAX;

/// Breadth-first searcher over the cells of a grid rectangle.
///
/// `GridSearch` owns its visited/parent arrays, distance map and component
/// labels, all addressed by flat cell index, so repeated queries on grids
/// of the same size do not reallocate. Cells outside its range are never
/// visited.
///
/// Methods take any [`Adjacency`] over [`Point`]s: a [`Grid`] (4-connected)
/// or a [`GridPather`](crate::GridPather) with a chosen move set.
#[derive(Debug, Clone)]
pub struct GridSearch {
    frontier: Frontier<Point, DenseMarks>,
    dist_map: Vec<usize>,
    dist_results: Vec<PathNode>,
    cc_labels: Vec<usize>,
}

impl GridSearch {
    /// Create a searcher for the cells of `rng`.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            frontier: Frontier::new(DenseMarks::new(rng)),
            dist_map: vec![NONE; len],
            dist_results: Vec::new(),
            cc_labels: vec![NONE; len],
        }
    }

    /// Create a searcher covering `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.bounds())
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.frontier.marks().range()
    }

    /// Replace the searched rectangle. Previous distance maps and labels
    /// are discarded.
    pub fn set_range(&mut self, rng: Range) {
        self.frontier.marks_mut().set_range(rng);
        let len = rng.len();
        self.dist_map.clear();
        self.dist_map.resize(len, NONE);
        self.dist_results.clear();
        self.cc_labels.clear();
        self.cc_labels.resize(len, NONE);
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.range().index(p)
    }

    /// A shortest path from `from` to `to`, both included.
    ///
    /// Returns `None` if either endpoint is out of bounds or blocked, or if
    /// `to` cannot be reached. `from == to` on a passable cell gives a
    /// single-cell path.
    pub fn path<P>(&mut self, pather: &P, from: Point, to: Point) -> Option<Vec<Point>>
    where
        P: Adjacency<Vertex = Point>,
    {
        if self.idx(from).is_none() || self.idx(to).is_none() {
            log::debug!("grid path: {from} or {to} outside {}", self.range());
            return None;
        }
        if !pather.contains(&from) || !pather.contains(&to) {
            log::debug!("grid path: {from} or {to} is blocked");
            return None;
        }
        if from == to {
            return Some(vec![from]);
        }

        self.frontier.reset();
        let outcome = self.frontier.run(
            pather,
            from,
            &mut OnDequeue(|p: &Point, _: usize| {
                if *p == to { Flow::Stop } else { Flow::Continue }
            }),
        );
        match outcome {
            Outcome::Stopped => self.frontier.path_to(&to),
            Outcome::Exhausted => None,
        }
    }

    /// Compute a multi-source breadth-first distance map.
    ///
    /// Each step has cost 1 and cells farther than `max_dist` are not
    /// reached. Returns every reached cell in discovery order; query single
    /// cells afterwards with [`distance_at`](Self::distance_at).
    pub fn distance_map<P>(&mut self, pather: &P, sources: &[Point], max_dist: usize) -> &[PathNode]
    where
        P: Adjacency<Vertex = Point>,
    {
        self.dist_map.fill(NONE);
        self.dist_results.clear();
        self.frontier.reset();

        let rng = self.range();
        let dist_map = &mut self.dist_map;
        let results = &mut self.dist_results;
        self.frontier.run_many(
            pather,
            sources.iter().copied(),
            &mut OnDequeue(|p: &Point, depth: usize| {
                if let Some(i) = rng.index(*p) {
                    dist_map[i] = depth;
                }
                results.push(PathNode {
                    pos: *p,
                    cost: depth,
                });
                if depth >= max_dist { Flow::Prune } else { Flow::Continue }
            }),
        );
        &self.dist_results
    }

    /// Distance of `p` in the last [`distance_map`](Self::distance_map), or
    /// `None` if it was not reached or is outside the range.
    pub fn distance_at(&self, p: Point) -> Option<usize> {
        let i = self.idx(p)?;
        match self.dist_map[i] {
            NONE => None,
            d => Some(d),
        }
    }

    /// Label every passable cell with a connected-component id.
    ///
    /// Ids are assigned from 0 in row-major order of each component's first
    /// cell. Returns the number of components. Query labels afterwards with
    /// [`component_at`](Self::component_at).
    pub fn label_components<P>(&mut self, pather: &P) -> usize
    where
        P: Adjacency<Vertex = Point>,
    {
        self.cc_labels.fill(NONE);
        self.frontier.reset();

        let rng = self.range();
        let mut label = 0;
        for seed in rng.iter() {
            if !pather.contains(&seed) {
                continue;
            }
            let Some(si) = rng.index(seed) else {
                continue;
            };
            if self.cc_labels[si] != NONE {
                continue;
            }
            let labels = &mut self.cc_labels;
            self.frontier.run(
                pather,
                seed,
                &mut OnDequeue(|p: &Point, _: usize| {
                    if let Some(i) = rng.index(*p) {
                        labels[i] = label;
                    }
                    Flow::Continue
                }),
            );
            label += 1;
        }
        log::debug!("grid components: {label} over {rng}");
        label
    }

    /// Component id of `p` from the last
    /// [`label_components`](Self::label_components), or `None` if `p` is
    /// blocked, outside the range, or not labelled yet.
    pub fn component_at(&self, p: Point) -> Option<usize> {
        let i = self.idx(p)?;
        match self.cc_labels[i] {
            NONE => None,
            l => Some(l),
        }
    }

    /// Every cell connected to `p`, including `p`, in discovery order.
    ///
    /// Empty if `p` is blocked or outside the range.
    pub fn flood<P>(&mut self, pather: &P, p: Point) -> Vec<Point>
    where
        P: Adjacency<Vertex = Point>,
    {
        let mut cells = Vec::new();
        self.frontier.reset();
        self.frontier.run(
            pather,
            p,
            &mut OnDequeue(|q: &Point, _: usize| {
                cells.push(*q);
                Flow::Continue
            }),
        );
        cells
    }
}

/// One-shot shortest path on a 4-connected grid. See [`GridSearch::path`].
pub fn grid_path(grid: &Grid, from: Point, to: Point) -> Option<Vec<Point>> {
    GridSearch::for_grid(grid).path(grid, from, to)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
