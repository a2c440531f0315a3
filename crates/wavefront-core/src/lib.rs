//! **wavefront-core**: containers explored by the *wavefront* traversal
//! engine.
//!
//! This crate provides lattice geometry, a passability grid (an implicit
//! graph), and an explicit adjacency-list graph. None of these types know
//! how to traverse themselves; see `wavefront-paths` for that.

pub mod geom;
pub mod graph;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use graph::Graph;
pub use grid::{Grid, GridError};
