//! Breadth-first exploration of graphs and grids.
//!
//! Every search in this crate runs through one engine,
//! [`Frontier::run`], steered by a [`Policy`] that records vertices,
//! prunes expansion or stops early. On top of it sit:
//!
//! - **Graph queries** over any [`Adjacency`]: [`traverse`],
//!   [`shortest_path`], [`shortest_distance`], [`vertices_at_distance`],
//!   [`levels`], [`distances`], [`eccentricity`], and for
//!   [`Graph`](wavefront_core::Graph)s [`is_connected`] and
//!   [`connected_components`].
//! - **Grid searches** through [`GridSearch`], which keeps dense per-cell
//!   state for paths ([`GridSearch::path`], [`grid_path`]), distance maps
//!   ([`GridSearch::distance_map`]), component labels
//!   ([`GridSearch::label_components`]) and flood fills.
//!
//! Queries never fail. Unknown vertices, blocked or out-of-bounds cells and
//! unreachable targets produce `None` or an empty `Vec`.
//!
//! # Visited stores
//!
//! | Store | Vertex | Used by |
//! |---|---|---|
//! | [`HashMarks`] | any `Clone + Eq + Hash` | graph queries |
//! | [`DenseMarks`] | [`Point`](wavefront_core::Point) | [`GridSearch`] |

pub mod display;
mod distance;
mod frontier;
mod gridsearch;
mod marks;
mod neighbors;
mod query;
mod traits;

pub use distance::{chebyshev, manhattan};
pub use frontier::{Flow, Frontier, OnDequeue, OnDiscover, Outcome, Policy};
pub use gridsearch::{GridSearch, PathNode, grid_path};
pub use marks::{DenseMarks, HashMarks, Marks};
pub use neighbors::Moves;
pub use query::{
    connected_components, distances, eccentricity, is_connected, levels, shortest_distance,
    shortest_path, traverse, vertices_at_distance,
};
pub use traits::{Adjacency, GridPather};
