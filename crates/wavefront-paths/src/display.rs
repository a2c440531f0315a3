//! Human-readable renderings of query results.
//!
//! These wrappers only implement [`Display`]; they carry no behaviour that
//! queries depend on.

use std::fmt::{self, Display};

use wavefront_core::grid::{OPEN, WALL};
use wavefront_core::{Graph, Grid, Point};

/// Marker drawn on path cells by [`PathOverlay`].
pub const STEP: char = '*';

/// Items joined with `" -> "`.
#[derive(Debug, Clone, Copy)]
pub struct Chain<'a, T>(pub &'a [T]);

impl<T: Display> Display for Chain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// A path, or `No path found` when there is none.
#[derive(Debug, Clone, Copy)]
pub struct PathDisplay<'a, T>(pub Option<&'a [T]>);

impl<T: Display> Display for PathDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(path) if !path.is_empty() => write!(f, "{}", Chain(path)),
            _ => f.write_str("No path found"),
        }
    }
}

/// `title: a -> b -> c`, for traversal orders.
pub fn format_traversal<T: Display>(title: &str, order: &[T]) -> String {
    format!("{title}: {}", Chain(order))
}

/// `title: a -> b -> c`, or `title: No path found`.
pub fn format_path<T: Display>(title: &str, path: Option<&[T]>) -> String {
    format!("{title}: {}", PathDisplay(path))
}

/// The adjacency list of a graph, one vertex per line.
pub struct AdjacencyDump<'a, V>(pub &'a Graph<V>);

impl<V> Display for AdjacencyDump<'_, V>
where
    V: Display + Clone + Eq + std::hash::Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Graph adjacency list:")?;
        for (v, ns) in self.0.iter() {
            write!(f, "\n{v}:")?;
            for n in ns {
                write!(f, " {n}")?;
            }
        }
        Ok(())
    }
}

/// A grid drawn with its path cells marked by [`STEP`].
pub struct PathOverlay<'a> {
    pub grid: &'a Grid,
    pub path: &'a [Point],
}

impl Display for PathOverlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.grid.rows() {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.grid.cols() {
                let p = Point::new(r, c);
                let ch = if self.path.contains(&p) {
                    STEP
                } else if self.grid.is_passable(p) {
                    OPEN
                } else {
                    WALL
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
