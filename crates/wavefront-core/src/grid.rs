//! The [`Grid`] type: a rectangular matrix of passable and blocked cells.
//!
//! A grid is an implicit graph. It stores no vertex set or edges; cells are
//! addressed by [`Point`] and neighbourhood is derived from coordinates by
//! the traversal crate.

use std::fmt;

use crate::geom::{Point, Range};

/// Character used for passable cells by [`Grid::parse`] and `Display`.
pub const OPEN: char = '.';
/// Character used for blocked cells by [`Grid::parse`] and `Display`.
pub const WALL: char = '#';

/// A 2D passability matrix with row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell passable.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Range::with_size(rows, cols);
        Self {
            cells: vec![true; bounds.len()],
            bounds,
        }
    }

    /// Build a grid from rows of cell values where the zero value
    /// (`T::default()`) is passable and any other value is blocked.
    ///
    /// All rows must have the same length. An empty slice, or rows of
    /// length zero, give an empty grid.
    pub fn from_rows<T, R>(rows: &[R]) -> Result<Self, GridError>
    where
        T: Copy + Default + PartialEq,
        R: AsRef<[T]>,
    {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    line: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().map(|&v| v == T::default()));
        }
        if width == 0 {
            cells.clear();
        }
        Ok(Self {
            cells,
            bounds: Range::with_size(rows.len() as i32, width as i32),
        })
    }

    /// Parse a grid drawn with [`OPEN`] and [`WALL`] characters, one line
    /// per row.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, but
    /// individual lines are taken verbatim.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::new(0, 0));
        }
        let mut width: Option<usize> = None;
        let mut cells = Vec::new();
        let mut rows = 0usize;
        for (line, text) in s.lines().enumerate() {
            let mut n = 0usize;
            for (col, ch) in text.chars().enumerate() {
                match ch {
                    OPEN => cells.push(true),
                    WALL => cells.push(false),
                    _ => {
                        return Err(GridError::InvalidChar {
                            ch,
                            pos: Point::new(line as i32, col as i32),
                        });
                    }
                }
                n += 1;
            }
            match width {
                None => width = Some(n),
                Some(w) if w != n => {
                    return Err(GridError::Ragged {
                        line,
                        expected: w,
                        found: n,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }
        Ok(Self {
            cells,
            bounds: Range::with_size(rows as i32, width.unwrap_or(0) as i32),
        })
    }

    /// The bounding range `[0, rows) x [0, cols)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a `Point` (row = rows, col = cols).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Passability of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<bool> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and passable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).unwrap_or(false)
    }

    /// Set the passability of the cell at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, passable: bool) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = passable;
        }
    }

    /// Mark the cell at `p` as blocked.
    pub fn block(&mut self, p: Point) {
        self.set(p, false);
    }

    /// Set every cell to the given passability.
    pub fn fill(&mut self, passable: bool) {
        self.cells.fill(passable);
    }

    /// Set every cell from a function of its position.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> bool) {
        for (i, p) in self.bounds.iter().enumerate() {
            self.cells[i] = f(p);
        }
    }

    /// Number of passable cells.
    pub fn count_passable(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over `(Point, passable)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols() {
                let ch = if self.is_passable(Point::new(r, c)) {
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

/// Errors that can occur when building a grid from external data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row has a different length than the first one.
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than [`OPEN`] or [`WALL`] was found.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: row {line} has {found} cells, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid cell \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_passable() {
        let g = Grid::new(3, 4);
        assert_eq!(g.size(), Point::new(3, 4));
        assert_eq!(g.count_passable(), 12);
        assert!(g.is_passable(Point::new(2, 3)));
        assert!(!g.is_passable(Point::new(3, 0)));
        assert_eq!(g.at(Point::new(-1, 0)), None);
    }

    #[test]
    fn from_rows_marks_nonzero_blocked() {
        let g = Grid::from_rows(&[[0u8, 0, 0], [1, 1, 0], [0, 0, 0]]).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert!(g.is_passable(Point::new(0, 0)));
        assert!(!g.is_passable(Point::new(1, 0)));
        assert!(!g.is_passable(Point::new(1, 1)));
        assert!(g.is_passable(Point::new(1, 2)));
        assert_eq!(g.count_passable(), 7);
    }

    #[test]
    fn from_rows_accepts_int_matrices() {
        let rows: Vec<Vec<i32>> = vec![vec![0, -1, 0], vec![0, 0, 7]];
        let g = Grid::from_rows(&rows).unwrap();
        assert_eq!(g.size(), Point::new(2, 3));
        assert!(!g.is_passable(Point::new(0, 1)));
        assert!(!g.is_passable(Point::new(1, 2)));
        assert_eq!(g.count_passable(), 4);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let rows: Vec<Vec<u8>> = vec![vec![0, 0], vec![0]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::Ragged {
                line: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn from_rows_empty() {
        let rows: Vec<Vec<u8>> = Vec::new();
        assert!(Grid::from_rows(&rows).unwrap().is_empty());
        let rows: Vec<Vec<u8>> = vec![vec![], vec![]];
        assert!(Grid::from_rows(&rows).unwrap().is_empty());
    }

    #[test]
    fn parse_and_display_agree() {
        const MAP: &str = "\
..#
#..
...";
        let g = Grid::parse(MAP).unwrap();
        assert_eq!(g.size(), Point::new(3, 3));
        assert!(!g.is_passable(Point::new(0, 2)));
        assert!(!g.is_passable(Point::new(1, 0)));
        assert_eq!(g.to_string(), MAP);
    }

    #[test]
    fn parse_rejects_unknown_cells() {
        let err = Grid::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1,1)"));
    }

    #[test]
    fn parse_rejects_ragged_lines() {
        assert!(matches!(
            Grid::parse("...\n.."),
            Err(GridError::Ragged { line: 1, .. })
        ));
    }

    #[test]
    fn set_and_fill() {
        let mut g = Grid::new(2, 2);
        g.block(Point::new(0, 1));
        assert_eq!(g.at(Point::new(0, 1)), Some(false));
        g.set(Point::new(9, 9), false);
        assert_eq!(g.count_passable(), 3);
        g.fill(false);
        assert_eq!(g.count_passable(), 0);
        g.fill_fn(|p| p.row == p.col);
        let open: Vec<_> = g.iter().filter(|&(_, c)| c).map(|(p, _)| p).collect();
        assert_eq!(open, vec![Point::new(0, 0), Point::new(1, 1)]);
    }
}
