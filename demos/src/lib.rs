//! Helpers shared by the demo binaries.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use wavefront_core::{Grid, Point};

/// Install a stderr logger. `RUST_LOG` overrides the default `info` level.
///
/// Keep the returned handle alive for the lifetime of the program.
pub fn init_logging() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str("info")?.start()
}

/// A `rows x cols` grid where each cell is blocked with probability
/// `density` (clamped to `[0, 1]`).
pub fn random_grid(rows: i32, cols: i32, density: f64) -> Grid {
    let density = density.clamp(0.0, 1.0);
    let mut grid = Grid::new(rows, cols);
    grid.fill_fn(|_| !rand::random_bool(density));
    grid
}

/// Open the given cells, e.g. so that a path's endpoints are passable.
pub fn clear_cells(grid: &mut Grid, cells: &[Point]) {
    for &p in cells {
        grid.set(p, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_extremes() {
        assert_eq!(random_grid(4, 5, 0.0).count_passable(), 20);
        assert_eq!(random_grid(4, 5, 1.0).count_passable(), 0);
        assert_eq!(random_grid(4, 5, 7.0).count_passable(), 0);
    }

    #[test]
    fn clear_cells_opens_endpoints() {
        let mut grid = random_grid(3, 3, 1.0);
        clear_cells(&mut grid, &[Point::new(0, 0), Point::new(2, 2)]);
        assert!(grid.is_passable(Point::new(0, 0)));
        assert!(grid.is_passable(Point::new(2, 2)));
        assert_eq!(grid.count_passable(), 2);
    }
}
