//! Random obstacle grid with a breadth-first path from corner to corner.
//!
//! Run: cargo run --bin maze -- --rows 12 --cols 40 --density 0.3

use clap::{Parser, ValueEnum};
use wavefront_core::Point;
use wavefront_demos::{clear_cells, init_logging, random_grid};
use wavefront_paths::display::{PathOverlay, format_path};
use wavefront_paths::{GridPather, GridSearch, Moves};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MoveSet {
    Cardinal,
    Octile,
}

impl From<MoveSet> for Moves {
    fn from(m: MoveSet) -> Self {
        match m {
            MoveSet::Cardinal => Moves::Cardinal,
            MoveSet::Octile => Moves::Octile,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Find a path across a random maze")]
struct Args {
    /// Number of rows.
    #[arg(long, default_value_t = 12)]
    rows: i32,
    /// Number of columns.
    #[arg(long, default_value_t = 40)]
    cols: i32,
    /// Probability that a cell is blocked.
    #[arg(long, default_value_t = 0.3)]
    density: f64,
    /// Allowed steps between cells.
    #[arg(long, value_enum, default_value_t = MoveSet::Cardinal)]
    moves: MoveSet,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = init_logging()?;
    let args = Args::parse();
    if args.rows <= 0 || args.cols <= 0 {
        return Err(format!("grid must be non-empty, got {}x{}", args.rows, args.cols).into());
    }

    let from = Point::new(0, 0);
    let to = Point::new(args.rows - 1, args.cols - 1);
    let mut grid = random_grid(args.rows, args.cols, args.density);
    clear_cells(&mut grid, &[from, to]);
    log::info!(
        "{}x{} grid, {} passable cells",
        args.rows,
        args.cols,
        grid.count_passable()
    );

    let pather = GridPather::new(&grid, args.moves.into());
    let mut search = GridSearch::for_grid(&grid);
    let components = search.label_components(&pather);
    let path = search.path(&pather, from, to);

    let overlay = PathOverlay {
        grid: &grid,
        path: path.as_deref().unwrap_or(&[]),
    };
    println!("{overlay}");
    println!();
    println!("Components: {components}");
    if let Some(p) = &path {
        println!("Length: {} cells", p.len());
    }
    println!("{}", format_path("Path", path.as_deref()));
    Ok(())
}
