//! Command-line Sudoku solver.
//!
//! Reads a puzzle as grid text (digits for clues; `_`, `.`, or `0` for empty
//! cells; whitespace ignored) from a file or standard input, solves it, and
//! prints the completed grid.
//!
//! ```sh
//! boxdoku puzzle.txt
//! echo "12__ 34__ ____ ____" | boxdoku --box-width 2 --box-height 2 -
//! ```

use std::{
    error::Error,
    fs,
    io::Read as _,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use boxdoku_core::{Board, BoxDims};
use boxdoku_solver::Solver;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the puzzle file, or `-` to read from standard input.
    path: PathBuf,

    /// Width of the board's boxes.
    #[arg(long, default_value_t = 3)]
    box_width: u8,

    /// Height of the board's boxes.
    #[arg(long, default_value_t = 3)]
    box_height: u8,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    if args.box_width == 0 || args.box_height == 0 {
        return Err("box dimensions must be positive".into());
    }
    let size = u16::from(args.box_width) * u16::from(args.box_height);
    if size > 9 {
        return Err(format!("text input supports boards up to 9x9, got {size}x{size}").into());
    }

    let text = read_input(&args.path)?;
    let dims = BoxDims::new(args.box_width, args.box_height);
    let board = Board::parse(&text, dims)?;
    log::info!(
        "parsed {size}x{size} board with {empty} empty cells",
        size = board.size(),
        empty = board.empty_count(),
    );

    let mut solver = Solver::new(board)?;
    let start = Instant::now();
    solver.solve()?;
    log::info!("solved in {:?}", start.elapsed());

    print!("{}", solver.into_board());
    Ok(())
}

fn read_input(path: &Path) -> Result<String, Box<dyn Error>> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
