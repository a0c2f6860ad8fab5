//! Command-line front end for the Collapsar engine.
//!
//! Reads a puzzle, runs the singular-detection solver, prints the result,
//! and reports the terminal state through the exit code:
//!
//! - `0` — every cell collapsed and the grid is consistent
//! - `1` — the solver stalled with open cells remaining
//! - `2` — the grid is inconsistent, or the input did not parse

use std::{io::Read as _, process};

use clap::Parser;
use collapsar_core::Grid;
use collapsar_solver::Solver;

mod render;

const EXIT_SOLVED: i32 = 0;
const EXIT_STALLED: i32 = 1;
const EXIT_ERROR: i32 = 2;

/// Solves 9×9 sudoku puzzles by naked and hidden singles.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle as 81 symbols: '1'-'9' for givens; '.', '0', or '_' for
    /// blanks. Reads stdin when omitted or given as '-'.
    #[arg(value_name = "PUZZLE")]
    puzzle: Option<String>,

    /// Print the ruled 9×9 grid instead of the flat line form.
    #[arg(long)]
    pretty: bool,

    /// Also print the per-cell candidate view (implies --pretty).
    #[arg(long)]
    candidates: bool,

    /// Load and validate the puzzle without running the solver.
    #[arg(long)]
    no_solve: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    process::exit(run(&args));
}

fn run(args: &Args) -> i32 {
    let text = match read_puzzle(args) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("failed to read puzzle: {err}");
            return EXIT_ERROR;
        }
    };

    let mut grid: Grid = match text.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid puzzle: {err}");
            return EXIT_ERROR;
        }
    };

    if let Err(cell) = grid.check() {
        eprintln!("inconsistent puzzle: duplicate digit at {cell} (index {})", cell.index());
        return EXIT_ERROR;
    }

    if !args.no_solve {
        solve(&mut grid);
    }

    print_grid(&grid, args);

    if let Err(cell) = grid.check() {
        eprintln!("inconsistent result: duplicate digit at {cell} (index {})", cell.index());
        return EXIT_ERROR;
    }

    if grid.is_complete() {
        log::info!("solved");
        EXIT_SOLVED
    } else {
        let open = 81 - grid.collapsed_cells().len();
        log::info!("stalled with {open} open cells");
        EXIT_STALLED
    }
}

fn read_puzzle(args: &Args) -> std::io::Result<String> {
    match args.puzzle.as_deref() {
        Some("-") | None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(puzzle) => Ok(puzzle.to_owned()),
    }
}

fn solve(grid: &mut Grid) {
    let solver = Solver::with_singles();
    let mut stats = solver.new_stats();

    loop {
        let collapsed = solver.round(grid, &mut stats);
        log::debug!("round {}: {collapsed} collapses", stats.rounds());
        if collapsed == 0 {
            break;
        }
    }

    for (technique, count) in solver.techniques().iter().zip(stats.collapses()) {
        log::info!("{}: {count} collapses", technique.name());
    }
}

fn print_grid(grid: &Grid, args: &Args) {
    if args.pretty || args.candidates {
        print!("{}", render::pretty(grid));
        if args.candidates {
            println!();
            print!("{}", render::candidates(grid));
        }
    } else {
        println!("{grid}");
    }
}
