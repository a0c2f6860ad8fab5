//! Fixed-point sudoku solving by singular detection.
//!
//! The solver repeatedly runs the two fundamental techniques over a
//! [`Grid`](collapsar_core::Grid):
//!
//! - **naked single** — a cell with exactly one remaining candidate;
//! - **hidden single** — a digit with exactly one remaining home in some
//!   row, column, or box.
//!
//! Each collapse propagates eliminations to its peers, which can expose
//! further singles; the loop ends when a full round of both passes derives
//! nothing. Puzzles that need stronger techniques (or search) stall instead
//! of being guessed at.
//!
//! # Examples
//!
//! ```
//! use collapsar_solver::Solver;
//!
//! let mut grid =
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!         .parse()?;
//! let (outcome, stats) = Solver::with_singles().solve(&mut grid);
//!
//! assert!(outcome.is_solved());
//! assert_eq!(grid.check(), Ok(()));
//! println!("solved in {} rounds", stats.rounds());
//! # Ok::<(), collapsar_core::ParseGridError>(())
//! ```

pub use self::solver::*;

pub mod technique;

mod solver;

#[cfg(test)]
mod testing;
