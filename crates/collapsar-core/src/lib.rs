//! Core data structures for the Collapsar sudoku engine.
//!
//! The engine's model is deliberately small:
//!
//! - [`Cell`] and [`House`] describe the board topology: 81 row-major cell
//!   indices and the 27 houses (rows, columns, boxes), with membership
//!   tables fixed at compile time.
//! - [`Digit`] and [`DigitSet`] represent digits 1-9 and 9-bit candidate
//!   sets; [`CellSet`] is the 81-bit analogue over cells.
//! - [`Grid`] is the sole mutable entity. Its one write primitive,
//!   [`Grid::collapse`], fixes a cell to a digit and removes that digit
//!   from every peer's candidate set, which is the propagation contract
//!   every solving technique relies on. [`Grid::check`] validates the
//!   collapsed cells after the fact.
//!
//! # Examples
//!
//! ```
//! use collapsar_core::{Cell, Digit, Grid};
//!
//! let mut grid = Grid::new();
//! grid.collapse(Cell::at(4, 4), Digit::D5);
//!
//! // 5 is no longer a candidate anywhere in row 4, column 4, or the
//! // center box
//! assert!(!grid.candidates(Cell::at(4, 5)).contains(Digit::D5));
//! assert!(!grid.candidates(Cell::at(0, 4)).contains(Digit::D5));
//! assert!(!grid.candidates(Cell::at(3, 3)).contains(Digit::D5));
//! ```

pub mod cell;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod grid;

pub use self::{
    cell::{Cell, House},
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    grid::{CollapseConflict, Grid, ParseGridError},
};
