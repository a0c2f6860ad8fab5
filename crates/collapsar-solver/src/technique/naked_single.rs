use collapsar_core::{Cell, Grid};

use super::{BoxedTechnique, Technique};

/// Collapses cells whose candidate set has exactly one member.
///
/// When only one digit remains possible in a cell, that digit is the cell's
/// value; collapsing it propagates the elimination to every peer through
/// [`Grid::collapse`]. A pass scans all 81 cells once in index order, so a
/// collapse can enable further naked singles at *higher* indices within the
/// same pass; lower-index cells are picked up by the next pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Collapses `cell` if it is an uncollapsed naked single.
    ///
    /// This is the unit primitive of the pass. Returns `true` if the cell
    /// was collapsed.
    pub fn apply_cell(grid: &mut Grid, cell: Cell) -> bool {
        if grid.is_collapsed(cell) {
            return false;
        }
        let Some(digit) = grid.candidates(cell).as_single() else {
            return false;
        };
        grid.collapse(cell, digit);
        true
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        "naked single"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> usize {
        Cell::all()
            .filter(|&cell| Self::apply_cell(grid, cell))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use collapsar_core::Digit;

    use super::*;
    use crate::testing::PassTester;

    #[test]
    fn test_apply_cell() {
        let mut grid = Grid::new();
        // leave only 9 possible at r0c0
        for col in 1..=8 {
            grid.collapse(Cell::at(0, col), Digit::from_value(col));
        }

        // multi-candidate peers are not collapsed
        assert!(!NakedSingle::apply_cell(&mut grid, Cell::at(1, 0)));

        assert!(NakedSingle::apply_cell(&mut grid, Cell::at(0, 0)));
        assert_eq!(grid.digit(Cell::at(0, 0)), Some(Digit::D9));

        // a collapsed cell is never touched again
        assert!(!NakedSingle::apply_cell(&mut grid, Cell::at(0, 0)));
    }

    #[test]
    fn test_pass_collapses_single_and_propagates() {
        let mut grid = Grid::new();
        for col in 1..=8 {
            grid.collapse(Cell::at(0, col), Digit::from_value(col));
        }

        PassTester::new(grid)
            .apply_once(&NakedSingle::new())
            .assert_pass_count(1)
            .assert_collapsed(Cell::at(0, 0), Digit::D9)
            // the collapse removed 9 from peers in column 0 and box 0
            .assert_candidate_removed(Cell::at(8, 0), Digit::D9)
            .assert_candidate_removed(Cell::at(2, 2), Digit::D9);
    }

    #[test]
    fn test_no_change_on_open_grid() {
        PassTester::new(Grid::new())
            .apply_once(&NakedSingle::new())
            .assert_pass_count(0);
    }

    #[test]
    fn test_pass_boundary_is_scan_order() {
        // r0c8 is a naked single (row rules out 1-7, column rules out 8);
        // collapsing it leaves r0c7 naked, but r0c7 precedes r0c8 in scan
        // order, so it is only collapsed by the following pass.
        PassTester::from_line(
            "1234567..\
             .........\
             .........\
             .........\
             ........8\
             .........\
             .........\
             .........\
             .........",
        )
        .apply_once(&NakedSingle::new())
        .assert_pass_count(1)
        .assert_collapsed(Cell::at(0, 8), Digit::D9)
        .assert_uncollapsed(Cell::at(0, 7))
        .apply_once(&NakedSingle::new())
        .assert_pass_count(1)
        .assert_collapsed(Cell::at(0, 7), Digit::D8)
        .apply_once(&NakedSingle::new())
        .assert_pass_count(0);
    }
}
