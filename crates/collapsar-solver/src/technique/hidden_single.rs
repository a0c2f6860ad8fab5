use collapsar_core::{Cell, Digit, Grid, House};

use super::{BoxedTechnique, Technique};

/// Collapses digits that have exactly one legal cell left within a house.
///
/// A digit can be forced into a cell even when that cell still carries many
/// candidates: if every other cell of some house has lost the digit, the one
/// remaining cell must hold it. A pass visits every (house, digit)
/// combination exactly once, houses in [`House::ALL`] order (rows, columns,
/// boxes), digits ascending within each house.
///
/// House membership is recomputed from live grid state at the moment each
/// combination is checked, never from a snapshot taken at pass start.
/// Collapses made earlier in the pass are therefore visible to later checks:
/// a cell collapsed for one house drops out of every other house's
/// membership instead of being collapsed twice.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the sole uncollapsed cell of `house` that still carries
    /// `digit` as a candidate, or `None` if there are zero or several.
    fn sole_open_cell(grid: &Grid, house: House, digit: Digit) -> Option<Cell> {
        let mut found = None;
        for cell in house.cells() {
            if grid.is_collapsed(cell) || !grid.candidates(cell).contains(digit) {
                continue;
            }
            if found.is_some() {
                return None;
            }
            found = Some(cell);
        }
        found
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        "hidden single"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> usize {
        let mut collapsed = 0;
        for house in House::ALL {
            for digit in Digit::ALL {
                if let Some(cell) = Self::sole_open_cell(grid, house, digit) {
                    grid.collapse(cell, digit);
                    collapsed += 1;
                }
            }
        }
        collapsed
    }
}
