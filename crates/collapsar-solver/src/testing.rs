//! Test harness for technique passes.

use collapsar_core::{Cell, Digit, Grid};

use crate::technique::Technique;

/// A fluent harness for asserting what a technique pass did to a grid.
///
/// Tracks the grid state before any pass ran alongside the current state,
/// plus the collapse count reported by the most recent pass. All assertion
/// methods return `self` for chaining and panic with `#[track_caller]`
/// locations on failure.
#[derive(Debug)]
pub(crate) struct PassTester {
    initial: Grid,
    current: Grid,
    last_count: usize,
}

impl PassTester {
    /// Creates a tester from an initial grid state.
    pub(crate) fn new(grid: Grid) -> Self {
        Self {
            initial: grid.clone(),
            current: grid,
            last_count: 0,
        }
    }

    /// Creates a tester from a puzzle string (whitespace ignored).
    ///
    /// # Panics
    ///
    /// Panics if the string does not parse as a grid.
    #[track_caller]
    pub(crate) fn from_line(src: &str) -> Self {
        Self::new(src.parse().unwrap())
    }

    /// Runs one pass of the technique.
    pub(crate) fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        self.last_count = technique.apply(&mut self.current);
        self
    }

    /// Runs passes of the technique until one collapses nothing.
    ///
    /// The recorded count is the total over all productive passes.
    pub(crate) fn apply_until_stalled<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        let mut total = 0;
        loop {
            let count = technique.apply(&mut self.current);
            if count == 0 {
                break;
            }
            total += count;
        }
        self.last_count = total;
        self
    }

    /// Asserts the collapse count reported by the most recent apply call.
    #[track_caller]
    pub(crate) fn assert_pass_count(self, expected: usize) -> Self {
        assert_eq!(
            self.last_count, expected,
            "expected the pass to collapse {expected} cells, got {}",
            self.last_count
        );
        self
    }

    /// Asserts that the pass collapsed a previously open cell to `digit`.
    #[track_caller]
    pub(crate) fn assert_collapsed(self, cell: Cell, digit: Digit) -> Self {
        assert!(
            !self.initial.is_collapsed(cell),
            "{cell} was already collapsed before the pass"
        );
        assert_eq!(
            self.current.digit(cell),
            Some(digit),
            "expected {cell} to be collapsed to {digit}, got {:?}",
            self.current.digit(cell)
        );
        self
    }

    /// Asserts that `cell` is still uncollapsed.
    #[track_caller]
    pub(crate) fn assert_uncollapsed(self, cell: Cell) -> Self {
        assert!(
            !self.current.is_collapsed(cell),
            "expected {cell} to stay open, but it holds {:?}",
            self.current.digit(cell)
        );
        self
    }

    /// Asserts that `cell` held `digit` as a candidate initially and no
    /// longer does.
    #[track_caller]
    pub(crate) fn assert_candidate_removed(self, cell: Cell, digit: Digit) -> Self {
        assert!(
            self.initial.candidates(cell).contains(digit),
            "{cell} never had {digit} as a candidate"
        );
        assert!(
            !self.current.candidates(cell).contains(digit),
            "expected {digit} to be eliminated from {cell}, candidates are {:?}",
            self.current.candidates(cell)
        );
        self
    }
}
