use collapsar_core::Grid;

use crate::technique::{self, BoxedTechnique};

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// Every cell is collapsed.
    Solved,
    /// No technique can derive anything further, but uncollapsed cells
    /// remain. Not an error: the configured techniques were insufficient
    /// for this puzzle.
    Stalled,
}

/// Collapse counts accumulated while solving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStats {
    collapses: Vec<usize>,
    rounds: usize,
}

impl SolveStats {
    /// Returns per-technique collapse totals, in solver technique order.
    ///
    /// Techniques that never collapsed anything are included with a count
    /// of `0`.
    #[must_use]
    pub fn collapses(&self) -> &[usize] {
        &self.collapses
    }

    /// Returns the total number of cells collapsed by the solve.
    #[must_use]
    pub fn total_collapses(&self) -> usize {
        self.collapses.iter().sum()
    }

    /// Returns the number of rounds run, including the final non-productive
    /// round that ended the solve.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

/// Runs technique passes over a grid until a fixed point is reached.
///
/// Each round applies one full pass of every configured technique in order
/// and sums the collapses made. A round that collapses nothing ends the
/// solve: the grid is stalled, and by then either complete or beyond the
/// reach of the configured techniques. Termination needs no iteration cap:
/// every collapse shrinks the uncollapsed set, which starts at no more than
/// 81, so at most 81 productive rounds precede the non-productive one.
///
/// Solving never validates the grid; run [`Grid::check`] explicitly to ask
/// whether the result is consistent.
///
/// # Examples
///
/// ```
/// use collapsar_solver::Solver;
///
/// let mut grid =
///     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
///         .parse()?;
/// let (outcome, stats) = Solver::with_singles().solve(&mut grid);
/// assert!(outcome.is_solved());
/// assert_eq!(stats.total_collapses(), 51);
/// # Ok::<(), collapsar_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    techniques: Vec<BoxedTechnique>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::with_singles()
    }
}

impl Solver {
    /// Creates a solver with the given techniques, applied in order within
    /// each round.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a solver with the two singular-detection techniques.
    #[must_use]
    pub fn with_singles() -> Self {
        Self::new(technique::singles())
    }

    /// Returns the configured techniques in application order.
    ///
    /// The slice defines the index mapping used by
    /// [`SolveStats::collapses`].
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Creates a statistics object aligned with this solver's technique
    /// order.
    #[must_use]
    pub fn new_stats(&self) -> SolveStats {
        SolveStats {
            collapses: vec![0; self.techniques.len()],
            rounds: 0,
        }
    }

    /// Runs one round: one full pass of every technique in order.
    ///
    /// Returns the number of cells collapsed in the round; `0` means the
    /// grid is stalled.
    pub fn round(&self, grid: &mut Grid, stats: &mut SolveStats) -> usize {
        debug_assert_eq!(self.techniques.len(), stats.collapses.len());
        let mut collapsed = 0;
        for (i, technique) in self.techniques.iter().enumerate() {
            let count = technique.apply(grid);
            stats.collapses[i] += count;
            collapsed += count;
        }
        stats.rounds += 1;
        collapsed
    }

    /// Mutates the grid in place until no technique makes further progress.
    ///
    /// Returns the terminal state together with the accumulated statistics.
    pub fn solve(&self, grid: &mut Grid) -> (SolveOutcome, SolveStats) {
        let mut stats = self.new_stats();
        while self.round(grid, &mut stats) > 0 {}
        let outcome = if grid.is_complete() {
            SolveOutcome::Solved
        } else {
            SolveOutcome::Stalled
        };
        (outcome, stats)
    }
}
