//! The puzzle grid and its collapse primitive.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Cell, CellSet, Digit, DigitSet};

/// Errors produced when parsing a puzzle string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 symbols.
    #[display("expected 81 symbols, got {len}")]
    BadLength {
        /// Number of symbols found.
        len: usize,
    },
    /// The input contained a symbol outside `1-9`, `.`, `0`, `_`.
    #[display("invalid symbol {symbol:?} at cell {index}")]
    InvalidSymbol {
        /// The offending symbol.
        symbol: char,
        /// Flat index of the cell the symbol was read for.
        index: usize,
    },
}

/// Error returned by [`Grid::try_collapse`] when a placement is known
/// illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cannot collapse {cell} to {digit}: conflicts with {occupied}")]
pub struct CollapseConflict {
    /// The cell the caller tried to collapse.
    pub cell: Cell,
    /// The digit the caller tried to place.
    pub digit: Digit,
    /// The already-collapsed cell that blocks the placement. Equals `cell`
    /// when the target itself is already collapsed.
    pub occupied: Cell,
}

/// The puzzle state: per-cell candidate sets plus the collapsed digits.
///
/// A grid starts empty (every candidate set full, nothing collapsed) and is
/// mutated in place, one [`collapse`] at a time, until the solver can derive
/// nothing further. A grid has a single owner for its whole lifetime; solving
/// different grids concurrently needs no synchronization.
///
/// After every `collapse` returns, candidate consistency holds: no
/// uncollapsed cell retains a digit that one of its peers (same row, column,
/// or box) has collapsed to. House uniqueness is *not* enforced on write; it
/// is checked after the fact by [`check`].
///
/// # Examples
///
/// ```
/// use collapsar_core::Grid;
///
/// let grid: Grid =
///     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
///         .parse()?;
/// assert_eq!(grid.collapsed_cells().len(), 30);
/// assert_eq!(grid.check(), Ok(()));
/// # Ok::<(), collapsar_core::ParseGridError>(())
/// ```
///
/// [`collapse`]: Grid::collapse
/// [`check`]: Grid::check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Digits still legal per cell. Empty once the cell is collapsed; the
    /// candidates of a collapsed cell carry no meaning.
    candidates: [DigitSet; Cell::COUNT],
    /// `Some(digit)` iff the cell is collapsed.
    collapsed: [Option<Digit>; Cell::COUNT],
    /// Cells fixed by the original puzzle. Informational only: solving
    /// treats given and derived collapses identically.
    given: CellSet,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid: all nine candidates in every cell, nothing
    /// collapsed, nothing given.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            candidates: [DigitSet::FULL; Cell::COUNT],
            collapsed: [None; Cell::COUNT],
            given: CellSet::EMPTY,
        }
    }

    /// Builds a grid from an 81-symbol line in standard form.
    ///
    /// Symbols `'1'..='9'` collapse the cell to that digit and mark it
    /// given; `'.'`, `'0'`, and `'_'` leave the cell uncollapsed.
    ///
    /// Givens are collapsed unconditionally, so a contradictory puzzle loads
    /// successfully; run [`check`](Self::check) to surface the conflict.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError::BadLength`] unless the input has exactly 81
    /// symbols, and [`ParseGridError::InvalidSymbol`] for any symbol outside
    /// the accepted set.
    pub fn from_line(src: &str) -> Result<Self, ParseGridError> {
        let symbols: Vec<char> = src.chars().collect();
        if symbols.len() != Cell::COUNT {
            return Err(ParseGridError::BadLength {
                len: symbols.len(),
            });
        }

        let mut grid = Self::new();
        for (index, &symbol) in symbols.iter().enumerate() {
            if let Some(digit) = Digit::from_symbol(symbol) {
                let cell = Cell::new(u8::try_from(index).unwrap());
                grid.collapse(cell, digit);
                grid.given.insert(cell);
            } else if !matches!(symbol, '.' | '0' | '_') {
                return Err(ParseGridError::InvalidSymbol { symbol, index });
            }
        }
        Ok(grid)
    }

    /// Collapses `cell` to `digit` and propagates: removes `digit` from the
    /// candidate set of every peer in the cell's row, column, and box, and
    /// clears the cell's own candidate set.
    ///
    /// This is unconditional and performs no legality check. Callers must
    /// only collapse assignments known legal; collapsing a digit that
    /// already appears in a peer silently corrupts the candidate sets
    /// instead of signaling an error. Use [`try_collapse`](Self::try_collapse)
    /// when refusal is wanted.
    pub fn collapse(&mut self, cell: Cell, digit: Digit) {
        self.collapsed[cell.index()] = Some(digit);
        self.candidates[cell.index()] = DigitSet::EMPTY;

        for house in cell.houses() {
            for peer in house.cells() {
                if peer != cell {
                    self.candidates[peer.index()].remove(digit);
                }
            }
        }
    }

    /// Checked variant of [`collapse`](Self::collapse): refuses to overwrite
    /// a collapsed cell and refuses a digit already collapsed in a peer.
    ///
    /// # Errors
    ///
    /// Returns [`CollapseConflict`] naming the blocking cell; the grid is
    /// left untouched.
    pub fn try_collapse(&mut self, cell: Cell, digit: Digit) -> Result<(), CollapseConflict> {
        if self.collapsed[cell.index()].is_some() {
            return Err(CollapseConflict {
                cell,
                digit,
                occupied: cell,
            });
        }
        for house in cell.houses() {
            for peer in house.cells() {
                if peer != cell && self.collapsed[peer.index()] == Some(digit) {
                    return Err(CollapseConflict {
                        cell,
                        digit,
                        occupied: peer,
                    });
                }
            }
        }
        self.collapse(cell, digit);
        Ok(())
    }

    /// Returns `true` if `cell` is collapsed.
    #[must_use]
    pub const fn is_collapsed(&self, cell: Cell) -> bool {
        self.collapsed[cell.index()].is_some()
    }

    /// Returns `true` if `cell` was fixed by the original puzzle.
    #[must_use]
    pub fn is_given(&self, cell: Cell) -> bool {
        self.given.contains(cell)
    }

    /// Returns the collapsed digit of `cell`, or `None` if uncollapsed.
    #[must_use]
    pub const fn digit(&self, cell: Cell) -> Option<Digit> {
        self.collapsed[cell.index()]
    }

    /// Returns the candidate set of `cell`.
    ///
    /// Empty for a collapsed cell; the value carries no meaning there.
    #[must_use]
    pub const fn candidates(&self, cell: Cell) -> DigitSet {
        self.candidates[cell.index()]
    }

    /// Returns the set of collapsed cells.
    #[must_use]
    pub fn collapsed_cells(&self) -> CellSet {
        Cell::all().filter(|&cell| self.is_collapsed(cell)).collect()
    }

    /// Returns the set of given cells.
    #[must_use]
    pub const fn given_cells(&self) -> CellSet {
        self.given
    }

    /// Returns `true` if all 81 cells are collapsed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.collapsed.iter().all(Option::is_some)
    }

    /// Checks the collapsed cells for duplicate digits within a house.
    ///
    /// Scans cells in index order, accumulating the digits seen per row,
    /// column, and box; the first cell whose digit is already present in one
    /// of its three houses is reported. Valid on any grid state, complete or
    /// partial; candidates of uncollapsed cells are not examined.
    ///
    /// A conflict signals either a contradictory input puzzle or a violated
    /// collapse precondition; it is never produced by legal collapses alone.
    ///
    /// # Errors
    ///
    /// Returns the first conflicting cell in scan order.
    pub fn check(&self) -> Result<(), Cell> {
        let mut rows = [DigitSet::EMPTY; 9];
        let mut cols = [DigitSet::EMPTY; 9];
        let mut boxes = [DigitSet::EMPTY; 9];

        for cell in Cell::all() {
            let Some(digit) = self.collapsed[cell.index()] else {
                continue;
            };
            let row = &mut rows[usize::from(cell.row())];
            let col = &mut cols[usize::from(cell.col())];
            let boxx = &mut boxes[usize::from(cell.box_index())];
            if row.contains(digit) || col.contains(digit) || boxx.contains(digit) {
                return Err(cell);
            }
            row.insert(digit);
            col.insert(digit);
            boxx.insert(digit);
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid, ignoring ASCII whitespace.
    ///
    /// This accepts both the flat 81-symbol line form and the multi-line
    /// layout used in tests.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line: String = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        Self::from_line(&line)
    }
}

impl Display for Grid {
    /// Renders the 81-symbol line form: collapsed digits as `'1'..='9'`,
    /// uncollapsed cells as `'.'`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in Cell::all() {
            match self.digit(cell) {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
