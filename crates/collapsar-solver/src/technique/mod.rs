//! Singular-detection techniques.
//!
//! Each technique implements [`Technique`] and runs one full pass over the
//! grid per [`apply`](Technique::apply) call, collapsing every cell it can
//! prove singular and returning the collapse count. The solver loop keeps
//! running passes until every technique reports zero.

use std::fmt::Debug;

use collapsar_core::Grid;

pub use self::{hidden_single::HiddenSingle, naked_single::NakedSingle};

mod hidden_single;
mod naked_single;

/// A detection technique that collapses provably singular cells.
pub trait Technique: Debug {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Runs one full pass over the grid and returns the number of cells
    /// collapsed.
    ///
    /// A return of `0` means the technique can derive nothing from the
    /// current state; the pass is a no-op in that case.
    fn apply(&self, grid: &mut Grid) -> usize;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns the two singular-detection techniques, naked single first.
///
/// Naked singles are cheaper to detect, so they run before the house scan of
/// the hidden-single pass.
#[must_use]
pub fn singles() -> Vec<BoxedTechnique> {
    vec![Box::new(NakedSingle::new()), Box::new(HiddenSingle::new())]
}
