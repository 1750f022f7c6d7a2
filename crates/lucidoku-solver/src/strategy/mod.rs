//! Deduction strategies for proposing the next move.
//!
//! Each strategy implements the [`Strategy`] trait and scans a grid for one
//! kind of forced placement. Strategies are stateless; chains of them are
//! run by [`HintFinder`](crate::HintFinder).

use std::fmt::Debug;

use lucidoku_core::Grid;

pub use self::{hidden_single::HiddenSingle, naked_single::NakedSingle};
use crate::Hint;

mod hidden_single;
mod naked_single;

/// Returns the default deduction chain.
///
/// Strategies are ordered from cheapest to most involved, and the order is
/// part of the contract: a finder tries them in sequence and the first
/// match wins, so the same grid always produces the same hint.
///
/// - **Naked Single**: a blank cell with exactly one candidate
/// - **Hidden Single (Row)**: a digit with one home in some row
/// - **Hidden Single (Column)**: a digit with one home in some column
/// - **Hidden Single (Block)**: a digit with one home in some 3x3 block
///
/// # Examples
///
/// ```
/// use lucidoku_solver::strategy;
///
/// let strategies = strategy::default_strategies();
/// assert_eq!(strategies.len(), 4);
/// ```
#[must_use]
pub fn default_strategies() -> Vec<BoxedStrategy> {
    vec![
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::in_rows()),
        Box::new(HiddenSingle::in_columns()),
        Box::new(HiddenSingle::in_blocks()),
    ]
}

/// A single deduction rule that can propose the next placement.
pub trait Strategy: Debug + Send + Sync {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedStrategy;

    /// Scans `grid` for a placement this strategy can justify.
    ///
    /// Returns `None` when the strategy does not apply. Scanning never
    /// mutates the grid.
    fn find(&self, grid: &Grid) -> Option<Hint>;
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn Strategy>;

impl Clone for BoxedStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
