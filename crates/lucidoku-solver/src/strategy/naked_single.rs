use lucidoku_core::{Grid, Position};

use super::{BoxedStrategy, Strategy};
use crate::Hint;

const NAME: &str = "Naked Single";

/// A strategy that finds a blank cell with exactly one candidate digit.
///
/// Cells are scanned in row-major order and the first match wins, so the
/// same grid always yields the same hint.
///
/// # Examples
///
/// ```
/// use lucidoku_core::{Digit, Grid, Position};
/// use lucidoku_solver::{
///     Hint,
///     strategy::{NakedSingle, Strategy},
/// };
///
/// let mut grid = Grid::empty();
/// for (col, digit) in (0..8).zip(Digit::ALL) {
///     grid.place(Position::new(0, col), digit);
/// }
///
/// let hint = NakedSingle::new().find(&grid);
/// assert_eq!(
///     hint,
///     Some(Hint::NakedSingle {
///         position: Position::new(0, 8),
///         digit: Digit::D9,
///     })
/// );
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` strategy.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Strategy for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn find(&self, grid: &Grid) -> Option<Hint> {
        for position in Position::ALL {
            if grid.is_blank(position)
                && let Some(digit) = grid.candidates(position).as_single()
            {
                return Some(Hint::NakedSingle { position, digit });
            }
        }
        None
    }
}
