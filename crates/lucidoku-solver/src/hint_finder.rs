//! Running strategies in priority order.

use lucidoku_core::Grid;

use crate::{
    Hint,
    strategy::{BoxedStrategy, default_strategies},
};

/// Finds the first hint proposed by an ordered list of strategies.
///
/// Strategies are tried front to back and the first one that fires wins,
/// so earlier entries take priority over later ones. The default order
/// prefers naked singles, then hidden singles in rows, columns, and
/// blocks.
#[derive(Debug, Clone)]
pub struct HintFinder {
    strategies: Vec<BoxedStrategy>,
}

impl HintFinder {
    /// Creates a finder that consults `strategies` in the given order.
    #[must_use]
    pub fn new(strategies: Vec<BoxedStrategy>) -> Self {
        Self { strategies }
    }

    /// Creates a finder with the full set of built-in strategies.
    #[must_use]
    pub fn with_default_strategies() -> Self {
        Self::new(default_strategies())
    }

    /// Returns the strategies in consultation order.
    #[must_use]
    pub fn strategies(&self) -> &[BoxedStrategy] {
        &self.strategies
    }

    /// Returns the first hint any strategy proposes, or [`Hint::None`].
    #[must_use]
    pub fn find(&self, grid: &Grid) -> Hint {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.find(grid))
            .unwrap_or(Hint::None)
    }
}

impl Default for HintFinder {
    fn default() -> Self {
        Self::with_default_strategies()
    }
}

/// Finds a hint using the default strategy order.
///
/// # Examples
///
/// ```
/// use lucidoku_core::{Digit, Grid, Position};
/// use lucidoku_solver::find_hint;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// let hint = find_hint(&grid);
/// assert_eq!(
///     hint.placement(),
///     Some((Position::new(4, 4), Digit::D5))
/// );
/// # Ok::<(), lucidoku_core::ParseGridError>(())
/// ```
#[must_use]
pub fn find_hint(grid: &Grid) -> Hint {
    HintFinder::with_default_strategies().find(grid)
}
