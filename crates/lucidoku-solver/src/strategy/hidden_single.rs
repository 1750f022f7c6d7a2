use lucidoku_core::{Digit, DigitSet, Grid, Position, Unit, UnitKind};
use tinyvec::ArrayVec;

use super::{BoxedStrategy, Strategy};
use crate::Hint;

const NAME_ROWS: &str = "Hidden Single (Row)";
const NAME_COLUMNS: &str = "Hidden Single (Column)";
const NAME_BLOCKS: &str = "Hidden Single (Block)";

/// A strategy that finds a digit with exactly one possible cell in a unit.
///
/// Each instance scans one unit shape. Units are visited in ascending index
/// order (blocks row-major), and digits ascending within a unit, so the
/// first match is fully determined by the grid.
///
/// # Examples
///
/// ```
/// use lucidoku_core::{Digit, Grid, Position, Unit};
/// use lucidoku_solver::{
///     Hint,
///     strategy::{HiddenSingle, Strategy},
/// };
///
/// // Column conflicts leave (4, 7) as the only home for 5 in row five.
/// let grid: Grid = "
///     5__ ___ ___
///     ___ 5__ ___
///     ___ ___ 5__
///     __5 ___ ___
///     ___ _1_ ___
///     ___ ___ ___
///     _5_ ___ ___
///     ___ __5 ___
///     ___ ___ __5
/// "
/// .parse()?;
///
/// let hint = HiddenSingle::in_rows().find(&grid);
/// assert_eq!(
///     hint,
///     Some(Hint::HiddenSingle {
///         unit: Unit::Row(4),
///         position: Position::new(4, 7),
///         digit: Digit::D5,
///     })
/// );
/// # Ok::<(), lucidoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HiddenSingle {
    scope: UnitKind,
}

impl HiddenSingle {
    /// Creates a strategy that scans rows, top to bottom.
    #[must_use]
    pub const fn in_rows() -> Self {
        Self {
            scope: UnitKind::Row,
        }
    }

    /// Creates a strategy that scans columns, left to right.
    #[must_use]
    pub const fn in_columns() -> Self {
        Self {
            scope: UnitKind::Column,
        }
    }

    /// Creates a strategy that scans blocks in row-major order.
    #[must_use]
    pub const fn in_blocks() -> Self {
        Self {
            scope: UnitKind::Block,
        }
    }

    const fn units(self) -> [Unit; 9] {
        match self.scope {
            UnitKind::Row => Unit::ROWS,
            UnitKind::Column => Unit::COLUMNS,
            UnitKind::Block => Unit::BLOCKS,
        }
    }
}

impl Strategy for HiddenSingle {
    fn name(&self) -> &'static str {
        match self.scope {
            UnitKind::Row => NAME_ROWS,
            UnitKind::Column => NAME_COLUMNS,
            UnitKind::Block => NAME_BLOCKS,
        }
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn find(&self, grid: &Grid) -> Option<Hint> {
        for unit in self.units() {
            // Candidates are computed once per blank cell, then bucketed
            // per digit.
            let mut blanks: ArrayVec<[(Position, DigitSet); 9]> = ArrayVec::new();
            for position in unit.cells() {
                if grid.is_blank(position) {
                    blanks.push((position, grid.candidates(position)));
                }
            }
            for digit in Digit::ALL {
                let mut homes = blanks
                    .iter()
                    .filter(|(_, candidates)| candidates.contains(digit));
                if let (Some(&(position, _)), None) = (homes.next(), homes.next()) {
                    return Some(Hint::HiddenSingle {
                        unit,
                        position,
                        digit,
                    });
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn lower_digit_wins_within_a_unit() {
        // Both 3 and 5 are confined to (4, 7) in row five; the hint names
        // the smaller digit.
        let grid = grid("
            53_ ___ ___
            ___ 5__ 3__
            ___ 3__ 5__
            __5 ___ ___
            ___ _1_ ___
            3__ ___ ___
            _5_ __3 ___
            ___ __5 __3
            __3 ___ __5
        ");
        assert_eq!(
            HiddenSingle::in_rows().find(&grid),
            Some(Hint::HiddenSingle {
                unit: Unit::Row(4),
                position: Position::new(4, 7),
                digit: Digit::D3,
            })
        );
    }

    #[test]
    fn finds_a_column_single() {
        // A block of threes above and below column five leaves (4, 5) as
        // the only home for 3 there, while every row keeps at least two.
        let grid = grid("
            ___ 3__ ___
            ___ ___ ___
            ___ ___ ___
            ___ __1 ___
            ___ ___ ___
            ___ __2 ___
            ___ _3_ ___
            ___ ___ ___
            ___ ___ ___
        ");
        assert_eq!(HiddenSingle::in_rows().find(&grid), None);
        assert_eq!(
            HiddenSingle::in_columns().find(&grid),
            Some(Hint::HiddenSingle {
                unit: Unit::Column(5),
                position: Position::new(4, 5),
                digit: Digit::D3,
            })
        );
    }

    #[test]
    fn finds_a_block_single() {
        // Row and column conflicts leave (4, 4) as the only home for 7 in
        // the center block, while rows and columns keep several homes.
        let grid = grid("
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ _12 __7
            ___ 3_4 ___
            ___ 56_ ___
            ___ ___ ___
            ___ __7 ___
            ___ ___ ___
        ");
        assert_eq!(HiddenSingle::in_rows().find(&grid), None);
        assert_eq!(HiddenSingle::in_columns().find(&grid), None);
        assert_eq!(
            HiddenSingle::in_blocks().find(&grid),
            Some(Hint::HiddenSingle {
                unit: Unit::Block(4),
                position: Position::new(4, 4),
                digit: Digit::D7,
            })
        );
    }

    #[test]
    fn skips_digits_already_placed_in_the_unit() {
        // Row five already holds a 1, so only 5 is proposed even though
        // the 1 bucket would otherwise be empty rather than single.
        let grid = grid("
            5__ ___ ___
            ___ 5__ ___
            ___ ___ 5__
            __5 ___ ___
            ___ _1_ ___
            ___ ___ ___
            _5_ ___ ___
            ___ __5 ___
            ___ ___ __5
        ");
        let hint = HiddenSingle::in_rows().find(&grid).unwrap();
        assert_eq!(
            hint,
            Hint::HiddenSingle {
                unit: Unit::Row(4),
                position: Position::new(4, 7),
                digit: Digit::D5,
            }
        );
    }

    #[test]
    fn finds_nothing_on_an_empty_grid() {
        assert_eq!(HiddenSingle::in_rows().find(&Grid::empty()), None);
        assert_eq!(HiddenSingle::in_columns().find(&Grid::empty()), None);
        assert_eq!(HiddenSingle::in_blocks().find(&Grid::empty()), None);
    }

    #[test]
    fn names_follow_the_scanned_shape() {
        assert_eq!(HiddenSingle::in_rows().name(), "Hidden Single (Row)");
        assert_eq!(HiddenSingle::in_columns().name(), "Hidden Single (Column)");
        assert_eq!(HiddenSingle::in_blocks().name(), "Hidden Single (Block)");
    }
}
