//! Hints: the next logically forced move.

use derive_more::{Display, IsVariant};
use lucidoku_core::{Digit, Position, Unit, UnitKind};

use crate::messages;

/// The kind of deduction behind a [`Hint`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HintKind {
    /// A blank cell with exactly one candidate digit.
    #[display("Naked Single")]
    NakedSingle,
    /// A digit confined to one cell of a row.
    #[display("Hidden Single (Row)")]
    HiddenSingleRow,
    /// A digit confined to one cell of a column.
    #[display("Hidden Single (Column)")]
    HiddenSingleColumn,
    /// A digit confined to one cell of a 3x3 block.
    #[display("Hidden Single (Block)")]
    HiddenSingleBlock,
    /// No supported deduction applies.
    #[display("None")]
    None,
}

/// The next logically forced move, or [`Hint::None`] when the supported
/// deductions find nothing.
///
/// A hint is plain data: finding one never mutates the grid, and applying
/// the suggested placement is the caller's decision.
///
/// # Examples
///
/// ```
/// use lucidoku_core::{Digit, Grid, Position};
/// use lucidoku_solver::{Hint, find_hint};
///
/// let mut grid = Grid::empty();
/// for (col, digit) in (0..8).zip(Digit::ALL) {
///     grid.place(Position::new(0, col), digit);
/// }
///
/// let hint = find_hint(&grid);
/// assert_eq!(
///     hint,
///     Hint::NakedSingle {
///         position: Position::new(0, 8),
///         digit: Digit::D9,
///     }
/// );
/// assert_eq!(hint.message(), "Cell (1, 9) has only one possible value: 9.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hint {
    /// A blank cell whose candidate set has exactly one digit.
    NakedSingle {
        /// The cell to fill.
        position: Position,
        /// The only digit that can legally fill it.
        digit: Digit,
    },
    /// A digit that fits exactly one cell within a unit.
    HiddenSingle {
        /// The unit the digit is confined in.
        unit: Unit,
        /// The only cell of the unit that can take the digit.
        position: Position,
        /// The digit being placed.
        digit: Digit,
    },
    /// No supported deduction applies to the grid.
    None,
}

impl Hint {
    /// Returns the kind tag for this hint.
    #[must_use]
    pub const fn kind(&self) -> HintKind {
        match self {
            Self::NakedSingle { .. } => HintKind::NakedSingle,
            Self::HiddenSingle { unit, .. } => match unit.kind() {
                UnitKind::Row => HintKind::HiddenSingleRow,
                UnitKind::Column => HintKind::HiddenSingleColumn,
                UnitKind::Block => HintKind::HiddenSingleBlock,
            },
            Self::None => HintKind::None,
        }
    }

    /// Returns the placement the hint asks for, or `None` for [`Hint::None`].
    #[must_use]
    pub const fn placement(&self) -> Option<(Position, Digit)> {
        match self {
            Self::NakedSingle { position, digit }
            | Self::HiddenSingle {
                position, digit, ..
            } => Some((*position, *digit)),
            Self::None => None,
        }
    }

    /// Returns the player-facing message for this hint.
    #[must_use]
    pub fn message(&self) -> String {
        match *self {
            Self::NakedSingle { position, digit } => messages::naked_single(position, digit),
            Self::HiddenSingle {
                unit,
                position,
                digit,
            } => messages::hidden_single(unit, position, digit),
            Self::None => messages::NO_HINT.to_owned(),
        }
    }

    /// Returns the cells to emphasize when presenting this hint.
    ///
    /// Naked singles highlight the target cell alone. Hidden singles
    /// highlight the whole unit in its natural cell order. [`Hint::None`]
    /// highlights nothing.
    #[must_use]
    pub fn highlight_cells(&self) -> Vec<Position> {
        match *self {
            Self::NakedSingle { position, .. } => vec![position],
            Self::HiddenSingle { unit, .. } => unit.cells().to_vec(),
            Self::None => Vec::new(),
        }
    }
}
