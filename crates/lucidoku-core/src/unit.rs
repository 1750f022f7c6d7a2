//! Rows, columns, and 3x3 blocks.

use std::fmt;

use crate::Position;

/// The three unit shapes of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// A horizontal line of nine cells.
    Row,
    /// A vertical line of nine cells.
    Column,
    /// A 3x3 block of cells.
    Block,
}

/// A row, column, or 3x3 block.
///
/// Units are the scopes Sudoku rules quantify over: a solved board holds
/// nine distinct digits in every unit. Indices are zero-based and must be
/// below nine.
///
/// # Examples
///
/// ```
/// use lucidoku_core::{Position, Unit, UnitKind};
///
/// let unit = Unit::containing(Position::new(4, 7), UnitKind::Block);
/// assert_eq!(unit, Unit::Block(5));
/// assert!(unit.contains(Position::new(3, 6)));
/// assert_eq!(unit.to_string(), "block 6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Unit {
    /// The row with the given zero-based index, top to bottom.
    Row(u8),
    /// The column with the given zero-based index, left to right.
    Column(u8),
    /// The 3x3 block with the given zero-based index, row-major from the
    /// top-left.
    Block(u8),
}

impl Unit {
    /// All rows, top to bottom.
    pub const ROWS: [Self; 9] = [
        Self::Row(0),
        Self::Row(1),
        Self::Row(2),
        Self::Row(3),
        Self::Row(4),
        Self::Row(5),
        Self::Row(6),
        Self::Row(7),
        Self::Row(8),
    ];

    /// All columns, left to right.
    pub const COLUMNS: [Self; 9] = [
        Self::Column(0),
        Self::Column(1),
        Self::Column(2),
        Self::Column(3),
        Self::Column(4),
        Self::Column(5),
        Self::Column(6),
        Self::Column(7),
        Self::Column(8),
    ];

    /// All blocks in row-major order.
    pub const BLOCKS: [Self; 9] = [
        Self::Block(0),
        Self::Block(1),
        Self::Block(2),
        Self::Block(3),
        Self::Block(4),
        Self::Block(5),
        Self::Block(6),
        Self::Block(7),
        Self::Block(8),
    ];

    /// All 27 units: rows, then columns, then blocks.
    pub const ALL: [Self; 27] = {
        let mut units = [Self::Row(0); 27];
        let mut i = 0;
        while i < 9 {
            units[i] = Self::ROWS[i];
            units[i + 9] = Self::COLUMNS[i];
            units[i + 18] = Self::BLOCKS[i];
            i += 1;
        }
        units
    };

    /// Returns the unit of the given shape that contains `pos`.
    #[must_use]
    pub const fn containing(pos: Position, kind: UnitKind) -> Self {
        match kind {
            UnitKind::Row => Self::Row(pos.row()),
            UnitKind::Column => Self::Column(pos.col()),
            UnitKind::Block => Self::Block(pos.block_index()),
        }
    }

    /// Returns the shape of this unit.
    #[must_use]
    pub const fn kind(self) -> UnitKind {
        match self {
            Self::Row(_) => UnitKind::Row,
            Self::Column(_) => UnitKind::Column,
            Self::Block(_) => UnitKind::Block,
        }
    }

    /// Returns the zero-based index of this unit within its shape.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Row(index) | Self::Column(index) | Self::Block(index) => index,
        }
    }

    /// Returns the nine cells of this unit.
    ///
    /// Rows and columns list cells in ascending coordinate order. Blocks are
    /// row-major within the block.
    ///
    /// # Panics
    ///
    /// Panics if the unit was built with an index of `9` or more.
    #[must_use]
    pub const fn cells(self) -> [Position; 9] {
        let mut cells = [Position::new(0, 0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < cells.len() {
            cells[i] = self.cell(i as u8);
            i += 1;
        }
        cells
    }

    const fn cell(self, i: u8) -> Position {
        match self {
            Self::Row(row) => Position::new(row, i),
            Self::Column(col) => Position::new(i, col),
            Self::Block(block) => Position::new(block / 3 * 3 + i / 3, block % 3 * 3 + i % 3),
        }
    }

    /// Returns `true` if `pos` lies within this unit.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            Self::Row(row) => pos.row() == row,
            Self::Column(col) => pos.col() == col,
            Self::Block(block) => pos.block_index() == block,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(row) => write!(f, "row {}", row + 1),
            Self::Column(col) => write!(f, "column {}", col + 1),
            Self::Block(block) => write!(f, "block {}", block + 1),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        enum Raw {
            Row(u8),
            Column(u8),
            Block(u8),
        }

        let unit = match <Raw as serde::Deserialize>::deserialize(deserializer)? {
            Raw::Row(index) => Self::Row(index),
            Raw::Column(index) => Self::Column(index),
            Raw::Block(index) => Self::Block(index),
        };
        if unit.index() < 9 {
            Ok(unit)
        } else {
            Err(serde::de::Error::custom(format!(
                "unit index out of range: {}",
                unit.index()
            )))
        }
    }
}
