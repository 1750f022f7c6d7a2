//! The board and its rule queries.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, Position, Unit, UnitKind};

/// A nine-by-nine Sudoku board where each cell holds a digit or is blank.
///
/// The grid stores cell contents only. It never rejects a placement on its
/// own; [`is_valid`](Self::is_valid) and [`candidates`](Self::candidates)
/// answer rule questions for one cell at a time against the current contents.
///
/// Grids parse from strings where `1`-`9` fill a cell, `.`, `_`, or `0`
/// leave it blank, and whitespace is ignored.
///
/// # Examples
///
/// ```
/// use lucidoku_core::{Digit, Grid, Position};
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// let corner = Position::new(0, 2);
/// assert!(grid.is_blank(corner));
/// assert!(grid.is_valid(corner, Digit::D1));
/// assert!(!grid.is_valid(corner, Digit::D5));
/// # Ok::<(), lucidoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Digit>; 9]; 9],
}

impl Grid {
    /// Creates a grid with every cell blank.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Returns the digit at `pos`, or `None` for a blank cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Writes `digit` at `pos`, replacing any existing digit.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = Some(digit);
    }

    /// Blanks the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = None;
    }

    /// Returns `true` if the cell at `pos` is blank.
    #[must_use]
    pub fn is_blank(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        Position::ALL
            .into_iter()
            .filter(|&pos| !self.is_blank(pos))
            .count()
    }

    /// Returns `true` if no cell is blank.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled_count() == 81
    }

    /// Returns `true` if placing `digit` at `pos` would break no rule.
    ///
    /// Only the other cells of the row, column, and block of `pos` are
    /// examined, so a digit already sitting at `pos` never conflicts with
    /// itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucidoku_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::empty();
    /// let pos = Position::new(2, 2);
    /// grid.place(pos, Digit::D4);
    ///
    /// assert!(grid.is_valid(pos, Digit::D4));
    /// assert!(!grid.is_valid(Position::new(2, 5), Digit::D4));
    /// assert!(!grid.is_valid(Position::new(0, 0), Digit::D4));
    /// assert!(grid.is_valid(Position::new(5, 5), Digit::D4));
    /// ```
    #[must_use]
    pub fn is_valid(&self, pos: Position, digit: Digit) -> bool {
        for kind in [UnitKind::Row, UnitKind::Column, UnitKind::Block] {
            for cell in Unit::containing(pos, kind).cells() {
                if cell != pos && self.get(cell) == Some(digit) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the digits that could legally fill the blank cell at `pos`.
    ///
    /// Filled cells have no candidates; the result is empty for them.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucidoku_core::{Digit, DigitSet, Grid, Position};
    ///
    /// let mut grid = Grid::empty();
    /// assert_eq!(grid.candidates(Position::new(0, 8)), DigitSet::FULL);
    ///
    /// for (col, digit) in (0..8).zip(Digit::ALL) {
    ///     grid.place(Position::new(0, col), digit);
    /// }
    /// let candidates = grid.candidates(Position::new(0, 8));
    /// assert_eq!(candidates.as_single(), Some(Digit::D9));
    /// ```
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        if !self.is_blank(pos) {
            return DigitSet::EMPTY;
        }
        let mut candidates = DigitSet::EMPTY;
        for digit in Digit::ALL {
            if self.is_valid(pos, digit) {
                candidates.insert(digit);
            }
        }
        candidates
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

/// Error from parsing a grid string.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseGridError {
    /// A character other than digits, blank markers, and whitespace appeared.
    #[display("unexpected character: {character:?}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The string did not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(81);
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let cell = match character {
                '.' | '_' | '0' => None,
                '1' => Some(Digit::D1),
                '2' => Some(Digit::D2),
                '3' => Some(Digit::D3),
                '4' => Some(Digit::D4),
                '5' => Some(Digit::D5),
                '6' => Some(Digit::D6),
                '7' => Some(Digit::D7),
                '8' => Some(Digit::D8),
                '9' => Some(Digit::D9),
                _ => return Err(ParseGridError::UnexpectedCharacter { character }),
            };
            cells.push(cell);
        }
        if cells.len() != 81 {
            return Err(ParseGridError::WrongCellCount { count: cells.len() });
        }
        let mut grid = Self::empty();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            if let Some(digit) = cell {
                grid.place(pos, digit);
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Position::ALL {
            match self.get(pos) {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str("_")?,
            }
        }
        Ok(())
    }
}

/// Error for a numeric cell value outside `0..=9`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid cell value: {value}")]
pub struct InvalidCellValue {
    /// The rejected value.
    pub value: u8,
}

impl TryFrom<[[u8; 9]; 9]> for Grid {
    type Error = InvalidCellValue;

    fn try_from(values: [[u8; 9]; 9]) -> Result<Self, Self::Error> {
        let mut grid = Self::empty();
        for pos in Position::ALL {
            let value = values[usize::from(pos.row())][usize::from(pos.col())];
            if value == 0 {
                continue;
            }
            let digit = Digit::new(value).ok_or(InvalidCellValue { value })?;
            grid.place(pos, digit);
        }
        Ok(grid)
    }
}

impl From<&Grid> for [[u8; 9]; 9] {
    fn from(grid: &Grid) -> Self {
        let mut values = [[0; 9]; 9];
        for pos in Position::ALL {
            if let Some(digit) = grid.get(pos) {
                values[usize::from(pos.row())][usize::from(pos.col())] = digit.value();
            }
        }
        values
    }
}

impl From<Grid> for [[u8; 9]; 9] {
    fn from(grid: Grid) -> Self {
        Self::from(&grid)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&<[[u8; 9]; 9]>::from(self), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = <[[u8; 9]; 9] as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(values).map_err(serde::de::Error::custom)
    }
}
