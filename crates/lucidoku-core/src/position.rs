//! Board coordinates.

use std::fmt;

/// A cell coordinate on the nine-by-nine board.
///
/// Rows and columns are zero-based internally. [`Display`](fmt::Display)
/// renders the one-based `(row, column)` form shown to players.
///
/// # Examples
///
/// ```
/// use lucidoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.block_index(), 5);
/// assert_eq!(pos.to_string(), "(5, 8)");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Every cell in row-major order.
    pub const ALL: [Self; 81] = {
        let mut cells = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < cells.len() {
            cells[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        cells
    };

    /// Creates a position from zero-based coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is `9` or more.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9, "row out of range");
        assert!(col < 9, "column out of range");
        Self { row, col }
    }

    /// Returns the zero-based row index.
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the zero-based column index.
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the zero-based index of the 3x3 block containing this cell,
    /// counted row-major from the top-left.
    #[inline]
    #[must_use]
    pub const fn block_index(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            row: u8,
            col: u8,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        if raw.row < 9 && raw.col < 9 {
            Ok(Self::new(raw.row, raw.col))
        } else {
            Err(serde::de::Error::custom(format!(
                "position out of range: ({}, {})",
                raw.row, raw.col
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(0, 8));
        assert_eq!(Position::ALL[9], Position::new(1, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
    }

    #[test]
    #[should_panic(expected = "row out of range")]
    fn new_rejects_large_row() {
        let _ = Position::new(9, 0);
    }

    #[test]
    #[should_panic(expected = "column out of range")]
    fn new_rejects_large_col() {
        let _ = Position::new(0, 9);
    }

    #[test]
    fn block_index_is_row_major() {
        assert_eq!(Position::new(0, 0).block_index(), 0);
        assert_eq!(Position::new(2, 8).block_index(), 2);
        assert_eq!(Position::new(4, 4).block_index(), 4);
        assert_eq!(Position::new(8, 0).block_index(), 6);
        assert_eq!(Position::new(8, 8).block_index(), 8);
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "(1, 1)");
        assert_eq!(Position::new(8, 8).to_string(), "(9, 9)");
    }
}
