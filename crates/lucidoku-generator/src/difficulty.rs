//! Puzzle difficulty levels.

use derive_more::Display;

/// How aggressively a completed board is carved into a puzzle.
///
/// Difficulty is purely a matter of how many digits are removed; the
/// harder the level, the fewer givens remain.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Removes 30 digits, leaving 51 givens.
    #[display("easy")]
    Easy,
    /// Removes 45 digits, leaving 36 givens.
    #[display("medium")]
    Medium,
    /// Removes 55 digits, leaving 26 givens.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// The number of cells cleared from a completed board.
    #[must_use]
    pub const fn removed_cells(self) -> u8 {
        match self {
            Self::Easy => 30,
            Self::Medium => 45,
            Self::Hard => 55,
        }
    }
}
