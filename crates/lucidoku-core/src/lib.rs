//! Core data structures for Sudoku engines.
//!
//! This crate provides the board model shared by puzzle generation and
//! hint deduction: digits, cell coordinates, units, candidate sets, and the
//! grid itself.
//!
//! # Overview
//!
//! - [`digit`]: type-safe digits `1`-`9`
//! - [`position`]: zero-based cell coordinates with a one-based display form
//! - [`unit`]: rows, columns, and 3x3 blocks as first-class values
//! - [`digit_set`]: bit-packed sets of digits, used for candidates
//! - [`grid`]: the nine-by-nine board with per-cell rule queries
//!
//! The grid never rejects placements on its own. Rule questions are asked
//! one cell at a time through [`Grid::is_valid`] and [`Grid::candidates`],
//! which lets callers model in-progress boards, contradictions included.
//!
//! # Examples
//!
//! ```
//! use lucidoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::empty();
//! grid.place(Position::new(0, 0), Digit::D5);
//!
//! // The same digit cannot appear twice in a row, column, or block.
//! assert!(!grid.is_valid(Position::new(0, 8), Digit::D5));
//! assert!(!grid.candidates(Position::new(2, 2)).contains(Digit::D5));
//! assert!(grid.candidates(Position::new(3, 3)).contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;
pub mod unit;

pub use self::{
    digit::Digit,
    digit_set::{DigitSet, Digits},
    grid::{Grid, InvalidCellValue, ParseGridError},
    position::Position,
    unit::{Unit, UnitKind},
};
