//! Human-style hints for Sudoku grids.
//!
//! This crate searches a [`Grid`](lucidoku_core::Grid) the way a person
//! would. [`find_hint`] scans for naked singles first, then hidden singles
//! in rows, columns, and blocks, and [`explain`] turns any hint into a
//! short proof of why the placement is forced.
//!
//! # Examples
//!
//! ```
//! use lucidoku_core::Grid;
//! use lucidoku_solver::{explain, find_hint};
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let hint = find_hint(&grid);
//! assert_eq!(hint.message(), "Cell (5, 5) has only one possible value: 5.");
//!
//! for step in explain(&grid, &hint) {
//!     println!("{}", step.message);
//! }
//! # Ok::<(), lucidoku_core::ParseGridError>(())
//! ```

pub mod strategy;

mod analysis;
mod hint;
mod hint_finder;
mod messages;

pub use self::{
    analysis::{AnalysisStep, HighlightCell, HighlightRole, explain},
    hint::{Hint, HintKind},
    hint_finder::{HintFinder, find_hint},
};
