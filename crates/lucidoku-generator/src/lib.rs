//! Seeded Sudoku puzzle generation.
//!
//! A [`PuzzleGenerator`] fills an empty board by randomized backtracking
//! and then carves a puzzle out of it by removing random cells, 30, 45,
//! or 55 of them depending on [`Difficulty`]. Every puzzle is fully
//! determined by a [`PuzzleSeed`], so a 64-character hex string is enough
//! to reproduce it anywhere.
//!
//! # Examples
//!
//! ```
//! use lucidoku_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(Difficulty::Easy);
//!
//! println!("seed: {}", puzzle.seed);
//! println!("{}", puzzle.puzzle);
//!
//! // The seed string round trips, so the puzzle can be regenerated.
//! let seed = puzzle.seed.to_string().parse()?;
//! let again = generator.generate_with_seed(Difficulty::Easy, seed);
//! assert_eq!(again, puzzle);
//! # Ok::<(), lucidoku_generator::ParseSeedError>(())
//! ```

mod difficulty;
mod generator;
mod seed;

pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
