//! Backtracking board fill and random cell removal.

use lucidoku_core::{Digit, Grid, Position};
use rand::{RngExt as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

use crate::{Difficulty, PuzzleSeed};

/// Placements tried before a single fill attempt is abandoned.
const FILL_STEP_LIMIT: usize = 250_000;
/// Fill attempts before generation gives up entirely.
const FILL_ATTEMPT_LIMIT: usize = 32;

/// A puzzle together with the completed board it was carved from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedPuzzle {
    /// The requested difficulty.
    pub difficulty: Difficulty,
    /// The board with cells removed, ready to play.
    pub puzzle: Grid,
    /// The completed board the puzzle was carved from.
    pub solution: Grid,
    /// The seed that reproduces this puzzle exactly.
    pub seed: PuzzleSeed,
}

/// Generates random Sudoku puzzles.
///
/// Generation fills an empty board by randomized backtracking, then clears
/// random cells until the difficulty's removal count is reached. The
/// carved solution is kept alongside the puzzle. Removed cells are drawn
/// uniformly, so nothing here guarantees the puzzle has a unique solution.
///
/// # Examples
///
/// ```
/// use lucidoku_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate(Difficulty::Medium);
/// assert_eq!(puzzle.puzzle.filled_count(), 81 - 45);
/// assert!(puzzle.solution.is_full());
/// ```
///
/// Passing a seed makes the result reproducible:
///
/// ```
/// use lucidoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::from_bytes([7; 32]);
/// let first = generator.generate_with_seed(Difficulty::Easy, seed);
/// let second = generator.generate_with_seed(Difficulty::Easy, seed);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a puzzle from a freshly drawn random seed.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle a seed determines.
    ///
    /// The same seed and difficulty always produce the same puzzle and
    /// solution.
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = generate_full_board(&mut rng);
        let mut puzzle = solution.clone();
        remove_cells(&mut puzzle, difficulty.removed_cells(), &mut rng);
        GeneratedPuzzle {
            difficulty,
            puzzle,
            solution,
            seed,
        }
    }
}

/// Produces a completed board by randomized backtracking.
///
/// # Panics
///
/// Panics if every attempt runs out of steps, which would take a board
/// with no completion; an empty board always has one.
fn generate_full_board(rng: &mut Pcg64Mcg) -> Grid {
    for attempt in 1..=FILL_ATTEMPT_LIMIT {
        let mut grid = Grid::empty();
        let mut steps = 0;
        if fill_board(&mut grid, rng, &mut steps) {
            log::debug!("filled a board in {steps} steps on attempt {attempt}");
            return grid;
        }
        log::debug!("fill attempt {attempt} exceeded {FILL_STEP_LIMIT} steps, retrying");
    }
    unreachable!("an empty board always admits a completion")
}

/// Fills the first blank cell with a shuffled digit and recurses.
///
/// Dead ends clear the cell again before the next digit is tried. Returns
/// `false` once `steps` passes the limit, abandoning the attempt.
fn fill_board(grid: &mut Grid, rng: &mut Pcg64Mcg, steps: &mut usize) -> bool {
    let Some(position) = first_blank(grid) else {
        return true;
    };
    *steps += 1;
    if *steps > FILL_STEP_LIMIT {
        return false;
    }

    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if grid.is_valid(position, digit) {
            grid.place(position, digit);
            if fill_board(grid, rng, steps) {
                return true;
            }
            grid.clear(position);
        }
    }
    false
}

fn first_blank(grid: &Grid) -> Option<Position> {
    Position::ALL
        .into_iter()
        .find(|&position| grid.is_blank(position))
}

/// Clears `count` distinct filled cells at uniformly random positions.
///
/// The row is drawn before the column each time; the draw order is part
/// of what a seed reproduces.
fn remove_cells(grid: &mut Grid, count: u8, rng: &mut Pcg64Mcg) {
    let mut remaining = count;
    while remaining > 0 {
        let row = rng.random_range(0..9);
        let col = rng.random_range(0..9);
        let position = Position::new(row, col);
        if grid.is_blank(position) {
            continue;
        }
        grid.clear(position);
        remaining -= 1;
    }
    log::debug!(
        "removed {count} cells, {} givens remain",
        grid.filled_count()
    );
}

#[cfg(test)]
mod tests {
    use lucidoku_core::{DigitSet, Unit};
    use proptest::prelude::*;

    use super::*;

    fn unit_is_complete(grid: &Grid, unit: Unit) -> bool {
        let mut digits = DigitSet::EMPTY;
        for cell in unit.cells() {
            let Some(digit) = grid.get(cell) else {
                return false;
            };
            digits.insert(digit);
        }
        digits == DigitSet::FULL
    }

    #[test]
    fn full_boards_satisfy_every_unit() {
        let mut rng = PuzzleSeed::from_bytes([3; 32]).rng();
        let grid = generate_full_board(&mut rng);
        assert!(grid.is_full());
        for unit in Unit::ALL {
            assert!(unit_is_complete(&grid, unit), "{unit}");
        }
    }

    #[test]
    fn difficulties_remove_the_advertised_counts() {
        let generator = PuzzleGenerator::new();
        for difficulty in Difficulty::ALL {
            let puzzle = generator.generate(difficulty);
            let blanks = 81 - puzzle.puzzle.filled_count();
            assert_eq!(blanks, usize::from(difficulty.removed_cells()), "{difficulty}");
        }
    }

    #[test]
    fn puzzles_agree_with_their_solutions() {
        let puzzle = PuzzleGenerator::new().generate(Difficulty::Hard);
        for position in Position::ALL {
            if let Some(digit) = puzzle.puzzle.get(position) {
                assert_eq!(puzzle.solution.get(position), Some(digit), "{position}");
            }
        }
    }

    #[test]
    fn seeds_reproduce_puzzles() {
        let generator = PuzzleGenerator::new();
        let seed = PuzzleSeed::from_bytes([42; 32]);
        assert_eq!(
            generator.generate_with_seed(Difficulty::Medium, seed),
            generator.generate_with_seed(Difficulty::Medium, seed),
        );
    }

    #[test]
    fn distinct_seeds_diverge() {
        let generator = PuzzleGenerator::new();
        let first =
            generator.generate_with_seed(Difficulty::Medium, PuzzleSeed::from_bytes([1; 32]));
        let second =
            generator.generate_with_seed(Difficulty::Medium, PuzzleSeed::from_bytes([2; 32]));
        assert_ne!(first.puzzle, second.puzzle);
    }

    #[test]
    fn difficulty_changes_only_the_removals() {
        // The solution comes from draws made before any cell is removed,
        // so it depends on the seed alone.
        let generator = PuzzleGenerator::new();
        let seed = PuzzleSeed::from_bytes([8; 32]);
        let easy = generator.generate_with_seed(Difficulty::Easy, seed);
        let hard = generator.generate_with_seed(Difficulty::Hard, seed);
        assert_eq!(easy.solution, hard.solution);
        assert!(easy.puzzle.filled_count() > hard.puzzle.filled_count());
    }

    proptest! {
        #[test]
        fn any_seed_yields_a_coherent_puzzle(bytes in any::<[u8; 32]>()) {
            let puzzle = PuzzleGenerator::new()
                .generate_with_seed(Difficulty::Easy, PuzzleSeed::from_bytes(bytes));
            prop_assert!(puzzle.solution.is_full());
            for unit in Unit::ALL {
                prop_assert!(unit_is_complete(&puzzle.solution, unit));
            }
            prop_assert_eq!(puzzle.puzzle.filled_count(), 81 - 30);
        }
    }
}
