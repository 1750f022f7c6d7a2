//! Hints found on a generated puzzle must agree with its solution.
//!
//! A hint's placement is forced by the givens, and the carved solution
//! satisfies every given, so each hinted digit has to match the solution.
//! The walk may stop before the board fills; nothing guarantees a puzzle
//! stays solvable by singles alone.

use lucidoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
use lucidoku_solver::find_hint;

#[test]
fn hinted_digits_match_the_carved_solution() {
    let generator = PuzzleGenerator::new();
    for difficulty in Difficulty::ALL {
        for fill in [5_u8, 77, 130] {
            let puzzle = generator.generate_with_seed(difficulty, PuzzleSeed::from_bytes([fill; 32]));

            let mut grid = puzzle.puzzle.clone();
            while let Some((position, digit)) = find_hint(&grid).placement() {
                assert_eq!(
                    puzzle.solution.get(position),
                    Some(digit),
                    "{difficulty} puzzle from seed {}",
                    puzzle.seed,
                );
                grid.place(position, digit);
            }
        }
    }
}
