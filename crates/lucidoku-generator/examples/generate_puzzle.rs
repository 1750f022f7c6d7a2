//! Example demonstrating seeded Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Generate a puzzle at a chosen difficulty
//! - Reproduce a puzzle from its seed
//! - Walk the puzzle hint by hint, printing each proof
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty (default: medium):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Regenerate a known puzzle from its 64-character hex seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <SEED>
//! ```
//!
//! Walk the solve, printing every hint with its proof steps:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --explain
//! ```
//!
//! Generation progress is logged through `env_logger`; enable it with
//! `RUST_LOG=debug`.

use clap::{Parser, ValueEnum};
use lucidoku_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use lucidoku_solver::{explain, find_hint};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Self::Easy,
            Level::Medium => Self::Medium,
            Level::Hard => Self::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty of the generated puzzle.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: Level,

    /// Seed as 64 hex characters; drawn at random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Walk the puzzle hint by hint, printing each proof.
    #[arg(long)]
    explain: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = PuzzleGenerator::new();
    let difficulty = Difficulty::from(args.difficulty);
    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(difficulty, seed),
        None => generator.generate(difficulty),
    };

    print_puzzle(&puzzle);
    if args.explain {
        walk_hints(&puzzle);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!("  {}", puzzle.difficulty);
    println!();
    println!("Puzzle:");
    println!("  {}", puzzle.puzzle);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}

fn walk_hints(puzzle: &GeneratedPuzzle) {
    let mut grid = puzzle.puzzle.clone();
    let mut placed = 0_usize;
    loop {
        let hint = find_hint(&grid);
        let Some((position, digit)) = hint.placement() else {
            break;
        };
        placed += 1;
        println!();
        println!("Hint {placed}: {}", hint.message());
        for (i, step) in explain(&grid, &hint).iter().enumerate() {
            println!("  {}. {}", i + 1, step.message);
        }
        grid.place(position, digit);
    }

    println!();
    if grid.is_full() {
        println!("Solved with {placed} hints.");
    } else {
        println!("No simple hints left after {placed} placements.");
    }
}
