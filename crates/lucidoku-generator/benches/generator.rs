//! Benchmarks for Sudoku puzzle generation.
//!
//! This benchmark suite measures full seeded generation: the backtracking
//! board fill plus the removal of cells for the requested difficulty.
//!
//! # Benchmarks
//!
//! - **`generator_easy`**: Generates easy puzzles (30 cells removed).
//! - **`generator_medium`**: Generates medium puzzles (45 cells removed).
//! - **`generator_hard`**: Generates hard puzzles (55 cells removed).
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while covering
//! multiple cases:
//!
//! - **`seed_0`**: `0f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c4b5a69788796a5b4c3d2e1f0`
//! - **`seed_1`**: `deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! Each seed produces a different board, so the measurements span several
//! backtracking workloads while staying reproducible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use lucidoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "0f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c4b5a69788796a5b4c3d2e1f0",
    "deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();

    for difficulty in Difficulty::ALL {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generator_{difficulty}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(difficulty, seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets = bench_generator
);
criterion_main!(benches);
