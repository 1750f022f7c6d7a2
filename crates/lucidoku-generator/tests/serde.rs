//! JSON representations of seeds and generated puzzles.

#![cfg(feature = "serde")]

use lucidoku_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[test]
fn seeds_serialize_as_hex_strings() {
    let seed = PuzzleSeed::from_bytes([0xab; 32]);
    let json = serde_json::to_string(&seed).unwrap();
    assert_eq!(json.len(), 66);
    assert!(json.contains("abababab"));
    let back: PuzzleSeed = serde_json::from_str(&json).unwrap();
    assert_eq!(back, seed);
}

#[test]
fn seed_deserialization_validates_hex() {
    assert!(serde_json::from_str::<PuzzleSeed>("\"abc\"").is_err());
    let bad = format!("\"{}\"", "z".repeat(64));
    assert!(serde_json::from_str::<PuzzleSeed>(&bad).is_err());
}

#[test]
fn difficulties_serialize_as_variant_names() {
    assert_eq!(
        serde_json::to_string(&Difficulty::Medium).unwrap(),
        "\"Medium\"",
    );
    let back: Difficulty = serde_json::from_str("\"Hard\"").unwrap();
    assert_eq!(back, Difficulty::Hard);
}

#[test]
fn generated_puzzles_round_trip_through_json() {
    let puzzle = PuzzleGenerator::new()
        .generate_with_seed(Difficulty::Easy, PuzzleSeed::from_bytes([9; 32]));
    let json = serde_json::to_string(&puzzle).unwrap();
    let back: GeneratedPuzzle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, puzzle);
}
