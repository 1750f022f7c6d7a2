//! Message templates for hints and proof steps.
//!
//! Wording lives here so the deduction code hands out structured data and a
//! presentation layer can restyle the text without touching the logic.

use lucidoku_core::{Digit, Position, Unit, UnitKind};

/// Text shown when no supported deduction applies.
pub(crate) const NO_HINT: &str =
    "No simple hints found. Try guessing or using advanced techniques.";

pub(crate) fn naked_single(position: Position, digit: Digit) -> String {
    format!("Cell {position} has only one possible value: {digit}.")
}

pub(crate) fn hidden_single(unit: Unit, position: Position, digit: Digit) -> String {
    match unit {
        Unit::Row(row) => format!(
            "In row {}, the number {digit} can only go in cell {position}.",
            row + 1
        ),
        Unit::Column(col) => format!(
            "In column {}, the number {digit} can only go in cell {position}.",
            col + 1
        ),
        Unit::Block(_) => {
            format!("In this 3x3 block, the number {digit} can only go in cell {position}.")
        }
    }
}

pub(crate) fn candidate_check_intro(target: Position) -> String {
    format!("Cell {target} is blank. Check each digit against its row, column, and 3x3 block.")
}

pub(crate) fn digit_conflict(digit: Digit, source: Position, kind: UnitKind) -> String {
    format!(
        "The number {digit} already appears at {source} in this {}, so {digit} cannot go here.",
        unit_phrase(kind)
    )
}

pub(crate) fn forced_value(target: Position, digit: Digit) -> String {
    format!("Every digit except {digit} is ruled out. Cell {target} must be {digit}.")
}

pub(crate) fn unit_scan_intro(unit: Unit, digit: Digit) -> String {
    match unit {
        Unit::Row(row) => format!(
            "The number {digit} must appear somewhere in row {}. Check each blank cell.",
            row + 1
        ),
        Unit::Column(col) => format!(
            "The number {digit} must appear somewhere in column {}. Check each blank cell.",
            col + 1
        ),
        Unit::Block(_) => {
            format!("The number {digit} must appear somewhere in this 3x3 block. Check each blank cell.")
        }
    }
}

pub(crate) fn cell_conflict(
    checked: Position,
    digit: Digit,
    source: Position,
    kind: UnitKind,
) -> String {
    format!(
        "Cell {checked} cannot hold {digit}: it already appears at {source} in its {}.",
        unit_phrase(kind)
    )
}

pub(crate) fn sole_home(unit: Unit, target: Position, digit: Digit) -> String {
    match unit {
        Unit::Row(row) => format!(
            "Cell {target} is the only cell in row {} that can hold {digit}.",
            row + 1
        ),
        Unit::Column(col) => format!(
            "Cell {target} is the only cell in column {} that can hold {digit}.",
            col + 1
        ),
        Unit::Block(_) => {
            format!("Cell {target} is the only cell in this 3x3 block that can hold {digit}.")
        }
    }
}

fn unit_phrase(kind: UnitKind) -> &'static str {
    match kind {
        UnitKind::Row => "row",
        UnitKind::Column => "column",
        UnitKind::Block => "3x3 block",
    }
}
