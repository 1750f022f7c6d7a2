//! Step-by-step proofs for hints.

use lucidoku_core::{Digit, Grid, Position, Unit, UnitKind};

use crate::{Hint, messages};

/// How a highlighted cell participates in a proof step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighlightRole {
    /// The cell the hint places a digit in.
    Target,
    /// A placed digit that rules a candidate out.
    Source,
    /// The remaining cells of the unit a conflict travels along.
    Line,
    /// A cell of the unit being scanned.
    Context,
    /// The cell currently under test.
    Check,
}

/// A cell to draw attention to while presenting a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightCell {
    /// The cell to highlight.
    pub position: Position,
    /// What the cell contributes to the step.
    pub role: HighlightRole,
}

/// One step of a hint's explanation.
///
/// A proof opens with an introduction, walks through one elimination per
/// ruled-out candidate or cell, and closes with a conclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisStep {
    /// The prose for this step.
    pub message: String,
    /// Cells to highlight, each listed at most once per step.
    pub highlights: Vec<HighlightCell>,
    /// The digit this step rules out, if it eliminates one.
    pub invalid_digit: Option<Digit>,
    /// The cell under test in a unit scan, if any.
    pub checked_cell: Option<Position>,
    /// Whether this step states the final placement.
    pub is_conclusion: bool,
}

/// Explains why a hint's placement is forced, one step at a time.
///
/// The proof depends only on the grid and the hint, so the same inputs
/// always produce the same steps. [`Hint::None`] has nothing to prove and
/// yields no steps.
///
/// # Examples
///
/// ```
/// use lucidoku_core::Grid;
/// use lucidoku_solver::{explain, find_hint};
///
/// let grid: Grid = "
///     123 456 78_
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
/// "
/// .parse()?;
///
/// let steps = explain(&grid, &find_hint(&grid));
/// assert_eq!(steps.len(), 10);
/// assert!(steps[0].message.starts_with("Cell (1, 9) is blank."));
/// assert!(steps[9].is_conclusion);
/// # Ok::<(), lucidoku_core::ParseGridError>(())
/// ```
#[must_use]
pub fn explain(grid: &Grid, hint: &Hint) -> Vec<AnalysisStep> {
    match *hint {
        Hint::NakedSingle { position, digit } => naked_single_proof(grid, position, digit),
        Hint::HiddenSingle {
            unit,
            position,
            digit,
        } => hidden_single_proof(grid, unit, position, digit),
        Hint::None => Vec::new(),
    }
}

/// Proves a naked single by ruling out every other digit at the target.
fn naked_single_proof(grid: &Grid, target: Position, digit: Digit) -> Vec<AnalysisStep> {
    let mut steps = vec![AnalysisStep {
        message: messages::candidate_check_intro(target),
        highlights: vec![HighlightCell {
            position: target,
            role: HighlightRole::Target,
        }],
        invalid_digit: None,
        checked_cell: None,
        is_conclusion: false,
    }];

    for candidate in Digit::ALL {
        if candidate == digit {
            continue;
        }
        // A stale hint may leave a candidate without a conflict; such
        // candidates simply get no step.
        let Some((unit, source)) = first_conflict(grid, target, candidate, None) else {
            continue;
        };
        let mut highlights = vec![
            HighlightCell {
                position: target,
                role: HighlightRole::Target,
            },
            HighlightCell {
                position: source,
                role: HighlightRole::Source,
            },
        ];
        for cell in unit.cells() {
            push_unique(&mut highlights, cell, HighlightRole::Line);
        }
        steps.push(AnalysisStep {
            message: messages::digit_conflict(candidate, source, unit.kind()),
            highlights,
            invalid_digit: Some(candidate),
            checked_cell: None,
            is_conclusion: false,
        });
    }

    steps.push(AnalysisStep {
        message: messages::forced_value(target, digit),
        highlights: vec![HighlightCell {
            position: target,
            role: HighlightRole::Target,
        }],
        invalid_digit: None,
        checked_cell: None,
        is_conclusion: true,
    });
    steps
}

/// Proves a hidden single by ruling the digit out of every other blank in
/// the unit.
fn hidden_single_proof(
    grid: &Grid,
    unit: Unit,
    target: Position,
    digit: Digit,
) -> Vec<AnalysisStep> {
    let mut intro_highlights = Vec::new();
    for cell in unit.cells() {
        if cell != target {
            intro_highlights.push(HighlightCell {
                position: cell,
                role: HighlightRole::Context,
            });
        }
    }
    intro_highlights.push(HighlightCell {
        position: target,
        role: HighlightRole::Target,
    });
    let mut steps = vec![AnalysisStep {
        message: messages::unit_scan_intro(unit, digit),
        highlights: intro_highlights,
        invalid_digit: None,
        checked_cell: None,
        is_conclusion: false,
    }];

    for checked in unit.cells() {
        if checked == target || !grid.is_blank(checked) {
            continue;
        }
        // The hidden unit's own shape is excluded so the conflict comes
        // from a crossing unit.
        let Some((conflict_unit, source)) =
            first_conflict(grid, checked, digit, Some(unit.kind()))
        else {
            continue;
        };
        let mut highlights = Vec::new();
        for cell in unit.cells() {
            if cell != checked && cell != target {
                highlights.push(HighlightCell {
                    position: cell,
                    role: HighlightRole::Context,
                });
            }
        }
        push_unique(&mut highlights, checked, HighlightRole::Check);
        push_unique(&mut highlights, source, HighlightRole::Source);
        for cell in conflict_unit.cells() {
            if cell != target {
                push_unique(&mut highlights, cell, HighlightRole::Line);
            }
        }
        push_unique(&mut highlights, target, HighlightRole::Target);
        steps.push(AnalysisStep {
            message: messages::cell_conflict(checked, digit, source, conflict_unit.kind()),
            highlights,
            invalid_digit: Some(digit),
            checked_cell: Some(checked),
            is_conclusion: false,
        });
    }

    steps.push(AnalysisStep {
        message: messages::sole_home(unit, target, digit),
        highlights: vec![HighlightCell {
            position: target,
            role: HighlightRole::Target,
        }],
        invalid_digit: None,
        checked_cell: None,
        is_conclusion: true,
    });
    steps
}

/// Finds the first placed `digit` sharing a unit with `from`.
///
/// Units are searched row, then column, then block, each in natural cell
/// order, so the returned conflict is deterministic.
fn first_conflict(
    grid: &Grid,
    from: Position,
    digit: Digit,
    exclude: Option<UnitKind>,
) -> Option<(Unit, Position)> {
    for kind in [UnitKind::Row, UnitKind::Column, UnitKind::Block] {
        if exclude == Some(kind) {
            continue;
        }
        let unit = Unit::containing(from, kind);
        for cell in unit.cells() {
            if cell != from && grid.get(cell) == Some(digit) {
                return Some((unit, cell));
            }
        }
    }
    None
}

/// Appends a highlight unless the cell is already listed.
///
/// The first role a cell picks up wins.
fn push_unique(highlights: &mut Vec<HighlightCell>, position: Position, role: HighlightRole) {
    if highlights.iter().all(|cell| cell.position != position) {
        highlights.push(HighlightCell { position, role });
    }
}
