//! Acceptance rules for solutions and for puzzles.
//!
//! The two rules are deliberately lopsided.
//! A solution must be a clean equation that actually holds.
//! A puzzle only has to look like an equation: signs in front are allowed, digits may be missing or read as 11,
//! and whether it holds is never checked.

use crate::error::Rejection;
use crate::evaluate::{evaluate, Term};
use crate::puzzle::Puzzle;
use crate::segments::{Digit, Operator};

/// Check that `puzzle` is a true equation fit to be a solution, returning the value of both sides.
///
/// The first slot has no operator, every other slot has a non-empty valid operator,
/// every digit is `0..=9`, and there is exactly one `=` with equal values on either side of it.
pub fn check_solution(puzzle: &Puzzle) -> Result<i64, Rejection> {
    let (leading, rest) = puzzle.slots().split_first().ok_or(Rejection::Empty)?;

    if leading.operator != Operator::Empty {
        return Err(Rejection::LeadingOperator(leading.operator));
    }

    if let Some((index, slot)) = rest.iter()
        .enumerate()
        .find(|(_, slot)| matches!(slot.operator, Operator::Invalid | Operator::Empty)) {
        return Err(Rejection::BadOperator { slot: index + 1, operator: slot.operator });
    }

    let terms = puzzle.slots().iter()
        .enumerate()
        .map(|(index, slot)| {
            let value = match slot.digit {
                Digit::Eleven => None,
                digit => digit.value(),
            };
            value.map(|value| (slot.operator, value))
                .ok_or(Rejection::BadDigit { slot: index, digit: slot.digit })
        })
        .collect::<Result<Vec<Term>, _>>()?;

    let equals = equals_position(puzzle)?;
    let left = evaluate(&terms[..equals])?;
    let right = evaluate(&terms[equals..])?;

    if left != right {
        return Err(Rejection::Unequal { left, right });
    }

    Ok(left)
}

/// Check that `puzzle` is shaped like an equation, whether or not it holds.
///
/// The first slot may carry `+`, `-` or nothing, no other operator is invalid,
/// no digit is invalid, and there is exactly one `=`.
pub fn check_start(puzzle: &Puzzle) -> Result<(), Rejection> {
    let (leading, rest) = puzzle.slots().split_first().ok_or(Rejection::Empty)?;

    if matches!(leading.operator, Operator::Invalid | Operator::Equal | Operator::Multiply | Operator::Divide) {
        return Err(Rejection::LeadingOperator(leading.operator));
    }

    if let Some(index) = rest.iter().position(|slot| slot.operator == Operator::Invalid) {
        return Err(Rejection::BadOperator { slot: index + 1, operator: Operator::Invalid });
    }

    if let Some(index) = puzzle.slots().iter().position(|slot| slot.digit == Digit::Invalid) {
        return Err(Rejection::BadDigit { slot: index, digit: Digit::Invalid });
    }

    equals_position(puzzle).map(|_| ())
}

/// Whether `puzzle` passes [`check_solution`].
#[inline]
pub fn is_valid_solution(puzzle: &Puzzle) -> bool {
    check_solution(puzzle).is_ok()
}

/// Whether `puzzle` passes [`check_start`].
#[inline]
pub fn is_valid_start(puzzle: &Puzzle) -> bool {
    check_start(puzzle).is_ok()
}

// the index of the only `=` after the first slot
fn equals_position(puzzle: &Puzzle) -> Result<usize, Rejection> {
    let positions = puzzle.slots().iter()
        .enumerate()
        .skip(1)
        .filter(|(_, slot)| slot.operator == Operator::Equal)
        .map(|(index, _)| index)
        .collect::<Vec<_>>();

    match positions.as_slice() {
        [only] => Ok(*only),
        _ => Err(Rejection::EqualsCount(positions.len())),
    }
}
