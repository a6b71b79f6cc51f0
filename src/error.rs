//! Failures of evaluation and validation, and of building or parsing puzzles.

use crate::generator::{MAX_PUZZLE_SIZE, MIN_PUZZLE_SIZE};
use crate::segments::{Digit, Operator};

/// Reasons an expression fails to evaluate to an integer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum MathError {
    /// A `/` with a right-hand side of zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A `/` that would leave a remainder; division is only ever exact.
    #[error("{dividend} is not divisible by {divisor}")]
    InexactDivision {
        /// Left-hand side.
        dividend: i64,
        /// Right-hand side.
        divisor: i64,
    },
    /// An intermediate result left the range of `i64`.
    #[error("arithmetic overflow")]
    Overflow,
    /// There was nothing to evaluate.
    #[error("empty expression")]
    EmptyExpression,
    /// Some operator (such as `=`) belongs to no precedence tier and kept terms apart.
    #[error("{remaining} terms left after reduction")]
    Unreduced {
        /// Terms still standing.
        remaining: usize,
    },
}

/// The first rule a puzzle broke when checked by [`validate`](crate::validate).
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Rejection {
    /// The puzzle has no slots at all.
    #[error("puzzle has no slots")]
    Empty,
    /// The operator in front of the first digit is not allowed there.
    #[error("leading operator {0:?} not allowed")]
    LeadingOperator(Operator),
    /// A non-leading operator is not allowed.
    #[error("operator {operator:?} not allowed at slot {slot}")]
    BadOperator {
        /// Index of the offending slot.
        slot: usize,
        /// What was found there.
        operator: Operator,
    },
    /// A digit is not allowed.
    #[error("digit {digit:?} not allowed at slot {slot}")]
    BadDigit {
        /// Index of the offending slot.
        slot: usize,
        /// What was found there.
        digit: Digit,
    },
    /// Anything but exactly one `=` after the first slot.
    #[error("expected exactly one '=', found {0}")]
    EqualsCount(usize),
    /// One side of the equation does not evaluate.
    #[error(transparent)]
    Math(#[from] MathError),
    /// Both sides evaluate, to different numbers.
    #[error("sides differ: {left} != {right}")]
    Unequal {
        /// Value before the `=`.
        left: i64,
        /// Value from the `=` on.
        right: i64,
    },
}

/// Errors building or reading a puzzle from user input.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PuzzleError {
    /// A generator was asked for a puzzle with too few or too many digits.
    #[error("puzzle size must be between {min} and {max}, got {size}", min = MIN_PUZZLE_SIZE, max = MAX_PUZZLE_SIZE)]
    SizeOutOfRange {
        /// The size asked for.
        size: usize,
    },
    /// Puzzle text contained something that is neither a digit nor an operator.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The character.
        character: char,
        /// Its byte offset in the text.
        position: usize,
    },
    /// Puzzle text contained no slots.
    #[error("puzzle text contains no slots")]
    Empty,
}
