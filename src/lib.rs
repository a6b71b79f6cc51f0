#![warn(missing_docs)]

//! # `matchstick`
//!
//! A generator for "move one matchstick" puzzles: something shaped like an arithmetic equation, laid out in seven-segment digits
//! and matchstick operators, which a single moved stick turns back into a true one.
//! The puzzle as shown is only checked for shape, so now and then it happens to hold already.
//! Create a [`Generator`] with a puzzle size and a seed, then call [`generate()`](Generator::generate) to get a [`MatchPuzzle`].
//!
//! # Internals
//! Every symbol has two forms.
//! The symbolic form ([`Puzzle`], made of [`Slot`]s holding an [`Operator`] and a [`Digit`]) is what gets evaluated and validated.
//! The segment form ([`PuzzleDisplay`]) is a bitmask per digit and per operator, i.e. the sticks themselves.
//! [`SegmentCodec`] turns any mask back into a symbol, mapping shapes it does not recognize to the invalid sentinels.
//!
//! Generation goes as follows:
//! 1. Draw random slots until they form a true equation with exactly one `=` and no leading sign (see [`validate::check_solution`]).
//! 2. Lay the solution out as masks. For each lit segment in turn, switch it off, and for each segment that was dark in the solution,
//!    switch it on, then read the result back into symbols.
//! 3. The first result that looks like an equation (see [`validate::check_start`]) is the puzzle.
//!    If there is none, start over with a new solution.
//!
//! Evaluation ([`evaluate::evaluate`]) reads a leading `-` as a sign, runs adjacent digits together into one number,
//! then applies `*` and `/` before `+` and `-`, always left to right. Division must be exact.

pub use error::{MathError, PuzzleError, Rejection};
pub use generator::{Generator, MatchPuzzle};
pub use puzzle::{Puzzle, PuzzleDisplay, Slot, SlotMask};
pub use segments::{Digit, Operator, SegmentCodec};

pub mod error;
pub mod evaluate;
pub mod generator;
pub mod puzzle;
pub mod render;
pub mod segments;
mod tests;
pub mod validate;
#[cfg(feature = "wasm")]
pub mod wasm;
