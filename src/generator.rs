//! Drawing true equations and finding a single stick to move in them.

use itertools::Itertools;

use crate::error::PuzzleError;
use crate::puzzle::{Puzzle, Slot};
use crate::segments::{Digit, Operator, SegmentCodec};
use crate::validate;

/// Fewest digits a puzzle may have: two operands and a result.
pub const MIN_PUZZLE_SIZE: usize = 3;
/// Most digits a puzzle may have.
///
/// Solutions are found by drawing slots blindly until the equation holds, and the share of draws that hold
/// shrinks quickly with every extra slot, so larger sizes are refused.
pub const MAX_PUZZLE_SIZE: usize = 8;
/// Size used when none is given.
pub const DEFAULT_PUZZLE_SIZE: usize = 3;

/// A puzzle, the solution it came from, and the matchstick that was moved.
///
/// `removed` and `added` are bit positions as understood by [`PuzzleDisplay`](crate::PuzzleDisplay):
/// `removed` is lit in the solution and not in the puzzle, `added` the other way around.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchPuzzle {
    /// The true equation.
    pub solution: Puzzle,
    /// The equation as presented, one move away from `solution`.
    pub puzzle: Puzzle,
    /// Segment taken away from the solution.
    pub removed: usize,
    /// Segment lit instead.
    pub added: usize,
}

/// Generates puzzles of a fixed size from a seeded random stream.
///
/// The same size and seed always produce the same sequence of puzzles.
pub struct Generator {
    size: usize,
    codec: SegmentCodec,
    rng: fastrand::Rng,
}

impl Generator {
    /// A generator of puzzles with `size` digits.
    ///
    /// Fails with [`PuzzleError::SizeOutOfRange`] unless `size` is within [`MIN_PUZZLE_SIZE`]`..=`[`MAX_PUZZLE_SIZE`].
    pub fn new(size: usize, seed: u64) -> Result<Self, PuzzleError> {
        if !(MIN_PUZZLE_SIZE..=MAX_PUZZLE_SIZE).contains(&size) {
            return Err(PuzzleError::SizeOutOfRange { size });
        }

        Ok(Self {
            size,
            codec: SegmentCodec::new(),
            rng: fastrand::Rng::with_seed(seed),
        })
    }

    /// Number of digits in every generated puzzle.
    pub fn size(&self) -> usize {
        self.size
    }

    fn random_slot(&mut self) -> Slot {
        // eleven outcomes, the last standing in for the four-post shape
        let digit = match self.rng.u8(0..=10) {
            10 => Digit::Eleven,
            number => Digit::Number(number),
        };
        let operator = Operator::NAMED[self.rng.usize(..Operator::NAMED.len())];

        Slot::new(operator, digit)
    }

    /// Draw slots uniformly at random, with no regard for validity.
    pub fn random_puzzle(&mut self) -> Puzzle {
        (0..self.size).map(|_| self.random_slot()).collect()
    }

    /// Draw random puzzles until one is a valid solution.
    pub fn random_solution(&mut self) -> Puzzle {
        let mut draws = 0usize;

        loop {
            draws += 1;
            let candidate = self.random_puzzle();

            match validate::check_solution(&candidate) {
                Ok(value) => {
                    log::debug!("found solution {candidate} (both sides {value}) after {draws} draws");
                    return candidate;
                }
                Err(rejection) => log::trace!("rejected {candidate}: {rejection}"),
            }
        }
    }

    /// Look for a single matchstick move turning `solution` into a valid puzzle.
    ///
    /// Every lit segment is tried for removal in ascending position order and, for each,
    /// every segment unlit in the solution is tried for addition, again ascending.
    /// The first combination that reads as a valid start is returned.
    pub fn find_move(&self, solution: &Puzzle) -> Option<MatchPuzzle> {
        let display = solution.to_display();
        let mut examined = 0usize;

        let found = display.lit_positions()
            .cartesian_product(display.unlit_positions())
            .find_map(|(removed, added)| {
                examined += 1;

                let mut candidate = display.clone();
                candidate.flip(removed);
                candidate.flip(added);

                let puzzle = candidate.decode(&self.codec);
                validate::is_valid_start(&puzzle).then(|| MatchPuzzle {
                    solution: solution.clone(),
                    puzzle,
                    removed,
                    added,
                })
            });

        log::debug!("examined {examined} moves from {solution}");
        found
    }

    /// Generate a puzzle, resampling the solution until some move from it works.
    pub fn generate(&mut self) -> MatchPuzzle {
        loop {
            let solution = self.random_solution();

            match self.find_move(&solution) {
                Some(found) => {
                    log::debug!("moved segment {} to {}: {} -> {}", found.removed, found.added, found.solution, found.puzzle);
                    return found;
                }
                None => log::debug!("no single move from {solution} gives a puzzle, resampling"),
            }
        }
    }
}
