//! Matchstick drawings of puzzles, one `#` per lit cell.

use itertools::Itertools;
use ndarray::{s, Array2};

use crate::puzzle::PuzzleDisplay;
use crate::segments::segment::*;
use crate::segments::{DigitMask, OperatorMask};

const LIT: char = '#';
const UNLIT: char = ' ';

/// Rows of a digit glyph, and so of a rendered puzzle.
pub const DIGIT_HEIGHT: usize = 11;
/// Columns of a digit glyph.
pub const DIGIT_WIDTH: usize = 6;
/// Rows and columns of an operator glyph.
pub const OPERATOR_SIZE: usize = 5;

/// Draw a digit mask on a [`DIGIT_HEIGHT`] by [`DIGIT_WIDTH`] grid.
pub fn digit_glyph(mask: DigitMask) -> Array2<char> {
    let mut glyph = Array2::from_elem((DIGIT_HEIGHT, DIGIT_WIDTH), UNLIT);
    let lit = |segment: DigitMask| mask & segment != 0;

    for (segment, row) in [(TOP_MID, 0), (MID_MID, DIGIT_HEIGHT / 2), (BOT_MID, DIGIT_HEIGHT - 1)] {
        if lit(segment) {
            glyph.row_mut(row).fill(LIT);
        }
    }

    let upper = 1..DIGIT_HEIGHT / 2;
    let lower = DIGIT_HEIGHT / 2 + 1..DIGIT_HEIGHT - 1;
    for (segment, rows, column) in [
        (TOP_LEFT, upper.clone(), 0),
        (TOP_RIGHT, upper, DIGIT_WIDTH - 1),
        (BOT_LEFT, lower.clone(), 0),
        (BOT_RIGHT, lower, DIGIT_WIDTH - 1),
    ] {
        if lit(segment) {
            glyph.slice_mut(s![rows, column]).fill(LIT);
        }
    }

    glyph
}

/// Draw an operator mask on an [`OPERATOR_SIZE`] square grid.
pub fn operator_glyph(mask: OperatorMask) -> Array2<char> {
    let mut glyph = Array2::from_elem((OPERATOR_SIZE, OPERATOR_SIZE), UNLIT);
    let lit = |segment: OperatorMask| mask & segment != 0;
    let middle = OPERATOR_SIZE / 2;

    if lit(HORIZONTAL_1) {
        glyph.row_mut(middle).fill(LIT);
    }
    if lit(HORIZONTAL_2) {
        glyph.row_mut(OPERATOR_SIZE - 1).fill(LIT);
    }
    if lit(VERTICAL) {
        glyph.column_mut(middle).fill(LIT);
    }
    for index in 0..OPERATOR_SIZE {
        if lit(DIAGONAL_1) {
            glyph[[index, OPERATOR_SIZE - 1 - index]] = LIT;
        }
        if lit(DIAGONAL_2) {
            glyph[[index, index]] = LIT;
        }
    }

    glyph
}

/// Draw a whole puzzle left to right, operators centred on the digits.
///
/// Empty masks take no space; glyphs are separated by one blank column and trailing blanks are trimmed from every line.
pub fn render(display: &PuzzleDisplay) -> String {
    let glyphs = display.slots().iter()
        .flat_map(|slot| [
            (slot.operator != 0).then(|| operator_glyph(slot.operator)),
            (slot.digit != 0).then(|| digit_glyph(slot.digit)),
        ])
        .flatten()
        .collect_vec();

    let width = glyphs.iter().map(|glyph| glyph.ncols()).sum::<usize>() + glyphs.len().saturating_sub(1);
    let mut canvas = Array2::from_elem((DIGIT_HEIGHT, width), UNLIT);

    let mut column = 0;
    for glyph in &glyphs {
        let top = (DIGIT_HEIGHT - glyph.nrows()) / 2;
        canvas.slice_mut(s![top..top + glyph.nrows(), column..column + glyph.ncols()]).assign(glyph);
        column += glyph.ncols() + 1;
    }

    print(&canvas)
}

fn print(canvas: &Array2<char>) -> String {
    let mut out = String::with_capacity(canvas.nrows() * (canvas.ncols() + 1));

    for row in canvas.rows() {
        let line: String = row.iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
