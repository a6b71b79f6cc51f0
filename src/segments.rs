//! Seven-segment digits, five-stick operators, and the masks that draw them.

use std::fmt::{Display, Formatter};

use strum::VariantArray;

/// Lit segments of a seven-segment digit, one bit per segment (see [`segment`]).
pub type DigitMask = u8;
/// Lit segments of an operator glyph, one bit per segment (see [`segment`]).
pub type OperatorMask = u8;

/// Number of physical segments in a digit glyph.
pub const DIGIT_SEGMENTS: usize = 7;
/// Number of physical segments in an operator glyph.
pub const OPERATOR_SEGMENTS: usize = 5;

const DIGIT_MASK_SPACE: usize = 1 << DIGIT_SEGMENTS;
const OPERATOR_MASK_SPACE: usize = 1 << OPERATOR_SEGMENTS;

/// The individual segments, as bits of a [`DigitMask`] or an [`OperatorMask`].
pub mod segment {
    use super::{DigitMask, OperatorMask};

    /// Top bar of a digit.
    pub const TOP_MID: DigitMask = 1 << 0;
    /// Upper left post of a digit.
    pub const TOP_LEFT: DigitMask = 1 << 1;
    /// Upper right post of a digit.
    pub const TOP_RIGHT: DigitMask = 1 << 2;
    /// Middle bar of a digit.
    pub const MID_MID: DigitMask = 1 << 3;
    /// Lower left post of a digit.
    pub const BOT_LEFT: DigitMask = 1 << 4;
    /// Bottom bar of a digit.
    pub const BOT_MID: DigitMask = 1 << 5;
    /// Lower right post of a digit.
    pub const BOT_RIGHT: DigitMask = 1 << 6;

    /// Middle bar of an operator, shared by `+`, `-` and `=`.
    pub const HORIZONTAL_1: OperatorMask = 1 << 0;
    /// Lower bar of an operator, the second stroke of `=`.
    pub const HORIZONTAL_2: OperatorMask = 1 << 1;
    /// Rising diagonal, `/`.
    pub const DIAGONAL_1: OperatorMask = 1 << 2;
    /// Falling diagonal, `\`.
    pub const DIAGONAL_2: OperatorMask = 1 << 3;
    /// Vertical stroke of `+`.
    pub const VERTICAL: OperatorMask = 1 << 4;
}

use segment::*;

const DIGITS: [DigitMask; 10] = [
    TOP_MID | TOP_LEFT | TOP_RIGHT | BOT_LEFT | BOT_RIGHT | BOT_MID, // 0
    TOP_RIGHT | BOT_RIGHT, // 1
    TOP_MID | TOP_RIGHT | MID_MID | BOT_LEFT | BOT_MID, // 2
    TOP_MID | TOP_RIGHT | MID_MID | BOT_RIGHT | BOT_MID, // 3
    TOP_LEFT | TOP_RIGHT | MID_MID | BOT_RIGHT, // 4
    TOP_MID | TOP_LEFT | MID_MID | BOT_RIGHT | BOT_MID, // 5
    TOP_MID | TOP_LEFT | MID_MID | BOT_LEFT | BOT_MID | BOT_RIGHT, // 6
    TOP_MID | TOP_RIGHT | BOT_RIGHT, // 7
    TOP_MID | TOP_LEFT | TOP_RIGHT | MID_MID | BOT_LEFT | BOT_MID | BOT_RIGHT, // 8
    TOP_MID | TOP_LEFT | TOP_RIGHT | MID_MID | BOT_MID | BOT_RIGHT, // 9
];

// two posts on each side, read as "11"
const ELEVEN: DigitMask = TOP_LEFT | TOP_RIGHT | BOT_LEFT | BOT_RIGHT;

// an "E", drawn wherever a digit could not be recognized
const ERROR_DIGIT: DigitMask = TOP_MID | TOP_LEFT | MID_MID | BOT_LEFT | BOT_MID;

/// The symbolic value of a digit position.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Digit {
    /// A decimal digit, `0..=9`.
    Number(u8),
    /// The four-post shape, which reads as 11 but is never a final digit.
    Eleven,
    /// No segments lit; the slot holds only an operator.
    #[default]
    Empty,
    /// Lit segments that form no recognized digit.
    Invalid,
}

impl Digit {
    /// Numeric value of this digit, [`None`] for [`Empty`](Self::Empty) and [`Invalid`](Self::Invalid).
    pub fn value(self) -> Option<i64> {
        match self {
            Self::Number(number) => Some(i64::from(number)),
            Self::Eleven => Some(11),
            Self::Empty | Self::Invalid => None,
        }
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Eleven => write!(f, "11"),
            Self::Empty => Ok(()),
            Self::Invalid => write!(f, "?"),
        }
    }
}

/// The symbolic value of an operator position.
#[derive(Clone, Copy, Debug, Default, strum::Display, Eq, Hash, PartialEq, VariantArray)]
pub enum Operator {
    /// `+`
    #[strum(to_string = "+")]
    Plus,
    /// `-`, either binary or as a leading sign
    #[strum(to_string = "-")]
    Minus,
    /// `*`
    #[strum(to_string = "*")]
    Multiply,
    /// `/`, only ever exact
    #[strum(to_string = "/")]
    Divide,
    /// `=`
    #[strum(to_string = "=")]
    Equal,
    /// No operator; between two digits this concatenates them.
    #[default]
    #[strum(to_string = "")]
    Empty,
    /// Lit segments that form no recognized operator.
    #[strum(to_string = "?")]
    Invalid,
}

impl Operator {
    /// Every operator a well-formed equation may contain, i.e. all but [`Invalid`](Self::Invalid).
    pub const NAMED: &'static [Self] = &[
        Self::Plus,
        Self::Minus,
        Self::Multiply,
        Self::Divide,
        Self::Equal,
        Self::Empty,
    ];
}

/// Segment mask drawing `digit`.
///
/// [`Digit::Empty`] draws nothing and [`Digit::Invalid`] draws an "E" shape, which itself decodes as invalid.
/// A [`Digit::Number`] above 9 is a caller error and is drawn as invalid.
pub fn encode_digit(digit: Digit) -> DigitMask {
    match digit {
        Digit::Number(number) => match DIGITS.get(usize::from(number)) {
            Some(mask) => *mask,
            None => {
                debug_assert!(false, "{number} is not a single digit");
                ERROR_DIGIT
            }
        },
        Digit::Eleven => ELEVEN,
        Digit::Empty => 0,
        Digit::Invalid => ERROR_DIGIT,
    }
}

/// Segment mask drawing `operator`. [`Operator::Invalid`] lights every operator segment.
pub fn encode_operator(operator: Operator) -> OperatorMask {
    match operator {
        Operator::Plus => HORIZONTAL_1 | VERTICAL,
        Operator::Minus => HORIZONTAL_1,
        Operator::Multiply => DIAGONAL_1 | DIAGONAL_2,
        Operator::Divide => DIAGONAL_1,
        Operator::Equal => HORIZONTAL_1 | HORIZONTAL_2,
        Operator::Empty => 0,
        Operator::Invalid => HORIZONTAL_1 | HORIZONTAL_2 | DIAGONAL_1 | DIAGONAL_2 | VERTICAL,
    }
}

/// Inverse lookup tables from every possible mask to its symbolic value.
///
/// Built once, then only read; pass it by reference to whatever needs to decode.
#[derive(Clone, Debug)]
pub struct SegmentCodec {
    digits: [Digit; DIGIT_MASK_SPACE],
    operators: [Operator; OPERATOR_MASK_SPACE],
}

impl Default for SegmentCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentCodec {
    /// Build both tables. Any mask not assigned a symbol decodes as invalid.
    pub fn new() -> Self {
        let mut digits = [Digit::Invalid; DIGIT_MASK_SPACE];
        digits[0] = Digit::Empty;
        for (number, mask) in (0..).zip(DIGITS) {
            digits[usize::from(mask)] = Digit::Number(number);
        }
        digits[usize::from(ELEVEN)] = Digit::Eleven;

        let mut operators = [Operator::Invalid; OPERATOR_MASK_SPACE];
        for operator in Operator::VARIANTS {
            operators[usize::from(encode_operator(*operator))] = *operator;
        }

        Self { digits, operators }
    }

    /// Read a digit mask. Bits above the seven digit segments are ignored.
    #[inline]
    pub fn decode_digit(&self, mask: DigitMask) -> Digit {
        self.digits[usize::from(mask) % DIGIT_MASK_SPACE]
    }

    /// Read an operator mask. Bits above the five operator segments are ignored.
    #[inline]
    pub fn decode_operator(&self, mask: OperatorMask) -> Operator {
        self.operators[usize::from(mask) % OPERATOR_MASK_SPACE]
    }
}
