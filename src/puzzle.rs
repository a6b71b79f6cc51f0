//! Equations as symbols ([`Puzzle`]) and as lit segments ([`PuzzleDisplay`]).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

use crate::error::PuzzleError;
use crate::segments::{encode_digit, encode_operator, Digit, DigitMask, Operator, OperatorMask, SegmentCodec, DIGIT_SEGMENTS, OPERATOR_SEGMENTS};

/// Bit positions owned by each slot of a [`PuzzleDisplay`]: the digit segments, then the operator segments.
pub const SEGMENTS_PER_SLOT: usize = DIGIT_SEGMENTS + OPERATOR_SEGMENTS;

/// One position of an equation: an operator followed by a digit.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Slot {
    /// The operator in front of the digit; for the first slot, the leading sign if any.
    pub operator: Operator,
    /// The digit.
    pub digit: Digit,
}

impl Slot {
    /// Shorthand for a slot holding `digit` preceded by `operator`.
    pub fn new(operator: Operator, digit: Digit) -> Self {
        Self { operator, digit }
    }
}

/// An equation as a sequence of symbolic [`Slot`]s.
///
/// Printing (via [`Display`]) writes operators as `+ - * / =`, digits in decimal, `?` for anything invalid and nothing for empty values.
/// Parsing (via [`FromStr`]) reads that text back; see [`Puzzle::from_str`] for the rules.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Puzzle {
    slots: Vec<Slot>,
}

impl Puzzle {
    /// Wrap `slots` as a puzzle. No validity is implied; see [`validate`](crate::validate).
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// The slots, in order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Draw every slot as segment masks.
    pub fn to_display(&self) -> PuzzleDisplay {
        PuzzleDisplay::new(self.slots.iter()
            .map(|slot| SlotMask {
                operator: encode_operator(slot.operator),
                digit: encode_digit(slot.digit),
            })
            .collect_vec())
    }
}

impl FromIterator<Slot> for Puzzle {
    fn from_iter<T: IntoIterator<Item=Slot>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for slot in &self.slots {
            write!(f, "{}{}", slot.operator, slot.digit)?;
        }

        Ok(())
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    /// Read a puzzle back from text.
    ///
    /// Every decimal digit is its own slot, so `11` reads as two slots of 1.
    /// An operator belongs to the digit after it; an operator with no digit after it (another operator follows, or the text ends) gets an empty digit.
    /// `*`, `x` and `×` are multiplication, `/` and `÷` division.
    /// `?` is an invalid operator when a digit or another `?` follows it and an invalid digit otherwise.
    /// Whitespace is skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let characters = s.char_indices()
            .filter(|(_, character)| !character.is_whitespace())
            .collect_vec();

        let mut slots = Vec::with_capacity(characters.len());
        let mut pending: Option<Operator> = None;

        for (index, &(position, character)) in characters.iter().enumerate() {
            let digit = match character {
                '0'..='9' => Some(Digit::Number(character as u8 - b'0')),
                '?' => match characters.get(index + 1) {
                    Some((_, next)) if next.is_ascii_digit() || *next == '?' => None,
                    _ => Some(Digit::Invalid),
                },
                _ => None,
            };

            if let Some(digit) = digit {
                slots.push(Slot::new(pending.take().unwrap_or_default(), digit));
                continue;
            }

            let operator = match character {
                '+' => Operator::Plus,
                '-' => Operator::Minus,
                '*' | 'x' | '×' => Operator::Multiply,
                '/' | '÷' => Operator::Divide,
                '=' => Operator::Equal,
                '?' => Operator::Invalid,
                _ => return Err(PuzzleError::UnexpectedCharacter { character, position }),
            };

            if let Some(previous) = pending.replace(operator) {
                slots.push(Slot::new(previous, Digit::Empty));
            }
        }

        if let Some(trailing) = pending {
            slots.push(Slot::new(trailing, Digit::Empty));
        }

        if slots.is_empty() {
            return Err(PuzzleError::Empty);
        }

        Ok(Self::new(slots))
    }
}

/// The segments lit in one slot.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SlotMask {
    /// Operator segments.
    pub operator: OperatorMask,
    /// Digit segments.
    pub digit: DigitMask,
}

/// An equation as raw segment masks, i.e. the matchsticks as laid out.
///
/// Individual segments are addressed by a flat bit position: slot `position / SEGMENTS_PER_SLOT`,
/// then within the slot the seven digit segments followed by the five operator segments.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct PuzzleDisplay {
    slots: Vec<SlotMask>,
}

impl PuzzleDisplay {
    /// Wrap a sequence of masks.
    pub fn new(slots: Vec<SlotMask>) -> Self {
        Self { slots }
    }

    /// The masks, in order.
    pub fn slots(&self) -> &[SlotMask] {
        &self.slots
    }

    /// Number of addressable segment positions.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.slots.len() * SEGMENTS_PER_SLOT
    }

    /// Whether the segment at `position` is lit.
    ///
    /// # Panics
    /// If `position` is not below [`Self::bit_count`].
    pub fn bit(&self, position: usize) -> bool {
        let slot = &self.slots[position / SEGMENTS_PER_SLOT];
        match position % SEGMENTS_PER_SLOT {
            bit if bit < DIGIT_SEGMENTS => (slot.digit >> bit) & 1 == 1,
            bit => (slot.operator >> (bit - DIGIT_SEGMENTS)) & 1 == 1,
        }
    }

    /// Toggle the segment at `position`.
    ///
    /// # Panics
    /// If `position` is not below [`Self::bit_count`].
    pub fn flip(&mut self, position: usize) {
        let slot = &mut self.slots[position / SEGMENTS_PER_SLOT];
        match position % SEGMENTS_PER_SLOT {
            bit if bit < DIGIT_SEGMENTS => slot.digit ^= 1 << bit,
            bit => slot.operator ^= 1 << (bit - DIGIT_SEGMENTS),
        }
    }

    /// Positions of lit segments, ascending.
    pub fn lit_positions(&self) -> impl Iterator<Item=usize> + Clone + '_ {
        (0..self.bit_count()).filter(|position| self.bit(*position))
    }

    /// Positions of unlit segments, ascending.
    pub fn unlit_positions(&self) -> impl Iterator<Item=usize> + Clone + '_ {
        (0..self.bit_count()).filter(|position| !self.bit(*position))
    }

    /// Positions at which `self` and `other` differ, ascending.
    /// Slots present in only one of the two are ignored.
    pub fn differing_positions(&self, other: &Self) -> Vec<usize> {
        (0..self.bit_count().min(other.bit_count()))
            .filter(|position| self.bit(*position) != other.bit(*position))
            .collect_vec()
    }

    /// Read every mask back into symbols. Unrecognized shapes become the invalid sentinels.
    pub fn decode(&self, codec: &SegmentCodec) -> Puzzle {
        self.slots.iter()
            .map(|mask| Slot {
                operator: codec.decode_operator(mask.operator),
                digit: codec.decode_digit(mask.digit),
            })
            .collect()
    }
}
