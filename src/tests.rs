#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use strum::VariantArray;

    use crate::error::{MathError, PuzzleError, Rejection};
    use crate::evaluate::evaluate;
    use crate::generator::{Generator, MatchPuzzle};
    use crate::puzzle::{Puzzle, Slot};
    use crate::render::{operator_glyph, render};
    use crate::segments::{encode_digit, encode_operator, segment, Digit, Operator, SegmentCodec};
    use crate::validate::{check_solution, check_start, is_valid_solution, is_valid_start};

    fn puzzle(text: &str) -> Puzzle {
        text.parse().unwrap()
    }

    #[test]
    fn digits_round_trip() {
        let codec = SegmentCodec::new();
        for number in 0..10 {
            assert_eq!(codec.decode_digit(encode_digit(Digit::Number(number))), Digit::Number(number));
        }
        for sentinel in [Digit::Eleven, Digit::Empty, Digit::Invalid] {
            assert_eq!(codec.decode_digit(encode_digit(sentinel)), sentinel);
        }
    }

    #[test]
    fn operators_round_trip() {
        let codec = SegmentCodec::new();
        for operator in Operator::VARIANTS {
            assert_eq!(codec.decode_operator(encode_operator(*operator)), *operator);
        }
    }

    #[test]
    fn decoding_covers_every_mask() {
        let codec = SegmentCodec::new();

        let digits = (0..128u8).map(|mask| codec.decode_digit(mask)).collect_vec();
        assert_eq!(digits.iter().filter(|digit| matches!(digit, Digit::Number(_))).count(), 10);
        assert_eq!(digits.iter().filter(|digit| **digit == Digit::Eleven).count(), 1);
        assert_eq!(digits.iter().filter(|digit| **digit == Digit::Empty).count(), 1);
        assert_eq!(digits.iter().filter(|digit| **digit == Digit::Invalid).count(), 116);

        let operators = (0..32u8).map(|mask| codec.decode_operator(mask)).collect_vec();
        assert_eq!(operators.iter().filter(|operator| **operator == Operator::Invalid).count(), 26);

        // stray high bits are not segments
        assert_eq!(codec.decode_digit(0x80 | segment::TOP_RIGHT | segment::BOT_RIGHT), Digit::Number(1));
        assert_eq!(codec.decode_operator(0x20 | segment::HORIZONTAL_1), Operator::Minus);
    }

    #[test]
    fn unary_minus_and_concatenation() {
        assert_eq!(evaluate(&[(Operator::Minus, 5)]), Ok(-5));
        assert_eq!(evaluate(&[(Operator::Empty, 1), (Operator::Empty, 2)]), Ok(12));
        // eleven shifts by two places
        assert_eq!(evaluate(&[(Operator::Empty, 3), (Operator::Empty, 11)]), Ok(311));
        // the sign binds before the digits run together
        assert_eq!(evaluate(&[(Operator::Minus, 1), (Operator::Empty, 2)]), Ok(-8));
    }

    #[test]
    fn exact_division_only() {
        assert_eq!(evaluate(&[(Operator::Empty, 6), (Operator::Divide, 3)]), Ok(2));
        assert_eq!(evaluate(&[(Operator::Empty, 6), (Operator::Divide, 4)]), Err(MathError::InexactDivision { dividend: 6, divisor: 4 }));
        assert_eq!(evaluate(&[(Operator::Empty, 6), (Operator::Divide, 0)]), Err(MathError::DivisionByZero));
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(evaluate(&[(Operator::Empty, 2), (Operator::Plus, 3), (Operator::Multiply, 4)]), Ok(14));
        assert_eq!(evaluate(&[(Operator::Empty, 8), (Operator::Minus, 3), (Operator::Minus, 2)]), Ok(3));
        assert_eq!(evaluate(&[(Operator::Empty, 8), (Operator::Divide, 2), (Operator::Divide, 2)]), Ok(2));
        assert_eq!(evaluate(&[(Operator::Empty, 2), (Operator::Multiply, 1), (Operator::Empty, 2)]), Ok(24));
        // the leading operator of a right-hand side is not an operation
        assert_eq!(evaluate(&[(Operator::Equal, 4), (Operator::Minus, 1)]), Ok(3));
    }

    #[test]
    fn evaluation_failures() {
        assert_eq!(evaluate(&[]), Err(MathError::EmptyExpression));
        assert_eq!(evaluate(&[(Operator::Empty, 1), (Operator::Equal, 1)]), Err(MathError::Unreduced { remaining: 2 }));
        assert_eq!(evaluate(&vec![(Operator::Empty, 9); 20]), Err(MathError::Overflow));
    }

    #[test]
    fn solutions_must_hold() {
        assert!(is_valid_solution(&puzzle("2+2=4")));
        assert_eq!(check_solution(&puzzle("2+2=4")), Ok(4));
        assert_eq!(check_solution(&puzzle("8/2=2*2")), Ok(4));
        assert_eq!(check_solution(&puzzle("2+2=5")), Err(Rejection::Unequal { left: 4, right: 5 }));
        assert_eq!(check_solution(&puzzle("6/4=1")), Err(Rejection::Math(MathError::InexactDivision { dividend: 6, divisor: 4 })));
    }

    #[test]
    fn solutions_must_be_clean() {
        assert_eq!(check_solution(&puzzle("-2+6=4")), Err(Rejection::LeadingOperator(Operator::Minus)));
        // digits run together are a puzzle's business, never a solution's
        assert_eq!(check_solution(&puzzle("12/3=2*2")), Err(Rejection::BadOperator { slot: 1, operator: Operator::Empty }));
        assert_eq!(check_solution(&puzzle("1+1")), Err(Rejection::EqualsCount(0)));
        assert_eq!(check_solution(&puzzle("1=1=1")), Err(Rejection::EqualsCount(2)));
        assert_eq!(check_solution(&puzzle("1+=1")), Err(Rejection::BadDigit { slot: 1, digit: Digit::Empty }));
        assert_eq!(check_solution(&puzzle("1?1=2")), Err(Rejection::BadOperator { slot: 1, operator: Operator::Invalid }));

        let eleven = Puzzle::new(vec![
            Slot::new(Operator::Empty, Digit::Eleven),
            Slot::new(Operator::Equal, Digit::Eleven),
            Slot::new(Operator::Multiply, Digit::Number(1)),
        ]);
        assert_eq!(check_solution(&eleven), Err(Rejection::BadDigit { slot: 0, digit: Digit::Eleven }));
        assert_eq!(check_solution(&Puzzle::default()), Err(Rejection::Empty));
    }

    #[test]
    fn starts_need_only_look_right() {
        assert!(is_valid_start(&puzzle("2+2=5")));
        assert!(is_valid_start(&puzzle("-2+6=4")));
        assert!(is_valid_start(&puzzle("+7=7")));
        assert!(is_valid_start(&puzzle("1+=2")));
        // already true, still acceptable
        assert!(is_valid_start(&puzzle("-3*0=3*0")));
        assert!(is_valid_start(&puzzle("2+2=4")));
        assert!(is_valid_start(&Puzzle::new(vec![
            Slot::new(Operator::Empty, Digit::Eleven),
            Slot::new(Operator::Equal, Digit::Number(1)),
            Slot::new(Operator::Empty, Digit::Number(1)),
        ])));
    }

    #[test]
    fn starts_reject_malformed() {
        assert_eq!(check_start(&puzzle("1=2=3")), Err(Rejection::EqualsCount(2)));
        assert_eq!(check_start(&puzzle("1+2")), Err(Rejection::EqualsCount(0)));
        assert_eq!(check_start(&puzzle("=1+2")), Err(Rejection::LeadingOperator(Operator::Equal)));
        assert_eq!(check_start(&puzzle("*1=1")), Err(Rejection::LeadingOperator(Operator::Multiply)));
        assert_eq!(check_start(&puzzle("/1=1")), Err(Rejection::LeadingOperator(Operator::Divide)));
        assert_eq!(check_start(&puzzle("?1=1")), Err(Rejection::LeadingOperator(Operator::Invalid)));
        assert_eq!(check_start(&puzzle("1?2=3")), Err(Rejection::BadOperator { slot: 1, operator: Operator::Invalid }));
        assert_eq!(check_start(&puzzle("1+?=3")), Err(Rejection::BadDigit { slot: 1, digit: Digit::Invalid }));
        assert_eq!(check_start(&Puzzle::default()), Err(Rejection::Empty));
    }

    #[test]
    fn parse_and_print() {
        let parsed = puzzle("12+3=15");
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed.slots()[1], Slot::new(Operator::Empty, Digit::Number(2)));
        assert_eq!(parsed.to_string(), "12+3=15");

        assert_eq!(puzzle(" 1 + 2 = 3 ").to_string(), "1+2=3");
        assert_eq!(puzzle("3x4=12").to_string(), "3*4=12");
        assert_eq!(puzzle("8÷2=4").to_string(), "8/2=4");
        assert_eq!(puzzle("1+=2").slots(), &[
            Slot::new(Operator::Empty, Digit::Number(1)),
            Slot::new(Operator::Plus, Digit::Empty),
            Slot::new(Operator::Equal, Digit::Number(2)),
        ]);
        assert_eq!(puzzle("??").slots(), &[Slot::new(Operator::Invalid, Digit::Invalid)]);
        assert_eq!(puzzle("1+?").to_string(), "1+?");

        let eleven = Puzzle::new(vec![Slot::new(Operator::Minus, Digit::Eleven)]);
        assert_eq!(eleven.to_string(), "-11");
    }

    #[test]
    fn parse_failures() {
        assert_eq!(" 1+a".parse::<Puzzle>(), Err(PuzzleError::UnexpectedCharacter { character: 'a', position: 3 }));
        assert_eq!("".parse::<Puzzle>(), Err(PuzzleError::Empty));
        assert_eq!("   ".parse::<Puzzle>(), Err(PuzzleError::Empty));
    }

    #[test]
    fn bit_addressing() {
        let codec = SegmentCodec::new();

        let display = puzzle("1+1").to_display();
        assert_eq!(display.bit_count(), 24);
        // digit posts of the first 1, then the second 1, then the middle bar and vertical of +
        assert_eq!(display.lit_positions().collect_vec(), vec![2, 6, 14, 18, 19, 23]);

        let mut display = puzzle("1").to_display();
        display.flip(7);
        assert_eq!(display.decode(&codec).to_string(), "-1");
        display.flip(7);
        display.flip(0);
        assert_eq!(display.decode(&codec).to_string(), "7");
        assert_eq!(display.differing_positions(&puzzle("1").to_display()), vec![0]);
    }

    #[test]
    fn first_move_in_scan_order() {
        let generator = Generator::new(3, 0).unwrap();
        let solution = puzzle("2+2=4");

        // the lower left post of the first 2 moves to the lower right, making a 3
        assert_eq!(generator.find_move(&solution), Some(MatchPuzzle {
            solution: solution.clone(),
            puzzle: puzzle("3+2=4"),
            removed: 4,
            added: 6,
        }));
    }

    #[test]
    fn size_bounds() {
        assert_eq!(Generator::new(2, 0).err(), Some(PuzzleError::SizeOutOfRange { size: 2 }));
        assert_eq!(Generator::new(9, 0).err(), Some(PuzzleError::SizeOutOfRange { size: 9 }));
        assert_eq!(Generator::new(3, 0).unwrap().size(), 3);
        assert_eq!(Generator::new(8, 0).unwrap().size(), 8);
    }

    #[test]
    fn random_solutions_hold() {
        let mut generator = Generator::new(4, 11).unwrap();
        for _ in 0..5 {
            let solution = generator.random_solution();
            assert_eq!(solution.len(), 4);
            assert!(is_valid_solution(&solution));
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        for size in 3..=5 {
            let first = Generator::new(size, 42).unwrap().generate();
            let second = Generator::new(size, 42).unwrap().generate();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn one_move_from_a_solution() {
        for (size, seed) in (3..=5).cartesian_product(0..4u64) {
            let found = Generator::new(size, seed).unwrap().generate();

            assert!(is_valid_solution(&found.solution));
            assert!(is_valid_start(&found.puzzle));
            assert!(!found.puzzle.to_string().contains('\n'));

            let solution = found.solution.to_display();
            let puzzle = found.puzzle.to_display();
            assert!(solution.bit(found.removed));
            assert!(!solution.bit(found.added));
            assert_eq!(solution.differing_positions(&puzzle), vec![found.removed.min(found.added), found.removed.max(found.added)]);
            assert_eq!(solution.lit_positions().count(), puzzle.lit_positions().count());
        }
    }

    #[test]
    fn render_digit() {
        assert_eq!(render(&puzzle("1").to_display()), "
     #
     #
     #
     #

     #
     #
     #
     #

");
    }

    #[test]
    fn render_sign_and_digit() {
        assert_eq!(render(&puzzle("-1").to_display()), "
           #
           #
           #
           #
#####
           #
           #
           #
           #

");
    }

    #[test]
    fn operator_glyphs() {
        let rows = |operator| operator_glyph(encode_operator(operator)).rows()
            .into_iter()
            .map(|row| row.iter().collect::<String>())
            .collect_vec();

        assert_eq!(rows(Operator::Multiply), vec!["#   #", " # # ", "  #  ", " # # ", "#   #"]);
        assert_eq!(rows(Operator::Plus), vec!["  #  ", "  #  ", "#####", "  #  ", "  #  "]);
        assert_eq!(rows(Operator::Equal), vec!["     ", "     ", "#####", "     ", "#####"]);
    }

    #[cfg(feature = "wasm")]
    #[test]
    fn wasm_bindings() {
        let expected = Generator::new(3, 7).unwrap().generate().puzzle.to_string();
        assert_eq!(crate::wasm::generate(3, 7).ok(), Some(expected));
        assert_eq!(crate::wasm::render_text("1").ok(), Some(render(&puzzle("1").to_display())));
    }
}
