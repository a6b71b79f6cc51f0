//! Integer evaluation of one side of an equation.
//!
//! Concatenation binds tightest, then `*` and `/`, then `+` and `-`, each tier folded left to right.

use crate::error::MathError;
use crate::segments::Operator;

/// One slot of an expression: the operator in front of a number, and the number.
pub type Term = (Operator, i64);

/// Evaluate one side of an equation.
///
/// Precedence tiers are applied one after another, each strictly left to right:
/// 1. a leading `-` negates the first number (any other leading operator is ignored);
/// 2. an [`Empty`](Operator::Empty) operator appends a number to the one before it,
///    shifting by two decimal places instead of one when the appended number is 11;
/// 3. `*` and `/`, where `/` must divide exactly;
/// 4. `+` and `-`.
///
/// Anything left over, such as a second `=`, is [`MathError::Unreduced`].
pub fn evaluate(terms: &[Term]) -> Result<i64, MathError> {
    let Some((&(leading, first), rest)) = terms.split_first() else {
        return Err(MathError::EmptyExpression);
    };

    let mut signed = Vec::with_capacity(terms.len());
    signed.push(match leading {
        Operator::Minus => (leading, first.checked_neg().ok_or(MathError::Overflow)?),
        _ => (leading, first),
    });
    signed.extend_from_slice(rest);

    let concatenated = fold_tier(signed, |operator, lhs, rhs| match operator {
        Operator::Empty => Some(concatenate(lhs, rhs)),
        _ => None,
    })?;

    let multiplied = fold_tier(concatenated, |operator, lhs, rhs| match operator {
        Operator::Multiply => Some(lhs.checked_mul(rhs).ok_or(MathError::Overflow)),
        Operator::Divide => Some(divide_exact(lhs, rhs)),
        _ => None,
    })?;

    let summed = fold_tier(multiplied, |operator, lhs, rhs| match operator {
        Operator::Plus => Some(lhs.checked_add(rhs).ok_or(MathError::Overflow)),
        Operator::Minus => Some(lhs.checked_sub(rhs).ok_or(MathError::Overflow)),
        _ => None,
    })?;

    match summed.as_slice() {
        [(_, result)] => Ok(*result),
        _ => Err(MathError::Unreduced { remaining: summed.len() }),
    }
}

/// Merge every term whose operator `combine` recognizes into the term on its left.
///
/// `combine` returns [`None`] for operators outside this tier; those terms are kept as they are.
/// The first term is never combined, whatever its operator.
fn fold_tier<F>(terms: Vec<Term>, mut combine: F) -> Result<Vec<Term>, MathError>
where
    F: FnMut(Operator, i64, i64) -> Option<Result<i64, MathError>>,
{
    let mut reduced: Vec<Term> = Vec::with_capacity(terms.len());

    for (operator, value) in terms {
        let merged = match reduced.last_mut() {
            Some(last) => match combine(operator, last.1, value) {
                Some(result) => {
                    last.1 = result?;
                    true
                }
                None => false,
            },
            None => false,
        };

        if !merged {
            reduced.push((operator, value));
        }
    }

    Ok(reduced)
}

fn concatenate(lhs: i64, rhs: i64) -> Result<i64, MathError> {
    let shift = if rhs >= 10 { 100 } else { 10 };
    lhs.checked_mul(shift)
        .and_then(|shifted| shifted.checked_add(rhs))
        .ok_or(MathError::Overflow)
}

fn divide_exact(dividend: i64, divisor: i64) -> Result<i64, MathError> {
    if divisor == 0 {
        return Err(MathError::DivisionByZero);
    }

    match dividend.checked_rem(divisor) {
        None => Err(MathError::Overflow),
        Some(0) => dividend.checked_div(divisor).ok_or(MathError::Overflow),
        Some(_) => Err(MathError::InexactDivision { dividend, divisor }),
    }
}
