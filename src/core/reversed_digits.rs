//! Non-negative integers stored as digit sequences, least significant digit first.
//!
//! `[1, 2, 3]` represents 321. Values are held in `u128`; anything larger is
//! reported as [`PuzzleError::Overflow`] rather than wrapped.

use crate::domain::model::ReversedSumExample;
use crate::utils::error::{PuzzleError, Result};

const RADIX: u128 = 10;

/// Computes Σ digits[i] × 10^i.
///
/// Digits outside 0..=9 are not rejected and count at face value. An empty
/// sequence represents 0. Zero padding at the most significant end is absorbed
/// however long it is; only a value beyond `u128` overflows.
pub fn digit_sequence_to_integer(digits: &[u32]) -> Result<u128> {
    digits.iter().rev().try_fold(0u128, |value, &digit| {
        value
            .checked_mul(RADIX)
            .and_then(|shifted| shifted.checked_add(u128::from(digit)))
            .ok_or_else(|| PuzzleError::overflow("digit sequence conversion"))
    })
}

/// Splits `value` into its digits, least significant first.
///
/// Zero is `[0]`; any other value has a non-zero last (most significant) digit.
pub fn integer_to_digit_sequence(mut value: u128) -> Vec<u32> {
    if value == 0 {
        return vec![0];
    }

    let mut digits = Vec::new();
    while value > 0 {
        // remainder is < 10
        digits.push((value % RADIX) as u32);
        value /= RADIX;
    }
    digits
}

fn checked_sum(a: u128, b: u128) -> Result<u128> {
    a.checked_add(b)
        .ok_or_else(|| PuzzleError::overflow("digit sequence addition"))
}

pub fn add_reversed_digit_sequences(a: &[u32], b: &[u32]) -> Result<Vec<u32>> {
    let sum = checked_sum(digit_sequence_to_integer(a)?, digit_sequence_to_integer(b)?)?;
    Ok(integer_to_digit_sequence(sum))
}

impl ReversedSumExample {
    pub fn evaluate(first: &[u32], second: &[u32]) -> Result<Self> {
        let first_value = digit_sequence_to_integer(first)?;
        let second_value = digit_sequence_to_integer(second)?;
        let sum = checked_sum(first_value, second_value)?;
        let result = integer_to_digit_sequence(sum);

        tracing::debug!(?first, ?second, sum = %sum, ?result, "Added reversed digit sequences");

        Ok(Self {
            first: first.to_vec(),
            second: second.to_vec(),
            first_value,
            second_value,
            sum,
            result,
        })
    }
}
