//! Bundled digit accumulator.
//!
//! Accumulates with checked arithmetic, downward for negative values so that
//! the most negative representable value of a signed type parses without
//! tripping the `abs(MIN)` asymmetry.

use crate::{Integer, from_chars::digit_value};

/// Accumulates `matched` (sign plus digits, already validated) into a `T`.
/// `None` means the magnitude does not fit `T`.
pub(crate) fn accumulate<T: Integer>(matched: &[u8], negative: bool, base: u32) -> Option<T> {
    let digits = &matched[usize::from(negative)..];

    let mut acc = T::ZERO;
    for &byte in digits {
        let digit = digit_value(byte, base)?;
        acc = acc.checked_mul_base(base)?;
        acc = if negative {
            acc.checked_sub_digit(digit)?
        } else {
            acc.checked_add_digit(digit)?
        };
    }
    Some(acc)
}
