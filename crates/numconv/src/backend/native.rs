//! Digit accumulation through the standard library's radix converter.

use core::num::IntErrorKind;

use crate::Integer;

/// Accumulates `matched` (sign plus digits, already validated) into a `T`.
/// `None` means the magnitude does not fit `T`.
pub(crate) fn accumulate<T: Integer>(matched: &[u8], _negative: bool, base: u32) -> Option<T> {
    // The scan only admits ASCII sign and digit bytes.
    let text = core::str::from_utf8(matched).ok()?;
    match T::from_str_radix(text, base) {
        Ok(value) => Some(value),
        Err(err) => {
            debug_assert!(matches!(
                err.kind(),
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
            ));
            None
        }
    }
}
