//! Integer formatting into caller-provided buffers.
//!
//! Both entry points use the canonical algorithm: digits are produced
//! least-significant first into a stack scratch array, then copied into the
//! destination most-significant first, with the sign written separately
//! before the digits. The output is the shortest correct form: no leading
//! zeros, lowercase digits above 9, a leading `-` for negative values.

#![allow(clippy::cast_possible_truncation)]

use crate::{Error, Integer};

/// Lowercase digit alphabet shared by all bases up to 36.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 128 binary digits is the widest representation of any supported type
/// (`u128` in base 2); the sign is accounted for separately.
const SCRATCH_LEN: usize = 128;

/// Writes the decimal representation of `value` left-aligned into `buf`.
///
/// This is the specialized base-10 path; use [`to_chars_radix`] for other
/// bases. Returns the number of bytes written. Buffer contents beyond the
/// written region are left untouched.
///
/// # Errors
///
/// [`Error::ValueTooLarge`] if the representation does not fit in `buf`, in
/// which case the buffer contents are unspecified.
pub fn to_chars<T: Integer>(buf: &mut [u8], value: T) -> Result<usize, Error> {
    let negative = value.is_negative_value();
    let mut magnitude = value.magnitude();

    // 39 decimal digits covers u128::MAX.
    let mut scratch = [0u8; 39];
    let mut len = 0;
    loop {
        scratch[len] = b'0' + (magnitude % 10) as u8;
        len += 1;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }

    copy_reversed(buf, &scratch[..len], negative)
}

/// Writes the representation of `value` in `base` left-aligned into `buf`.
///
/// `base` selects the radix; digits ten and above use lowercase `a`–`z`.
/// Returns the number of bytes written.
///
/// # Errors
///
/// [`Error::ValueTooLarge`] if the representation does not fit in `buf`, in
/// which case the buffer contents are unspecified.
///
/// # Panics
///
/// Panics if `base` is outside `2..=36`.
pub fn to_chars_radix<T: Integer>(buf: &mut [u8], value: T, base: u32) -> Result<usize, Error> {
    assert!((2..=36).contains(&base), "base must be in 2..=36");

    let negative = value.is_negative_value();
    let mut magnitude = value.magnitude();
    let base = u128::from(base);

    let mut scratch = [0u8; SCRATCH_LEN];
    let mut len = 0;
    loop {
        scratch[len] = DIGITS[(magnitude % base) as usize];
        len += 1;
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }

    copy_reversed(buf, &scratch[..len], negative)
}

/// Copies LSD-first digits into `buf` in display order, sign first.
fn copy_reversed(buf: &mut [u8], digits: &[u8], negative: bool) -> Result<usize, Error> {
    let total = digits.len() + usize::from(negative);
    if total > buf.len() {
        return Err(Error::ValueTooLarge);
    }

    let mut out = 0;
    if negative {
        buf[out] = b'-';
        out += 1;
    }
    for &digit in digits.iter().rev() {
        buf[out] = digit;
        out += 1;
    }
    Ok(total)
}
