//! Integer parsing from caller-provided buffers.
//!
//! The scan matches the longest valid prefix: an optional leading `-` (for
//! signed target types only) followed by one or more digits valid in the
//! base. There is no `+` recognition and no radix-prefix recognition —
//! `"0x1A"` in base 16 parses as `0` with `x1A` left unconsumed. Digit
//! letters are case-insensitive.

use crate::{Error, Integer, backend};

/// The value of `byte` as a digit in `base`, or `None` if it is not one.
pub(crate) fn digit_value(byte: u8, base: u32) -> Option<u32> {
    let digit = match byte {
        b'0'..=b'9' => u32::from(byte - b'0'),
        b'a'..=b'z' => u32::from(byte - b'a') + 10,
        b'A'..=b'Z' => u32::from(byte - b'A') + 10,
        _ => return None,
    };
    (digit < base).then_some(digit)
}

/// Parses the longest decimal integer prefix of `src`.
///
/// Equivalent to [`from_chars_radix`] with base 10. Returns the parsed value
/// and the number of bytes consumed; input beyond the matched prefix is left
/// for the caller (`b"123abc"` yields `(123, 3)`).
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if no prefix matched; nothing is consumed.
/// - [`Error::ResultOutOfRange`] if the digits are syntactically valid but
///   the magnitude does not fit `T`; `consumed` sits past the last digit
///   matched.
pub fn from_chars<T: Integer>(src: &[u8]) -> Result<(T, usize), Error> {
    from_chars_radix(src, 10)
}

/// Parses the longest integer prefix of `src` in `base`.
///
/// A leading `-` is accepted only when `T` is a signed type. Returns the
/// parsed value and the number of bytes consumed.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if no prefix matched; nothing is consumed.
/// - [`Error::ResultOutOfRange`] if the digits are syntactically valid but
///   the magnitude does not fit `T`; `consumed` sits past the last digit
///   matched.
///
/// # Panics
///
/// Panics if `base` is outside `2..=36`.
pub fn from_chars_radix<T: Integer>(src: &[u8], base: u32) -> Result<(T, usize), Error> {
    assert!((2..=36).contains(&base), "base must be in 2..=36");

    let negative = T::SIGNED && src.first() == Some(&b'-');
    let digits_start = usize::from(negative);

    let mut end = digits_start;
    while end < src.len() && digit_value(src[end], base).is_some() {
        end += 1;
    }
    if end == digits_start {
        return Err(Error::InvalidArgument);
    }

    let value = backend::accumulate::<T>(&src[..end], negative, base)
        .ok_or(Error::ResultOutOfRange { consumed: end })?;
    Ok((value, end))
}
