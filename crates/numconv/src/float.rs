//! Floating-point parsing from caller-provided buffers.
//!
//! The scan follows C-locale numeric grammar with two restrictions: no
//! leading `+` outside the exponent, and no `0x`/`0X` prefix recognition even
//! under the hex format (`"0x1A"` parses as `0` with the rest ignored). The
//! scanned lexeme is converted through the standard library's parser, except
//! for hex floats, which the standard library cannot parse and which are
//! accumulated by hand.
//!
//! Consumed-count deviation
//! - On every outcome that reports a byte count, the count is the full input
//!   length, not the end of the matched lexeme. The contract is inherited
//!   from a fallback built atop a null-terminated parsing primitive that
//!   could not report a precise stopping point, and is kept for
//!   compatibility. Callers must not rely on partial-consumption reporting
//!   for floats.

#![allow(clippy::struct_excessive_bools)]

use crate::{Error, Float, from_chars::digit_value};

/// Grammar selector for floating-point parsing.
///
/// A value, not behavior: each flag admits one textual grammar. The default
/// is [`FloatFormat::general`], accepting both fixed and scientific notation.
/// When `hex` is set the mantissa uses hex digits with a `p`/`P` binary
/// exponent and the other two flags are ignored. A descriptor with no flag
/// set rejects every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatFormat {
    /// Accept an `e`/`E` exponent suffix. If set without `fixed`, the
    /// exponent is mandatory.
    pub scientific: bool,
    /// Accept plain fixed notation. If set without `scientific`, no exponent
    /// is permitted.
    pub fixed: bool,
    /// Hexadecimal mantissa with an optional `p`/`P` binary exponent.
    pub hex: bool,
}

impl Default for FloatFormat {
    fn default() -> Self {
        Self::general()
    }
}

impl FloatFormat {
    /// Fixed or scientific notation, exponent optional. The default.
    #[must_use]
    pub const fn general() -> Self {
        Self {
            scientific: true,
            fixed: true,
            hex: false,
        }
    }

    /// Scientific notation only; an exponent suffix is mandatory.
    #[must_use]
    pub const fn scientific() -> Self {
        Self {
            scientific: true,
            fixed: false,
            hex: false,
        }
    }

    /// Fixed notation only; no exponent is permitted.
    #[must_use]
    pub const fn fixed() -> Self {
        Self {
            scientific: false,
            fixed: true,
            hex: false,
        }
    }

    /// Hexadecimal notation, without `0x` prefix recognition.
    #[must_use]
    pub const fn hex() -> Self {
        Self {
            scientific: false,
            fixed: false,
            hex: true,
        }
    }
}

/// What the scanner matched at the front of the input.
struct Scan {
    /// End of the matched lexeme; 0 means nothing matched.
    end: usize,
    /// Whether an exponent suffix (with at least one digit) was matched.
    has_exponent: bool,
    /// Whether the lexeme is an `inf`/`infinity`/`nan` literal.
    special: bool,
}

/// Parses a floating-point value from the front of `src` under `format`.
///
/// Returns the value and the consumed byte count, which is always
/// `src.len()` regardless of how many bytes were semantically meaningful
/// (see the module docs for this deviation). `inf`, `infinity` and `nan`
/// are accepted case-insensitively under every format. On failure no value
/// is produced.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if no prefix matches the grammar selected by
///   `format`, including an exponent present under fixed-only or absent
///   under scientific-only.
/// - [`Error::ResultOutOfRange`] if the lexeme is well-formed but converts
///   to infinity without being an infinity literal; `consumed` is
///   `src.len()`.
pub fn from_chars_float<T: Float>(src: &[u8], format: FloatFormat) -> Result<(T, usize), Error> {
    if !format.hex && !format.scientific && !format.fixed {
        return Err(Error::InvalidArgument);
    }

    let scan = scan(src, format.hex);
    if scan.end == 0 {
        return Err(Error::InvalidArgument);
    }
    if !format.hex && !scan.special {
        if scan.has_exponent && !format.scientific {
            return Err(Error::InvalidArgument);
        }
        if !scan.has_exponent && format.scientific && !format.fixed {
            return Err(Error::InvalidArgument);
        }
    }

    let lexeme = &src[..scan.end];
    let value = if format.hex && !scan.special {
        T::from_f64(convert_hex(lexeme))
    } else {
        // The scan admits only ASCII bytes.
        let text = core::str::from_utf8(lexeme).map_err(|_| Error::InvalidArgument)?;
        T::parse_str(text).ok_or(Error::InvalidArgument)?
    };

    if value.is_infinite_value() && !scan.special {
        return Err(Error::ResultOutOfRange {
            consumed: src.len(),
        });
    }
    Ok((value, src.len()))
}

/// Matches the longest lexeme of the general grammar: optional `-`, mantissa
/// digits with an optional point, and an exponent suffix that is only taken
/// when at least one digit follows the marker.
fn scan(src: &[u8], hex: bool) -> Scan {
    let mut i = 0;
    if i < src.len() && src[i] == b'-' {
        i += 1;
    }

    if let Some(end) = scan_special(src, i) {
        return Scan {
            end,
            has_exponent: false,
            special: true,
        };
    }

    let digit_base = if hex { 16 } else { 10 };
    let mut mantissa_digits = 0;
    while i < src.len() && digit_value(src[i], digit_base).is_some() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < src.len() && src[i] == b'.' {
        i += 1;
        while i < src.len() && digit_value(src[i], digit_base).is_some() {
            i += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return Scan {
            end: 0,
            has_exponent: false,
            special: false,
        };
    }

    let mut has_exponent = false;
    let marker = if hex { b'p' } else { b'e' };
    if i < src.len() && (src[i] | 0x20) == marker {
        let mut j = i + 1;
        if j < src.len() && (src[j] == b'+' || src[j] == b'-') {
            j += 1;
        }
        let exponent_digits = j;
        while j < src.len() && src[j].is_ascii_digit() {
            j += 1;
        }
        if j > exponent_digits {
            i = j;
            has_exponent = true;
        }
    }

    Scan {
        end: i,
        has_exponent,
        special: false,
    }
}

/// Matches `inf`, `infinity` or `nan` (ASCII case-insensitive) at `start`,
/// returning the end of the literal.
fn scan_special(src: &[u8], start: usize) -> Option<usize> {
    let rest = &src[start..];
    for word in [&b"infinity"[..], b"inf", b"nan"] {
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word) {
            return Some(start + word.len());
        }
    }
    None
}

/// Converts a scanned hex-float lexeme. Mantissa hex digits accumulate into
/// an `f64`; fractional digits and the `p` exponent combine into one binary
/// exponent applied by exact doubling/halving.
fn convert_hex(lexeme: &[u8]) -> f64 {
    let mut i = 0;
    let negative = lexeme.first() == Some(&b'-');
    if negative {
        i = 1;
    }

    let mut mantissa = 0.0f64;
    let mut exponent: i32 = 0;
    while i < lexeme.len() {
        let Some(digit) = digit_value(lexeme[i], 16) else {
            break;
        };
        mantissa = mantissa * 16.0 + f64::from(digit);
        i += 1;
    }
    if i < lexeme.len() && lexeme[i] == b'.' {
        i += 1;
        while i < lexeme.len() {
            let Some(digit) = digit_value(lexeme[i], 16) else {
                break;
            };
            mantissa = mantissa * 16.0 + f64::from(digit);
            exponent -= 4;
            i += 1;
        }
    }
    if i < lexeme.len() && (lexeme[i] | 0x20) == b'p' {
        i += 1;
        let mut exponent_negative = false;
        if i < lexeme.len() && (lexeme[i] == b'+' || lexeme[i] == b'-') {
            exponent_negative = lexeme[i] == b'-';
            i += 1;
        }
        let mut scanned: i32 = 0;
        while i < lexeme.len() && lexeme[i].is_ascii_digit() {
            scanned = scanned
                .saturating_mul(10)
                .saturating_add(i32::from(lexeme[i] - b'0'));
            i += 1;
        }
        if exponent_negative {
            scanned = scanned.saturating_neg();
        }
        exponent = exponent.saturating_add(scanned);
    }

    // Beyond ±1200 the result is pinned to infinity or zero anyway; clamping
    // bounds the scaling loop.
    let mut value = mantissa;
    let mut e = exponent.clamp(-1200, 1200);
    while e > 0 {
        value *= 2.0;
        e -= 1;
    }
    while e < 0 {
        value *= 0.5;
        e += 1;
    }

    if negative { -value } else { value }
}
