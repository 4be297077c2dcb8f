//! Numeric type constraints for the generic conversion entry points.
//!
//! The traits here play the role of concept-style predicates: they bound
//! which types the codec accepts and carry exactly the hooks the conversion
//! algorithms need. Both are sealed; the primitive implementations below are
//! the complete set.

#![allow(clippy::cast_lossless, clippy::cast_possible_truncation)]

mod private {
    pub trait Sealed {}
}

/// A primitive integer type the codec can format and parse.
///
/// Implemented for all signed and unsigned primitive widths, including
/// `isize` and `usize`. This trait is sealed and cannot be implemented
/// outside the crate.
pub trait Integer: Copy + private::Sealed {
    /// Whether the type represents negative values, i.e. whether a leading
    /// `-` is accepted when parsing.
    const SIGNED: bool;

    /// The additive identity, the accumulator seed when parsing.
    const ZERO: Self;

    /// Whether this value is below zero.
    fn is_negative_value(self) -> bool;

    /// The absolute magnitude, widened so formatting can run one algorithm
    /// for every width (`MIN` of signed types included).
    fn magnitude(self) -> u128;

    /// `self * base`, or `None` on overflow.
    fn checked_mul_base(self, base: u32) -> Option<Self>;

    /// `self + digit`, or `None` on overflow.
    fn checked_add_digit(self, digit: u32) -> Option<Self>;

    /// `self - digit`, or `None` on overflow. Negative values accumulate
    /// downward so the most negative representable value parses exactly.
    fn checked_sub_digit(self, digit: u32) -> Option<Self>;

    /// Bridge to the standard library's radix converter, used by the
    /// `native` backend.
    ///
    /// # Errors
    ///
    /// Returns the standard library's error for empty, malformed, or
    /// out-of-range input.
    fn from_str_radix(src: &str, base: u32) -> Result<Self, core::num::ParseIntError>;
}

macro_rules! checked_accumulate_methods {
    ($t:ty) => {
        fn checked_mul_base(self, base: u32) -> Option<Self> {
            self.checked_mul(base as $t)
        }

        fn checked_add_digit(self, digit: u32) -> Option<Self> {
            self.checked_add(digit as $t)
        }

        fn checked_sub_digit(self, digit: u32) -> Option<Self> {
            self.checked_sub(digit as $t)
        }

        fn from_str_radix(src: &str, base: u32) -> Result<Self, core::num::ParseIntError> {
            <$t>::from_str_radix(src, base)
        }
    };
}

macro_rules! impl_integer_signed {
    ($($t:ty),+) => {$(
        impl private::Sealed for $t {}

        impl Integer for $t {
            const SIGNED: bool = true;
            const ZERO: Self = 0;

            fn is_negative_value(self) -> bool {
                self < 0
            }

            fn magnitude(self) -> u128 {
                self.unsigned_abs() as u128
            }

            checked_accumulate_methods!($t);
        }
    )+};
}

macro_rules! impl_integer_unsigned {
    ($($t:ty),+) => {$(
        impl private::Sealed for $t {}

        impl Integer for $t {
            const SIGNED: bool = false;
            const ZERO: Self = 0;

            fn is_negative_value(self) -> bool {
                false
            }

            fn magnitude(self) -> u128 {
                self as u128
            }

            checked_accumulate_methods!($t);
        }
    )+};
}

impl_integer_signed!(i8, i16, i32, i64, i128, isize);
impl_integer_unsigned!(u8, u16, u32, u64, u128, usize);

/// A primitive floating-point type the codec can parse.
///
/// Implemented for `f32` and `f64`. This trait is sealed and cannot be
/// implemented outside the crate.
pub trait Float: Copy + private::Sealed {
    /// Convert a scanned decimal lexeme via the standard library's parser,
    /// the in-language analog of a C-locale `strtod`. `None` means the
    /// lexeme was not a valid number.
    fn parse_str(text: &str) -> Option<Self>;

    /// Narrow a hex-float conversion result (computed in `f64`) to this type.
    fn from_f64(value: f64) -> Self;

    /// Whether this value is positive or negative infinity.
    fn is_infinite_value(self) -> bool;
}

impl private::Sealed for f32 {}

impl Float for f32 {
    fn parse_str(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn is_infinite_value(self) -> bool {
        self.is_infinite()
    }
}

impl private::Sealed for f64 {}

impl Float for f64 {
    fn parse_str(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn is_infinite_value(self) -> bool {
        self.is_infinite()
    }
}
