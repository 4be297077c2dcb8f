//! Allocation-free numeric text conversion over caller-provided byte buffers.
//!
//! This crate is a small, self-contained codec between primitive numeric
//! values and their textual representation. Every entry point works on a
//! borrowed byte slice, performs no heap allocation, is independent of the
//! process locale, and reports failures as values rather than panics:
//!
//! - [`to_chars`] / [`to_chars_radix`] write the shortest correct
//!   representation of an integer into a destination buffer (bases 2–36,
//!   lowercase digits above 9).
//! - [`from_chars`] / [`from_chars_radix`] parse the longest valid integer
//!   prefix of an input slice and report how many bytes were consumed.
//! - [`from_chars_float`] parses a floating-point value under an explicit
//!   [`FloatFormat`] grammar selector.
//!
//! The generic entry points are bounded by the sealed [`Integer`] and
//! [`Float`] traits, implemented for all primitive numeric widths.
//!
//! Integer digit accumulation has two interchangeable implementations behind
//! one interface: the default `native` cargo feature delegates to the standard
//! library's converters, while disabling it selects the bundled accumulator.
//! Both satisfy the same contract.
//!
//! ```rust
//! use numconv::{Error, FloatFormat, from_chars, from_chars_float, to_chars_radix};
//!
//! let mut buf = [0u8; 10];
//! let written = to_chars_radix(&mut buf, -255i32, 16).unwrap();
//! assert_eq!(&buf[..written], b"-ff");
//!
//! let (value, consumed) = from_chars::<i32>(b"123abc").unwrap();
//! assert_eq!((value, consumed), (123, 3));
//!
//! let err = from_chars_float::<f64>(b"1e5", FloatFormat::fixed()).unwrap_err();
//! assert_eq!(err, Error::InvalidArgument);
//! ```
//!
//! All functions are pure over their arguments; there is no shared or global
//! state, so concurrent use needs no synchronization.

#![no_std]

#[cfg(test)]
extern crate std;

mod backend;
mod error;
mod float;
mod from_chars;
mod num;
mod to_chars;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use float::{FloatFormat, from_chars_float};
pub use from_chars::{from_chars, from_chars_radix};
pub use num::{Float, Integer};
pub use to_chars::{to_chars, to_chars_radix};
