//! Digit accumulation backends behind one interface.
//!
//! `accumulate` turns an already-scanned integer lexeme (optional sign plus
//! digits, all validated by the caller) into a value, returning `None` when
//! the magnitude does not fit the target type. Two implementations satisfy
//! that contract: `native` delegates to the standard library's radix
//! converter, `fallback` is the bundled checked accumulator. The `native`
//! cargo feature (on by default) selects which one backs the public parsing
//! entry points; the fallback is always compiled so both stay exercised.

#[cfg_attr(feature = "native", allow(dead_code))]
pub(crate) mod fallback;
#[cfg(feature = "native")]
pub(crate) mod native;

#[cfg(not(feature = "native"))]
pub(crate) use fallback::accumulate;
#[cfg(feature = "native")]
pub(crate) use native::accumulate;
