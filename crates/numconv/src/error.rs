use thiserror::Error;

/// Failure statuses produced by the conversion routines.
///
/// Success is an `Ok` result; together with these three variants this forms
/// the closed status set of the codec. Conversions never produce a partially
/// converted value alongside an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// No prefix of the input matched the expected numeric grammar. Nothing
    /// was consumed.
    #[error("invalid argument")]
    InvalidArgument,

    /// The input was syntactically valid but its magnitude does not fit the
    /// target type.
    #[error("result out of range")]
    ResultOutOfRange {
        /// Bytes matched before the conversion overflowed: the sign plus all
        /// digits, positioned past the last digit matched.
        consumed: usize,
    },

    /// The textual representation does not fit in the destination buffer.
    /// The buffer contents are unspecified afterwards.
    #[error("value too large for the destination buffer")]
    ValueTooLarge,
}
