use thiserror::Error;

/// Why an identifier was rejected.
///
/// Only surfaced through [`NationalId::parse`](super::NationalId::parse).
/// [`NationalId::validate`](super::NationalId::validate) collapses every
/// variant to `is_valid == false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum Rejection {
    /// The input was empty (or absent).
    #[error("input is empty")]
    Empty,

    /// The input does not match the scheme's layout.
    #[error("input does not match the expected layout")]
    Malformed,

    /// A country prefix was present but names another country.
    #[error("unexpected country code")]
    CountryCode,

    /// All leading digits are the same (sentinel number).
    #[error("leading digits are all identical")]
    RepeatedDigits,

    /// The weighted sum yields a check digit that cannot be written as one digit.
    #[error("checksum has no representable check digit")]
    UnrepresentableCheckDigit,

    /// The supplied check digit or character differs from the computed one.
    #[error("check digit mismatch")]
    ChecksumMismatch,

    /// The encoded date is not a real calendar date.
    #[error("encoded date is not a valid calendar date")]
    InvalidDate,
}
