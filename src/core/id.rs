use super::error::Rejection;

/// Common contract of every identifier decoder.
///
/// Implementors are plain value types: `Default` is the "invalid" value with
/// every derived field unknown, and a successful [`parse`](Self::parse)
/// always yields a value with [`is_valid`](Self::is_valid) set.
pub trait NationalId: Sized + Default {
    /// Short scheme name used in log events.
    const SCHEME: &'static str;

    /// Decode `input`, reporting why it was rejected.
    fn parse(input: &str) -> Result<Self, Rejection>;

    /// Whether the value came from a valid identifier.
    fn is_valid(&self) -> bool;

    /// Decode `input`; any rejection yields [`Default::default`].
    fn validate(input: &str) -> Self {
        match Self::parse(input) {
            Ok(id) => id,
            Err(reason) => {
                // The input itself is personal data and is never logged.
                tracing::debug!(scheme = Self::SCHEME, %reason, "identifier rejected");
                Self::default()
            }
        }
    }

    /// Like [`validate`](Self::validate); `None` is treated as empty input.
    fn validate_opt(input: Option<&str>) -> Self {
        Self::validate(input.unwrap_or_default())
    }
}

/// Reject empty input before pattern matching.
#[cfg(any(
    feature = "denmark",
    feature = "finland",
    feature = "norway",
    feature = "sweden",
    feature = "uk"
))]
pub(crate) fn non_empty(input: &str) -> Result<&str, Rejection> {
    if input.is_empty() {
        Err(Rejection::Empty)
    } else {
        Ok(input)
    }
}
