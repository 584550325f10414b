//! Error types for the cachesim library.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned when internal slot-array invariants are
//!   violated (`check_invariants` methods).
//! - [`ConfigError`]: Returned when cache configuration input is invalid
//!   (e.g. an unknown replacement policy name).
//!
//! The lookup path itself is infallible: a well-formed address always
//! resolves, and a zero-capacity cache is a valid always-miss configuration
//! rather than an error.
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::error::ConfigError;
//! use cachesim::policy::ReplacementPolicy;
//!
//! let policy: Result<ReplacementPolicy, ConfigError> = "lru".parse();
//! assert!(policy.is_ok());
//!
//! // Unknown names are caught without panicking
//! let bad: Result<ReplacementPolicy, ConfigError> = "arc".parse();
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by `check_invariants` methods on policy cores and on
/// [`SimCache`](crate::cache::SimCache). Carries a human-readable
/// description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration input is invalid.
///
/// Produced when parsing a [`ReplacementPolicy`](crate::policy::ReplacementPolicy)
/// from a string fails. Carries a human-readable description of the
/// rejected input.
///
/// # Example
///
/// ```
/// use cachesim::error::ConfigError;
/// use cachesim::policy::ReplacementPolicy;
///
/// let err = "clock".parse::<ReplacementPolicy>().unwrap_err();
/// assert!(err.to_string().contains("clock"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("duplicate occupied address");
        assert_eq!(err.to_string(), "duplicate occupied address");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("unknown replacement policy");
        assert_eq!(err.to_string(), "unknown replacement policy");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }
}
