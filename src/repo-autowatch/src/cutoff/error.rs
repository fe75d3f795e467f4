//! Cutoff error types.

use thiserror::Error;

/// Errors that can occur while building a cutoff instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CutoffError {
    /// The `since` value is neither RFC 3339 nor `YYYY-MM-DD`.
    #[error("Invalid cutoff '{value}', expected RFC 3339 or YYYY-MM-DD")]
    InvalidTimestamp { value: String },

    /// The requested day count reaches before the earliest representable instant.
    #[error("Cutoff of {days} days is out of range")]
    OutOfRange { days: u32 },
}
