//! Owner parsing error types.

use thiserror::Error;

/// Error returned when an owner kind string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown owner kind '{value}', expected 'user' or 'organization'")]
pub struct ParseOwnerKindError {
    /// The rejected input.
    pub value: String,
}
