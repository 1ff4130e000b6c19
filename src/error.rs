//! Centralized error types for mimestrip.

use thiserror::Error;

/// All errors produced by the mimestrip library.
#[derive(Error, Debug)]
pub enum StripError {
    /// The part tree handed to [`Stripper::new`](crate::stripper::Stripper::new)
    /// violates the `MimePart` contract (body payloads live only at leaves).
    #[error("invalid MIME part tree: {reason}")]
    InvalidInput { reason: String },

    /// A MIME decoding error from the parsing collaborator.
    #[error("MIME decoding error: {0}")]
    MimeError(String),
}

/// Convenience alias for `Result<T, StripError>`.
pub type Result<T> = std::result::Result<T, StripError>;

impl StripError {
    /// Create an `InvalidInput` variant from any displayable reason.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
