//! Structured error types for promoscan.

use thiserror::Error;

/// Unified error type for all promoscan operations.
///
/// The matching engine itself only ever returns [`PromoscanError::InvalidArgument`].
/// `Io` and `Parse` come from reading sequence files.
#[derive(Debug, Error)]
pub enum PromoscanError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed or empty input data)
    #[error("parse error: {0}")]
    Parse(String),

    /// A violated precondition: unequal comparison lengths, out-of-range
    /// scores, a zero mismatch bound, malformed motifs.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias used throughout promoscan.
pub type Result<T> = std::result::Result<T, PromoscanError>;
