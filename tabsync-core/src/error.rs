//! Error types for core grid operations

use thiserror::Error;

/// Grid addressing errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell address ({row}, {col}) is invalid: rows and columns are 1-based")]
    InvalidAddress { row: usize, col: usize },
}

/// Value sanitization failures.
///
/// Each rule in the sanitizer rejects independently; every rejection gets
/// its own variant so callers can report precisely what was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("Value for field '{field}' starts with '=' and was rejected as a formula")]
    RejectedFormula { field: String },
}
