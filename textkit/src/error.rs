//! Library error type.

use thiserror::Error;

/// Errors surfaced by the text helpers.
///
/// Every other helper is total; only regex compilation can fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl TextError {
    pub(crate) fn invalid_pattern(pattern: &str, err: &regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        }
    }
}
