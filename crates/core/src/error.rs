//! Domain error model.

use thiserror::Error;

/// Result type for draft validation.
pub type DraftResult<T> = Result<T, DraftError>;

/// Errors produced when converting a form draft into a product record.
///
/// Validation is intentionally shallow: required fields and number typing
/// only. Anything richer (uniqueness, negative prices) is the server's
/// business.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// A required field is empty or unset.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl DraftError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField(field)
    }
}
