//! Error taxonomy for API calls.

use thiserror::Error;

/// Failure of a single API call.
///
/// Every non-2xx response maps to `Status` uniformly; callers never
/// branch on individual status codes. The carried body text is only used
/// to build a human-readable message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Status(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}
