//! Error types for eventfox

use thiserror::Error;

/// Result type for eventfox operations
pub type Result<T> = std::result::Result<T, LifecycleError>;

/// Errors that can occur when constructing or evaluating event windows.
///
/// The evaluator itself has no I/O and no partial-failure modes; the only
/// failures are invalid inputs, caught at the boundary of each operation and
/// returned immediately. Callers translate these into user-facing responses
/// (the HTTP layer maps them to 400s).
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// A timestamp field could not be parsed as an RFC 3339 / ISO-8601 instant
    #[error("invalid timestamp in field `{field}`: {value:?}")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// `duration_hours` was not a finite non-negative number
    #[error("invalid duration_hours: {0} (must be finite and non-negative)")]
    InvalidDuration(f64),
}

impl LifecycleError {
    /// Stable machine-readable code for this error, used by the HTTP layer.
    pub fn code(&self) -> &'static str {
        match self {
            LifecycleError::InvalidTimestamp { .. } => "INVALID_TIMESTAMP",
            LifecycleError::InvalidDuration(_) => "INVALID_DURATION",
        }
    }
}
