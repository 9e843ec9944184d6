//! Domain error types.
//!
//! These errors represent invalid trip requests. They are rejected before
//! any call to the trip planner and are distinct from API/IO errors.

/// Domain-level errors for request validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Origin or destination is blank
    #[error("origin and destination are required")]
    MissingEndpoints,

    /// Requested number of trips is outside the accepted range
    #[error("resultCount must be between 1 and 10, got {0}")]
    ResultCountOutOfRange(i64),
}
