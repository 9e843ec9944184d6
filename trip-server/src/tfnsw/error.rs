//! Trip planner client error types.

/// Errors from the trip planner HTTP client.
///
/// None of these are retried; each is reported to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum TfnswError {
    /// The request could not be built (bad URL or header value)
    #[error("create request: {0}")]
    Request(String),

    /// HTTP request failed (network error, timeout, etc.)
    #[error("call transport nsw api: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-2xx status code
    #[error("transport nsw api returned status {status}")]
    Status { status: u16 },

    /// Body was not JSON or did not have the expected shape
    #[error("decode transport response: {message}")]
    Json { message: String },
}

impl TfnswError {
    /// Whether the call failed because it ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TfnswError::Http(e) if e.is_timeout())
    }
}
