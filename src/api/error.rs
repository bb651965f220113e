//! Error types for the episode backend.

/// Errors that can occur while fetching episodes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Published date could not be parsed
    #[error("Invalid published date: {0}")]
    InvalidDate(String),
}
