//! Error types for the news collaborator.

use thiserror::Error;

/// Errors that can occur when fetching news.
#[derive(Debug, Error)]
pub enum NewsError {
    /// API key not found in environment
    #[error("FMP_API_KEY environment variable not set")]
    MissingApiKey,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("failed to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response
    #[error("news API error: {0}")]
    Api(String),
}
