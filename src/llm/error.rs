//! LLM error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while talking to the model collaborator
///
/// Unlike tool errors, these are not converted to text for the model;
/// they terminate the run when the client's own retries are exhausted.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
