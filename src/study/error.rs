//! Error types for the study API

use thiserror::Error;

/// Errors that can occur when talking to the study API
///
/// None of these reach the user directly; they are logged and replaced by
/// a fallback message.
#[derive(Debug, Error)]
pub enum StudyError {
    /// Connection failed, timed out, or the body could not be read
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Response body was not a JSON object
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Expected field was absent, not a string, or empty
    #[error("Response is missing the '{0}' field")]
    MissingField(&'static str),

    /// Base URL could not be used to build a client
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}
