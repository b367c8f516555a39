//! Remote error types

use thiserror::Error;

/// Result type for remote operations
pub type Result<T> = std::result::Result<T, RemoteError>;

/// Remote-related errors
#[derive(Debug, Error)]
pub enum RemoteError {
    /// API refused the request, usually because the rate limit was hit
    #[error("Rate limited or forbidden: {0}")]
    RateLimited(String),

    /// Resource does not exist or is not visible with the given token
    #[error("Not found: {0}")]
    NotFound(String),

    /// Other API error
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Webhook rejected the upload
    #[error("Upload failed with status {status}: {body}")]
    UploadFailed { status: u16, body: String },

    /// Endpoint URL could not be parsed
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_failed_message() {
        let err = RemoteError::UploadFailed {
            status: 400,
            body: "bad request".to_string(),
        };
        assert_eq!(err.to_string(), "Upload failed with status 400: bad request");
    }
}
