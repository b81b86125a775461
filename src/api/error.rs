use thiserror::Error;

/// Errors that can occur talking to the posts endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure (connect, timeout, reset).
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("'{url}' returned {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("Invalid response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A post id could not be normalised to a number.
    #[error("Invalid post id {value:?}")]
    InvalidId { value: String },

    /// A user id could not be normalised to a number.
    #[error("Invalid user id {value:?}")]
    InvalidUserId { value: String },
}

impl ApiError {
    /// Get error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::Request { .. } => "request_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::InvalidId { .. } => "invalid_id",
            ApiError::InvalidUserId { .. } => "invalid_user_id",
        }
    }
}
