/*
[INPUT]:  Error sources (transport, API payloads, serialization, configuration)
[OUTPUT]: Structured error types with retry and auth hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Error codes the exchange uses when a request was throttled.
const RATE_LIMIT_MARKERS: [&str; 2] = ["429", "ErrTooManyRequests"];

/// Main error type for the BitX adapter
#[derive(Error, Debug)]
pub enum BitxError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-200 response carrying a structured error payload
    #[error("API error {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Non-200 response whose body was not a structured error payload
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    /// 200 response whose JSON body contained an `error` field
    #[error("{message}")]
    Rejected { message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Reading local configuration (e.g. a CA file) failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BitxError {
    /// Build an API error from a status code and the payload's code/message
    pub fn api_error(
        status: StatusCode,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        BitxError::Api {
            status: status.as_u16(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Exchange error code, when the server sent one
    pub fn error_code(&self) -> Option<&str> {
        match self {
            BitxError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            BitxError::Api { status, .. } | BitxError::Status { status, .. } => Some(*status),
            BitxError::Rejected { .. } => Some(StatusCode::OK.as_u16()),
            BitxError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the server throttled this request
    pub fn is_rate_limited(&self) -> bool {
        match self {
            BitxError::Api { code, .. } => is_rate_limit_code(code),
            BitxError::Status { status, .. } => *status == StatusCode::TOO_MANY_REQUESTS.as_u16(),
            _ => false,
        }
    }

    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            BitxError::Http(err) => err.is_timeout() || err.is_connect(),
            BitxError::Status { status, .. } => *status >= 500,
            _ => self.is_rate_limited(),
        }
    }

    /// Check if error indicates rejected credentials
    pub fn is_auth_error(&self) -> bool {
        match self {
            BitxError::Api { status, .. } | BitxError::Status { status, .. } => {
                matches!(*status, 401 | 403)
            }
            _ => false,
        }
    }
}

/// Whether an exchange error code marks a throttled request
pub(crate) fn is_rate_limit_code(code: &str) -> bool {
    RATE_LIMIT_MARKERS.iter().any(|marker| code.contains(marker))
}

/// Result type alias for BitX operations
pub type Result<T> = std::result::Result<T, BitxError>;
