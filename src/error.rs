//! Error types for GitLab member audits.

use thiserror::Error;

/// Errors that can occur while auditing a group hierarchy.
///
/// Every failure is fatal for the run: nothing is retried and no partial
/// report is produced.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A required input (group ID, access token) is missing or empty.
    #[error("{0}")]
    MissingArgument(String),

    /// An input was present but could not be understood.
    #[error("{0}")]
    InvalidArgument(String),

    /// API request answered with a non-success status.
    #[error("Error: {message}")]
    ApiError { message: String, status_code: u16 },

    /// HTTP transport error (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Local I/O error (binding the web listener).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AuditError {
    /// HTTP status code of the failed API call, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => Some(*status_code),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for audit operations.
pub type Result<T> = core::result::Result<T, AuditError>;
