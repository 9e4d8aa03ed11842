//! Error types for GitHub client.

use thiserror::Error;

/// Result type for GitHub client operations.
pub type Result<T> = std::result::Result<T, GitHubError>;

/// GitHub client errors.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The file changed since it was read; the supplied sha is stale.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// API error (any other non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, bad base64, non-UTF-8 content)
    #[error("Parse error: {0}")]
    Parse(String),
}
