//! Client error types

use thiserror::Error;

/// CMS client error type
#[derive(Debug, Error)]
pub enum CmsError {
    /// HTTP request failed (connect, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// GraphQL layer returned errors
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// Response did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type CmsResult<T> = Result<T, CmsError>;
