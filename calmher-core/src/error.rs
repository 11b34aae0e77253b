//! Error types for the calmher ecosystem.
//!
//! The ICS parser and serializer never fail; these errors come from the
//! JSON side of the upload boundary and from payload validation.

use thiserror::Error;

/// Errors that can occur in calmher operations.
#[derive(Error, Debug)]
pub enum CalmherError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid schedule request: {0}")]
    InvalidRequest(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for calmher operations.
pub type CalmherResult<T> = Result<T, CalmherError>;
