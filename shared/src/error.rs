//! Errors raised by configuration and cache helpers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SharedError>;

#[derive(Debug, Error)]
pub enum SharedError {
    /// A network name that is neither configured nor well known.
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
