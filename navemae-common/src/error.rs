//! Common error types for Nave-Mãe

use thiserror::Error;

/// Common result type for Nave-Mãe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Nave-Mãe services
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON encoding or decoding error (e.g. an undecodable artist record)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
