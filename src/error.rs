//! Error types for the CRPT client.

use thiserror::Error;

/// Main error type for CRPT client operations.
#[derive(Error, Debug)]
pub enum CrptError {
    /// Construction was given an invalid argument, e.g. a non-positive
    /// request limit
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A wait for a permit was cancelled because the gate was shut down
    #[error("Interrupted while waiting for a permit")]
    Interrupted,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or I/O failure while sending a request
    #[error("Transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-200 status
    #[error("Unexpected HTTP status: {status}")]
    HttpStatus {
        /// Status code reported by the endpoint
        status: u16,
    },

    /// The document could not be encoded to JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for CrptError {
    fn from(err: reqwest::Error) -> Self {
        CrptError::Transport(err.to_string())
    }
}

/// Result type alias for CRPT client operations.
pub type Result<T> = std::result::Result<T, CrptError>;
