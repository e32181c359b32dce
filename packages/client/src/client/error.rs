//! Error types for the interactive client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The connection could not be established
    #[error("Connection error: {0}")]
    Connect(String),

    /// A read or write failed mid-session
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
