//! Error types for booth configuration lookup and persistence.

use std::io;
use thiserror::Error;

/// Errors that can occur while resolving booth configuration.
#[derive(Error, Debug)]
pub enum BoothError {
    /// The requested booth has no profile in the registry.
    #[error("Booth not found: {0}")]
    BoothNotFound(String),

    /// The booth exists but has no UTool at the requested index.
    #[error("UTool {index} not found for booth {booth}")]
    ToolNotFound { booth: String, index: u8 },

    /// The booth exists but has no UFrame at the requested index.
    #[error("UFrame {index} not found for booth {booth}")]
    FrameNotFound { booth: String, index: u8 },

    /// I/O error during registry file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for booth configuration operations.
pub type BoothResult<T> = Result<T, BoothError>;
