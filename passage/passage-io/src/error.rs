//! Error types for mesh output.

use thiserror::Error;

/// Result type for mesh output operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while writing a mesh file.
#[derive(Debug, Error)]
pub enum IoError {
    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
