//! Storage error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for settings-store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing a settings backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Settings location could not be resolved.
    #[error("invalid settings path: {0}")]
    InvalidPath(String),

    /// Settings file exists but does not hold a JSON object.
    #[error("malformed settings file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::InvalidPath("no config directory".to_string());
        assert_eq!(err.to_string(), "invalid settings path: no config directory");
    }
}
