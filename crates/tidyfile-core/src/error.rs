//! Error taxonomy for file operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while executing operations or scanning.
#[derive(Debug, Error)]
pub enum OpError {
    /// Source path does not exist at execution time.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// The filesystem denied the requested mutation.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Destination collision where overwrite is not intended.
    #[error("Already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// An operation descriptor with an unrecognized tag or a missing
    /// required field. Only arises when deserializing untrusted boundary
    /// input; well-typed callers cannot construct one.
    #[error("Invalid operation: {message}")]
    InvalidOperation { message: String },

    /// Catch-all for any other low-level filesystem failure.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OpError {
    /// Create an error from an I/O failure, classifying its kind.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create a not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create an invalid-operation error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}
