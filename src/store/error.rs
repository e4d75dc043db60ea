//! Error types for storage operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the post document.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error during file operations.
    #[error("I/O error at {path}: {source}")]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error deserializing file contents.
    #[error("deserialization error at {path}: {message}")]
    FileDeserialization { path: PathBuf, message: String },

    /// Error serializing data.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Backend-specific failure with no file path context.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// Create a file I/O error with path context.
    pub fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileIo {
            path: path.into(),
            source,
        }
    }

    /// Create a file deserialization error with path context.
    pub fn file_deserialization(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Convenience type alias for storage results.
pub type StorageResult<T> = Result<T, StorageError>;
