//! Storage error types

use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Initial session to the store could not be established.
    ///
    /// Fatal at startup: telemetry is required infrastructure, so the
    /// process must not continue without a store session.
    #[error("store connection failed: {0}")]
    ConnectionFailed(String),

    /// A bulk or individual write was rejected by the store.
    #[error("database error: {0}")]
    Database(String),

    /// Record could not be serialized for the store.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error (error-log file handling)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// MongoDB driver error
    #[cfg(feature = "mongodb")]
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;
