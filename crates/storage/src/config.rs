//! Store configuration
//!
//! Startup configuration for the document-store session and the error-log
//! file. None of these values are touched on the per-transaction hot path.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default connection target for the document store.
pub const DEFAULT_STORE_URI: &str = "mongodb://127.0.0.1:27017";

/// Default database holding the three telemetry collections.
pub const DEFAULT_DATABASE: &str = "geth";

/// Default path of the append-only persistence-failure log.
pub const DEFAULT_ERROR_LOG_PATH: &str = "db_error.log";

/// Connection settings for the document store and the error log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Connection string of the document store.
    #[serde(default = "default_uri")]
    pub uri: String,

    /// Database holding the `transaction`, `trace` and `receipt`
    /// collections.
    #[serde(default = "default_database")]
    pub database: String,

    /// Path of the append-only error log file.
    #[serde(default = "default_error_log_path")]
    pub error_log_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            database: default_database(),
            error_log_path: default_error_log_path(),
        }
    }
}

fn default_uri() -> String {
    DEFAULT_STORE_URI.to_string()
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_error_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_ERROR_LOG_PATH)
}
