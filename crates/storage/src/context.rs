//! Process-wide telemetry store context.
//!
//! Bundles the long-lived store session and the error-log handle into one
//! explicit context object that the block-processing pipeline owns and
//! passes into the flush coordinator and fallback writer. No ambient
//! globals: unit tests inject an [`InMemoryStore`](crate::InMemoryStore)
//! through [`TelemetryContext::new`].

use std::sync::Arc;

use crate::error::Result;
use crate::error_log::ErrorLog;
use crate::store::TelemetryStore;

#[cfg(feature = "mongodb")]
use crate::config::StoreConfig;
#[cfg(feature = "mongodb")]
use crate::mongo::MongoStore;

/// Shared handle to the store session and the error log for one process
/// lifetime.
///
/// Cloning is cheap (two `Arc` bumps); each flush operation obtains its own
/// store handle via [`store`](TelemetryContext::store) and releases it on
/// scope exit, so the shared session state is never mutated concurrently.
#[derive(Clone)]
pub struct TelemetryContext {
    store: Arc<dyn TelemetryStore>,
    error_log: Arc<ErrorLog>,
}

impl TelemetryContext {
    /// Build a context from an existing store and error log.
    pub fn new(store: Arc<dyn TelemetryStore>, error_log: Arc<ErrorLog>) -> Self {
        Self { store, error_log }
    }

    /// Establish the store session and open the error log at startup.
    ///
    /// # Errors
    /// Returns an error when the store is unreachable or the error-log file
    /// cannot be opened. Both are fatal: telemetry is required
    /// infrastructure for the run.
    #[cfg(feature = "mongodb")]
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let store = MongoStore::connect(config).await?;
        let error_log = ErrorLog::open(&config.error_log_path)?;
        tracing::info!(
            database = %config.database,
            error_log = %config.error_log_path.display(),
            "telemetry store session established"
        );
        Ok(Self::new(Arc::new(store), Arc::new(error_log)))
    }

    /// Obtain an independently-droppable store handle for one flush
    /// operation.
    pub fn store(&self) -> Arc<dyn TelemetryStore> {
        Arc::clone(&self.store)
    }

    /// The process-wide error log.
    pub fn error_log(&self) -> &ErrorLog {
        &self.error_log
    }
}
