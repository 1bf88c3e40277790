//! Telemetry pipeline configuration

use serde::{Deserialize, Serialize};
use txscope_storage::StoreConfig;

/// Default number of records accumulated per flush cycle.
pub const DEFAULT_BATCH_CAPACITY: usize = 1000;

/// Startup configuration for the telemetry pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Records accumulated per collection before a bulk flush.
    #[serde(default = "default_batch_capacity")]
    pub batch_capacity: usize,

    /// When enabled, records whose transaction hash already exists in the
    /// target collection are skipped before the bulk write.
    ///
    /// Off by default: inserts are unconditional.
    #[serde(default)]
    pub dedup: bool,

    /// Document-store connection settings.
    #[serde(default)]
    pub store: StoreConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            batch_capacity: DEFAULT_BATCH_CAPACITY,
            dedup: false,
            store: StoreConfig::default(),
        }
    }
}

fn default_batch_capacity() -> usize {
    DEFAULT_BATCH_CAPACITY
}
