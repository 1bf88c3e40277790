//! Telemetry pipeline for txscope.
//!
//! This crate accumulates the per-transaction records produced while a block
//! is replayed and flushes them to the document store in fixed-size batches:
//!
//! - [`buffer`]: three parallel fixed-capacity sequences under one cursor
//! - [`sink`]: the flush coordinator — bulk-writes full batches and resets
//! - [`fallback`]: per-record retries after a failed bulk write
//! - [`adapter`]: the boundary to the external ledger-execution engine and
//!   the per-transaction / per-block drivers
//!
//! Persistence is best-effort: execution errors always propagate, storage
//! errors never do.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod adapter;
pub mod buffer;
pub mod config;
pub mod error;
pub mod fallback;
pub mod sink;

pub use adapter::{apply_transaction, process_block, ExecutionAdapter};
pub use buffer::BatchBuffer;
pub use config::{TelemetryConfig, DEFAULT_BATCH_CAPACITY};
pub use error::{ExecutionError, Result};
pub use fallback::FallbackWriter;
pub use sink::TelemetrySink;
