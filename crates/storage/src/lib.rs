//! Storage layer for txscope transaction telemetry.
//!
//! This crate defines the document-store boundary used by the telemetry
//! pipeline. It provides:
//! - [`TelemetryStore`]: the store trait with bulk and per-record inserts
//!   for the three collections (`transaction`, `trace`, `receipt`)
//! - [`InMemoryStore`]: an in-memory implementation for testing, with
//!   fault-injection switches for exercising the fallback path
//! - [`MongoStore`]: a MongoDB-backed implementation for production
//!   (requires the `mongodb` feature, enabled by default)
//! - [`ErrorLog`]: the process-wide append-only log of records lost to
//!   persistent store failures
//! - [`TelemetryContext`]: the explicit context object bundling the store
//!   session and the error log for one process lifetime
//!
//! # Feature Flags
//!
//! - `mongodb` (default): enables the MongoDB storage backend

pub mod config;
pub mod context;
pub mod error;
pub mod error_log;
pub mod memory;
pub mod store;

// MongoDB backend (requires feature flag)
#[cfg(feature = "mongodb")]
pub mod mongo;

pub use config::StoreConfig;
pub use context::TelemetryContext;
pub use error::{Result, StorageError};
pub use error_log::ErrorLog;
pub use memory::InMemoryStore;
pub use store::{RecordKind, TelemetryStore};

#[cfg(feature = "mongodb")]
pub use mongo::MongoStore;
