//! Telemetry store trait for persisting per-transaction records.
//!
//! This module provides the [`TelemetryStore`] trait for writing the three
//! per-transaction document kinds to their collections. The pipeline's flush
//! coordinator uses the bulk methods; its fallback writer uses the
//! per-record methods after a bulk write fails.
//!
//! # Usage
//!
//! ```ignore
//! use txscope_storage::{MongoStore, StoreConfig, TelemetryStore};
//!
//! let store = MongoStore::connect(&StoreConfig::default()).await?;
//! store.insert_transactions(&batch).await?;
//! ```

use std::fmt;

use async_trait::async_trait;
use txscope_types::{ReceiptRecord, TraceRecord, TransactionRecord};

use crate::error::Result;

/// The three persisted record kinds and their store collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Transaction metadata (`transaction` collection).
    Transaction,
    /// Execution trace (`trace` collection).
    Trace,
    /// Execution receipt (`receipt` collection).
    Receipt,
}

impl RecordKind {
    /// Label used as the error-log line prefix.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Transaction => "Transaction",
            RecordKind::Trace => "Trace",
            RecordKind::Receipt => "Receipt",
        }
    }

    /// Name of the store collection holding this record kind.
    pub fn collection(&self) -> &'static str {
        match self {
            RecordKind::Transaction => "transaction",
            RecordKind::Trace => "trace",
            RecordKind::Receipt => "receipt",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trait for persisting telemetry records to a document store.
///
/// One document is written per record; insertion order within a bulk write
/// is preserved. Implementations must be thread-safe (`Send + Sync`) so a
/// shared session can hand out cheap per-flush handles.
#[async_trait]
pub trait TelemetryStore: Send + Sync {
    /// Bulk-write a batch of transaction records, preserving order.
    ///
    /// # Errors
    /// Returns an error if the bulk write is rejected; the caller is then
    /// expected to retry each record individually.
    async fn insert_transactions(&self, records: &[TransactionRecord]) -> Result<()>;

    /// Insert a single transaction record.
    async fn insert_transaction(&self, record: &TransactionRecord) -> Result<()>;

    /// Bulk-write a batch of trace records, preserving order.
    async fn insert_traces(&self, records: &[TraceRecord]) -> Result<()>;

    /// Insert a single trace record.
    async fn insert_trace(&self, record: &TraceRecord) -> Result<()>;

    /// Bulk-write a batch of receipt records, preserving order.
    async fn insert_receipts(&self, records: &[ReceiptRecord]) -> Result<()>;

    /// Insert a single receipt record.
    async fn insert_receipt(&self, record: &ReceiptRecord) -> Result<()>;

    /// Check whether a record of the given kind already exists for a
    /// transaction hash.
    ///
    /// Used by the optional deduplication mode; this core does not enforce
    /// uniqueness beyond this probe.
    async fn has_record(&self, kind: RecordKind, tx_hash: &str) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_error_log_prefixes() {
        assert_eq!(RecordKind::Transaction.label(), "Transaction");
        assert_eq!(RecordKind::Trace.label(), "Trace");
        assert_eq!(RecordKind::Receipt.label(), "Receipt");
    }

    #[test]
    fn collections_match_store_names() {
        assert_eq!(RecordKind::Transaction.collection(), "transaction");
        assert_eq!(RecordKind::Trace.collection(), "trace");
        assert_eq!(RecordKind::Receipt.collection(), "receipt");
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(RecordKind::Trace.to_string(), "Trace");
    }
}
