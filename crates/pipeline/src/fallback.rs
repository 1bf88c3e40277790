//! Per-record fallback writes after a failed bulk write.
//!
//! A single malformed record can poison an entire bulk write. The fallback
//! writer retries each record of the failed batch alone, exactly once per
//! flush cycle — no backoff, no second attempt. Records that still fail are
//! terminal for this run: one line per record goes to the error log and
//! processing continues.

use tracing::warn;
use txscope_storage::{ErrorLog, RecordKind, TelemetryStore};
use txscope_types::{ReceiptRecord, TraceRecord, TransactionRecord};

/// Retries the records of one failed bulk write individually.
pub struct FallbackWriter<'a> {
    store: &'a dyn TelemetryStore,
    error_log: &'a ErrorLog,
}

impl<'a> FallbackWriter<'a> {
    /// Build a fallback writer over the flush's store handle and the
    /// process-wide error log.
    pub fn new(store: &'a dyn TelemetryStore, error_log: &'a ErrorLog) -> Self {
        Self { store, error_log }
    }

    /// Retry each transaction record of a failed batch individually.
    pub async fn retry_transactions(&self, records: &[TransactionRecord]) {
        for record in records {
            if let Err(err) = self.store.insert_transaction(record).await {
                self.report(RecordKind::Transaction, &record.hash, &err.to_string());
            }
        }
    }

    /// Retry each trace record of a failed batch individually.
    pub async fn retry_traces(&self, records: &[TraceRecord]) {
        for record in records {
            if let Err(err) = self.store.insert_trace(record).await {
                self.report(RecordKind::Trace, &record.tx_hash, &err.to_string());
            }
        }
    }

    /// Retry each receipt record of a failed batch individually.
    pub async fn retry_receipts(&self, records: &[ReceiptRecord]) {
        for record in records {
            if let Err(err) = self.store.insert_receipt(record).await {
                self.report(RecordKind::Receipt, &record.tx_hash, &err.to_string());
            }
        }
    }

    fn report(&self, kind: RecordKind, tx_hash: &str, message: &str) {
        warn!(%kind, tx_hash, message, "individual insert failed, record lost");
        self.error_log.record_failure(kind, message);
    }
}
