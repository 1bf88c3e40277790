//! Flush coordinator: accumulates records and bulk-writes full batches.
//!
//! The sink owns the batch buffer and the store context. Records flow in
//! per executed transaction; when the cursor reaches capacity the three
//! batches are bulk-written inline — transaction, then trace, then receipt,
//! each independently attempted — and the buffer resets. A failed bulk
//! write degrades to per-record fallback writes.
//!
//! Telemetry is additive: nothing here returns an error to the
//! block-processing caller. A total store outage after startup costs
//! records (visible in the error log), never chain-processing liveness.

use std::time::Instant;

use tracing::{debug, warn};
use txscope_storage::{RecordKind, TelemetryContext, TelemetryStore};
use txscope_types::{ReceiptRecord, TraceRecord, TransactionRecord};

use crate::buffer::BatchBuffer;
use crate::config::TelemetryConfig;
use crate::fallback::FallbackWriter;

/// Accumulates per-transaction records and flushes them in fixed-size
/// batches.
pub struct TelemetrySink {
    buffer: BatchBuffer,
    context: TelemetryContext,
    dedup: bool,
}

impl TelemetrySink {
    /// Build a sink over an established store context.
    pub fn new(context: TelemetryContext, config: &TelemetryConfig) -> Self {
        Self {
            buffer: BatchBuffer::with_capacity(config.batch_capacity),
            context,
            dedup: config.dedup,
        }
    }

    /// Number of records currently buffered per collection.
    pub fn pending(&self) -> usize {
        self.buffer.cursor()
    }

    /// Fixed batch size per collection.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Buffer one transaction's records; flushes inline when the batch is
    /// full.
    ///
    /// Persistence failures are handled internally and never surface.
    pub async fn record(
        &mut self,
        transaction: TransactionRecord,
        trace: TraceRecord,
        receipt: ReceiptRecord,
    ) {
        self.buffer.record(transaction, trace, receipt);
        if self.buffer.is_full() {
            self.flush().await;
        }
    }

    /// Flush a trailing partial batch.
    ///
    /// A partial batch is only ever written through this call; without it,
    /// buffered records below capacity stay in memory until the next flush
    /// trigger.
    pub async fn close(&mut self) {
        if !self.buffer.is_empty() {
            self.flush().await;
        }
    }

    /// Bulk-write the three buffered batches in fixed order and reset.
    ///
    /// Each collection's write is independently attempted: a failure in the
    /// transaction bulk write does not block the trace or receipt writes.
    async fn flush(&mut self) {
        let started = Instant::now();
        let (transactions, traces, receipts) = self.buffer.drain();
        let count = transactions.len();

        // Per-flush store handle, released when this scope exits.
        let store = self.context.store();
        let fallback = FallbackWriter::new(store.as_ref(), self.context.error_log());

        let transactions = self
            .filter_new(store.as_ref(), RecordKind::Transaction, transactions, |r| {
                &r.hash
            })
            .await;
        if !transactions.is_empty() {
            if let Err(err) = store.insert_transactions(&transactions).await {
                warn!(%err, count = transactions.len(), "bulk transaction write failed, retrying records individually");
                fallback.retry_transactions(&transactions).await;
            }
        }

        let traces = self
            .filter_new(store.as_ref(), RecordKind::Trace, traces, |r| &r.tx_hash)
            .await;
        if !traces.is_empty() {
            if let Err(err) = store.insert_traces(&traces).await {
                warn!(%err, count = traces.len(), "bulk trace write failed, retrying records individually");
                fallback.retry_traces(&traces).await;
            }
        }

        let receipts = self
            .filter_new(store.as_ref(), RecordKind::Receipt, receipts, |r| {
                &r.tx_hash
            })
            .await;
        if !receipts.is_empty() {
            if let Err(err) = store.insert_receipts(&receipts).await {
                warn!(%err, count = receipts.len(), "bulk receipt write failed, retrying records individually");
                fallback.retry_receipts(&receipts).await;
            }
        }

        debug!(count, elapsed = ?started.elapsed(), "telemetry batch flushed");
    }

    /// In dedup mode, drop records whose hash already exists in the target
    /// collection. A failed existence probe keeps the record: the insert is
    /// attempted and a duplicate surfaces as an individual insert error at
    /// worst.
    async fn filter_new<T, F>(
        &self,
        store: &dyn TelemetryStore,
        kind: RecordKind,
        records: Vec<T>,
        tx_hash: F,
    ) -> Vec<T>
    where
        F: Fn(&T) -> &str,
    {
        if !self.dedup {
            return records;
        }
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            match store.has_record(kind, tx_hash(&record)).await {
                Ok(true) => {
                    debug!(%kind, tx_hash = tx_hash(&record), "skipping duplicate record");
                }
                Ok(false) | Err(_) => kept.push(record),
            }
        }
        kept
    }
}
