//! Fixed-capacity batch buffer for per-transaction records.
//!
//! Three parallel sequences — transactions, traces, receipts — share one
//! cursor: index `i` in each sequence refers to the same transaction. The
//! buffer is process-local and non-persistent; entries that were never
//! flushed are lost on a crash, which the at-least-once-after-flush-attempt
//! contract accepts.
//!
//! # Concurrency
//!
//! The buffer is single-threaded by design. Block processing replays
//! transactions strictly in order, and the owning pipeline holds the only
//! `&mut` reference. Concurrent block pipelines must each own their own
//! buffer.

use txscope_types::{ReceiptRecord, TraceRecord, TransactionRecord};

use crate::config::DEFAULT_BATCH_CAPACITY;

/// Three parallel fixed-capacity record sequences under one cursor.
#[derive(Debug)]
pub struct BatchBuffer {
    transactions: Vec<TransactionRecord>,
    traces: Vec<TraceRecord>,
    receipts: Vec<ReceiptRecord>,
    capacity: usize,
}

impl BatchBuffer {
    /// Create a buffer with the default capacity of
    /// [`DEFAULT_BATCH_CAPACITY`] records per collection.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BATCH_CAPACITY)
    }

    /// Create a buffer holding `capacity` records per collection.
    ///
    /// A zero capacity is clamped to 1 so the flush trigger stays
    /// reachable.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            transactions: Vec::with_capacity(capacity),
            traces: Vec::with_capacity(capacity),
            receipts: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Write one transaction's records at the current cursor position and
    /// advance the cursor.
    ///
    /// The caller must not call this on a full buffer; the sink flushes
    /// as soon as the cursor reaches capacity.
    pub fn record(
        &mut self,
        transaction: TransactionRecord,
        trace: TraceRecord,
        receipt: ReceiptRecord,
    ) {
        debug_assert!(!self.is_full(), "record() on a full buffer");
        self.transactions.push(transaction);
        self.traces.push(trace);
        self.receipts.push(receipt);
    }

    /// Current cursor position: the number of buffered transactions.
    pub fn cursor(&self) -> usize {
        self.transactions.len()
    }

    /// Fixed batch size per collection.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the cursor has reached capacity (the only flush trigger).
    pub fn is_full(&self) -> bool {
        self.cursor() >= self.capacity
    }

    /// Whether the buffer holds no records.
    pub fn is_empty(&self) -> bool {
        self.cursor() == 0
    }

    /// Clear all three sequences and rewind the cursor to 0. Idempotent.
    pub fn reset(&mut self) {
        self.transactions.clear();
        self.traces.clear();
        self.receipts.clear();
    }

    /// Hand out the three buffered batches for a flush, leaving the buffer
    /// reset.
    ///
    /// Each slot is read exactly once: the returned vectors own the records
    /// and the buffer is empty afterwards.
    pub fn drain(&mut self) -> (Vec<TransactionRecord>, Vec<TraceRecord>, Vec<ReceiptRecord>) {
        let transactions = std::mem::replace(
            &mut self.transactions,
            Vec::with_capacity(self.capacity),
        );
        let traces = std::mem::replace(&mut self.traces, Vec::with_capacity(self.capacity));
        let receipts = std::mem::replace(&mut self.receipts, Vec::with_capacity(self.capacity));
        (transactions, traces, receipts)
    }
}

impl Default for BatchBuffer {
    fn default() -> Self {
        Self::new()
    }
}
