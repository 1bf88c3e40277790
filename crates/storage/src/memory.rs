//! In-memory implementation of TelemetryStore
//!
//! This implementation is primarily for testing and development. It stores
//! all records in insertion-ordered vectors and counts every bulk and
//! individual write attempt per record kind, so tests can assert flush and
//! fallback behavior directly.
//!
//! # Fault Injection
//!
//! Three switches exercise the degraded paths:
//! - [`fail_bulk_writes`](InMemoryStore::fail_bulk_writes) rejects every
//!   bulk write for a record kind
//! - [`fail_record`](InMemoryStore::fail_record) rejects any write (bulk or
//!   individual) touching a given transaction hash, modelling one malformed
//!   record poisoning a batch
//! - [`fail_probes`](InMemoryStore::fail_probes) rejects every
//!   [`has_record`](TelemetryStore::has_record) call for a record kind
//!
//! # Thread Safety
//!
//! All operations are thread-safe. `parking_lot::RwLock` guards each data
//! structure; locks are never held across an await point.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::RwLock;
use txscope_types::{ReceiptRecord, TraceRecord, TransactionRecord};

use crate::error::{Result, StorageError};
use crate::store::{RecordKind, TelemetryStore};

/// The three record collections under a single lock, keeping parallel
/// batches atomic with respect to concurrent readers.
#[derive(Default)]
struct Collections {
    transactions: Vec<TransactionRecord>,
    traces: Vec<TraceRecord>,
    receipts: Vec<ReceiptRecord>,
}

/// Per-kind write-attempt counters.
#[derive(Default)]
struct Attempts {
    bulk: HashMap<RecordKind, usize>,
    individual: HashMap<RecordKind, usize>,
}

/// In-memory telemetry store implementation
#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<Collections>,
    attempts: RwLock<Attempts>,
    fail_bulk: RwLock<HashSet<RecordKind>>,
    fail_hashes: RwLock<HashSet<String>>,
    fail_probe: RwLock<HashSet<RecordKind>>,
}

impl InMemoryStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every subsequent bulk write for the given record kind.
    pub fn fail_bulk_writes(&self, kind: RecordKind) {
        self.fail_bulk.write().insert(kind);
    }

    /// Stop rejecting bulk writes for the given record kind.
    pub fn restore_bulk_writes(&self, kind: RecordKind) {
        self.fail_bulk.write().remove(&kind);
    }

    /// Reject any write touching the given transaction hash.
    pub fn fail_record(&self, tx_hash: impl Into<String>) {
        self.fail_hashes.write().insert(tx_hash.into());
    }

    /// Reject every subsequent existence probe for the given record kind.
    pub fn fail_probes(&self, kind: RecordKind) {
        self.fail_probe.write().insert(kind);
    }

    /// Stop rejecting existence probes for the given record kind.
    pub fn restore_probes(&self, kind: RecordKind) {
        self.fail_probe.write().remove(&kind);
    }

    /// Number of bulk-write invocations attempted for a kind, including
    /// rejected ones.
    pub fn bulk_attempts(&self, kind: RecordKind) -> usize {
        self.attempts.read().bulk.get(&kind).copied().unwrap_or(0)
    }

    /// Number of individual-insert invocations attempted for a kind,
    /// including rejected ones.
    pub fn individual_attempts(&self, kind: RecordKind) -> usize {
        self.attempts
            .read()
            .individual
            .get(&kind)
            .copied()
            .unwrap_or(0)
    }

    /// Snapshot of the stored transaction records, in insertion order.
    pub fn transactions(&self) -> Vec<TransactionRecord> {
        self.collections.read().transactions.clone()
    }

    /// Snapshot of the stored trace records, in insertion order.
    pub fn traces(&self) -> Vec<TraceRecord> {
        self.collections.read().traces.clone()
    }

    /// Snapshot of the stored receipt records, in insertion order.
    pub fn receipts(&self) -> Vec<ReceiptRecord> {
        self.collections.read().receipts.clone()
    }

    /// Clear all data and counters (for testing)
    pub fn clear(&self) {
        let mut collections = self.collections.write();
        let mut attempts = self.attempts.write();
        collections.transactions.clear();
        collections.traces.clear();
        collections.receipts.clear();
        attempts.bulk.clear();
        attempts.individual.clear();
        self.fail_bulk.write().clear();
        self.fail_hashes.write().clear();
        self.fail_probe.write().clear();
    }

    fn note_bulk(&self, kind: RecordKind) {
        *self.attempts.write().bulk.entry(kind).or_insert(0) += 1;
    }

    fn note_individual(&self, kind: RecordKind) {
        *self.attempts.write().individual.entry(kind).or_insert(0) += 1;
    }

    /// Reject the write if the kind is marked for bulk failure or any of
    /// the touched hashes is marked as poisoned.
    fn check_bulk<'a>(
        &self,
        kind: RecordKind,
        mut hashes: impl Iterator<Item = &'a str>,
    ) -> Result<()> {
        if self.fail_bulk.read().contains(&kind) {
            return Err(StorageError::Database(format!(
                "injected bulk failure for {kind}"
            )));
        }
        let poisoned = self.fail_hashes.read();
        if let Some(hash) = hashes.find(|h| poisoned.contains(*h)) {
            return Err(StorageError::Database(format!(
                "injected failure for record {hash}"
            )));
        }
        Ok(())
    }

    fn check_individual(&self, tx_hash: &str) -> Result<()> {
        if self.fail_hashes.read().contains(tx_hash) {
            return Err(StorageError::Database(format!(
                "injected failure for record {tx_hash}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl TelemetryStore for InMemoryStore {
    async fn insert_transactions(&self, records: &[TransactionRecord]) -> Result<()> {
        self.note_bulk(RecordKind::Transaction);
        self.check_bulk(
            RecordKind::Transaction,
            records.iter().map(|r| r.hash.as_str()),
        )?;
        self.collections
            .write()
            .transactions
            .extend_from_slice(records);
        Ok(())
    }

    async fn insert_transaction(&self, record: &TransactionRecord) -> Result<()> {
        self.note_individual(RecordKind::Transaction);
        self.check_individual(&record.hash)?;
        self.collections.write().transactions.push(record.clone());
        Ok(())
    }

    async fn insert_traces(&self, records: &[TraceRecord]) -> Result<()> {
        self.note_bulk(RecordKind::Trace);
        self.check_bulk(RecordKind::Trace, records.iter().map(|r| r.tx_hash.as_str()))?;
        self.collections.write().traces.extend_from_slice(records);
        Ok(())
    }

    async fn insert_trace(&self, record: &TraceRecord) -> Result<()> {
        self.note_individual(RecordKind::Trace);
        self.check_individual(&record.tx_hash)?;
        self.collections.write().traces.push(record.clone());
        Ok(())
    }

    async fn insert_receipts(&self, records: &[ReceiptRecord]) -> Result<()> {
        self.note_bulk(RecordKind::Receipt);
        self.check_bulk(
            RecordKind::Receipt,
            records.iter().map(|r| r.tx_hash.as_str()),
        )?;
        self.collections.write().receipts.extend_from_slice(records);
        Ok(())
    }

    async fn insert_receipt(&self, record: &ReceiptRecord) -> Result<()> {
        self.note_individual(RecordKind::Receipt);
        self.check_individual(&record.tx_hash)?;
        self.collections.write().receipts.push(record.clone());
        Ok(())
    }

    async fn has_record(&self, kind: RecordKind, tx_hash: &str) -> Result<bool> {
        if self.fail_probe.read().contains(&kind) {
            return Err(StorageError::Database(format!(
                "injected probe failure for {kind}"
            )));
        }
        let collections = self.collections.read();
        let found = match kind {
            RecordKind::Transaction => collections.transactions.iter().any(|r| r.hash == tx_hash),
            RecordKind::Trace => collections.traces.iter().any(|r| r.tx_hash == tx_hash),
            RecordKind::Receipt => collections.receipts.iter().any(|r| r.tx_hash == tx_hash),
        };
        Ok(found)
    }
}
