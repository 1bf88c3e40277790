//! Integration tests for the flush coordinator and fallback writer.
//!
//! These tests drive the sink directly with constructed records and verify
//! the flush-at-capacity trigger, the fixed collection order, bulk-failure
//! isolation, fallback completeness and the deduplication mode.

mod common;

use common::{block, harness, harness_with, tx, tx_hash_hex, ScriptedAdapter};
use txscope_pipeline::{apply_transaction, TelemetryConfig};
use txscope_storage::{RecordKind, TelemetryStore};

/// Feed `n` executed transactions through the sink.
async fn record_txs(h: &mut common::Harness, n: u8) {
    let block = block();
    let mut adapter = ScriptedAdapter::new(21_000);
    for i in 0..n {
        apply_transaction(&mut adapter, &mut h.sink, &block, &tx(i))
            .await
            .expect("execution succeeds");
    }
}

#[tokio::test]
async fn test_flush_triggers_only_at_capacity() {
    let mut h = harness(2);
    record_txs(&mut h, 3).await;

    // One full batch flushed after T2; T3 still buffered.
    assert_eq!(h.store.bulk_attempts(RecordKind::Transaction), 1);
    assert_eq!(h.store.bulk_attempts(RecordKind::Trace), 1);
    assert_eq!(h.store.bulk_attempts(RecordKind::Receipt), 1);
    assert_eq!(h.sink.pending(), 1);
    assert_eq!(h.store.transactions().len(), 2);

    // Close writes the trailing partial batch.
    h.sink.close().await;
    assert_eq!(h.store.bulk_attempts(RecordKind::Transaction), 2);
    assert_eq!(h.sink.pending(), 0);
    assert_eq!(h.store.transactions().len(), 3);
}

#[tokio::test]
async fn test_close_on_empty_buffer_is_a_no_op() {
    let mut h = harness(2);
    h.sink.close().await;
    assert_eq!(h.store.bulk_attempts(RecordKind::Transaction), 0);
}

#[tokio::test]
async fn test_bulk_flush_count_is_floor_n_over_c() {
    let mut h = harness(4);
    record_txs(&mut h, 11).await;

    assert_eq!(h.store.bulk_attempts(RecordKind::Transaction), 2);
    assert_eq!(h.sink.pending(), 3);
}

#[tokio::test]
async fn test_records_are_flushed_in_execution_order() {
    let mut h = harness(3);
    record_txs(&mut h, 3).await;

    let stored = h.store.transactions();
    let hashes: Vec<String> = stored.iter().map(|r| r.hash.clone()).collect();
    assert_eq!(hashes, vec![tx_hash_hex(0), tx_hash_hex(1), tx_hash_hex(2)]);

    // Index identity across collections.
    let traces = h.store.traces();
    let receipts = h.store.receipts();
    for i in 0..3 {
        assert_eq!(stored[i].hash, traces[i].tx_hash);
        assert_eq!(stored[i].hash, receipts[i].tx_hash);
    }
}

#[tokio::test]
async fn test_trace_bulk_failure_is_isolated_to_its_collection() {
    let mut h = harness(2);
    h.store.fail_bulk_writes(RecordKind::Trace);
    record_txs(&mut h, 2).await;

    // Fallback made exactly K=2 individual trace inserts, all successful.
    assert_eq!(h.store.individual_attempts(RecordKind::Trace), 2);
    assert_eq!(h.store.traces().len(), 2);
    assert!(h.error_lines().is_empty());

    // The other collections flowed through their bulk path untouched.
    assert_eq!(h.store.individual_attempts(RecordKind::Transaction), 0);
    assert_eq!(h.store.individual_attempts(RecordKind::Receipt), 0);
    assert_eq!(h.store.transactions().len(), 2);
    assert_eq!(h.store.receipts().len(), 2);
}

#[tokio::test]
async fn test_fallback_logs_each_terminally_failed_record_once() {
    let mut h = harness(2);
    // T1's hash poisons the bulk write of all three collections; its
    // individual retries fail too.
    h.store.fail_record(tx_hash_hex(1));
    record_txs(&mut h, 2).await;

    // K=2 individual attempts per collection.
    assert_eq!(h.store.individual_attempts(RecordKind::Transaction), 2);
    assert_eq!(h.store.individual_attempts(RecordKind::Trace), 2);
    assert_eq!(h.store.individual_attempts(RecordKind::Receipt), 2);

    // The healthy record landed everywhere; the poisoned one is lost.
    assert_eq!(h.store.transactions().len(), 1);
    assert_eq!(h.store.traces().len(), 1);
    assert_eq!(h.store.receipts().len(), 1);

    // Exactly one error-log line per lost record, kind-prefixed.
    let lines = h.error_lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Transaction "));
    assert!(lines[1].starts_with("Trace "));
    assert!(lines[2].starts_with("Receipt "));

    // Processing went on: the pipeline can keep recording.
    record_txs(&mut h, 1).await;
    assert_eq!(h.sink.pending(), 1);
}

#[tokio::test]
async fn test_dedup_skips_records_that_already_exist() {
    let mut h = harness_with(TelemetryConfig {
        batch_capacity: 2,
        dedup: true,
        ..TelemetryConfig::default()
    });

    // Seed the store with T0's transaction record, as a previous run
    // would have left it.
    let mut seed = harness(1);
    record_txs(&mut seed, 1).await;
    let existing = seed.store.transactions().remove(0);
    h.store.insert_transaction(&existing).await.unwrap();

    record_txs(&mut h, 2).await;

    // T0's transaction record was filtered; T1's was written. Traces and
    // receipts had no duplicates and flowed through in full.
    let stored = h.store.transactions();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1].hash, tx_hash_hex(1));
    assert_eq!(h.store.traces().len(), 2);
    assert_eq!(h.store.receipts().len(), 2);
}

#[tokio::test]
async fn test_dedup_probe_failure_keeps_the_record() {
    let mut h = harness_with(TelemetryConfig {
        batch_capacity: 2,
        dedup: true,
        ..TelemetryConfig::default()
    });
    h.store.fail_probes(RecordKind::Transaction);
    h.store.fail_probes(RecordKind::Trace);
    h.store.fail_probes(RecordKind::Receipt);

    record_txs(&mut h, 2).await;

    // A failed existence probe is treated as "not present": the bulk
    // writes still run and every record lands.
    assert_eq!(h.store.bulk_attempts(RecordKind::Transaction), 1);
    assert_eq!(h.store.transactions().len(), 2);
    assert_eq!(h.store.traces().len(), 2);
    assert_eq!(h.store.receipts().len(), 2);
    assert!(h.error_lines().is_empty());
}

#[tokio::test]
async fn test_without_dedup_inserts_are_unconditional() {
    let mut h = harness(1);

    let mut seed = harness(1);
    record_txs(&mut seed, 1).await;
    let existing = seed.store.transactions().remove(0);
    h.store.insert_transaction(&existing).await.unwrap();

    record_txs(&mut h, 1).await;
    assert_eq!(h.store.transactions().len(), 2);
}

#[tokio::test]
async fn test_total_store_outage_never_reaches_the_caller() {
    let mut h = harness(1);
    h.store.fail_bulk_writes(RecordKind::Transaction);
    h.store.fail_bulk_writes(RecordKind::Trace);
    h.store.fail_bulk_writes(RecordKind::Receipt);
    h.store.fail_record(tx_hash_hex(0));
    h.store.fail_record(tx_hash_hex(1));

    // Every write fails, bulk and individual; record() still completes.
    record_txs(&mut h, 2).await;

    assert_eq!(h.store.transactions().len(), 0);
    assert_eq!(h.error_lines().len(), 6);
}
