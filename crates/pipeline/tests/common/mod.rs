//! Shared fixtures for pipeline integration tests.
#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use alloy_primitives::{Address, Bloom, Bytes, B256, U256};
use tempfile::TempDir;
use txscope_pipeline::{ExecutionAdapter, ExecutionError, TelemetryConfig, TelemetrySink};
use txscope_storage::{ErrorLog, InMemoryStore, TelemetryContext};
use txscope_types::{BlockContext, ExecutedTransaction, ExecutionReceipt, TransactionView};

/// Everything a pipeline test needs: the fake store for assertions, the
/// sink under test, and the error-log file.
pub struct Harness {
    pub store: Arc<InMemoryStore>,
    pub sink: TelemetrySink,
    pub log_path: PathBuf,
    _dir: TempDir,
}

/// Build a sink over an in-memory store with the given batch capacity.
pub fn harness(batch_capacity: usize) -> Harness {
    harness_with(TelemetryConfig {
        batch_capacity,
        ..TelemetryConfig::default()
    })
}

/// Build a sink with full control over the telemetry config.
pub fn harness_with(config: TelemetryConfig) -> Harness {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("db_error.log");
    let store = Arc::new(InMemoryStore::new());
    let error_log = Arc::new(ErrorLog::open(&log_path).expect("error log"));
    let context = TelemetryContext::new(store.clone(), error_log);
    Harness {
        sink: TelemetrySink::new(context, &config),
        store,
        log_path,
        _dir: dir,
    }
}

impl Harness {
    /// Lines currently in the error-log file.
    pub fn error_lines(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log_path)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// The block every test transaction belongs to.
pub fn block() -> BlockContext {
    BlockContext {
        block_hash: B256::repeat_byte(0xbb),
        block_number: 1_850_000,
    }
}

/// A plain value-transfer transaction with hash `0x{n}{n}...` and index `n`.
pub fn tx(n: u8) -> TransactionView {
    TransactionView {
        hash: B256::repeat_byte(n),
        from: Address::repeat_byte(0xaa),
        to: Some(Address::repeat_byte(0xee)),
        nonce: n as u64,
        gas_limit: 21_000,
        gas_price: U256::from(1_000_000_000u64),
        value: U256::from(100u64),
        input: Bytes::new(),
        r: U256::from(1u64),
        s: U256::from(2u64),
        v: U256::from(27u64),
        index: n as u64,
    }
}

/// The stored-record hash encoding of [`tx`]`(n)`.
pub fn tx_hash_hex(n: u8) -> String {
    format!("0x{}", format!("{n:02x}").repeat(32))
}

/// Execution engine stand-in: burns a fixed amount of gas per transaction
/// and fails for explicitly marked hashes.
pub struct ScriptedAdapter {
    pub gas_per_tx: u64,
    pub cumulative_gas: u64,
    pub fail_hashes: HashSet<B256>,
}

impl ScriptedAdapter {
    pub fn new(gas_per_tx: u64) -> Self {
        Self {
            gas_per_tx,
            cumulative_gas: 0,
            fail_hashes: HashSet::new(),
        }
    }

    pub fn fail_for(mut self, hash: B256) -> Self {
        self.fail_hashes.insert(hash);
        self
    }
}

impl ExecutionAdapter for ScriptedAdapter {
    fn execute(
        &mut self,
        _block: &BlockContext,
        tx: &TransactionView,
    ) -> Result<ExecutedTransaction, ExecutionError> {
        if self.fail_hashes.contains(&tx.hash) {
            return Err(ExecutionError::InvalidTransaction(format!(
                "nonce too low: {}",
                tx.nonce
            )));
        }
        self.cumulative_gas += self.gas_per_tx;
        Ok(ExecutedTransaction {
            receipt: ExecutionReceipt {
                contract_address: tx.to.is_none().then(|| Address::repeat_byte(0xcc)),
                cumulative_gas_used: self.cumulative_gas,
                gas_used: self.gas_per_tx,
                logs: vec![],
                logs_bloom: Bloom::default(),
                status: 1,
                transaction_hash: tx.hash,
            },
            gas_used: self.gas_per_tx,
            trace: "PUSH1 0x60\nSTOP".to_string(),
            vm_error: None,
        })
    }
}
