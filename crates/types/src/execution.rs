//! Typed views over the execution engine's per-transaction output.
//!
//! The EVM interpreter, state trie, and receipt construction live in an
//! external ledger-execution engine. These types capture exactly the data
//! the telemetry pipeline consumes from it: the block being replayed, the
//! transaction message, and the execution outcome (receipt, gas, trace).

use alloy_primitives::{Address, Bloom, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// Context of the block currently being replayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContext {
    /// Hash of the block containing the transactions.
    pub block_hash: B256,

    /// Block number.
    pub block_number: u64,
}

/// View over a transaction message as the execution engine presents it.
///
/// Field values mirror the accessors of the engine's transaction and message
/// objects; `to` is `None` for contract-creation transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionView {
    /// Transaction hash.
    pub hash: B256,

    /// Sender address, recovered from the signature.
    pub from: Address,

    /// Recipient address, `None` for contract creation.
    pub to: Option<Address>,

    /// Sender account nonce.
    pub nonce: u64,

    /// Gas limit of the transaction.
    pub gas_limit: u64,

    /// Gas price in wei.
    pub gas_price: U256,

    /// Transferred value in wei.
    pub value: U256,

    /// Call data / init code.
    pub input: Bytes,

    /// Signature component r.
    pub r: U256,

    /// Signature component s.
    pub s: U256,

    /// Signature recovery value v.
    pub v: U256,

    /// Position of the transaction within its block.
    pub index: u64,
}

/// A single log entry emitted during execution.
///
/// Serialized independently to compact JSON when a [`ReceiptRecord`] is
/// built, one object per entry.
///
/// [`ReceiptRecord`]: crate::records::ReceiptRecord
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Address of the contract that emitted the log.
    pub address: Address,

    /// Indexed topics (up to 4).
    pub topics: Vec<B256>,

    /// Non-indexed log data.
    pub data: Bytes,
}

/// Receipt produced by the execution engine for one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReceipt {
    /// Address of the contract created by this transaction, if any.
    pub contract_address: Option<Address>,

    /// Cumulative gas used in the block up to and including this transaction.
    pub cumulative_gas_used: u64,

    /// Gas used by this transaction alone.
    pub gas_used: u64,

    /// Logs emitted during execution, in emission order.
    pub logs: Vec<LogEntry>,

    /// Bloom filter over the logs.
    pub logs_bloom: Bloom,

    /// Status code: 1 for success, 0 for revert.
    pub status: u64,

    /// Hash of the transaction this receipt belongs to.
    pub transaction_hash: B256,
}

/// Everything the execution engine yields for one applied transaction.
///
/// Produced only when execution succeeded; an execution error aborts the
/// per-transaction operation before any of this data exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedTransaction {
    /// The receipt constructed for the transaction.
    pub receipt: ExecutionReceipt,

    /// Gas used by the transaction.
    pub gas_used: u64,

    /// Opcode-level trace text accumulated while the EVM ran.
    pub trace: String,

    /// Pre-execution failure reason reported by the VM, if any.
    ///
    /// Set for transactions that were included in a block but reverted
    /// (e.g. out of gas); distinct from an execution error, which aborts
    /// processing entirely.
    pub vm_error: Option<String>,
}
