//! The three per-transaction documents persisted to the store.
//!
//! All fields are human-readable string encodings produced by the policy in
//! [`crate::encoding`]. One transaction yields exactly one record of each
//! kind, all sharing the transaction hash as their identity.

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::encoding;
use crate::execution::{BlockContext, ExecutionReceipt, TransactionView};

/// Transaction metadata, one document per executed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Hash of the containing block (`0x` hex).
    pub block_hash: String,

    /// Block number (decimal).
    pub block_number: String,

    /// Sender address (EIP-55).
    pub from: String,

    /// Gas limit (decimal).
    pub gas: String,

    /// Gas price in wei (decimal).
    pub gas_price: String,

    /// Transaction hash (`0x` hex) — record identity.
    pub hash: String,

    /// Call data (`0x` hex).
    pub input: String,

    /// Sender nonce (`0x` minimal hex).
    pub nonce: String,

    /// Signature component r (`0x` minimal hex).
    pub r: String,

    /// Signature component s (`0x` minimal hex).
    pub s: String,

    /// Recipient address (EIP-55), or `"0x0"` for contract creation.
    pub to: String,

    /// Transaction index within the block (`0x` minimal hex).
    pub tx_index: String,

    /// Signature recovery value v (`0x` minimal hex).
    pub v: String,

    /// Transferred value in wei (decimal).
    pub value: String,
}

impl TransactionRecord {
    /// Build the metadata record for one transaction of a block.
    pub fn new(block: &BlockContext, tx: &TransactionView) -> Self {
        Self {
            block_hash: encoding::hash_hex(&block.block_hash),
            block_number: encoding::decimal(block.block_number),
            from: encoding::address_checksum(&tx.from),
            gas: encoding::decimal(tx.gas_limit),
            gas_price: encoding::decimal(&tx.gas_price),
            hash: encoding::hash_hex(&tx.hash),
            input: encoding::data_hex(&tx.input),
            nonce: encoding::quantity_hex(tx.nonce),
            r: encoding::quantity_hex_u256(&tx.r),
            s: encoding::quantity_hex_u256(&tx.s),
            to: encoding::recipient_or_creation(tx.to.as_ref()),
            tx_index: encoding::quantity_hex(tx.index),
            v: encoding::quantity_hex_u256(&tx.v),
            value: encoding::decimal(&tx.value),
        }
    }
}

/// Opcode-level execution trace, one document per executed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Transaction hash (`0x` hex) — record identity.
    pub tx_hash: String,

    /// Accumulated trace text emitted while the EVM ran.
    pub trace: String,
}

impl TraceRecord {
    /// Build the trace record for one transaction.
    pub fn new(tx_hash: &B256, trace: impl Into<String>) -> Self {
        Self {
            tx_hash: encoding::hash_hex(tx_hash),
            trace: trace.into(),
        }
    }
}

/// Execution receipt, one document per executed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    /// Address of the created contract (EIP-55), the zero address when the
    /// transaction did not create one.
    pub contract_address: String,

    /// Cumulative gas used in the block up to and including this
    /// transaction (decimal).
    pub cumulative_gas_used: String,

    /// Gas used by this transaction (decimal).
    pub gas_used: String,

    /// Log entries, one compact JSON object per line.
    pub logs: String,

    /// Bloom filter over the logs (`0x` hex, leading zeros trimmed).
    pub logs_bloom: String,

    /// Status code (`"0x1"` success, `"0x0"` revert).
    pub status: String,

    /// Transaction hash (`0x` hex) — record identity.
    pub tx_hash: String,

    /// Pre-execution failure reason reported by the VM, empty when none.
    pub fail_reason: String,
}

impl ReceiptRecord {
    /// Build the receipt record for one transaction.
    pub fn new(receipt: &ExecutionReceipt, vm_error: Option<&str>) -> Self {
        Self {
            contract_address: encoding::address_checksum(
                &receipt.contract_address.unwrap_or(Address::ZERO),
            ),
            cumulative_gas_used: encoding::decimal(receipt.cumulative_gas_used),
            gas_used: encoding::decimal(receipt.gas_used),
            logs: encoding::join_logs(&receipt.logs),
            logs_bloom: encoding::bloom_hex(&receipt.logs_bloom),
            status: encoding::status_code(receipt.status),
            tx_hash: encoding::hash_hex(&receipt.transaction_hash),
            fail_reason: vm_error.unwrap_or_default().to_string(),
        }
    }
}
