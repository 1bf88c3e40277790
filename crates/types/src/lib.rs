//! Core types for txscope transaction telemetry.
//!
//! This crate provides the value types exchanged between the ledger's
//! execution engine and the telemetry pipeline:
//!
//! - [`records`]: the three per-transaction documents persisted to the store
//!   (metadata, execution trace, receipt)
//! - [`encoding`]: the field-encoding policy shared by all record constructors
//! - [`execution`]: typed views over the data the execution engine yields for
//!   each applied transaction

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod encoding;
pub mod execution;
pub mod records;

pub use execution::{
    BlockContext, ExecutedTransaction, ExecutionReceipt, LogEntry, TransactionView,
};
pub use records::{ReceiptRecord, TraceRecord, TransactionRecord};
