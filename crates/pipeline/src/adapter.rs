//! Boundary to the external ledger-execution engine.
//!
//! The EVM interpreter, state trie and receipt construction are consumed as
//! an already-correct collaborator behind [`ExecutionAdapter`].
//! [`apply_transaction`] wraps one adapter call with record capture: it
//! exposes the same contract as the adapter — the receipt and gas used, or
//! the adapter's error unchanged — while feeding the telemetry sink as a
//! side effect. Telemetry failures never surface through this function.

use txscope_types::{
    BlockContext, ExecutedTransaction, ExecutionReceipt, ReceiptRecord, TraceRecord,
    TransactionRecord, TransactionView,
};

use crate::error::Result;
use crate::sink::TelemetrySink;

/// Per-transaction execution call of the ledger-execution engine.
///
/// Implementations run the transaction against state and yield the receipt,
/// gas used, accumulated trace text and any VM-level failure reason.
pub trait ExecutionAdapter {
    /// Execute one transaction of a block.
    ///
    /// # Errors
    /// An error indicates an invalid transaction or block and halts block
    /// processing; no record is buffered for the failed transaction.
    fn execute(
        &mut self,
        block: &BlockContext,
        tx: &TransactionView,
    ) -> Result<ExecutedTransaction>;
}

/// Execute one transaction and capture its telemetry records.
///
/// On success the three records (metadata, trace, receipt) are built and
/// handed to the sink, which may flush a full batch inline. On execution
/// failure the adapter's error propagates unchanged and nothing is
/// buffered — a partial record never reaches the buffer.
pub async fn apply_transaction<A: ExecutionAdapter>(
    adapter: &mut A,
    sink: &mut TelemetrySink,
    block: &BlockContext,
    tx: &TransactionView,
) -> Result<(ExecutionReceipt, u64)> {
    let executed = adapter.execute(block, tx)?;

    let transaction_record = TransactionRecord::new(block, tx);
    let trace_record = TraceRecord::new(&tx.hash, executed.trace.as_str());
    let receipt_record = ReceiptRecord::new(&executed.receipt, executed.vm_error.as_deref());
    sink.record(transaction_record, trace_record, receipt_record)
        .await;

    Ok((executed.receipt, executed.gas_used))
}

/// Replay a block's transactions strictly in order, capturing telemetry for
/// each.
///
/// Returns the receipts and the total gas used, or the first execution
/// error. Buffered records of already-applied transactions stay in the
/// sink; a trailing partial batch is written only by
/// [`TelemetrySink::close`].
pub async fn process_block<A: ExecutionAdapter>(
    adapter: &mut A,
    sink: &mut TelemetrySink,
    block: &BlockContext,
    txs: &[TransactionView],
) -> Result<(Vec<ExecutionReceipt>, u64)> {
    let mut receipts = Vec::with_capacity(txs.len());
    let mut total_gas = 0u64;
    for tx in txs {
        let (receipt, gas_used) = apply_transaction(adapter, sink, block, tx).await?;
        total_gas = total_gas.saturating_add(gas_used);
        receipts.push(receipt);
    }
    Ok((receipts, total_gas))
}
