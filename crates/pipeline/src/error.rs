//! Error types for the telemetry pipeline.
//!
//! Only execution errors exist at this boundary: they indicate an invalid
//! transaction or block and must halt block processing. Storage errors are
//! handled inside the sink and never reach the caller.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, ExecutionError>;

/// Errors reported by the external execution engine.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Transaction is invalid (bad signature, nonce, insufficient funds).
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// EVM execution failed in a way that invalidates the block.
    #[error("evm execution error: {0}")]
    Evm(String),

    /// Internal engine error that should not occur.
    #[error("internal error: {0}")]
    Internal(String),
}
