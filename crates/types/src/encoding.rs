//! Field-encoding policy for stored records.
//!
//! Downstream consumers of the persisted documents expect a fixed mix of
//! decimal and hex encodings, preserved here as one explicit table instead
//! of ad hoc formatting at each call site:
//!
//! | fields | rule |
//! |---|---|
//! | block hash, tx hash | full-width `0x` lowercase hex |
//! | sender, recipient, contract address | EIP-55 checksummed |
//! | recipient of a contract creation | the literal sentinel `"0x0"` |
//! | block number, gas, gas price, value, gas used | decimal |
//! | nonce, r, s, v, tx index | `0x` minimal hex (`5` becomes `"0x5"`) |
//! | input data | `0x` lowercase hex, `"0x"` when empty |
//! | bloom | `0x` hex, leading zero nibbles trimmed, `"0x0"` when zero |
//! | status | `"0x"` + decimal status code |
//! | logs | compact JSON per entry, entries joined with `\n` |

use alloy_primitives::{hex, Address, Bloom, Bytes, B256, U256};

use crate::execution::LogEntry;

/// Encode a 32-byte hash as full-width `0x`-prefixed lowercase hex.
pub fn hash_hex(hash: &B256) -> String {
    hex::encode_prefixed(hash)
}

/// Encode an address in its EIP-55 checksummed form.
pub fn address_checksum(address: &Address) -> String {
    address.to_checksum(None)
}

/// Encode a recipient address, substituting the `"0x0"` sentinel for
/// contract-creation transactions.
pub fn recipient_or_creation(to: Option<&Address>) -> String {
    match to {
        Some(address) => address_checksum(address),
        None => "0x0".to_string(),
    }
}

/// Encode an integer quantity as a decimal string.
pub fn decimal(value: impl std::fmt::Display) -> String {
    value.to_string()
}

/// Encode a `u64` quantity as `0x`-prefixed minimal hex.
pub fn quantity_hex(value: u64) -> String {
    format!("{value:#x}")
}

/// Encode a 256-bit quantity as `0x`-prefixed minimal hex.
pub fn quantity_hex_u256(value: &U256) -> String {
    format!("{value:#x}")
}

/// Encode call data as `0x`-prefixed lowercase hex (`"0x"` when empty).
pub fn data_hex(data: &Bytes) -> String {
    hex::encode_prefixed(data)
}

/// Encode a bloom filter as `0x`-prefixed hex with leading zero nibbles
/// trimmed, matching big-integer formatting (`"0x0"` for an empty bloom).
pub fn bloom_hex(bloom: &Bloom) -> String {
    let full = hex::encode(bloom.as_slice());
    let trimmed = full.trim_start_matches('0');
    if trimmed.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{trimmed}")
    }
}

/// Encode a receipt status code as `"0x"` followed by the decimal code.
pub fn status_code(status: u64) -> String {
    format!("0x{status}")
}

/// Serialize log entries to compact JSON objects joined by newlines.
///
/// Returns the empty string when there are no logs.
pub fn join_logs(logs: &[LogEntry]) -> String {
    logs.iter()
        .map(|log| serde_json::to_string(log).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}
