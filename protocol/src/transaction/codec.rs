//! Binary encoding of transactions.
//!
//! # Wire layout
//!
//! All integers are little-endian. Every collection is preceded by a `u32`
//! element count, and every element has a fixed width, so the total length
//! is fully determined by the three counts.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ u32           input count        n                   │
//! │ n × [u8; 32]  inputs      (ids of outputs spent)     │
//! │ u32           signature count    m                   │
//! │ m × [u8; 65]  signatures  (recoverable)              │
//! │ u32           output count       k                   │
//! │ k × 37 bytes  outputs                                │
//! │   ├── u8          address version                    │
//! │   ├── [u8; 20]    address key hash                   │
//! │   ├── u64         coins (droplets)                   │
//! │   └── u64         hours                              │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Decoding consumes exactly the bytes the header implies. Fewer is
//! `TruncatedInput`, more is `TrailingBytes`, and a count that could not fit
//! in any representable message is `CountOverflow`, reported before any
//! allocation is sized from it.
//!
//! # Hashes
//!
//! - **id** = `SHA-256(entire encoding)`. The id is derived, never encoded.
//! - **inner hash** = `SHA-256(inputs section || outputs section)`, counts
//!   included. This is what signatures commit to, so it is independent of
//!   the signatures themselves.

use thiserror::Error;

use super::cursor::ByteReader;
use super::types::{Transaction, TransactionOutput};
use crate::address::Address;
use crate::config::{
    ADDRESS_LENGTH, COUNT_PREFIX_LENGTH, INPUT_RECORD_LENGTH, MIN_TRANSACTION_LENGTH,
    OUTPUT_RECORD_LENGTH, SIGNATURE_RECORD_LENGTH,
};
use crate::crypto::hash::{sha256, Hash256};
use crate::crypto::signature::Signature;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a byte sequence is not a transaction.
///
/// Every variant is a deterministic property of the input: retrying the same
/// bytes always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Fewer bytes remain than the next field requires.
    #[error("truncated input: {field} needs {needed} bytes but only {remaining} remain")]
    TruncatedInput {
        /// The field being read.
        field: &'static str,
        /// Bytes the field requires.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },

    /// Bytes remain after the last declared output.
    #[error("trailing bytes: {count} unread bytes after offset {offset}")]
    TrailingBytes {
        /// Where the transaction ended.
        offset: usize,
        /// How many bytes follow it.
        count: usize,
    },

    /// A declared count implies more bytes than any message can hold.
    #[error("count overflow: {count} {field} records exceed the maximum message size")]
    CountOverflow {
        /// The collection whose count overflowed.
        field: &'static str,
        /// The declared count.
        count: u32,
    },

    /// The outer text form could not be decoded.
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// What was wrong with the text.
        reason: String,
    },

    /// A transaction must create at least one output.
    #[error("transaction has no outputs")]
    NoOutputs,

    /// Signatures must line up one-to-one with inputs.
    #[error("signature count {signatures} does not match input count {inputs}")]
    SignatureCountMismatch {
        /// Number of inputs.
        inputs: usize,
        /// Number of signatures.
        signatures: usize,
    },

    /// The transaction decoded fine but is not the one that was requested.
    #[error("transaction id mismatch: expected {expected}, got {actual}")]
    IdMismatch {
        /// The id the caller asked for.
        expected: Hash256,
        /// The id of the bytes received.
        actual: Hash256,
    },
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Total encoded length of a transaction with the given collection sizes, or
/// `None` if it does not fit in a `u64`.
pub fn encoded_length(inputs: usize, signatures: usize, outputs: usize) -> Option<u64> {
    let section = |count: usize, width: usize| {
        (count as u64)
            .checked_mul(width as u64)?
            .checked_add(COUNT_PREFIX_LENGTH as u64)
    };
    section(inputs, INPUT_RECORD_LENGTH)?
        .checked_add(section(signatures, SIGNATURE_RECORD_LENGTH)?)?
        .checked_add(section(outputs, OUTPUT_RECORD_LENGTH)?)
}

fn write_count(buf: &mut Vec<u8>, count: usize) {
    // Structure verification bounds every collection well below u32::MAX.
    buf.extend_from_slice(&(count as u32).to_le_bytes());
}

fn write_inputs(buf: &mut Vec<u8>, inputs: &[Hash256]) {
    write_count(buf, inputs.len());
    for input in inputs {
        buf.extend_from_slice(input.as_bytes());
    }
}

fn write_signatures(buf: &mut Vec<u8>, signatures: &[Signature]) {
    write_count(buf, signatures.len());
    for sig in signatures {
        buf.extend_from_slice(sig.as_bytes());
    }
}

fn write_outputs(buf: &mut Vec<u8>, outputs: &[TransactionOutput]) {
    write_count(buf, outputs.len());
    for output in outputs {
        buf.extend_from_slice(&output.to_wire());
    }
}

/// Encode the three collections in wire order.
pub(crate) fn encode_parts(
    inputs: &[Hash256],
    signatures: &[Signature],
    outputs: &[TransactionOutput],
) -> Vec<u8> {
    let capacity = encoded_length(inputs.len(), signatures.len(), outputs.len())
        .map_or(MIN_TRANSACTION_LENGTH, |len| len as usize);
    let mut buf = Vec::with_capacity(capacity);
    write_inputs(&mut buf, inputs);
    write_signatures(&mut buf, signatures);
    write_outputs(&mut buf, outputs);
    buf
}

/// `SHA-256(inputs section || outputs section)`.
pub(crate) fn inner_hash_of(inputs: &[Hash256], outputs: &[TransactionOutput]) -> Hash256 {
    let mut buf = Vec::with_capacity(
        2 * COUNT_PREFIX_LENGTH
            + inputs.len() * INPUT_RECORD_LENGTH
            + outputs.len() * OUTPUT_RECORD_LENGTH,
    );
    write_inputs(&mut buf, inputs);
    write_outputs(&mut buf, outputs);
    sha256(&buf)
}

/// Encode a transaction. Deterministic: equal transactions encode to equal
/// bytes.
pub fn serialize_transaction(txn: &Transaction) -> Vec<u8> {
    encode_parts(txn.inputs(), txn.signatures(), txn.outputs())
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

fn read_output(reader: &mut ByteReader<'_>) -> Result<TransactionOutput, CodecError> {
    let address = Address::from_wire(reader.read_array::<ADDRESS_LENGTH>("output address")?);
    let coins = reader.read_u64_le("output coins")?;
    let hours = reader.read_u64_le("output hours")?;
    Ok(TransactionOutput::new(address, coins, hours))
}

/// Decode a transaction from its exact byte encoding.
///
/// Only structure is checked: field widths, counts, exact length, at least
/// one output, and signature/input alignment. Whether the inputs exist or
/// the signatures verify is not this layer's business.
pub fn deserialize_transaction(bytes: &[u8]) -> Result<Transaction, CodecError> {
    if bytes.len() < MIN_TRANSACTION_LENGTH {
        return Err(CodecError::TruncatedInput {
            field: "header",
            needed: MIN_TRANSACTION_LENGTH,
            remaining: bytes.len(),
        });
    }

    let mut reader = ByteReader::new(bytes);

    let input_count = reader.read_count("inputs", INPUT_RECORD_LENGTH)?;
    let mut inputs = Vec::with_capacity(input_count);
    for _ in 0..input_count {
        inputs.push(Hash256::from_bytes(reader.read_array("input")?));
    }

    let sig_count = reader.read_count("signatures", SIGNATURE_RECORD_LENGTH)?;
    let mut signatures = Vec::with_capacity(sig_count);
    for _ in 0..sig_count {
        signatures.push(Signature::from_bytes(reader.read_array("signature")?));
    }

    let output_count = reader.read_count("outputs", OUTPUT_RECORD_LENGTH)?;
    let mut outputs = Vec::with_capacity(output_count);
    for _ in 0..output_count {
        outputs.push(read_output(&mut reader)?);
    }

    reader.finish()?;

    Transaction::new(inputs, signatures, outputs)
}

/// Decode a transaction from its hex text form.
///
/// The text must be plain hex with no prefix or surrounding whitespace.
pub fn decode_raw_transaction(hex_text: &str) -> Result<Transaction, CodecError> {
    let bytes = hex::decode(hex_text).map_err(|e| CodecError::MalformedInput {
        reason: format!("invalid raw transaction hex: {e}"),
    })?;
    deserialize_transaction(&bytes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
