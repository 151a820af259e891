//! Structural verification of transactions.
//!
//! Every [`Transaction`] passes [`verify_parts`] on its way into existence,
//! whether it was decoded or assembled. The checks are structural only:
//! nothing here knows whether an input exists or a signature verifies.
//!
//! The checks, in order:
//!
//! 1. **Outputs**: at least one.
//! 2. **Signatures**: one per input, unless there are no inputs.
//! 3. **Size**: the encoding fits in [`MAX_MESSAGE_SIZE`].

use super::codec::{encoded_length, CodecError};
use super::types::{Transaction, TransactionOutput};
use crate::config::MAX_MESSAGE_SIZE;
use crate::crypto::hash::Hash256;
use crate::crypto::signature::Signature;

/// Check the collections of a would-be transaction and return its encoded
/// length.
///
/// # Errors
///
/// Returns the first failing check as a [`CodecError`].
pub fn verify_parts(
    inputs: &[Hash256],
    signatures: &[Signature],
    outputs: &[TransactionOutput],
) -> Result<u32, CodecError> {
    if outputs.is_empty() {
        return Err(CodecError::NoOutputs);
    }

    // A transaction with no inputs spends nothing, so there is nothing for
    // its signatures to line up with.
    if !inputs.is_empty() && signatures.len() != inputs.len() {
        return Err(CodecError::SignatureCountMismatch {
            inputs: inputs.len(),
            signatures: signatures.len(),
        });
    }

    let records = inputs.len() + signatures.len() + outputs.len();
    encoded_length(inputs.len(), signatures.len(), outputs.len())
        .filter(|len| *len <= MAX_MESSAGE_SIZE)
        .and_then(|len| u32::try_from(len).ok())
        .ok_or(CodecError::CountOverflow {
            field: "transaction",
            count: u32::try_from(records).unwrap_or(u32::MAX),
        })
}

/// Check that a decoded transaction is the one that was asked for.
///
/// Used when raw bytes arrive alongside the id they are supposed to have,
/// e.g. from a remote node.
pub fn verify_expected_id(txn: &Transaction, expected: &Hash256) -> Result<(), CodecError> {
    if txn.id() != expected {
        return Err(CodecError::IdMismatch {
            expected: *expected,
            actual: *txn.id(),
        });
    }
    Ok(())
}
