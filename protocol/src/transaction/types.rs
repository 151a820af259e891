//! Core value types for decoded transactions.
//!
//! These are plain values: built once, never mutated. [`Transaction`] keeps
//! its fields private so its derived `length`, `id` and `inner_hash` can
//! never drift from the collections they were computed from.

use serde::{Deserialize, Serialize};

use super::codec::{self, CodecError};
use super::verification::verify_parts;
use crate::address::Address;
use crate::config::{ADDRESS_LENGTH, HASH_LENGTH, OUTPUT_RECORD_LENGTH};
use crate::crypto::hash::{sha256, Hash256};
use crate::crypto::signature::Signature;

/// An input is the id of the output it spends.
pub type TransactionInput = Hash256;

// ---------------------------------------------------------------------------
// TransactionOutput
// ---------------------------------------------------------------------------

/// Coins and hours sent to an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionOutput {
    /// Destination.
    pub address: Address,
    /// Amount in droplets (10^-6 coin).
    pub coins: u64,
    /// Coin hours carried with the coins.
    pub hours: u64,
}

impl TransactionOutput {
    /// Creates a new output.
    pub fn new(address: Address, coins: u64, hours: u64) -> Self {
        Self {
            address,
            coins,
            hours,
        }
    }

    /// The 37-byte wire record: `version | key | coins LE | hours LE`.
    pub fn to_wire(&self) -> [u8; OUTPUT_RECORD_LENGTH] {
        let mut out = [0u8; OUTPUT_RECORD_LENGTH];
        out[..ADDRESS_LENGTH].copy_from_slice(&self.address.to_wire());
        out[ADDRESS_LENGTH..ADDRESS_LENGTH + 8].copy_from_slice(&self.coins.to_le_bytes());
        out[ADDRESS_LENGTH + 8..].copy_from_slice(&self.hours.to_le_bytes());
        out
    }

    /// Id of the unspent output this creates when `source` confirms.
    ///
    /// `SHA-256(source || wire record)`. Genesis outputs use
    /// [`Hash256::ZERO`] as their source.
    pub fn ux_id(&self, source: &Hash256) -> Hash256 {
        let mut buf = [0u8; HASH_LENGTH + OUTPUT_RECORD_LENGTH];
        buf[..HASH_LENGTH].copy_from_slice(source.as_bytes());
        buf[HASH_LENGTH..].copy_from_slice(&self.to_wire());
        sha256(&buf)
    }
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A structurally valid transaction.
///
/// Obtain one from [`Transaction::deserialize`] (or the free functions in
/// [`super::codec`]) or build one from parts with [`Transaction::new`].
/// Either way the structure has been verified and the derived fields are
/// exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    inputs: Vec<TransactionInput>,
    signatures: Vec<Signature>,
    outputs: Vec<TransactionOutput>,
    length: u32,
    id: Hash256,
    inner_hash: Hash256,
}

impl Transaction {
    /// Assemble a transaction from its collections.
    ///
    /// # Errors
    ///
    /// - [`CodecError::NoOutputs`] if `outputs` is empty.
    /// - [`CodecError::SignatureCountMismatch`] if there are inputs and the
    ///   signature count differs.
    /// - [`CodecError::CountOverflow`] if the encoding would not fit in a
    ///   message.
    pub fn new(
        inputs: Vec<TransactionInput>,
        signatures: Vec<Signature>,
        outputs: Vec<TransactionOutput>,
    ) -> Result<Self, CodecError> {
        let length = verify_parts(&inputs, &signatures, &outputs)?;
        let encoded = codec::encode_parts(&inputs, &signatures, &outputs);
        let id = sha256(&encoded);
        let inner_hash = codec::inner_hash_of(&inputs, &outputs);
        Ok(Self {
            inputs,
            signatures,
            outputs,
            length,
            id,
            inner_hash,
        })
    }

    /// Decode from the exact wire encoding. See [`codec::deserialize_transaction`].
    pub fn deserialize(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::deserialize_transaction(bytes)
    }

    /// Encode to wire bytes. See [`codec::serialize_transaction`].
    pub fn serialize(&self) -> Vec<u8> {
        codec::serialize_transaction(self)
    }

    /// Spent outputs, in signed order.
    pub fn inputs(&self) -> &[TransactionInput] {
        &self.inputs
    }

    /// One signature per input, in input order.
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Created outputs, in order.
    pub fn outputs(&self) -> &[TransactionOutput] {
        &self.outputs
    }

    /// Encoded length in bytes.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// `SHA-256` of the encoding.
    pub fn id(&self) -> &Hash256 {
        &self.id
    }

    /// `SHA-256` of the inputs and outputs sections.
    pub fn inner_hash(&self) -> &Hash256 {
        &self.inner_hash
    }

    /// Hash the current encoding again. Always equal to [`Transaction::id`];
    /// exposed so callers can assert codec stability.
    pub fn recompute_id(&self) -> Hash256 {
        sha256(&self.serialize())
    }

    /// `true` if the transaction spends nothing.
    ///
    /// By network convention such a transaction is the genesis transaction,
    /// but that is a heuristic: a crafted zero-input transaction looks
    /// exactly the same. Callers decide whether to trust it; nothing in this
    /// crate acts on it.
    pub fn looks_like_genesis(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Outputs paying `address`, with their positions.
    pub fn outputs_to<'a>(
        &'a self,
        address: &'a Address,
    ) -> impl Iterator<Item = (usize, &'a TransactionOutput)> + 'a {
        self.outputs
            .iter()
            .enumerate()
            .filter(move |(_, out)| out.address == *address)
    }

    /// Total coins across all outputs, or `None` on overflow.
    pub fn total_coins(&self) -> Option<u64> {
        self.outputs
            .iter()
            .try_fold(0u64, |acc, out| acc.checked_add(out.coins))
    }

    /// Total hours across all outputs, or `None` on overflow.
    pub fn total_hours(&self) -> Option<u64> {
        self.outputs
            .iter()
            .try_fold(0u64, |acc, out| acc.checked_add(out.hours))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::test_fixtures::*;

    #[test]
    fn output_wire_layout() {
        let out = sample_output();
        let wire = out.to_wire();
        assert_eq!(wire[0], 0);
        assert_eq!(&wire[1..21], out.address.key());
        assert_eq!(&wire[21..29], &1_500_000u64.to_le_bytes());
        assert_eq!(&wire[29..37], &42u64.to_le_bytes());
    }

    #[test]
    fn ux_id_known_vectors() {
        let txn = one_in_one_out();
        assert_eq!(
            txn.outputs()[0].ux_id(txn.id()).to_hex(),
            ONE_IN_ONE_OUT_UXID
        );

        let genesis = genesis();
        assert_eq!(
            genesis.outputs()[0].ux_id(&Hash256::ZERO).to_hex(),
            GENESIS_UXID_ZERO_SOURCE
        );
    }

    #[test]
    fn derived_fields_are_consistent() {
        let txn = one_in_one_out();
        assert_eq!(txn.length() as usize, txn.serialize().len());
        assert_eq!(txn.recompute_id(), *txn.id());
    }

    #[test]
    fn genesis_heuristic() {
        assert!(genesis().looks_like_genesis());
        assert!(!one_in_one_out().looks_like_genesis());
    }

    #[test]
    fn zero_inputs_allow_any_signature_count() {
        let txn = Transaction::new(vec![], vec![sample_signature()], vec![sample_output()]);
        assert!(txn.is_ok());
    }

    #[test]
    fn new_rejects_empty_outputs() {
        assert_eq!(
            Transaction::new(vec![sample_input()], vec![sample_signature()], vec![]),
            Err(CodecError::NoOutputs)
        );
    }

    #[test]
    fn totals() {
        let out = sample_output();
        let txn = Transaction::new(vec![], vec![], vec![out, out]).unwrap();
        assert_eq!(txn.total_coins(), Some(3_000_000));
        assert_eq!(txn.total_hours(), Some(84));

        let big = TransactionOutput::new(out.address, u64::MAX, 0);
        let txn = Transaction::new(vec![], vec![], vec![big, out]).unwrap();
        assert_eq!(txn.total_coins(), None);
    }

    #[test]
    fn outputs_to_matches_by_address() {
        let out = sample_output();
        let other = TransactionOutput::new(Address::from_key([9u8; 20]), 1, 1);
        let txn = Transaction::new(vec![], vec![], vec![out, other, out]).unwrap();

        let hits: Vec<usize> = txn.outputs_to(&out.address).map(|(i, _)| i).collect();
        assert_eq!(hits, vec![0, 2]);
        assert_eq!(txn.outputs_to(&Address::from_key([7u8; 20])).count(), 0);
    }

    #[test]
    fn output_serde_roundtrip() {
        let out = sample_output();
        let json = serde_json::to_string(&out).unwrap();
        assert!(json.contains("16L5yRNPTuciSgXGHqYwn9N6NeoKqopAu"));
        let back: TransactionOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, out);
    }
}
