//! Display projection of transactions.
//!
//! [`ReadableTransaction`] is what gets shown to people and emitted as JSON:
//! hashes as hex, addresses as base-58, coins as fixed-point decimal. It is
//! built fresh from a [`Transaction`] on every call and never mutated.
//!
//! Whether the transaction is the genesis transaction is **not** decided
//! here. The caller passes that in, and it changes two things: the
//! `genesis` flag, and the source id used for each output's `uxid` (genesis
//! outputs are keyed by [`Hash256::ZERO`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Transaction, TransactionOutput};
use crate::address::encode_address;
use crate::config::{COIN_DECIMALS, DROPLETS_PER_COIN, MAX_PRINTABLE_DROPLETS};
use crate::crypto::hash::Hash256;

/// A value in the transaction could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// An output amount is beyond [`MAX_PRINTABLE_DROPLETS`].
    #[error("output {index}: {droplets} droplets is outside the printable range")]
    AmountOutOfRange {
        /// Position of the output.
        index: usize,
        /// The raw amount.
        droplets: u64,
    },
}

/// Render droplets as a coin amount with exactly six decimals.
///
/// Returns `None` above [`MAX_PRINTABLE_DROPLETS`].
///
/// ```
/// use txcore_protocol::transaction::readable::format_droplets;
///
/// assert_eq!(format_droplets(1_500_000).as_deref(), Some("1.500000"));
/// assert_eq!(format_droplets(1).as_deref(), Some("0.000001"));
/// ```
pub fn format_droplets(droplets: u64) -> Option<String> {
    if droplets > MAX_PRINTABLE_DROPLETS {
        return None;
    }
    Some(format!(
        "{}.{:0>width$}",
        droplets / DROPLETS_PER_COIN,
        droplets % DROPLETS_PER_COIN,
        width = COIN_DECIMALS as usize
    ))
}

/// Display form of one output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableOutput {
    /// Id of the unspent output this creates.
    pub uxid: String,
    /// Destination address.
    pub dst: String,
    /// Coins, fixed-point decimal.
    pub coins: String,
    /// Coin hours.
    pub hours: u64,
}

impl ReadableOutput {
    fn project(
        index: usize,
        output: &TransactionOutput,
        source: &Hash256,
    ) -> Result<Self, ProjectionError> {
        let coins = format_droplets(output.coins).ok_or(ProjectionError::AmountOutOfRange {
            index,
            droplets: output.coins,
        })?;
        Ok(Self {
            uxid: output.ux_id(source).to_hex(),
            dst: encode_address(&output.address),
            coins,
            hours: output.hours,
        })
    }
}

/// Display form of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableTransaction {
    /// Encoded length in bytes.
    pub length: u32,
    /// Transaction id, hex.
    pub txid: String,
    /// Hash of the inputs and outputs sections, hex.
    pub inner_hash: String,
    /// Whether the caller declared this the genesis transaction.
    pub genesis: bool,
    /// Signatures, hex, in input order.
    pub sigs: Vec<String>,
    /// Spent output ids, hex.
    pub inputs: Vec<String>,
    /// Created outputs.
    pub outputs: Vec<ReadableOutput>,
}

impl ReadableTransaction {
    /// Project `txn` for display.
    ///
    /// `is_genesis` is taken as given. Pass `txn.looks_like_genesis()` only
    /// if the zero-inputs convention is acceptable to you.
    ///
    /// # Errors
    ///
    /// [`ProjectionError::AmountOutOfRange`] if an output amount cannot be
    /// printed. No valid network transaction reaches this.
    pub fn project(txn: &Transaction, is_genesis: bool) -> Result<Self, ProjectionError> {
        let source = if is_genesis { Hash256::ZERO } else { *txn.id() };

        let outputs = txn
            .outputs()
            .iter()
            .enumerate()
            .map(|(i, out)| ReadableOutput::project(i, out, &source))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            length: txn.length(),
            txid: txn.id().to_hex(),
            inner_hash: txn.inner_hash().to_hex(),
            genesis: is_genesis,
            sigs: txn.signatures().iter().map(|s| s.to_hex()).collect(),
            inputs: txn.inputs().iter().map(|h| h.to_hex()).collect(),
            outputs,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
