//! Command implementations.
//!
//! Each command takes its parsed arguments and returns a serializable
//! result; printing is left to `main`. Input validation happens here, at
//! the boundary, before anything reaches the codec.

use std::io::Read;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use txcore_protocol::address::{decode_address, decode_addresses, encode_address, Address};
use txcore_protocol::config::ADDRESS_KEY_LENGTH;
use txcore_protocol::crypto::Hash256;
use txcore_protocol::transaction::{
    decode_raw_transaction, verify_expected_id, ReadableTransaction, Transaction,
};

use crate::cli::{DecodeArgs, EncodeAddressArgs, GenesisPolicy};

// ---------------------------------------------------------------------------
// Output shapes
// ---------------------------------------------------------------------------

/// A decoded transaction, plus address matches when any were requested.
#[derive(Debug, Serialize)]
pub struct DecodeReport {
    #[serde(flatten)]
    pub transaction: ReadableTransaction,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<AddressMatch>,
}

/// Outputs of a transaction that pay one address.
#[derive(Debug, Serialize)]
pub struct AddressMatch {
    pub address: String,
    pub outputs: Vec<usize>,
}

/// A validated address broken into its parts.
#[derive(Debug, Serialize)]
pub struct AddressInfo {
    pub address: String,
    pub version: u8,
    pub key: String,
}

impl From<&Address> for AddressInfo {
    fn from(address: &Address) -> Self {
        Self {
            address: encode_address(address),
            version: address.version(),
            key: hex::encode(address.key()),
        }
    }
}

/// A validated, normalized transaction id.
#[derive(Debug, Serialize)]
pub struct TxidInfo {
    pub txid: String,
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

impl GenesisPolicy {
    /// Apply the policy to a decoded transaction.
    pub fn resolve(self, txn: &Transaction) -> bool {
        match self {
            GenesisPolicy::Always => true,
            GenesisPolicy::Never => false,
            GenesisPolicy::Auto => {
                let assumed = txn.looks_like_genesis();
                if assumed {
                    tracing::warn!(
                        txid = %txn.id(),
                        "transaction has no inputs; assuming it is the genesis transaction"
                    );
                }
                assumed
            }
        }
    }
}

/// Resolve the raw transaction argument: the argument itself, or everything
/// readable from `stdin` when the argument is `-`. Surrounding whitespace is
/// stripped either way.
pub fn read_raw_tx<R: Read>(arg: &str, mut stdin: R) -> Result<String> {
    if arg != "-" {
        return Ok(arg.trim().to_string());
    }

    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("failed to read raw transaction from stdin")?;
    tracing::debug!(bytes = buf.len(), "read raw transaction from stdin");
    Ok(buf.trim().to_string())
}

/// `decode-raw-transaction`: hex in, readable transaction out.
///
/// `raw_tx` is the hex text itself; `args.raw_tx` is ignored so `main` can
/// substitute stdin.
pub fn decode_raw(args: &DecodeArgs, raw_tx: &str) -> Result<DecodeReport> {
    // Validate the side arguments first so a typo fails before any decoding.
    let expected = args
        .expect_txid
        .as_deref()
        .map(|t| Hash256::from_hex(t).context("invalid --expect-txid"))
        .transpose()?;
    let watched = decode_addresses(&args.match_addresses).context("invalid --match-address")?;

    tracing::debug!(hex_len = raw_tx.len(), "decoding raw transaction");
    let txn = decode_raw_transaction(raw_tx).context("unable to deserialize transaction bytes")?;
    tracing::debug!(
        txid = %txn.id(),
        inputs = txn.inputs().len(),
        signatures = txn.signatures().len(),
        outputs = txn.outputs().len(),
        length = txn.length(),
        "decoded transaction"
    );

    if let Some(expected) = expected {
        verify_expected_id(&txn, &expected)?;
    }

    let is_genesis = args.genesis.resolve(&txn);
    let transaction = ReadableTransaction::project(&txn, is_genesis)?;

    let matches = watched
        .iter()
        .map(|address| AddressMatch {
            address: encode_address(address),
            outputs: txn.outputs_to(address).map(|(i, _)| i).collect(),
        })
        .collect();

    Ok(DecodeReport {
        transaction,
        matches,
    })
}

/// `verify-addresses`: validate every entry, first failure aborts.
pub fn verify_addresses(addresses: &[String]) -> Result<Vec<AddressInfo>> {
    let decoded = decode_addresses(addresses)?;
    tracing::debug!(count = decoded.len(), "all addresses valid");
    Ok(decoded.iter().map(AddressInfo::from).collect())
}

/// `validate-txid`: strict 64-hex-character check.
pub fn validate_txid(txid: &str) -> Result<TxidInfo> {
    let hash = Hash256::from_hex(txid).context("invalid txid")?;
    Ok(TxidInfo {
        txid: hash.to_hex(),
    })
}

/// `encode-address`: key hash and version to address text.
pub fn encode(args: &EncodeAddressArgs) -> Result<AddressInfo> {
    let bytes = hex::decode(&args.key).context("key is not valid hex")?;
    let key: [u8; ADDRESS_KEY_LENGTH] = match bytes.try_into() {
        Ok(key) => key,
        Err(bytes) => bail!(
            "key must be {} bytes, got {}",
            ADDRESS_KEY_LENGTH,
            bytes.len()
        ),
    };

    let address = Address::new(args.address_version, key);
    if address.has_supported_version() {
        decode_address(&encode_address(&address)).context("encoded address failed to decode")?;
    } else {
        tracing::warn!(
            version = args.address_version,
            "address version is not accepted by decoders; the result will not validate"
        );
    }

    Ok(AddressInfo::from(&address))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
