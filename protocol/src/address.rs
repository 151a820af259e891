//! # Addresses
//!
//! An address is a version byte plus the 20-byte hash of a public key. Its
//! textual form protects that pair with a checksum and spells it in base-58:
//!
//! ```text
//! version (1) || key (20)
//!     -> checksum = SHA-256(SHA-256(version || key))[..4]
//!     -> base58(version || key || checksum)  -> 16L5yRNPTuciSgXGHqYwn9N6NeoKqopAu
//! ```
//!
//! Decoding is strict and reports *why* a string was rejected, because each
//! reason calls for a different fix from whoever typed it:
//!
//! 1. [`AddressError::MalformedInput`]: not base-58, or not 25 bytes.
//! 2. [`AddressError::ChecksumMismatch`]: well-formed, but mistyped.
//! 3. [`AddressError::UnsupportedVersion`]: intact, but not a kind of
//!    address this network accepts.
//!
//! The checks run in that order. A string with a bad checksum *and* an odd
//! version reports the checksum, since the version byte itself is suspect.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{
    ACCEPTED_ADDRESS_VERSIONS, ADDRESS_CHECKSUM_LENGTH, ADDRESS_ENCODED_LENGTH,
    ADDRESS_KEY_LENGTH, ADDRESS_LENGTH, ADDRESS_VERSION_DEFAULT,
};
use crate::crypto::hash::double_sha256;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why an address string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Not valid base-58, or the decoded payload has the wrong length.
    #[error("malformed address: {reason}")]
    MalformedInput {
        /// What was wrong with the text.
        reason: String,
    },

    /// The embedded checksum does not match the version and key.
    #[error("address checksum mismatch: computed {computed}, embedded {embedded}")]
    ChecksumMismatch {
        /// Checksum recomputed from the payload, hex.
        computed: String,
        /// Checksum carried by the text, hex.
        embedded: String,
    },

    /// The checksum is fine but the version byte is not accepted.
    #[error("unsupported address version {version}")]
    UnsupportedVersion {
        /// The version byte found.
        version: u8,
    },
}

/// The first invalid entry of an address list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid address #{index} ({address}): {source}")]
pub struct AddressBatchError {
    /// Zero-based position of the entry in the list.
    pub index: usize,
    /// The entry as given.
    pub address: String,
    /// Why it was rejected.
    #[source]
    pub source: AddressError,
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A version-tagged public-key hash.
///
/// Construction is unchecked: any version and key can be represented and
/// encoded (transaction outputs may carry versions this node would refuse to
/// parse from text). Only [`decode_address`] enforces the accepted versions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    version: u8,
    key: [u8; ADDRESS_KEY_LENGTH],
}

impl Address {
    /// Build an address from its parts.
    pub const fn new(version: u8, key: [u8; ADDRESS_KEY_LENGTH]) -> Self {
        Self { version, key }
    }

    /// An address with the default version.
    pub const fn from_key(key: [u8; ADDRESS_KEY_LENGTH]) -> Self {
        Self::new(ADDRESS_VERSION_DEFAULT, key)
    }

    /// The version byte.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The 20-byte public-key hash.
    pub fn key(&self) -> &[u8; ADDRESS_KEY_LENGTH] {
        &self.key
    }

    /// `true` if the version byte is one the decoder accepts.
    pub fn has_supported_version(&self) -> bool {
        ACCEPTED_ADDRESS_VERSIONS.contains(&self.version)
    }

    /// `version || key`, which is also how an address appears on the wire.
    pub fn to_wire(&self) -> [u8; ADDRESS_LENGTH] {
        let mut out = [0u8; ADDRESS_LENGTH];
        out[0] = self.version;
        out[1..].copy_from_slice(&self.key);
        out
    }

    /// Inverse of [`Address::to_wire`].
    pub fn from_wire(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        let mut key = [0u8; ADDRESS_KEY_LENGTH];
        key.copy_from_slice(&bytes[1..]);
        Self::new(bytes[0], key)
    }

    /// First four bytes of `SHA-256(SHA-256(version || key))`.
    pub fn checksum(&self) -> [u8; ADDRESS_CHECKSUM_LENGTH] {
        let digest = double_sha256(&self.to_wire());
        let mut out = [0u8; ADDRESS_CHECKSUM_LENGTH];
        out.copy_from_slice(&digest.as_bytes()[..ADDRESS_CHECKSUM_LENGTH]);
        out
    }

    /// The 25 bytes that get base-58 encoded: `version || key || checksum`.
    pub fn to_bytes(&self) -> [u8; ADDRESS_ENCODED_LENGTH] {
        let mut out = [0u8; ADDRESS_ENCODED_LENGTH];
        out[..ADDRESS_LENGTH].copy_from_slice(&self.to_wire());
        out[ADDRESS_LENGTH..].copy_from_slice(&self.checksum());
        out
    }
}

/// Encode an address as base-58 text. Never fails.
pub fn encode_address(address: &Address) -> String {
    bs58::encode(address.to_bytes()).into_string()
}

/// Decode and fully validate a base-58 address.
///
/// # Errors
///
/// See the module docs for the order in which the three failure kinds are
/// checked.
pub fn decode_address(text: &str) -> Result<Address, AddressError> {
    let raw = bs58::decode(text)
        .into_vec()
        .map_err(|e| AddressError::MalformedInput {
            reason: e.to_string(),
        })?;

    if raw.len() != ADDRESS_ENCODED_LENGTH {
        return Err(AddressError::MalformedInput {
            reason: format!(
                "expected {} decoded bytes, got {}",
                ADDRESS_ENCODED_LENGTH,
                raw.len()
            ),
        });
    }

    let mut wire = [0u8; ADDRESS_LENGTH];
    wire.copy_from_slice(&raw[..ADDRESS_LENGTH]);
    let address = Address::from_wire(wire);

    let embedded = &raw[ADDRESS_LENGTH..];
    let computed = address.checksum();
    if computed[..] != *embedded {
        return Err(AddressError::ChecksumMismatch {
            computed: hex::encode(computed),
            embedded: hex::encode(embedded),
        });
    }

    if !address.has_supported_version() {
        return Err(AddressError::UnsupportedVersion {
            version: address.version,
        });
    }

    Ok(address)
}

/// Validate every entry of an address list, in order.
///
/// Stops at the first invalid entry and reports its position and text along
/// with the reason.
pub fn decode_addresses<I, S>(texts: I) -> Result<Vec<Address>, AddressBatchError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let text = text.as_ref();
            decode_address(text).map_err(|source| AddressBatchError {
                index,
                address: text.to_string(),
                source,
            })
        })
        .collect()
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_address(self))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", encode_address(self))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_address(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        decode_address(&text).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
