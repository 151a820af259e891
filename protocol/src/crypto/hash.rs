//! # Hashing Utilities
//!
//! One hash function, used everywhere: **SHA-256**.
//!
//! - Transaction ids are `SHA-256(serialized transaction)`.
//! - Inner hashes and output ids are plain SHA-256 over fixed layouts.
//! - Address checksums are the first four bytes of `SHA-256(SHA-256(..))`.
//!
//! [`Hash256`] is the fixed-width digest type all of these produce. It is
//! `Copy`, compares byte-for-byte, and always renders as 64 lowercase hex
//! characters. Parsing is strict: exactly 64 hex characters or nothing.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{HASH_HEX_LENGTH, HASH_LENGTH};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced when parsing a [`Hash256`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The text is not exactly 64 hex characters.
    #[error("malformed hash: {reason}")]
    MalformedInput {
        /// What was wrong with the text.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Compute the SHA-256 hash of the input data.
///
/// # Example
///
/// ```
/// use txcore_protocol::crypto::sha256;
///
/// let hash = sha256(b"");
/// assert_eq!(
///     hash.to_hex(),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn sha256(data: &[u8]) -> Hash256 {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Hash256(hasher.finalize().into())
}

/// Compute the double-SHA-256 hash: `SHA-256(SHA-256(data))`.
///
/// Only the address checksum uses this. Transaction ids are single SHA-256.
pub fn double_sha256(data: &[u8]) -> Hash256 {
    sha256(sha256(data).as_bytes())
}

/// Decode exactly `N` bytes from hex text.
///
/// Shared by every fixed-width hex type in the crate. Returns a short
/// reason string on failure so each caller can wrap it in its own error.
pub(crate) fn decode_fixed_hex<const N: usize>(text: &str) -> Result<[u8; N], String> {
    if text.len() != N * 2 {
        return Err(format!(
            "expected {} hex characters, got {}",
            N * 2,
            text.len()
        ));
    }
    let mut out = [0u8; N];
    hex::decode_to_slice(text, &mut out).map_err(|e| e.to_string())?;
    Ok(out)
}

// ---------------------------------------------------------------------------
// Hash256
// ---------------------------------------------------------------------------

/// A 32-byte SHA-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash256([u8; HASH_LENGTH]);

impl Hash256 {
    /// The all-zero digest. Used as the source transaction of genesis
    /// outputs.
    pub const ZERO: Self = Self([0u8; HASH_LENGTH]);

    /// Hash `data` with SHA-256.
    pub fn digest(data: &[u8]) -> Self {
        sha256(data)
    }

    /// Wrap raw digest bytes without hashing.
    pub const fn from_bytes(bytes: [u8; HASH_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_LENGTH] {
        &self.0
    }

    /// Parse a digest from exactly 64 hex characters.
    ///
    /// Upper-case digits are accepted; output is always lower-case.
    pub fn from_hex(text: &str) -> Result<Self, HashError> {
        decode_fixed_hex::<HASH_LENGTH>(text)
            .map(Self)
            .map_err(|reason| HashError::MalformedInput { reason })
    }

    /// Lower-case, 64-character hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// `true` for [`Hash256::ZERO`].
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH_LENGTH]
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl FromStr for Hash256 {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(de::Error::custom)
    }
}

// Compile-time guard that the hex width constant agrees with the digest.
const _: () = assert!(HASH_HEX_LENGTH == HASH_LENGTH * 2);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn sha256_known_vector() {
        assert_eq!(sha256(b"abc").to_hex(), ABC_SHA256);
    }

    #[test]
    fn digest_matches_free_function() {
        assert_eq!(Hash256::digest(b"abc"), sha256(b"abc"));
    }

    #[test]
    fn double_sha256_is_hash_of_hash() {
        let once = sha256(b"abc");
        assert_eq!(double_sha256(b"abc"), sha256(once.as_bytes()));
        assert_ne!(double_sha256(b"abc"), once);
    }

    #[test]
    fn hex_roundtrip_is_exact() {
        let h = Hash256::from_hex(ABC_SHA256).unwrap();
        assert_eq!(h.to_hex(), ABC_SHA256);
        assert_eq!(h.to_string(), ABC_SHA256);
    }

    #[test]
    fn uppercase_input_renders_lowercase() {
        let h = Hash256::from_hex(&ABC_SHA256.to_uppercase()).unwrap();
        assert_eq!(h.to_hex(), ABC_SHA256);
    }

    #[test]
    fn rejects_wrong_length() {
        let too_long = format!("{ABC_SHA256}00");
        for text in ["", "ab", &ABC_SHA256[..63], too_long.as_str()] {
            assert!(matches!(
                Hash256::from_hex(text),
                Err(HashError::MalformedInput { .. })
            ));
        }
    }

    #[test]
    fn rejects_non_hex_characters() {
        let bad = format!("zz{}", &ABC_SHA256[2..]);
        assert!(matches!(
            Hash256::from_hex(&bad),
            Err(HashError::MalformedInput { .. })
        ));
    }

    #[test]
    fn zero_hash() {
        assert!(Hash256::ZERO.is_zero());
        assert_eq!(Hash256::ZERO.to_hex(), "0".repeat(64));
        assert!(!sha256(b"").is_zero());
    }

    #[test]
    fn from_str_parses() {
        let h: Hash256 = ABC_SHA256.parse().unwrap();
        assert_eq!(h, sha256(b"abc"));
    }

    #[test]
    fn serde_uses_hex_string() {
        let h = sha256(b"abc");
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, format!("\"{ABC_SHA256}\""));
        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
        assert!(serde_json::from_str::<Hash256>("\"abc\"").is_err());
    }
}
