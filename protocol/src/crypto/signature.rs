//! Recoverable signature values.
//!
//! The codec carries signatures opaquely: it checks their width and keeps
//! their order aligned with the inputs, nothing more. Verifying them is a
//! consensus concern and lives elsewhere.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::hash::decode_fixed_hex;
use crate::config::SIGNATURE_LENGTH;

/// Errors produced when parsing a [`Signature`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The text is not exactly 130 hex characters.
    #[error("malformed signature: {reason}")]
    MalformedInput {
        /// What was wrong with the text.
        reason: String,
    },
}

/// A 65-byte recoverable signature, `r || s || recovery_id`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_LENGTH]);

impl Signature {
    /// Wrap raw signature bytes.
    pub const fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    /// Parse from exactly 130 hex characters.
    pub fn from_hex(text: &str) -> Result<Self, SignatureError> {
        decode_fixed_hex::<SIGNATURE_LENGTH>(text)
            .map(Self)
            .map_err(|reason| SignatureError::MalformedInput { reason })
    }

    /// Lower-case hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

impl FromStr for Signature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(de::Error::custom)
    }
}
