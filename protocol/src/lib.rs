// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # txcore: Transaction Codec Core
//!
//! The part of a wallet or explorer that has to be exactly right: turning a
//! raw byte blob into a structurally valid transaction, computing its
//! canonical id, and validating the addresses it pays to.
//!
//! Everything here is a pure function over in-memory bytes. No I/O, no
//! logging, no global state. Callers get typed errors back and decide what
//! to tell their users.
//!
//! ## Architecture
//!
//! - **crypto**: `Hash256` (SHA-256) and opaque recoverable signatures.
//! - **address**: base-58, checksum-protected addresses.
//! - **transaction**: the binary codec, structural rules, and the readable
//!   projection used for display.
//! - **config**: wire widths, accepted versions and limits.
//!
//! ## Quick tour
//!
//! ```
//! use txcore_protocol::address::{decode_address, encode_address};
//! use txcore_protocol::transaction::{
//!     deserialize_transaction, ReadableTransaction, Transaction, TransactionOutput,
//! };
//!
//! let to = decode_address("16L5yRNPTuciSgXGHqYwn9N6NeoKqopAu").unwrap();
//! let txn = Transaction::new(vec![], vec![], vec![TransactionOutput::new(to, 2_000_000, 7)]).unwrap();
//!
//! let bytes = txn.serialize();
//! let decoded = deserialize_transaction(&bytes).unwrap();
//! assert_eq!(decoded.id(), txn.id());
//!
//! let readable = ReadableTransaction::project(&decoded, decoded.looks_like_genesis()).unwrap();
//! assert_eq!(readable.outputs[0].coins, "2.000000");
//! assert_eq!(readable.outputs[0].dst, encode_address(&to));
//! ```

pub mod address;
pub mod config;
pub mod crypto;
pub mod transaction;

/// Version of this crate, as built.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use address::{decode_address, decode_addresses, encode_address, Address, AddressError};
pub use crypto::{Hash256, Signature};
pub use transaction::{CodecError, ProjectionError, ReadableTransaction, Transaction};
