//! # Transaction Module
//!
//! Decoding, encoding, structural verification and display projection of
//! transactions.
//!
//! ## Architecture
//!
//! ```text
//! cursor.rs      : Checked byte reader; the only thing that touches raw input
//! codec.rs       : Wire layout, serialize/deserialize, CodecError
//! types.rs       : Transaction and TransactionOutput value types
//! verification.rs: Structural rules every Transaction satisfies
//! readable.rs    : Display projection (hex, base-58, decimal coins)
//! ```
//!
//! ## Flow
//!
//! 1. **Decode**: [`decode_raw_transaction`] (hex) or
//!    [`deserialize_transaction`] (bytes) yields a [`Transaction`] with its
//!    `length`, `id` and `inner_hash` attached.
//! 2. **Decide genesis**: the caller's call. [`Transaction::looks_like_genesis`]
//!    offers the zero-inputs convention but nothing applies it implicitly.
//! 3. **Project**: [`ReadableTransaction::project`] renders it for output.
//!
//! ## Design Decisions
//!
//! - Transaction ids are single SHA-256 of the full encoding. The id is
//!   never part of its own preimage.
//! - Decoding is exact: the declared counts fix the length, and any
//!   disagreement with the actual length is an error, never a shrug.
//! - Every type here is an immutable value. No caching, no interior
//!   mutability, freely shareable across threads.

pub mod codec;
pub mod cursor;
pub mod readable;
pub mod types;
pub mod verification;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use codec::{decode_raw_transaction, deserialize_transaction, serialize_transaction, CodecError};
pub use cursor::ByteReader;
pub use readable::{format_droplets, ProjectionError, ReadableOutput, ReadableTransaction};
pub use types::{Transaction, TransactionInput, TransactionOutput};
pub use verification::{verify_expected_id, verify_parts};
