//! # Cryptographic Primitives
//!
//! The fixed-width values every other module is built from: the SHA-256
//! digest type [`Hash256`] and the opaque recoverable [`Signature`].
//!
//! Nothing here is clever. Hashing is delegated to `sha2`; this module only
//! adds strict fixed-width parsing and hex rendering on top.

pub mod hash;
pub mod signature;

pub use hash::{double_sha256, sha256, Hash256, HashError};
pub use signature::{Signature, SignatureError};
