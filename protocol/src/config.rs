//! # Protocol Configuration & Constants
//!
//! Every magic number in the codec lives here. If you're hardcoding a width
//! or a limit somewhere else, move it here first.
//!
//! These values define the wire format. Changing any of them breaks every
//! transaction and address that has already been encoded, so they are not
//! runtime-configurable on purpose.

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

/// Digest length in bytes.
pub const HASH_LENGTH: usize = 32;

/// Length of a digest rendered as hex.
pub const HASH_HEX_LENGTH: usize = HASH_LENGTH * 2;

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

/// Length of the public-key hash carried by an address.
pub const ADDRESS_KEY_LENGTH: usize = 20;

/// Version byte + key hash. This is also the on-wire width of an address
/// inside a transaction output.
pub const ADDRESS_LENGTH: usize = 1 + ADDRESS_KEY_LENGTH;

/// Trailing checksum bytes in the textual form.
pub const ADDRESS_CHECKSUM_LENGTH: usize = 4;

/// Decoded length of a base-58 address: version + key + checksum.
pub const ADDRESS_ENCODED_LENGTH: usize = ADDRESS_LENGTH + ADDRESS_CHECKSUM_LENGTH;

/// Version byte for ordinary pay-to-key-hash addresses.
pub const ADDRESS_VERSION_DEFAULT: u8 = 0;

/// Version bytes the decoder accepts. Anything else is `UnsupportedVersion`.
pub const ACCEPTED_ADDRESS_VERSIONS: &[u8] = &[ADDRESS_VERSION_DEFAULT];

// ---------------------------------------------------------------------------
// Signatures
// ---------------------------------------------------------------------------

/// Recoverable secp256k1 signature: 64 bytes of (r, s) plus a recovery id.
pub const SIGNATURE_LENGTH: usize = 65;

// ---------------------------------------------------------------------------
// Transaction wire format
// ---------------------------------------------------------------------------

/// Every collection on the wire is preceded by a little-endian `u32` count.
pub const COUNT_PREFIX_LENGTH: usize = 4;

/// Input count + signature count + output count. Nothing shorter can ever
/// be a transaction.
pub const MIN_TRANSACTION_LENGTH: usize = COUNT_PREFIX_LENGTH * 3;

/// One input: the id of the output being spent.
pub const INPUT_RECORD_LENGTH: usize = HASH_LENGTH;

/// One signature record.
pub const SIGNATURE_RECORD_LENGTH: usize = SIGNATURE_LENGTH;

/// One output: address (21) + coins (8) + hours (8).
pub const OUTPUT_RECORD_LENGTH: usize = ADDRESS_LENGTH + 8 + 8;

/// Largest message the codec will describe. The serialized length is
/// reported as a `u32`, so a declared count that implies more bytes than
/// this is rejected as `CountOverflow` before anything is allocated.
pub const MAX_MESSAGE_SIZE: u64 = u32::MAX as u64;

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// Coins are fixed-point with this many decimal places. The smallest unit
/// is called a droplet.
pub const COIN_DECIMALS: u32 = 6;

/// Droplets in one whole coin.
pub const DROPLETS_PER_COIN: u64 = 10u64.pow(COIN_DECIMALS);

/// Largest droplet amount the projector will render. Downstream decimal
/// consumers work in signed 64-bit, so anything above `i64::MAX` cannot be
/// printed faithfully.
pub const MAX_PRINTABLE_DROPLETS: u64 = i64::MAX as u64;
