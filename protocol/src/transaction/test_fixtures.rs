//! Known-good transactions shared by the unit tests.

use super::types::{Transaction, TransactionOutput};
use crate::address::Address;
use crate::crypto::hash::{sha256, Hash256};
use crate::crypto::signature::Signature;

/// One input, one signature, one output to `16L5yRNPTuciSgXGHqYwn9N6NeoKqopAu`
/// carrying 1.5 coins and 42 hours.
pub const ONE_IN_ONE_OUT_HEX: &str = concat!(
    "01000000",
    "9e9270c2f53744ebb4561eb8acd28aa699b1dfc01d7f3bb6a2632e520ee0274e",
    "01000000",
    "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
    "202122232425262728292a2b2c2d2e2f303132333435363738393a3b3c3d3e3f40",
    "01000000",
    "000102030405060708090a0b0c0d0e0f1011121314",
    "60e3160000000000",
    "2a00000000000000",
);
pub const ONE_IN_ONE_OUT_TXID: &str =
    "db3c3f7bd9cdcd6290e43ccb6e79a8438bf937285fa49b390710885ff0834629";
pub const ONE_IN_ONE_OUT_INNER_HASH: &str =
    "969048e56e7f3f24869f77537507b1f04c9a073bd9ceaab2b54c4fe5cd1ffbe9";
pub const ONE_IN_ONE_OUT_UXID: &str =
    "26349bd92315c79e2f4e4360d9a1591a64148eb9298e5b4b56724e3b755e2068";

/// `sha256("previous output")`.
pub const FIXTURE_INPUT_HEX: &str =
    "9e9270c2f53744ebb4561eb8acd28aa699b1dfc01d7f3bb6a2632e520ee0274e";

/// No inputs, no signatures, 100M coins and 1000 hours to the same address.
pub const GENESIS_HEX: &str = concat!(
    "00000000",
    "00000000",
    "01000000",
    "000102030405060708090a0b0c0d0e0f1011121314",
    "00407a10f35a0000",
    "e803000000000000",
);
pub const GENESIS_TXID: &str = "c581b1a9b5e5a520a4772927be789a40f61102486722460ce7b50281187a5806";
pub const GENESIS_INNER_HASH: &str =
    "9d53cf795612645b70146d7382b3d2a0b8925cacc193ff75355b5b7f4e606746";
pub const GENESIS_UXID_ZERO_SOURCE: &str =
    "828f82b1a0c4173847f9eec8f983f0a2f9c47ac643db91f5077b9e52c08610d7";
pub const GENESIS_UXID_TXID_SOURCE: &str =
    "f038630d0f718b92e03491b59340837beb3214db73b99370bb9df1492886aa0f";

pub fn fixture_address() -> Address {
    let mut key = [0u8; 20];
    for (i, b) in key.iter_mut().enumerate() {
        *b = i as u8 + 1;
    }
    Address::from_key(key)
}

pub fn sample_input() -> Hash256 {
    sha256(b"previous output")
}

pub fn sample_signature() -> Signature {
    let mut raw = [0u8; 65];
    for (i, b) in raw.iter_mut().enumerate() {
        *b = i as u8;
    }
    Signature::from_bytes(raw)
}

pub fn sample_output() -> TransactionOutput {
    TransactionOutput::new(fixture_address(), 1_500_000, 42)
}

pub fn one_in_one_out() -> Transaction {
    Transaction::new(
        vec![sample_input()],
        vec![sample_signature()],
        vec![sample_output()],
    )
    .unwrap()
}

pub fn genesis() -> Transaction {
    let output = TransactionOutput::new(fixture_address(), 100_000_000_000_000, 1000);
    Transaction::new(vec![], vec![], vec![output]).unwrap()
}
