// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # txcore
//!
//! Entry point for the `txcore` binary. Parses CLI arguments, initializes
//! logging, runs one offline command and prints its result as JSON.
//!
//! Subcommands:
//!
//! - `decode-raw-transaction` decodes hex into the readable form
//! - `verify-addresses` validates a list of addresses
//! - `validate-txid` checks and normalizes a transaction id
//! - `encode-address` builds an address from a key hash
//! - `version` prints build version information

mod cli;
mod commands;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use cli::{Commands, TxcoreCli};

fn main() -> Result<()> {
    let cli = TxcoreCli::parse();
    logging::init_logging(&cli.logging.log_level, cli.logging.log_format);

    match cli.command {
        Commands::DecodeRawTransaction(args) => {
            let raw = commands::read_raw_tx(&args.raw_tx, std::io::stdin().lock())?;
            print_json(&commands::decode_raw(&args, &raw)?)
        }
        Commands::VerifyAddresses(args) => {
            print_json(&commands::verify_addresses(&args.addresses)?)
        }
        Commands::ValidateTxid(args) => print_json(&commands::validate_txid(&args.txid)?),
        Commands::EncodeAddress(args) => print_json(&commands::encode(&args)?),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to encode result as JSON")?;
    println!("{}", text);
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("txcore   {}", env!("CARGO_PKG_VERSION"));
    println!("protocol {}", txcore_protocol::VERSION);
}
