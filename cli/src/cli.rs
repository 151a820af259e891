//! # CLI Interface
//!
//! Defines the command-line argument structure for `txcore` using `clap`
//! derive. Every command works offline on its arguments; nothing here
//! talks to a node.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::logging::LogFormat;

/// Decode raw transactions and validate addresses and transaction ids.
///
/// Results are printed to stdout as JSON. Diagnostics go to stderr.
#[derive(Parser, Debug)]
#[command(
    name = "txcore",
    about = "Offline transaction decoder and address validator",
    version,
    propagate_version = true
)]
pub struct TxcoreCli {
    #[command(flatten)]
    pub logging: LoggingArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Logging options shared by every subcommand.
#[derive(Args, Debug)]
pub struct LoggingArgs {
    /// Default log filter. `RUST_LOG` takes precedence when set.
    #[arg(long, global = true, env = "TXCORE_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log line format.
    #[arg(
        long,
        global = true,
        env = "TXCORE_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a hex-encoded raw transaction and print it.
    #[command(alias = "decodeRawTransaction")]
    DecodeRawTransaction(DecodeArgs),
    /// Validate one or more addresses. Stops at the first invalid one.
    #[command(alias = "verifyAddress")]
    VerifyAddresses(VerifyAddressesArgs),
    /// Validate a transaction id and print it normalized.
    ValidateTxid(ValidateTxidArgs),
    /// Build the address text for a 20-byte public-key hash.
    EncodeAddress(EncodeAddressArgs),
    /// Print version information and exit.
    Version,
}

/// How to decide whether a decoded transaction is the genesis transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenesisPolicy {
    /// Treat a transaction with no inputs as genesis. A heuristic: a
    /// crafted zero-input transaction is indistinguishable.
    Auto,
    /// Always treat it as genesis.
    Always,
    /// Never treat it as genesis.
    Never,
}

/// Arguments for `decode-raw-transaction`.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Raw transaction as hex. Pass `-` to read it from stdin.
    pub raw_tx: String,

    /// Genesis classification policy.
    #[arg(long, value_enum, default_value_t = GenesisPolicy::Auto)]
    pub genesis: GenesisPolicy,

    /// Fail unless the decoded transaction has this id.
    #[arg(long)]
    pub expect_txid: Option<String>,

    /// Report which outputs pay this address. Repeatable.
    #[arg(long = "match-address", value_name = "ADDRESS")]
    pub match_addresses: Vec<String>,
}

/// Arguments for `verify-addresses`.
#[derive(Args, Debug)]
pub struct VerifyAddressesArgs {
    /// Addresses to validate, separated by spaces.
    #[arg(required = true)]
    pub addresses: Vec<String>,
}

/// Arguments for `validate-txid`.
#[derive(Args, Debug)]
pub struct ValidateTxidArgs {
    /// 64 hex characters.
    pub txid: String,
}

/// Arguments for `encode-address`.
#[derive(Args, Debug)]
pub struct EncodeAddressArgs {
    /// Public-key hash, 40 hex characters.
    pub key: String,

    /// Address version byte.
    #[arg(
        long = "address-version",
        default_value_t = txcore_protocol::config::ADDRESS_VERSION_DEFAULT
    )]
    pub address_version: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        TxcoreCli::command().debug_assert();
    }

    #[test]
    fn legacy_command_names_still_parse() {
        let cli = TxcoreCli::try_parse_from(["txcore", "decodeRawTransaction", "00"]).unwrap();
        assert!(matches!(cli.command, Commands::DecodeRawTransaction(_)));

        let cli = TxcoreCli::try_parse_from(["txcore", "verifyAddress", "a", "b"]).unwrap();
        match cli.command {
            Commands::VerifyAddresses(args) => assert_eq!(args.addresses, vec!["a", "b"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn decode_defaults() {
        let cli = TxcoreCli::try_parse_from(["txcore", "decode-raw-transaction", "00"]).unwrap();
        let Commands::DecodeRawTransaction(args) = cli.command else {
            panic!("expected decode-raw-transaction");
        };
        assert_eq!(args.genesis, GenesisPolicy::Auto);
        assert!(args.expect_txid.is_none());
        assert!(args.match_addresses.is_empty());
    }

    #[test]
    fn encode_address_takes_version_flag() {
        let key = "33".repeat(20);
        let cli = TxcoreCli::try_parse_from([
            "txcore",
            "encode-address",
            key.as_str(),
            "--address-version",
            "7",
        ])
        .unwrap();
        let Commands::EncodeAddress(args) = cli.command else {
            panic!("expected encode-address");
        };
        assert_eq!(args.key, key);
        assert_eq!(args.address_version, 7);

        let cli = TxcoreCli::try_parse_from(["txcore", "encode-address", key.as_str()]).unwrap();
        let Commands::EncodeAddress(args) = cli.command else {
            panic!("expected encode-address");
        };
        assert_eq!(args.address_version, 0);
    }

    #[test]
    fn verify_addresses_requires_one() {
        assert!(TxcoreCli::try_parse_from(["txcore", "verify-addresses"]).is_err());
    }
}
