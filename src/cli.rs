use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "sha256_trace",
    about = "SHA-256 single-block reference — digest plus full schedule/round trace",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct TraceCli {
    /// Global: disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    /// Global: path to config (TOML); default: ~/.sha256trace/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

/// Input selection shared by every subcommand. With nothing given, the
/// built-in 33-byte pubkey test vector is used.
#[derive(Debug, Default, Args)]
pub struct InputArgs {
    /// Message as a hex string; padded into a single block (max 55 bytes)
    #[arg(value_name = "HEX")]
    pub message: Option<String>,

    /// Read raw message bytes from a file instead
    #[arg(long = "file", value_name = "FILE", conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Raw pre-padded 64-byte block as 128 hex chars (no padding applied)
    #[arg(long = "block", value_name = "HEX", conflicts_with_all = ["message", "file"])]
    pub block: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full diagnostic report: padded block, message schedule, round
    /// states, and final digest
    ///
    /// Examples:
    ///   sha256_trace trace
    ///   sha256_trace trace 616263 --full
    ///   sha256_trace trace --block <128 hex chars> --json
    Trace {
        #[command(flatten)]
        input: InputArgs,

        /// Print every round in full register detail
        #[arg(long = "full", action = ArgAction::SetTrue)]
        full: bool,

        /// Emit the report as JSON instead of text
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,

        /// Cross-check the digest against an independent implementation
        #[arg(long = "check", action = ArgAction::SetTrue)]
        check: bool,
    },

    /// Print only the 32-byte digest (hex)
    Digest {
        #[command(flatten)]
        input: InputArgs,

        /// Cross-check the digest against an independent implementation
        #[arg(long = "check", action = ArgAction::SetTrue)]
        check: bool,
    },

    /// Print only the 64-word message schedule
    Schedule {
        #[command(flatten)]
        input: InputArgs,
    },
}
