use colored::Colorize;

use crate::cli::InputArgs;
use crate::commands::input::{self, ResolvedInput};
use crate::config::ReportConfig;
use crate::core::compress;
use crate::core::trace::Trace;
use crate::report::{self, JsonReport};

pub fn main(
    args: InputArgs,
    full: bool,
    json: bool,
    check: bool,
    cfg: &ReportConfig,
) -> anyhow::Result<()> {
    let ResolvedInput { block, message } = input::resolve(&args)?;
    let trace = compress::compress(&block);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonReport::from_trace(&trace))?
        );
    } else {
        report::print_report(&trace, message.as_deref(), cfg, full);
    }

    if check {
        check_digest(&trace, message.as_deref())?;
    }
    Ok(())
}

/// Cross-check the traced digest against the sha2 crate. Only possible
/// when the block was produced by padding a message; a raw block has no
/// message-level counterpart to hash.
pub fn check_digest(trace: &Trace, message: Option<&[u8]>) -> anyhow::Result<()> {
    use sha2::{Digest, Sha256};

    let Some(msg) = message else {
        eprintln!(
            "{} --check needs a message input; raw blocks have no sha2 counterpart.",
            "warn:".yellow().bold()
        );
        return Ok(());
    };

    let expected = Sha256::digest(msg);
    if trace.digest[..] == expected[..] {
        println!("{} digest matches sha2::Sha256", "ok:".green().bold());
        Ok(())
    } else {
        anyhow::bail!(
            "digest mismatch: trace {} vs sha2 {}",
            trace.digest_hex(),
            hex::encode(expected)
        );
    }
}
