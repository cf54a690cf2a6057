mod cli;
mod commands;
mod config; // resolve_config_path, ReportConfig
/// sha256_trace main — single-block SHA-256 with full internal trace.
mod core;
mod report;

use clap::Parser;

use crate::cli::{Command, InputArgs, TraceCli};
use crate::config::resolve_config_path;

fn main() -> anyhow::Result<()> {
    let args = TraceCli::parse();

    let cfg_path = resolve_config_path(&args.config);
    let cfg = config::load_config(cfg_path.as_deref())?;

    if args.no_color || !cfg.color {
        colored::control::set_override(false);
    }

    match args.cmd {
        Some(Command::Trace {
            input,
            full,
            json,
            check,
        }) => commands::trace::main(input, full, json, check, &cfg),

        Some(Command::Digest { input, check }) => commands::digest::main(input, check),

        Some(Command::Schedule { input }) => commands::schedule::main(input),

        // No subcommand mirrors the original workflow: trace the built-in
        // pubkey test vector in full.
        None => commands::trace::main(InputArgs::default(), false, false, false, &cfg),
    }
}
