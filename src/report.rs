//! Console and JSON renderings of a compression trace.
//!
//! Presentation only — every value printed here is taken from the trace
//! the core already exposes.

use colored::Colorize;
use serde::Serialize;

use crate::config::ReportConfig;
use crate::core::compress::K;
use crate::core::trace::Trace;

const RULE: &str =
    "================================================================================";

fn word(x: u32) -> String {
    format!("0x{:08x}", x)
}

pub fn print_report(trace: &Trace, message: Option<&[u8]>, cfg: &ReportConfig, full: bool) {
    println!("{}", RULE.dimmed());
    println!("{}", "SHA256 Reference Computation".bright_white().bold());
    println!("{}", RULE.dimmed());
    if let Some(msg) = message {
        println!("\nInput ({} bytes): {}", msg.len(), hex::encode(msg));
    }
    println!("\nPadded block (64 bytes):");
    print_block(&trace.block);
    println!();
    print_schedule(&trace.schedule);
    println!();
    print_rounds(trace, cfg, full);
    println!("{}", RULE.dimmed());
    println!(
        "{} {}",
        "FINAL HASH:".bright_white().bold(),
        trace.digest_hex().green()
    );
    println!("{}", RULE.dimmed());
}

pub fn print_block(block: &[u8; 64]) {
    for offset in (0..64).step_by(16) {
        println!("  {:02}: {}", offset, hex::encode(&block[offset..offset + 16]));
    }
}

pub fn print_schedule(schedule: &[u32; 64]) {
    println!("{}", "MESSAGE SCHEDULE (W values)".bright_white().bold());
    for (i, w) in schedule.iter().enumerate() {
        let origin = if i < 16 { "(from input)" } else { "(extended)" };
        println!("W[{:2}] = {}  {}", i, word(*w), origin.dimmed());
    }
}

fn print_rounds(trace: &Trace, cfg: &ReportConfig, full: bool) {
    println!("{}", "ROUND STATES".bright_white().bold());
    let [a, b, c, d, e, f, g, h] = trace.init;
    println!(
        "Initial: a={} b={} c={} d={}",
        word(a),
        word(b),
        word(c),
        word(d)
    );
    println!(
        "         e={} f={} g={} h={}",
        word(e),
        word(f),
        word(g),
        word(h)
    );
    println!();

    let tail_start = 64usize.saturating_sub(cfg.detail_tail);
    for rs in trace.rounds.iter() {
        let detailed = full || rs.round < cfg.detail_head || rs.round >= tail_start;
        println!(
            "Round {:2}: W={} K={}",
            rs.round,
            word(rs.w),
            word(K[rs.round])
        );
        println!("         a={} e={}", word(rs.a), word(rs.e));
        if detailed {
            println!(
                "         b={} c={} d={}",
                word(rs.b),
                word(rs.c),
                word(rs.d)
            );
            println!(
                "         f={} g={} h={}",
                word(rs.f),
                word(rs.g),
                word(rs.h)
            );
            println!("         t1={} t2={}", word(rs.t1), word(rs.t2));
        }
        println!();
    }
}

/// One round in the machine-readable report. Words are `0x%08x` strings so
/// the output diffs cleanly against hardware dumps.
#[derive(Debug, Serialize)]
pub struct JsonRound {
    pub round: usize,
    pub w: String,
    pub k: String,
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
    pub e: String,
    pub f: String,
    pub g: String,
    pub h: String,
    pub t1: String,
    pub t2: String,
}

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub block: String,
    pub schedule: Vec<String>,
    pub init: Vec<String>,
    pub rounds: Vec<JsonRound>,
    pub state: Vec<String>,
    pub digest: String,
}

impl JsonReport {
    pub fn from_trace(trace: &Trace) -> Self {
        JsonReport {
            block: hex::encode(trace.block),
            schedule: trace.schedule.iter().map(|&w| word(w)).collect(),
            init: trace.init.iter().map(|&w| word(w)).collect(),
            rounds: trace
                .rounds
                .iter()
                .map(|rs| JsonRound {
                    round: rs.round,
                    w: word(rs.w),
                    k: word(K[rs.round]),
                    a: word(rs.a),
                    b: word(rs.b),
                    c: word(rs.c),
                    d: word(rs.d),
                    e: word(rs.e),
                    f: word(rs.f),
                    g: word(rs.g),
                    h: word(rs.h),
                    t1: word(rs.t1),
                    t2: word(rs.t2),
                })
                .collect(),
            state: trace.state.iter().map(|&w| word(w)).collect(),
            digest: trace.digest_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::block::Block;
    use crate::core::compress::compress;

    #[test]
    fn json_report_shape() {
        let trace = compress(&Block::test_vector());
        let report = JsonReport::from_trace(&trace);
        assert_eq!(report.rounds.len(), 64);
        assert_eq!(report.schedule.len(), 64);
        assert_eq!(report.schedule[0], "0x0279be66");
        assert_eq!(report.rounds[0].k, "0x428a2f98");
        assert_eq!(report.digest, trace.digest_hex());
    }
}
