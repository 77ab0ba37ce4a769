//! `bodygraph-conformance`: validates the gate table, channel catalog,
//! decoder and chart fixtures.
//!
//! **Usage:**
//! ```
//! bodygraph-conformance [--config <engine.toml>] [--charts <dir>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use bodygraph_conformance::{run_all, RunOptions, Severity};
use clap::Parser;

/// Run the bodygraph conformance suite.
#[derive(Parser)]
#[command(
    name = "bodygraph-conformance",
    about = "Validate the bodygraph tables, decoder and chart fixtures"
)]
struct Args {
    /// Engine configuration (TOML). Defaults to the standard engine.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory of collaborator chart JSON files to check.
    #[arg(long)]
    charts: Option<PathBuf>,
}

fn main() -> Result<()> {
    bodygraph_clients::init_tracing();
    let args = Args::parse();

    let engine = bodygraph_clients::load_engine(args.config.as_deref())?;
    let report = run_all(
        &engine,
        &RunOptions {
            charts: args.charts,
        },
    )?;

    println!("Bodygraph Conformance Report");
    println!("============================");
    println!();

    for result in &report.results {
        let status = match result.severity {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        };
        println!("[{}] {} — {}", status, result.validator, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
