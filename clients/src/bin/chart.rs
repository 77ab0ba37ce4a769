//! `bodygraph-chart`: assembles a chart result from a collaborator chart.
//!
//! Reads one chart (JSON, as produced by the ephemeris collaborator),
//! classifies its centers, extracts its cross gates and writes the
//! assembled result as JSON.
//!
//! **Usage:**
//! ```
//! bodygraph-chart --input <chart.json|-> [--config <engine.toml>] [--out <result.json>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

/// Assemble a bodygraph chart result.
#[derive(Parser)]
#[command(
    name = "bodygraph-chart",
    about = "Classify centers and extract cross gates from a collaborator chart"
)]
struct Args {
    /// Collaborator chart JSON file, or `-` for stdin.
    #[arg(long)]
    input: PathBuf,

    /// Engine configuration (TOML). Defaults to the standard engine.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file for the result JSON (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    bodygraph_clients::init_tracing();
    let args = Args::parse();

    let engine = bodygraph_clients::load_engine(args.config.as_deref())?;
    let source = bodygraph_clients::read_source(&args.input)?;

    let result = engine
        .chart(&source)
        .with_context(|| format!("Failed to assemble chart from {}", args.input.display()))?;

    info!(
        defined = result.defined_centers.len(),
        channels = result.channels.len(),
        "chart assembled"
    );
    if result.partial {
        warn!(cross = ?result.cross_gates.numbers(), "chart is partial: cross activations missing");
    }

    let json = serde_json::to_string_pretty(&result).context("Failed to serialize chart result")?;
    match &args.out {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "result written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
