//! Shared plumbing for the bodygraph client binaries: logging setup,
//! engine construction from an optional config file, and chart input.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use bodygraph_chart::{ChartSource, Engine, EngineConfig};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Builds the engine, from `config` if given, otherwise the standard one.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or is invalid.
pub fn load_engine(config: Option<&Path>) -> Result<Engine> {
    match config {
        Some(path) => {
            let config = EngineConfig::load(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            let engine = Engine::from_config(&config)
                .with_context(|| format!("Invalid configuration {}", path.display()))?;
            info!(config = %path.display(), "engine configured from file");
            Ok(engine)
        }
        None => Engine::standard().context("Failed to build the standard engine"),
    }
}

/// Reads a collaborator chart from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not a chart.
pub fn read_source(path: &Path) -> Result<ChartSource> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read chart from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {} as a chart", path.display()))
}
