//! Bodygraph conformance suite.
//!
//! Validates the data and behaviour every chart depends on: the gate table,
//! the channel catalog, the channel decoder, and the engine's output on
//! known charts.
//!
//! # Conformance Scope
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | `table/completeness` | 64 gates mapped, no empty center, canonical center sizes |
//! | `catalog/channels` | 36 distinct channels, each spanning two centers, covering every gate |
//! | `decoder/catalog` | catalogued tokens decode, reversed tokens agree |
//! | `charts/fixtures` | built-in and on-disk charts assemble with a valid partition |
//!
//! # Entry Point
//!
//! ```
//! use bodygraph_chart::Engine;
//! use bodygraph_conformance::{run_all, RunOptions};
//!
//! let engine = Engine::standard().unwrap();
//! let report = run_all(&engine, &RunOptions::default()).unwrap();
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod fixtures;
pub mod report;
pub mod validators;

use std::path::PathBuf;

use bodygraph_chart::Engine;

pub use report::{CheckResult, ConformanceReport, Severity};

/// Inputs for a conformance run beyond the engine itself.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Directory of collaborator chart JSON files to check, if any.
    pub charts: Option<PathBuf>,
}

/// Runs all validators against `engine` and returns the aggregated report.
///
/// Validators run in this order:
/// 1. Gate table
/// 2. Channel catalog
/// 3. Channel decoder
/// 4. Chart fixtures
///
/// # Errors
///
/// Returns an error only if a chart file cannot be read.
pub fn run_all(engine: &Engine, options: &RunOptions) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::table::validate(engine.table()));
    report.extend(validators::catalog::validate(engine.table()));
    report.extend(validators::decoder::validate(engine));
    report.extend(validators::charts::validate(
        engine,
        options.charts.as_deref(),
    )?);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_engine_conforms() {
        let engine = Engine::standard().unwrap();
        let report = run_all(&engine, &RunOptions::default()).unwrap();
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "Conformance failures: {:#?}", failures);
    }

    #[test]
    fn every_validator_reports() {
        let engine = Engine::standard().unwrap();
        let report = run_all(&engine, &RunOptions::default()).unwrap();
        for prefix in ["table/", "catalog/", "decoder/", "charts/"] {
            assert!(
                report.results.iter().any(|r| r.validator.starts_with(prefix)),
                "no results from {prefix}"
            );
        }
    }
}
