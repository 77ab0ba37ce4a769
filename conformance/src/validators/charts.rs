//! Chart fixture validator.
//!
//! Runs the engine over the built-in fixtures (checked against their
//! expected centers and cross gates) and over every `*.json` chart in an
//! optional directory (checked for the center partition invariant).

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use bodygraph_chart::{Center, ChartResult, ChartSource, Engine};
use tracing::debug;
use walkdir::WalkDir;

use crate::fixtures::{self, ChartFixture};
use crate::report::{CheckResult, ConformanceReport};

const VALIDATOR: &str = "charts/fixtures";

/// Validates built-in fixtures and, if given, the charts under `dir`.
///
/// # Errors
///
/// Returns an error if a chart file cannot be read.
pub fn validate(engine: &Engine, dir: Option<&Path>) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let mismatches: Vec<String> = fixtures::ALL
        .iter()
        .filter_map(|f| check_fixture(engine, f).err())
        .collect();
    report.push(CheckResult::from_details(
        VALIDATOR,
        format!("{} built-in charts match expectations", fixtures::ALL.len()),
        "Built-in charts deviate from expectations",
        mismatches,
    ));

    let Some(dir) = dir else {
        return Ok(report);
    };
    if !dir.is_dir() {
        report.push(CheckResult::warn(
            VALIDATOR,
            format!("Chart directory {} not found", dir.display()),
        ));
        return Ok(report);
    }

    let mut checked = 0usize;
    let mut problems = Vec::new();
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|x| x == "json").unwrap_or(false))
    {
        let path = entry.path();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        checked += 1;
        debug!(path = %path.display(), "checking chart");
        if let Err(problem) = check_chart(engine, &text) {
            problems.push(format!("{}: {problem}", path.display()));
        }
    }
    report.push(CheckResult::from_details(
        VALIDATOR,
        format!("{checked} chart file(s) assemble with a valid center partition"),
        "Chart files that fail to assemble",
        problems,
    ));

    Ok(report)
}

fn assemble(engine: &Engine, json: &str) -> Result<ChartResult, String> {
    let source: ChartSource =
        serde_json::from_str(json).map_err(|e| format!("not a chart: {e}"))?;
    engine.chart(&source).map_err(|e| e.to_string())
}

fn check_partition(result: &ChartResult) -> Result<(), String> {
    let defined: BTreeSet<Center> = result.defined_centers.iter().copied().collect();
    let undefined: BTreeSet<Center> = result.undefined_centers.iter().copied().collect();
    if !defined.is_disjoint(&undefined) {
        return Err("a center is both defined and undefined".into());
    }
    if defined.len() + undefined.len() != Center::ALL.len() {
        return Err(format!(
            "{} defined + {} undefined centers, expected 9",
            defined.len(),
            undefined.len()
        ));
    }
    Ok(())
}

fn check_chart(engine: &Engine, json: &str) -> Result<(), String> {
    check_partition(&assemble(engine, json)?)
}

fn check_fixture(engine: &Engine, fixture: &ChartFixture) -> Result<(), String> {
    let result = assemble(engine, fixture.json).map_err(|e| format!("{}: {e}", fixture.name))?;
    check_partition(&result).map_err(|e| format!("{}: {e}", fixture.name))?;

    let defined: Vec<&str> = result.defined_centers.iter().map(|c| c.name()).collect();
    if defined != fixture.defined {
        return Err(format!(
            "{}: defined centers {defined:?}, expected {:?}",
            fixture.name, fixture.defined
        ));
    }
    if result.cross_gates.numbers() != fixture.cross {
        return Err(format!(
            "{}: cross gates {:?}, expected {:?}",
            fixture.name,
            result.cross_gates.numbers(),
            fixture.cross
        ));
    }
    Ok(())
}
