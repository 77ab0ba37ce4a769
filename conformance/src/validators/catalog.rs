//! Channel catalog validator.
//!
//! Checks the 36-channel catalog against the gate table:
//! - exactly 36 channels, none listed twice
//! - each channel joins two distinct in-range gates
//! - each channel spans two different centers
//! - every gate belongs to at least one channel

use std::collections::HashSet;

use bodygraph_spec::{channels, Gate, GateCenterTable};

use crate::report::{CheckResult, ConformanceReport};

const VALIDATOR: &str = "catalog/channels";
const EXPECTED_CHANNELS: usize = 36;

/// Validates the channel catalog against `table`.
pub fn validate(table: &GateCenterTable) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let catalog = channels::catalog();

    if catalog.len() == EXPECTED_CHANNELS {
        report.push(CheckResult::pass(VALIDATOR, "Catalog lists 36 channels"));
    } else {
        report.push(CheckResult::fail(
            VALIDATOR,
            format!(
                "Catalog lists {} channels, expected {EXPECTED_CHANNELS}",
                catalog.len()
            ),
        ));
    }

    let mut seen = HashSet::new();
    let mut malformed = Vec::new();
    let mut same_center = Vec::new();
    for channel in &catalog {
        if !seen.insert((channel.low.min(channel.high), channel.low.max(channel.high))) {
            malformed.push(format!("{}: listed twice", channel.token()));
            continue;
        }
        match channel.gates() {
            Some((a, b)) if a == b => {
                malformed.push(format!("{}: joins a gate to itself", channel.token()));
            }
            Some((a, b)) => {
                let center = table.center(a);
                if center == table.center(b) {
                    same_center.push(format!("{}: both gates in {center}", channel.token()));
                }
            }
            None => malformed.push(format!("{}: gate out of range", channel.token())),
        }
    }
    report.push(CheckResult::from_details(
        VALIDATOR,
        "Every channel joins two distinct gates",
        "Malformed channel entries",
        malformed,
    ));
    report.push(CheckResult::from_details(
        VALIDATOR,
        "Every channel spans two centers",
        "Channels inside a single center",
        same_center,
    ));

    let orphans: Vec<String> = Gate::all()
        .filter(|g| {
            let n = g.number();
            !catalog.iter().any(|c| c.low == n || c.high == n)
        })
        .map(|g| format!("gate {g}"))
        .collect();
    report.push(CheckResult::from_details(
        VALIDATOR,
        "Every gate belongs to a channel",
        "Gates outside every channel",
        orphans,
    ));

    report
}
