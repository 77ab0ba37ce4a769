//! Gate table validator.
//!
//! Checks the table an engine runs with:
//! - every gate 1..=64 maps to a center
//! - every center has at least one gate
//! - per-center gate counts match the canonical distribution (warning only,
//!   so deliberately customised tables still pass)

use bodygraph_spec::{Center, GateCenterTable, GATE_COUNT};

use crate::report::{CheckResult, ConformanceReport};

const VALIDATOR: &str = "table/completeness";

/// Canonical number of gates per center.
const EXPECTED_SIZES: [(Center, usize); 9] = [
    (Center::Head, 3),
    (Center::Ajna, 6),
    (Center::Throat, 11),
    (Center::G, 8),
    (Center::Ego, 4),
    (Center::SolarPlexus, 7),
    (Center::Sacral, 9),
    (Center::Spleen, 7),
    (Center::Root, 9),
];

/// Validates a gate-to-center table.
pub fn validate(table: &GateCenterTable) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let unmapped: Vec<String> = (1..=GATE_COUNT as i64)
        .filter(|&n| table.lookup(n).is_err())
        .map(|n| format!("gate {n}"))
        .collect();
    report.push(CheckResult::from_details(
        VALIDATOR,
        "All 64 gates map to a center",
        "Gates without a center",
        unmapped,
    ));

    let empty: Vec<String> = Center::ALL
        .into_iter()
        .filter(|&c| table.gates_of(c).is_empty())
        .map(|c| c.name().to_string())
        .collect();
    report.push(CheckResult::from_details(
        VALIDATOR,
        "Every center has at least one gate",
        "Centers without gates",
        empty,
    ));

    let drift: Vec<String> = EXPECTED_SIZES
        .into_iter()
        .filter_map(|(center, expected)| {
            let actual = table.gates_of(center).len();
            (actual != expected).then(|| format!("{center}: {actual} gates, expected {expected}"))
        })
        .collect();
    if drift.is_empty() {
        report.push(CheckResult::pass(
            VALIDATOR,
            "Center sizes match the canonical distribution",
        ));
    } else {
        let mut result = CheckResult::warn(
            VALIDATOR,
            "Center sizes differ from the canonical distribution",
        );
        result.details = drift;
        report.push(result);
    }

    report
}
