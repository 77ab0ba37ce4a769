//! Decoder validator.
//!
//! Every catalogued channel, written the way the collaborator writes it,
//! must decode back to its own gate pair, and the reversed token must
//! contribute the same centers.

use bodygraph_chart::Engine;
use bodygraph_spec::channels;

use crate::report::{CheckResult, ConformanceReport};

const VALIDATOR: &str = "decoder/catalog";

/// Validates the engine's decoder against the channel catalog.
pub fn validate(engine: &Engine) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let resolver = engine.resolver();

    let mut misses = Vec::new();
    let mut asymmetric = Vec::new();
    for channel in channels::catalog() {
        let token = channel.token();
        let decoded = engine
            .decoder()
            .decode(&token)
            .map(|p| (p.first.number(), p.second.number()));
        if decoded != Some((channel.low, channel.high)) {
            misses.push(format!("{token}: decoded as {decoded:?}"));
        }

        let reversed = format!("Key{}Key{}", channel.high, channel.low);
        if resolver.centers_of(&token) != resolver.centers_of(&reversed) {
            asymmetric.push(format!("{token} and {reversed} differ"));
        }
    }

    report.push(CheckResult::from_details(
        VALIDATOR,
        "All catalogued channel tokens decode",
        "Catalogued channel tokens that do not decode",
        misses,
    ));
    report.push(CheckResult::from_details(
        VALIDATOR,
        "Reversed tokens contribute the same centers",
        "Order-sensitive channel tokens",
        asymmetric,
    ));

    report
}
