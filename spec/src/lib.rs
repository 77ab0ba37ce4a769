//! Bodygraph static model encoded as typed Rust data.
//!
//! The `bodygraph-spec` crate provides the fixed vocabulary every chart is
//! built from: the 64 gates, the 9 centers, the planets and imprints that
//! produce activations, the gate-to-center table and the catalog of 36
//! channels.
//!
//! # Entry Point
//!
//! ```
//! use bodygraph_spec::{Center, Gate, GateCenterTable};
//!
//! let table = GateCenterTable::standard().unwrap();
//! let gate = Gate::new(8).unwrap();
//! assert_eq!(table.center(gate), Center::Throat);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod channels;
pub mod error;
pub mod model;
pub mod table;

pub use channels::ChannelDef;
pub use error::ChartError;
pub use model::{Center, Gate, Imprint, Planet, CENTER_COUNT, GATE_COUNT};
pub use table::GateCenterTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_channel_spans_two_centers() {
        let table = GateCenterTable::standard().unwrap();
        for channel in channels::catalog() {
            let (a, b) = channel.gates().unwrap();
            assert_ne!(
                table.center(a),
                table.center(b),
                "channel {} stays inside one center",
                channel.token()
            );
        }
    }

    #[test]
    fn every_gate_is_in_a_channel() {
        let catalog = channels::catalog();
        for gate in Gate::all() {
            let n = gate.number();
            assert!(
                catalog.iter().any(|c| c.low == n || c.high == n),
                "gate {n} belongs to no channel"
            );
        }
    }

    #[test]
    fn channels_unique() {
        let mut seen = std::collections::HashSet::new();
        for channel in channels::catalog() {
            assert!(seen.insert(channel), "Duplicate channel: {}", channel.token());
        }
    }
}
