//! The channel catalog.
//!
//! A channel joins two gates that sit in different centers. When both gates
//! are activated the channel is "active" and both of its centers become
//! defined. The chart collaborator reports active channels as identifiers of
//! the form `Key{a}Key{b}`; [`ChannelDef::token`] reproduces that form.

use crate::model::Gate;

/// Canonical channels as gate-number pairs, lower gate first.
pub const CHANNEL_PAIRS: [(u8, u8); 36] = [
    (1, 8),
    (2, 14),
    (3, 60),
    (4, 63),
    (5, 15),
    (6, 59),
    (7, 31),
    (9, 52),
    (10, 20),
    (10, 34),
    (10, 57),
    (11, 56),
    (12, 22),
    (13, 33),
    (16, 48),
    (17, 62),
    (18, 58),
    (19, 49),
    (20, 34),
    (20, 57),
    (21, 45),
    (23, 43),
    (24, 61),
    (25, 51),
    (26, 44),
    (27, 50),
    (28, 38),
    (29, 46),
    (30, 41),
    (32, 54),
    (34, 57),
    (35, 36),
    (37, 40),
    (39, 55),
    (42, 53),
    (47, 64),
];

/// A catalogued channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelDef {
    /// Lower-numbered gate.
    pub low: u8,
    /// Higher-numbered gate.
    pub high: u8,
}

impl ChannelDef {
    /// Returns both gates, or `None` if the entry is out of range.
    #[must_use]
    pub fn gates(&self) -> Option<(Gate, Gate)> {
        let low = Gate::new(i64::from(self.low)).ok()?;
        let high = Gate::new(i64::from(self.high)).ok()?;
        Some((low, high))
    }

    /// The collaborator's identifier for this channel, e.g. `Key1Key8`.
    #[must_use]
    pub fn token(&self) -> String {
        format!("Key{}Key{}", self.low, self.high)
    }

    /// True if this channel joins gates `a` and `b`, in either order.
    #[must_use]
    pub fn joins(&self, a: u8, b: u8) -> bool {
        (self.low, self.high) == (a, b) || (self.low, self.high) == (b, a)
    }
}

/// Returns every catalogued channel in gate order.
///
/// # Example
///
/// ```
/// let channels = bodygraph_spec::channels::catalog();
/// assert_eq!(channels.len(), 36);
/// assert_eq!(channels[0].token(), "Key1Key8");
/// ```
#[must_use]
pub fn catalog() -> Vec<ChannelDef> {
    CHANNEL_PAIRS
        .iter()
        .map(|&(low, high)| ChannelDef { low, high })
        .collect()
}

/// Finds the catalogued channel joining `a` and `b`, in either order.
#[must_use]
pub fn find(a: Gate, b: Gate) -> Option<ChannelDef> {
    let (a, b) = (a.number(), b.number());
    CHANNEL_PAIRS
        .iter()
        .map(|&(low, high)| ChannelDef { low, high })
        .find(|c| c.joins(a, b))
}
