//! Defined/undefined center classification.
//!
//! A center is defined when at least one active channel touches it. The
//! resolver decodes every active channel, maps both gates to their centers
//! and partitions the nine centers into defined and undefined sets.

use std::collections::BTreeSet;

use bodygraph_spec::{Center, GateCenterTable};
use serde::Serialize;

use crate::decoder::ChannelDecoder;

/// The partition of the nine centers for one chart.
///
/// `defined` and `undefined` are disjoint, their union is every center, and
/// both are ordered by center name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CenterDefinition {
    /// Centers touched by at least one active channel.
    pub defined: Vec<Center>,
    /// All remaining centers.
    pub undefined: Vec<Center>,
}

impl CenterDefinition {
    /// Builds the partition from a set of defined centers.
    #[must_use]
    pub fn from_defined(defined: BTreeSet<Center>) -> Self {
        let undefined = Center::ALL
            .into_iter()
            .filter(|c| !defined.contains(c))
            .collect::<BTreeSet<_>>();
        Self {
            defined: defined.into_iter().collect(),
            undefined: undefined.into_iter().collect(),
        }
    }

    /// Returns true if `center` is defined.
    #[must_use]
    pub fn is_defined(&self, center: Center) -> bool {
        self.defined.contains(&center)
    }
}

/// Classifies centers from active channel tokens.
///
/// # Example
///
/// ```
/// use bodygraph_chart::{CenterDefinitionResolver, ChannelDecoder};
/// use bodygraph_spec::{Center, GateCenterTable};
///
/// let table = GateCenterTable::standard().unwrap();
/// let decoder = ChannelDecoder::standard().unwrap();
/// let resolver = CenterDefinitionResolver::new(table, &decoder);
///
/// let def = resolver.resolve(["Key1Key8"]);
/// assert_eq!(def.defined, [Center::G, Center::Throat]);
/// assert_eq!(def.undefined.len(), 7);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CenterDefinitionResolver<'a> {
    table: &'a GateCenterTable,
    decoder: &'a ChannelDecoder,
}

impl<'a> CenterDefinitionResolver<'a> {
    /// Creates a resolver over a table and decoder.
    #[must_use]
    pub fn new(table: &'a GateCenterTable, decoder: &'a ChannelDecoder) -> Self {
        Self { table, decoder }
    }

    /// Returns the centers touched by a single channel token, or an empty
    /// set if it does not decode.
    #[must_use]
    pub fn centers_of(&self, token: &str) -> BTreeSet<Center> {
        self.decoder
            .decode(token)
            .map(|pair| pair.gates().map(|g| self.table.center(g)))
            .into_iter()
            .flatten()
            .collect()
    }

    /// Partitions the centers given the chart's active channel tokens.
    ///
    /// An empty token set is valid and leaves every center undefined.
    pub fn resolve<I, S>(&self, tokens: I) -> CenterDefinition
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let defined = tokens
            .into_iter()
            .flat_map(|token| self.centers_of(token.as_ref()))
            .collect::<BTreeSet<_>>();
        CenterDefinition::from_defined(defined)
    }
}
