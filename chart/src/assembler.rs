//! Chart result assembly.
//!
//! Pure composition: the assembler takes the outputs of the resolver and the
//! cross extractor together with the collaborator's labels and raw lists and
//! packs them into one immutable [`ChartResult`]. The only work it does on
//! its own is ordering and validating the raw gate list.

use std::collections::BTreeSet;

use bodygraph_spec::{channels, Center, ChartError, Gate};
use serde::Serialize;
use tracing::debug;

use crate::activation::PlanetActivation;
use crate::cross::CrossGates;
use crate::decoder::{ChannelDecoder, GatePair};
use crate::resolver::CenterDefinition;
use crate::source::ChartLabels;

/// One active channel as reported by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelDescriptor {
    /// The raw token.
    pub token: String,
    /// The decoded gate pair, or `None` on a decode miss.
    pub gates: Option<GatePair>,
    /// True if the decoded pair is one of the 36 catalogued channels.
    pub catalogued: bool,
}

impl ChannelDescriptor {
    /// Describes `token` using `decoder`.
    #[must_use]
    pub fn describe(decoder: &ChannelDecoder, token: &str) -> Self {
        let gates = decoder.decode(token);
        let catalogued = gates.is_some_and(|p| channels::find(p.first, p.second).is_some());
        Self {
            token: token.to_string(),
            gates,
            catalogued,
        }
    }
}

/// Planet activations for both imprints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivationSummary {
    /// Personality imprint, in planet presentation order.
    pub personality: Vec<PlanetActivation>,
    /// Design imprint, in planet presentation order.
    pub design: Vec<PlanetActivation>,
}

/// The assembled chart.
///
/// Built once per chart, never mutated afterwards, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartResult {
    /// Labels copied verbatim from the collaborator.
    pub labels: ChartLabels,
    /// Active gates, ascending, without duplicates.
    pub active_gates: Vec<Gate>,
    /// Active channels, ordered by token.
    pub channels: Vec<ChannelDescriptor>,
    /// Defined centers, ordered by name.
    pub defined_centers: Vec<Center>,
    /// Undefined centers, ordered by name.
    pub undefined_centers: Vec<Center>,
    /// Cross gates: Personality Sun, Personality Earth, Design Sun, Design Earth.
    pub cross_gates: CrossGates,
    /// Per-planet activations.
    pub activations: ActivationSummary,
    /// True if any cross slot is missing.
    pub partial: bool,
}

/// Composes component outputs into a [`ChartResult`].
#[derive(Debug, Clone, Copy)]
pub struct ChartResultAssembler<'a> {
    decoder: &'a ChannelDecoder,
}

impl<'a> ChartResultAssembler<'a> {
    /// Creates an assembler that describes channels with `decoder`.
    #[must_use]
    pub fn new(decoder: &'a ChannelDecoder) -> Self {
        Self { decoder }
    }

    /// Assembles a chart result.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::GateOutOfRange`] if any active gate number is
    /// outside 1..=64.
    pub fn assemble<S: AsRef<str>>(
        &self,
        labels: ChartLabels,
        active_gates: &[i64],
        active_channels: &[S],
        definition: CenterDefinition,
        cross_gates: CrossGates,
        activations: ActivationSummary,
    ) -> Result<ChartResult, ChartError> {
        let active_gates = active_gates
            .iter()
            .map(|&n| Gate::new(n))
            .collect::<Result<BTreeSet<_>, _>>()?
            .into_iter()
            .collect::<Vec<_>>();

        let mut channels: Vec<ChannelDescriptor> = active_channels
            .iter()
            .map(|t| ChannelDescriptor::describe(self.decoder, t.as_ref()))
            .collect();
        channels.sort_by(|a, b| a.token.cmp(&b.token));

        let partial = !cross_gates.is_complete();
        debug!(
            gates = active_gates.len(),
            channels = channels.len(),
            defined = definition.defined.len(),
            partial,
            "assembled chart"
        );

        Ok(ChartResult {
            labels,
            active_gates,
            channels,
            defined_centers: definition.defined,
            undefined_centers: definition.undefined,
            cross_gates,
            activations,
            partial,
        })
    }
}
