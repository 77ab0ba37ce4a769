//! The chart engine: one table, one decoder and one activation parser,
//! reused for every chart.

use std::borrow::Cow;

use bodygraph_spec::{ChartError, GateCenterTable};

use crate::activation::{summarize, ActivationParser};
use crate::assembler::{ActivationSummary, ChartResult, ChartResultAssembler};
use crate::config::EngineConfig;
use crate::cross::CrossGateExtractor;
use crate::decoder::ChannelDecoder;
use crate::resolver::CenterDefinitionResolver;
use crate::source::ChartSource;

/// Computes [`ChartResult`]s from collaborator output.
///
/// An engine holds only immutable state, so a single instance can serve
/// any number of threads.
///
/// # Example
///
/// ```
/// use bodygraph_chart::{ChartSource, Engine};
/// use bodygraph_spec::Center;
///
/// let engine = Engine::standard().unwrap();
/// let source: ChartSource = serde_json::from_str(r#"{
///     "Type": "Generator", "Profile": "1/3", "Strategy": "Sacral",
///     "SplitDefinition": "Single", "IncarnationCross": "Sphinx",
///     "ActiveGates": [1, 8], "ActiveChannels": ["Key1Key8"]
/// }"#).unwrap();
///
/// let chart = engine.chart(&source).unwrap();
/// assert_eq!(chart.defined_centers, [Center::G, Center::Throat]);
/// assert!(chart.partial);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    table: Cow<'static, GateCenterTable>,
    decoder: ChannelDecoder,
    parser: ActivationParser,
}

impl Engine {
    /// Creates an engine with the canonical table and standard patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] if the canonical table or a
    /// built-in pattern fails validation.
    pub fn standard() -> Result<Self, ChartError> {
        Ok(Self {
            table: Cow::Borrowed(GateCenterTable::standard()?),
            decoder: ChannelDecoder::standard()?,
            parser: ActivationParser::standard()?,
        })
    }

    /// Creates an engine from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] if a pattern or the gate table
    /// override is invalid.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ChartError> {
        let table = match config.gate_table()? {
            Some(table) => Cow::Owned(table),
            None => Cow::Borrowed(GateCenterTable::standard()?),
        };
        Ok(Self {
            table,
            decoder: ChannelDecoder::new(&config.decoder.channel_pattern)?,
            parser: ActivationParser::new(&config.decoder.activation_pattern)?,
        })
    }

    /// The gate-to-center table in use.
    #[must_use]
    pub fn table(&self) -> &GateCenterTable {
        &self.table
    }

    /// The channel decoder in use.
    #[must_use]
    pub fn decoder(&self) -> &ChannelDecoder {
        &self.decoder
    }

    /// The activation parser in use.
    #[must_use]
    pub fn parser(&self) -> &ActivationParser {
        &self.parser
    }

    /// Returns a resolver bound to this engine's table and decoder.
    #[must_use]
    pub fn resolver(&self) -> CenterDefinitionResolver<'_> {
        CenterDefinitionResolver::new(&self.table, &self.decoder)
    }

    /// Returns a cross extractor bound to this engine's parser.
    #[must_use]
    pub fn cross_extractor(&self) -> CrossGateExtractor<'_> {
        CrossGateExtractor::new(&self.parser)
    }

    /// Computes the chart result for one collaborator chart.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::GateOutOfRange`] if the source lists an active
    /// gate outside 1..=64.
    pub fn chart(&self, source: &ChartSource) -> Result<ChartResult, ChartError> {
        let definition = self.resolver().resolve(&source.active_channels);
        let cross = self
            .cross_extractor()
            .from_imprints(&source.personality_activation, &source.design_activation);
        let activations = ActivationSummary {
            personality: summarize(&self.parser, &source.personality_activation),
            design: summarize(&self.parser, &source.design_activation),
        };
        ChartResultAssembler::new(&self.decoder).assemble(
            source.labels.clone(),
            &source.active_gates,
            &source.active_channels,
            definition,
            cross,
            activations,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodygraph_spec::Center;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn engine_is_send_sync() {
        assert_send_sync::<Engine>();
    }

    #[test]
    fn from_default_config_matches_standard() {
        let engine = Engine::from_config(&EngineConfig::default()).unwrap();
        let standard = Engine::standard().unwrap();
        assert_eq!(engine.table(), standard.table());
        assert_eq!(engine.decoder().pattern(), standard.decoder().pattern());
        assert_eq!(engine.parser().pattern(), standard.parser().pattern());
    }

    #[test]
    fn custom_channel_pattern_flows_into_chart() {
        let config = EngineConfig::from_toml_str(
            r#"
            [decoder]
            channel_pattern = '^(\d+)-(\d+)$'
            "#,
        )
        .unwrap();
        let engine = Engine::from_config(&config).unwrap();
        let def = engine.resolver().resolve(["1-8", "Key2Key14"]);
        assert_eq!(def.defined, [Center::G, Center::Throat]);
    }

    #[test]
    fn invalid_pattern_is_configuration_error() {
        let mut config = EngineConfig::default();
        config.decoder.activation_pattern = "(".into();
        assert!(Engine::from_config(&config).unwrap_err().is_configuration());
    }
}
