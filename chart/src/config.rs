//! Engine configuration.
//!
//! Configuration is an optional TOML file. Every key has a default, so an
//! empty file (or no file) yields the standard engine:
//!
//! ```toml
//! [decoder]
//! channel_pattern = 'Key(\d{1,2})Key(\d{1,2})'
//! activation_pattern = '^(\d{1,2})\.(\d)'
//!
//! # Optional. When present it replaces the canonical table and must list
//! # all 64 gates.
//! [gates]
//! 1 = "G"
//! 2 = "G"
//! # ...
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use bodygraph_spec::{ChartError, GateCenterTable};
use serde::{Deserialize, Serialize};

use crate::activation::STANDARD_ACTIVATION_PATTERN;
use crate::decoder::STANDARD_CHANNEL_PATTERN;

/// Token patterns used to read the collaborator's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoderConfig {
    /// Two-group pattern extracting gate numbers from channel tokens.
    pub channel_pattern: String,
    /// Two-group pattern extracting gate and line from activation tokens.
    pub activation_pattern: String,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            channel_pattern: STANDARD_CHANNEL_PATTERN.to_string(),
            activation_pattern: STANDARD_ACTIVATION_PATTERN.to_string(),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Token patterns.
    pub decoder: DecoderConfig,
    /// Replacement gate-to-center table, keyed by gate number.
    pub gates: Option<BTreeMap<String, String>>,
}

impl EngineConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] if the text is not valid TOML or
    /// contains unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ChartError> {
        toml::from_str(text)
            .map_err(|e| ChartError::configuration(format!("invalid engine configuration: {e}")))
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] if the file cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> Result<Self, ChartError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ChartError::configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Builds the replacement table, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] if a key is not an integer or
    /// the rows do not form a complete table.
    pub fn gate_table(&self) -> Result<Option<GateCenterTable>, ChartError> {
        let Some(gates) = &self.gates else {
            return Ok(None);
        };
        let rows = gates
            .iter()
            .map(|(key, center)| {
                key.trim()
                    .parse::<i64>()
                    .map(|gate| (gate, center.as_str()))
                    .map_err(|_| {
                        ChartError::configuration(format!("gate key {key:?} is not a number"))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        GateCenterTable::from_named_rows(rows).map(Some)
    }
}
