//! Activation parsing.
//!
//! An activation is a gate and a line, written by the collaborator as
//! `gate.line` (for example `51.3`), sometimes followed by further detail.
//! Both the cross extractor and the activation summary read activations
//! through [`ActivationParser`].

use std::collections::BTreeMap;

use bodygraph_spec::{ChartError, Gate, Planet};
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Pattern matching `gate.line` at the start of an activation token.
pub const STANDARD_ACTIVATION_PATTERN: &str = r"^(\d{1,2})\.(\d)";

/// Planet-to-activation-token map for one imprint, as supplied by the
/// collaborator.
pub type ActivationMap = BTreeMap<Planet, String>;

/// A parsed activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Activation {
    /// The activated gate.
    pub gate: Gate,
    /// The line within the gate, 1..=6.
    pub line: u8,
}

/// Parses `gate.line` activation tokens.
#[derive(Debug, Clone)]
pub struct ActivationParser {
    pattern: Regex,
}

impl ActivationParser {
    /// Creates a parser from a pattern whose first group captures the gate
    /// and second group captures the line.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] if the pattern does not compile
    /// or does not have exactly two capture groups.
    pub fn new(pattern: &str) -> Result<Self, ChartError> {
        let pattern = Regex::new(pattern).map_err(|e| {
            ChartError::configuration(format!("invalid activation pattern {pattern:?}: {e}"))
        })?;
        if pattern.captures_len() != 3 {
            return Err(ChartError::configuration(format!(
                "activation pattern {:?} must capture gate and line",
                pattern.as_str()
            )));
        }
        Ok(Self { pattern })
    }

    /// Creates a parser for `gate.line` tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] only if the built-in pattern
    /// fails to compile.
    pub fn standard() -> Result<Self, ChartError> {
        Self::new(STANDARD_ACTIVATION_PATTERN)
    }

    /// Returns the source of the pattern in use.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Parses an activation token.
    ///
    /// Returns `None` if the token does not match, the gate is outside
    /// 1..=64, or the line is outside 1..=6.
    ///
    /// # Example
    ///
    /// ```
    /// use bodygraph_chart::ActivationParser;
    ///
    /// let parser = ActivationParser::standard().unwrap();
    /// let act = parser.parse("51.3").unwrap();
    /// assert_eq!((act.gate.number(), act.line), (51, 3));
    /// assert!(parser.parse("??").is_none());
    /// ```
    #[must_use]
    pub fn parse(&self, token: &str) -> Option<Activation> {
        let caps = self.pattern.captures(token)?;
        let gate = caps
            .get(1)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .and_then(|n| Gate::new(n).ok());
        let line = caps
            .get(2)
            .and_then(|m| m.as_str().parse::<u8>().ok())
            .filter(|l| (1..=6).contains(l));
        match (gate, line) {
            (Some(gate), Some(line)) => Some(Activation { gate, line }),
            _ => {
                debug!(token, "activation token is out of range");
                None
            }
        }
    }
}

/// One planet's row in an imprint summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetActivation {
    /// The planet.
    pub planet: Planet,
    /// The parsed activation, or `None` if absent or malformed.
    pub activation: Option<Activation>,
}

/// Summarizes one imprint: every planet in presentation order with its
/// parsed activation.
#[must_use]
pub fn summarize(parser: &ActivationParser, map: &ActivationMap) -> Vec<PlanetActivation> {
    Planet::ALL
        .into_iter()
        .map(|planet| PlanetActivation {
            planet,
            activation: map.get(&planet).and_then(|token| parser.parse(token)),
        })
        .collect()
}
