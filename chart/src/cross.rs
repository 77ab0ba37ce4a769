//! Incarnation cross gates.
//!
//! The cross is formed by the Sun and Earth gates of both imprints, always
//! presented as Personality Sun, Personality Earth, Design Sun, Design Earth.

use bodygraph_spec::{Gate, Planet};
use serde::{Serialize, Serializer};
use tracing::warn;

use crate::activation::{ActivationMap, ActivationParser};

/// Numeric stand-in for a cross slot whose activation is missing or
/// malformed.
pub const MISSING_GATE: i32 = -1;

/// The four cross-forming gates, in presentation order.
///
/// A slot is `None` when the collaborator did not supply a usable
/// activation for it. Serialized, each slot is a gate number or
/// [`MISSING_GATE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossGates {
    /// Personality Sun gate.
    pub personality_sun: Option<Gate>,
    /// Personality Earth gate.
    pub personality_earth: Option<Gate>,
    /// Design Sun gate.
    pub design_sun: Option<Gate>,
    /// Design Earth gate.
    pub design_earth: Option<Gate>,
}

impl CrossGates {
    /// Returns the slots in presentation order.
    #[must_use]
    pub fn slots(&self) -> [Option<Gate>; 4] {
        [
            self.personality_sun,
            self.personality_earth,
            self.design_sun,
            self.design_earth,
        ]
    }

    /// Returns the slots as gate numbers, with [`MISSING_GATE`] for gaps.
    #[must_use]
    pub fn numbers(&self) -> [i32; 4] {
        self.slots()
            .map(|slot| slot.map_or(MISSING_GATE, |g| i32::from(g.number())))
    }

    /// True if all four slots hold a gate.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots().iter().all(Option::is_some)
    }
}

impl Serialize for CrossGates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.numbers().serialize(serializer)
    }
}

/// Reads the cross gates out of activation tokens.
///
/// # Example
///
/// ```
/// use bodygraph_chart::{ActivationParser, CrossGateExtractor};
///
/// let parser = ActivationParser::standard().unwrap();
/// let extractor = CrossGateExtractor::new(&parser);
/// let cross = extractor.cross_gates(Some("51.3"), Some("57.3"), Some("21.5"), Some("48.5"));
/// assert_eq!(cross.numbers(), [51, 57, 21, 48]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CrossGateExtractor<'a> {
    parser: &'a ActivationParser,
}

impl<'a> CrossGateExtractor<'a> {
    /// Creates an extractor using `parser` for activation tokens.
    #[must_use]
    pub fn new(parser: &'a ActivationParser) -> Self {
        Self { parser }
    }

    /// Returns the gate of an activation token, or `None` if the token is
    /// absent or malformed.
    #[must_use]
    pub fn gate_of(&self, activation: Option<&str>) -> Option<Gate> {
        activation
            .and_then(|token| self.parser.parse(token))
            .map(|a| a.gate)
    }

    /// Extracts the four cross gates. Output order always follows the
    /// parameter order.
    #[must_use]
    pub fn cross_gates(
        &self,
        personality_sun: Option<&str>,
        personality_earth: Option<&str>,
        design_sun: Option<&str>,
        design_earth: Option<&str>,
    ) -> CrossGates {
        let cross = CrossGates {
            personality_sun: self.gate_of(personality_sun),
            personality_earth: self.gate_of(personality_earth),
            design_sun: self.gate_of(design_sun),
            design_earth: self.gate_of(design_earth),
        };
        if !cross.is_complete() {
            warn!(gates = ?cross.numbers(), "incarnation cross is missing activations");
        }
        cross
    }

    /// Extracts the cross gates from the Sun and Earth slots of both
    /// imprints.
    #[must_use]
    pub fn from_imprints(&self, personality: &ActivationMap, design: &ActivationMap) -> CrossGates {
        fn slot(map: &ActivationMap, planet: Planet) -> Option<&str> {
            map.get(&planet).map(String::as_str)
        }
        self.cross_gates(
            slot(personality, Planet::Sun),
            slot(personality, Planet::Earth),
            slot(design, Planet::Sun),
            slot(design, Planet::Earth),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ActivationParser {
        ActivationParser::standard().unwrap()
    }

    fn imprint(entries: &[(Planet, &str)]) -> ActivationMap {
        entries
            .iter()
            .map(|&(p, t)| (p, t.to_string()))
            .collect()
    }

    #[test]
    fn gate_of_handles_absent_and_malformed() {
        let parser = parser();
        let ex = CrossGateExtractor::new(&parser);
        assert_eq!(ex.gate_of(Some("51.3")).map(Gate::number), Some(51));
        assert_eq!(ex.gate_of(None), None);
        assert_eq!(ex.gate_of(Some("??")), None);
    }

    #[test]
    fn slot_order_is_fixed() {
        let parser = parser();
        let ex = CrossGateExtractor::new(&parser);
        let cross = ex.cross_gates(Some("51.1"), Some("57.1"), Some("21.4"), Some("48.4"));
        assert_eq!(cross.numbers(), [51, 57, 21, 48]);
        assert!(cross.is_complete());
    }

    #[test]
    fn from_imprints_reads_sun_and_earth() {
        let parser = parser();
        let ex = CrossGateExtractor::new(&parser);
        let personality = imprint(&[
            (Planet::Moon, "1.1"),
            (Planet::Earth, "57.2"),
            (Planet::Sun, "51.2"),
        ]);
        let design = imprint(&[(Planet::Earth, "48.6"), (Planet::Sun, "21.6")]);
        let cross = ex.from_imprints(&personality, &design);
        assert_eq!(cross.numbers(), [51, 57, 21, 48]);
    }

    #[test]
    fn missing_slot_uses_sentinel() {
        let parser = parser();
        let ex = CrossGateExtractor::new(&parser);
        let personality = imprint(&[(Planet::Sun, "51.2")]);
        let design = imprint(&[(Planet::Sun, "bad"), (Planet::Earth, "48.6")]);
        let cross = ex.from_imprints(&personality, &design);
        assert_eq!(cross.numbers(), [51, MISSING_GATE, MISSING_GATE, 48]);
        assert!(!cross.is_complete());
    }

    #[test]
    fn serializes_as_numbers() {
        let parser = parser();
        let ex = CrossGateExtractor::new(&parser);
        let cross = ex.cross_gates(Some("51.1"), None, Some("21.4"), Some("48.4"));
        let json = serde_json::to_string(&cross).unwrap();
        assert_eq!(json, "[51,-1,21,48]");
    }
}
