//! The chart collaborator's result interface.
//!
//! Ephemeris work (turning a universal timestamp into planetary positions,
//! gates and channels) happens outside this crate. Its result arrives as a
//! [`ChartSource`]; property names follow the collaborator's PascalCase
//! naming so its JSON output deserializes directly.
//!
//! Only the labels are checked strictly. Channel and activation entries are
//! read leniently: a value the engine cannot use becomes a decode miss or a
//! missing activation for that one entry, never a rejected chart.

use std::collections::BTreeMap;

use bodygraph_spec::Planet;
use serde::de::{value::Error as ValueError, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::activation::ActivationMap;

/// Labels computed by the collaborator and copied into the result verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChartLabels {
    /// Type label (e.g. `"Generator"`).
    #[serde(rename = "Type")]
    pub kind: String,
    /// Profile label (e.g. `"3/5"`).
    pub profile: String,
    /// Strategy / authority label.
    pub strategy: String,
    /// Definition split label.
    pub split_definition: String,
    /// Incarnation cross label.
    pub incarnation_cross: String,
}

/// One computed chart, as handed over by the collaborator.
///
/// The labels are required; gate, channel and activation collections
/// default to empty when absent or `null`. A non-string channel entry is
/// kept as its JSON text so it shows up as a decode miss. Activations for
/// bodies this crate does not model (Chiron, Lilith, ...) and non-string
/// activation values are dropped, which leaves the slot missing.
///
/// # Example
///
/// ```
/// use bodygraph_chart::ChartSource;
///
/// let source: ChartSource = serde_json::from_str(r#"{
///     "Type": "Generator",
///     "Profile": "3/5",
///     "Strategy": "Sacral",
///     "SplitDefinition": "Single",
///     "IncarnationCross": "Right Angle Cross of Penetration",
///     "ActiveGates": [51, 57],
///     "ActiveChannels": ["Key1Key8"]
/// }"#).unwrap();
/// assert_eq!(source.labels.kind, "Generator");
/// assert!(source.design_activation.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChartSource {
    /// Pass-through labels.
    #[serde(flatten)]
    pub labels: ChartLabels,
    /// Activated gate numbers, in any order and possibly repeated.
    #[serde(default)]
    pub active_gates: Vec<i64>,
    /// Active channel tokens.
    #[serde(default, deserialize_with = "lenient_channels")]
    pub active_channels: Vec<String>,
    /// Design imprint activations by planet.
    #[serde(default, deserialize_with = "lenient_activations")]
    pub design_activation: ActivationMap,
    /// Personality imprint activations by planet.
    #[serde(default, deserialize_with = "lenient_activations")]
    pub personality_activation: ActivationMap,
}

fn lenient_channels<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|value| match value {
            Value::String(token) => token,
            other => {
                debug!(token = %other, "channel entry is not a string");
                other.to_string()
            }
        })
        .collect())
}

fn planet_named(name: &str) -> Option<Planet> {
    let de = <&str as IntoDeserializer<'_, ValueError>>::into_deserializer(name);
    Planet::deserialize(de).ok()
}

fn lenient_activations<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<ActivationMap, D::Error> {
    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|(name, value)| {
            let Some(planet) = planet_named(&name) else {
                debug!(planet = %name, "ignoring activation for unmodelled body");
                return None;
            };
            match value {
                Value::String(token) => Some((planet, token)),
                other => {
                    debug!(?planet, value = %other, "activation is not a string");
                    None
                }
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodygraph_spec::Planet;

    const SAMPLE: &str = r#"{
        "Type": "Manifesting Generator",
        "Profile": "6/2",
        "Strategy": "Sacral",
        "SplitDefinition": "Split",
        "IncarnationCross": "Left Angle Cross of Clarion",
        "ActiveGates": [8, 1, 14, 2, 8],
        "ActiveChannels": ["Key1Key8", "Key2Key14"],
        "DesignActivation": { "Sun": "21.4", "Earth": "48.4" },
        "PersonalityActivation": { "Sun": "51.6", "Earth": "57.6", "NorthNode": "13.2" }
    }"#;

    #[test]
    fn deserializes_collaborator_json() {
        let source: ChartSource = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(source.labels.kind, "Manifesting Generator");
        assert_eq!(source.labels.split_definition, "Split");
        assert_eq!(source.active_gates, [8, 1, 14, 2, 8]);
        assert_eq!(source.active_channels.len(), 2);
        assert_eq!(
            source.personality_activation.get(&Planet::NorthNode).map(String::as_str),
            Some("13.2")
        );
    }

    #[test]
    fn labels_are_required() {
        let missing_profile = r#"{
            "Type": "Projector",
            "Strategy": "Splenic",
            "SplitDefinition": "Single",
            "IncarnationCross": "x"
        }"#;
        assert!(serde_json::from_str::<ChartSource>(missing_profile).is_err());
    }

    #[test]
    fn unknown_planet_is_dropped() {
        let odd = SAMPLE.replace("NorthNode", "Chiron");
        let source: ChartSource = serde_json::from_str(&odd).unwrap();
        assert_eq!(source.personality_activation.len(), 2);
        assert!(source.personality_activation.contains_key(&Planet::Sun));
    }

    #[test]
    fn non_string_activations_are_dropped() {
        let odd = SAMPLE
            .replace(r#""Earth": "48.4""#, r#""Earth": null"#)
            .replace(r#""Sun": "51.6""#, r#""Sun": 51.6"#);
        let source: ChartSource = serde_json::from_str(&odd).unwrap();
        assert_eq!(source.design_activation.get(&Planet::Earth), None);
        assert_eq!(source.personality_activation.get(&Planet::Sun), None);
        assert_eq!(
            source.design_activation.get(&Planet::Sun).map(String::as_str),
            Some("21.4")
        );
    }

    #[test]
    fn non_string_channel_kept_as_text() {
        let odd = SAMPLE.replace(r#""Key2Key14"]"#, r#""Key2Key14", 42, null]"#);
        let source: ChartSource = serde_json::from_str(&odd).unwrap();
        assert_eq!(source.active_channels, ["Key1Key8", "Key2Key14", "42", "null"]);
    }

    #[test]
    fn null_collections_are_empty() {
        let odd = SAMPLE
            .replace(r#"["Key1Key8", "Key2Key14"]"#, "null")
            .replace(r#"{ "Sun": "21.4", "Earth": "48.4" }"#, "null");
        let source: ChartSource = serde_json::from_str(&odd).unwrap();
        assert!(source.active_channels.is_empty());
        assert!(source.design_activation.is_empty());
    }
}
