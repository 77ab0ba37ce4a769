//! Channel token decoding.
//!
//! The chart collaborator names each active channel with an identifier that
//! embeds both gate numbers (`Key1Key8`, `Key34Key57`, ...). The decoder
//! recovers the pair with a two-group regular expression. Anything that does
//! not decode to two distinct in-range gates is a miss: it is logged and
//! reported as `None`, never as an error, so one odd token cannot abort a
//! whole chart.

use bodygraph_spec::{ChartError, Gate};
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Pattern matching the collaborator's channel identifiers.
pub const STANDARD_CHANNEL_PATTERN: &str = r"Key(\d{1,2})Key(\d{1,2})";

/// The two gates joined by a decoded channel, in token order.
///
/// Equality and hashing are order-insensitive: `(1, 8)` and `(8, 1)` are the
/// same channel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GatePair {
    /// First gate named by the token.
    pub first: Gate,
    /// Second gate named by the token.
    pub second: Gate,
}

impl GatePair {
    /// Returns the pair with the lower gate first.
    #[must_use]
    pub fn normalized(self) -> (Gate, Gate) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }

    /// Returns both gates in token order.
    #[must_use]
    pub fn gates(self) -> [Gate; 2] {
        [self.first, self.second]
    }
}

impl PartialEq for GatePair {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for GatePair {}

impl std::hash::Hash for GatePair {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

/// Extracts gate pairs from channel tokens.
///
/// # Example
///
/// ```
/// use bodygraph_chart::ChannelDecoder;
///
/// let decoder = ChannelDecoder::standard().unwrap();
/// let pair = decoder.decode("Key1Key8").unwrap();
/// assert_eq!((pair.first.number(), pair.second.number()), (1, 8));
/// assert!(decoder.decode("Unknown").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ChannelDecoder {
    pattern: Regex,
}

impl ChannelDecoder {
    /// Creates a decoder from a pattern with exactly two capture groups,
    /// each capturing one gate number.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] if the pattern does not compile
    /// or does not have exactly two capture groups.
    pub fn new(pattern: &str) -> Result<Self, ChartError> {
        let pattern = Regex::new(pattern).map_err(|e| {
            ChartError::configuration(format!("invalid channel pattern {pattern:?}: {e}"))
        })?;
        // captures_len counts the implicit whole-match group.
        if pattern.captures_len() != 3 {
            return Err(ChartError::configuration(format!(
                "channel pattern {:?} must have exactly two capture groups, found {}",
                pattern.as_str(),
                pattern.captures_len() - 1
            )));
        }
        Ok(Self { pattern })
    }

    /// Creates a decoder for the collaborator's `Key{a}Key{b}` identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] only if the built-in pattern
    /// fails to compile.
    pub fn standard() -> Result<Self, ChartError> {
        Self::new(STANDARD_CHANNEL_PATTERN)
    }

    /// Returns the source of the pattern in use.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Decodes a channel token into its gate pair.
    ///
    /// Returns `None` when the token does not match, a captured number is not
    /// a gate, or both captures name the same gate.
    #[must_use]
    pub fn decode(&self, token: &str) -> Option<GatePair> {
        let Some(caps) = self.pattern.captures(token) else {
            debug!(token, "channel token does not match pattern");
            return None;
        };
        let gate_at = |i: usize| {
            caps.get(i)
                .and_then(|m| m.as_str().parse::<i64>().ok())
                .and_then(|n| Gate::new(n).ok())
        };
        match (gate_at(1), gate_at(2)) {
            (Some(first), Some(second)) if first != second => Some(GatePair { first, second }),
            (Some(_), Some(_)) => {
                debug!(token, "channel token joins a gate to itself");
                None
            }
            _ => {
                debug!(token, "channel token names a gate outside 1..=64");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder() -> ChannelDecoder {
        ChannelDecoder::standard().unwrap()
    }

    fn numbers(pair: GatePair) -> (u8, u8) {
        (pair.first.number(), pair.second.number())
    }

    #[test]
    fn decodes_standard_tokens() {
        let d = decoder();
        assert_eq!(d.decode("Key1Key8").map(numbers), Some((1, 8)));
        assert_eq!(d.decode("Key34Key57").map(numbers), Some((34, 57)));
    }

    #[test]
    fn keeps_token_order() {
        assert_eq!(decoder().decode("Key8Key1").map(numbers), Some((8, 1)));
    }

    #[test]
    fn reversed_pairs_are_equal() {
        let d = decoder();
        assert_eq!(d.decode("Key1Key8"), d.decode("Key8Key1"));
    }

    #[test]
    fn pattern_is_unanchored() {
        assert_eq!(
            decoder().decode("Channels.Key2Key14").map(numbers),
            Some((2, 14))
        );
    }

    #[test]
    fn misses_are_none() {
        let d = decoder();
        assert_eq!(d.decode(""), None);
        assert_eq!(d.decode("Channel 1-8"), None);
        assert_eq!(d.decode("Key0Key8"), None);
        assert_eq!(d.decode("Key1Key65"), None);
        assert_eq!(d.decode("Key8Key8"), None);
    }

    #[test]
    fn custom_pattern() {
        let d = ChannelDecoder::new(r"^(\d+)-(\d+)$").unwrap();
        assert_eq!(d.decode("10-20").map(numbers), Some((10, 20)));
        assert_eq!(d.decode("Key10Key20"), None);
    }

    #[test]
    fn rejects_bad_patterns() {
        assert!(ChannelDecoder::new(r"Key(\d+").unwrap_err().is_configuration());
        assert!(ChannelDecoder::new(r"Key(\d+)").unwrap_err().is_configuration());
        assert!(ChannelDecoder::new(r"(\d)(\d)(\d)")
            .unwrap_err()
            .is_configuration());
    }
}
