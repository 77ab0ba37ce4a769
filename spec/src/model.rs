//! Core bodygraph model types.
//!
//! Gates, centers, planets and imprints are closed vocabularies: nothing in
//! this workspace creates new ones at runtime. They are `Copy` values and are
//! referenced, never owned, by the tables and results built on top of them.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::ChartError;

/// Number of gates in the wheel.
pub const GATE_COUNT: usize = 64;

/// Number of energy centers.
pub const CENTER_COUNT: usize = 9;

/// A gate number in 1..=64.
///
/// The only way to obtain a `Gate` is through [`Gate::new`] (or the
/// iterators built on it), so every `Gate` in the system is in range.
///
/// # Example
///
/// ```
/// use bodygraph_spec::Gate;
///
/// let g = Gate::new(51).unwrap();
/// assert_eq!(g.number(), 51);
/// assert!(Gate::new(0).is_err());
/// assert!(Gate::new(65).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "u8")
)]
pub struct Gate(u8);

impl Gate {
    /// The lowest gate.
    pub const MIN: Self = Self(1);

    /// The highest gate.
    pub const MAX: Self = Self(64);

    /// Creates a gate from a raw number.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::GateOutOfRange`] if `number` is not in 1..=64.
    pub fn new(number: i64) -> Result<Self, ChartError> {
        match u8::try_from(number) {
            Ok(n) if (1..=GATE_COUNT as u8).contains(&n) => Ok(Self(n)),
            _ => Err(ChartError::GateOutOfRange { gate: number }),
        }
    }

    /// Returns the gate number.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position of this gate in a 64-slot array.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterates over all 64 gates in ascending order.
    pub fn all() -> impl Iterator<Item = Gate> {
        (1..=GATE_COUNT as u8).map(Self)
    }
}

impl TryFrom<i64> for Gate {
    type Error = ChartError;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<Gate> for u8 {
    fn from(gate: Gate) -> Self {
        gate.0
    }
}

impl fmt::Debug for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gate({})", self.0)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the nine energy centers.
///
/// Ordering is lexicographic by [`Center::name`], so ordered collections of
/// centers present the same way regardless of how they were filled.
///
/// # Example
///
/// ```
/// use bodygraph_spec::Center;
///
/// let c: Center = "Solar Plexus".parse().unwrap();
/// assert_eq!(c, Center::SolarPlexus);
/// assert!(Center::Ajna < Center::Head);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Center {
    /// Head (crown) center.
    Head,
    /// Ajna (mind) center.
    Ajna,
    /// Throat center.
    Throat,
    /// G (identity) center.
    G,
    /// Ego (heart) center.
    Ego,
    /// Solar Plexus (emotional) center.
    #[cfg_attr(feature = "serde", serde(rename = "Solar Plexus"))]
    SolarPlexus,
    /// Sacral center.
    Sacral,
    /// Spleen center.
    Spleen,
    /// Root center.
    Root,
}

impl Center {
    /// All centers in canonical (top-to-bottom) order.
    pub const ALL: [Self; CENTER_COUNT] = [
        Self::Head,
        Self::Ajna,
        Self::Throat,
        Self::G,
        Self::Ego,
        Self::SolarPlexus,
        Self::Sacral,
        Self::Spleen,
        Self::Root,
    ];

    /// Returns the presentation label of this center.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Ajna => "Ajna",
            Self::Throat => "Throat",
            Self::G => "G",
            Self::Ego => "Ego",
            Self::SolarPlexus => "Solar Plexus",
            Self::Sacral => "Sacral",
            Self::Spleen => "Spleen",
            Self::Root => "Root",
        }
    }
}

impl PartialOrd for Center {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Center {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl FromStr for Center {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ChartError::configuration(format!("unknown center name {s:?}")))
    }
}

impl fmt::Debug for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A body whose position produces an activation.
///
/// Declaration order is the conventional presentation order, which is also
/// the `Ord` order used when planets key an ordered map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Planet {
    /// Sun.
    Sun,
    /// Earth (always opposite the Sun).
    Earth,
    /// North lunar node.
    NorthNode,
    /// South lunar node.
    SouthNode,
    /// Moon.
    Moon,
    /// Mercury.
    Mercury,
    /// Venus.
    Venus,
    /// Mars.
    Mars,
    /// Jupiter.
    Jupiter,
    /// Saturn.
    Saturn,
    /// Uranus.
    Uranus,
    /// Neptune.
    Neptune,
    /// Pluto.
    Pluto,
}

impl Planet {
    /// All planets in presentation order.
    pub const ALL: [Self; 13] = [
        Self::Sun,
        Self::Earth,
        Self::NorthNode,
        Self::SouthNode,
        Self::Moon,
        Self::Mercury,
        Self::Venus,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
        Self::Pluto,
    ];
}

/// Which of the two imprints an activation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Imprint {
    /// Conscious imprint, computed at the birth moment.
    Personality,
    /// Unconscious imprint, computed roughly 88 solar degrees before birth.
    Design,
}
