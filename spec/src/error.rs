//! Error type shared by the static model and the chart engine.

use thiserror::Error;

/// Fatal errors raised while building or querying the bodygraph model.
///
/// Recoverable gaps (an undecodable channel token, a missing activation)
/// are not errors: they surface as `None` values and flags on the chart
/// result instead.
///
/// # Example
///
/// ```
/// use bodygraph_spec::ChartError;
///
/// let err = ChartError::GateOutOfRange { gate: 65 };
/// assert!(err.to_string().contains("65"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// A table, pattern or configuration file is malformed or incomplete.
    #[error("configuration error: {reason}")]
    Configuration {
        /// What was wrong with the configuration.
        reason: String,
    },

    /// A gate number outside 1..=64 was queried or supplied.
    #[error("gate {gate} out of range (expected 1..=64)")]
    GateOutOfRange {
        /// The offending gate number.
        gate: i64,
    },
}

impl ChartError {
    /// Creates a [`ChartError::Configuration`] from any displayable reason.
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
