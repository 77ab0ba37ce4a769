//! Conformance report types: check results, severity levels, and aggregation.

/// Severity of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check found something worth attention that does not block.
    Warning,
    /// The check failed.
    Failure,
}

/// Outcome of one conformance check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Identifier of the validator, e.g. `"table/completeness"`.
    pub validator: String,
    /// One-line summary.
    pub message: String,
    /// Severity of the outcome.
    pub severity: Severity,
    /// Offending gates, channels or files, one per line.
    pub details: Vec<String>,
}

impl CheckResult {
    fn with(
        validator: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        details: Vec<String>,
    ) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details,
        }
    }

    /// A passing check.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(validator, message, Severity::Pass, Vec::new())
    }

    /// A failed check.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(validator, message, Severity::Failure, Vec::new())
    }

    /// A failed check listing what failed.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::with(validator, message, Severity::Failure, details)
    }

    /// A non-blocking warning.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(validator, message, Severity::Warning, Vec::new())
    }

    /// Passes if `details` is empty, otherwise fails listing them.
    pub fn from_details(
        validator: impl Into<String>,
        pass_message: impl Into<String>,
        fail_message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        if details.is_empty() {
            Self::pass(validator, pass_message)
        } else {
            Self::fail_with_details(validator, fail_message, details)
        }
    }

    /// True if this result is a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// All results from a conformance run.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// Results in the order the validators produced them.
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Appends every result of another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Number of results with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.results
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }

    /// Number of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// True if nothing failed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}
