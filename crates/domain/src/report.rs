//! Report records produced while running scenarios.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::testing::AssertionResult;

/// An inline HTML snippet attached to a scenario's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HtmlFragment(String);

impl HtmlFragment {
    /// Wraps markup that is already safe to embed.
    #[must_use]
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Returns the markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Escapes text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// How a scenario ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioOutcome {
    /// Still running; no outcome recorded yet.
    #[default]
    Pending,
    /// Every assertion matched.
    Passed,
    /// At least one assertion did not match.
    Failed {
        /// The failed assertions, with expected and actual values.
        failures: Vec<AssertionResult>,
    },
    /// The call could not complete.
    Errored {
        /// Error description.
        message: String,
    },
}

impl ScenarioOutcome {
    /// Short label for summaries.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Passed => "passed",
            Self::Failed { .. } => "failed",
            Self::Errored { .. } => "errored",
        }
    }
}

/// Properties and fragments recorded for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReportRecord {
    /// Scenario name.
    pub scenario: String,
    /// Operation label, e.g. `DELETE /posts/-1`.
    pub operation: String,
    /// Key/value properties in recording order.
    pub properties: Vec<(String, Value)>,
    /// Attached HTML fragments in recording order.
    pub fragments: Vec<HtmlFragment>,
    /// How the scenario ended.
    pub outcome: ScenarioOutcome,
    /// Wall-clock duration of the scenario in milliseconds.
    pub duration_ms: u64,
}

impl ReportRecord {
    /// Creates an empty record for a scenario.
    #[must_use]
    pub fn new(scenario: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            operation: operation.into(),
            ..Self::default()
        }
    }

    /// Returns the first recorded value for `key`.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

/// All records of one suite run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Unique run identifier.
    pub run_id: Uuid,
    /// Base URL the suite ran against.
    pub base_url: String,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub finished_at: DateTime<Utc>,
    /// One record per scenario, in execution order.
    pub records: Vec<ReportRecord>,
    /// Number of scenarios.
    pub total: usize,
    /// Scenarios that passed.
    pub passed: usize,
    /// Scenarios with assertion failures.
    pub failed: usize,
    /// Scenarios that could not reach the service.
    pub errored: usize,
}

impl SuiteReport {
    /// Builds a report and computes its totals.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        records: Vec<ReportRecord>,
    ) -> Self {
        let count = |label: &str| records.iter().filter(|r| r.outcome.label() == label).count();
        let passed = count("passed");
        let failed = count("failed");
        let errored = count("errored");

        Self {
            run_id: Uuid::now_v7(),
            base_url: base_url.into(),
            started_at,
            finished_at,
            total: records.len(),
            records,
            passed,
            failed,
            errored,
        }
    }

    /// Check if every scenario passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Get pass rate as percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }
}
