//! Response assertions.
//!
//! This module provides the types used to check a response snapshot against
//! a scenario's expectations and to carry the outcome of each check.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single check to run against a response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assertion {
    /// Check the response status code.
    StatusCode {
        /// Expected status code.
        expected: u16,
    },
    /// Check a top-level body field equals a value exactly.
    FieldEquals {
        /// Field name, e.g. `"title"`.
        field: String,
        /// Expected JSON value.
        expected: Value,
    },
}

impl Assertion {
    /// Status code assertion.
    #[must_use]
    pub const fn status(expected: u16) -> Self {
        Self::StatusCode { expected }
    }

    /// Equality assertion on a top-level body field.
    #[must_use]
    pub fn field_equals(field: &str, expected: impl Into<Value>) -> Self {
        Self::FieldEquals {
            field: field.to_string(),
            expected: expected.into(),
        }
    }

    /// Get a human-readable description of this assertion.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::StatusCode { expected } => format!("Status code = {expected}"),
            Self::FieldEquals { field, expected } => format!("Field {field} equals {expected}"),
        }
    }

    /// Expected value rendered for reports.
    #[must_use]
    pub fn expected_display(&self) -> String {
        match self {
            Self::StatusCode { expected } => expected.to_string(),
            Self::FieldEquals { expected, .. } => expected.to_string(),
        }
    }
}

/// Result of running a single assertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssertionResult {
    /// The assertion that was run.
    pub assertion: Assertion,
    /// Whether the assertion passed.
    pub passed: bool,
    /// Actual value found (for display).
    pub actual: Option<String>,
    /// Error message if failed.
    pub error: Option<String>,
}

impl AssertionResult {
    /// Create a passed result with actual value.
    #[must_use]
    pub fn pass_with_value(assertion: Assertion, actual: impl Into<String>) -> Self {
        Self {
            assertion,
            passed: true,
            actual: Some(actual.into()),
            error: None,
        }
    }

    /// Create a failed result.
    #[must_use]
    pub fn fail(assertion: Assertion, error: impl Into<String>) -> Self {
        Self {
            assertion,
            passed: false,
            actual: None,
            error: Some(error.into()),
        }
    }

    /// Create a failed result with actual value.
    #[must_use]
    pub fn fail_with_value(
        assertion: Assertion,
        actual: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            assertion,
            passed: false,
            actual: Some(actual.into()),
            error: Some(error.into()),
        }
    }
}

/// Results from checking one response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestResults {
    /// Scenario the checks belong to.
    pub scenario: String,
    /// Individual assertion results.
    pub results: Vec<AssertionResult>,
    /// Total number of assertions.
    pub total: usize,
    /// Number of passed assertions.
    pub passed: usize,
    /// Number of failed assertions.
    pub failed: usize,
}

impl TestResults {
    /// Create new test results.
    #[must_use]
    pub fn new(scenario: impl Into<String>, results: Vec<AssertionResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();

        Self {
            scenario: scenario.into(),
            results,
            total,
            passed,
            failed: total - passed,
        }
    }

    /// Check if all assertions passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Failed assertion results only.
    pub fn failures(&self) -> impl Iterator<Item = &AssertionResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}
