//! Assertion runner.
//!
//! Checks assertions against a response snapshot and produces test results.

use postcheck_domain::response::ResponseSnapshot;
use postcheck_domain::testing::{Assertion, AssertionResult, TestResults};
use serde_json::Value;

/// Runs assertions against response snapshots.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssertionRunner;

impl AssertionRunner {
    /// Create a new assertion runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run every assertion against a snapshot. All assertions run even after
    /// a failure so the report shows the full picture.
    #[must_use]
    pub fn run(
        &self,
        label: &str,
        assertions: &[Assertion],
        snapshot: &ResponseSnapshot,
    ) -> TestResults {
        let results = assertions
            .iter()
            .map(|assertion| self.run_assertion(assertion, snapshot))
            .collect();
        TestResults::new(label, results)
    }

    /// Run a single assertion against a snapshot.
    #[must_use]
    pub fn run_assertion(
        &self,
        assertion: &Assertion,
        snapshot: &ResponseSnapshot,
    ) -> AssertionResult {
        match assertion {
            Assertion::StatusCode { expected } => {
                Self::check_status_code(assertion, snapshot, *expected)
            }
            Assertion::FieldEquals { field, expected } => {
                Self::check_field(assertion, snapshot, field, expected)
            }
        }
    }

    fn check_status_code(
        assertion: &Assertion,
        snapshot: &ResponseSnapshot,
        expected: u16,
    ) -> AssertionResult {
        let actual = snapshot.status;
        if actual == expected {
            AssertionResult::pass_with_value(assertion.clone(), actual.to_string())
        } else {
            AssertionResult::fail_with_value(
                assertion.clone(),
                actual.to_string(),
                format!("Expected status {expected}, got {actual}"),
            )
        }
    }

    fn check_field(
        assertion: &Assertion,
        snapshot: &ResponseSnapshot,
        field: &str,
        expected: &Value,
    ) -> AssertionResult {
        if snapshot.json().is_none() {
            let content_type = snapshot.header("content-type").unwrap_or("none");
            return AssertionResult::fail(
                assertion.clone(),
                format!("Body is not valid JSON (content-type: {content_type})"),
            );
        }

        match snapshot.field(field) {
            Some(value) if value == expected => {
                AssertionResult::pass_with_value(assertion.clone(), value.to_string())
            }
            Some(value) => AssertionResult::fail_with_value(
                assertion.clone(),
                value.to_string(),
                format!("Field '{field}' value mismatch: expected {expected}, got {value}"),
            ),
            None => AssertionResult::fail(assertion.clone(), format!("Field '{field}' not found")),
        }
    }
}
