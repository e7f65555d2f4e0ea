//! Harness error types

use std::fmt;

use postcheck_domain::{DomainError, TestResults};
use thiserror::Error;

use crate::ports::HttpClientError;

/// Expected values that did not match a response snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionFailure {
    /// Operation label, e.g. `GET /posts/1`.
    pub operation: String,
    /// Every assertion that ran, passed or not.
    pub results: TestResults,
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} assertions failed",
            self.operation, self.results.failed, self.results.total
        )?;
        for failure in self.results.failures() {
            write!(
                f,
                "; {} (expected {}, got {})",
                failure.assertion.description(),
                failure.assertion.expected_display(),
                failure.actual.as_deref().unwrap_or("nothing"),
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for AssertionFailure {}

/// Errors a harness operation can end with.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The call could not reach the service.
    #[error("connectivity error: {0}")]
    Connectivity(#[from] HttpClientError),

    /// The response did not match the expectation.
    #[error("assertion failed: {0}")]
    Assertion(#[from] AssertionFailure),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] DomainError),
}

impl HarnessError {
    /// Returns true for assertion failures.
    #[must_use]
    pub const fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }

    /// Returns true for connectivity failures.
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }
}

/// Result type alias for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;
    use postcheck_domain::{Assertion, AssertionResult};

    #[test]
    fn test_failure_message_shows_both_values() {
        let failure = AssertionFailure {
            operation: "GET /posts/1".to_string(),
            results: TestResults::new(
                "GET /posts/1",
                vec![
                    AssertionResult::pass_with_value(Assertion::status(200), "200"),
                    AssertionResult::fail_with_value(
                        Assertion::field_equals("title", "qui est esse"),
                        "\"other\"",
                        "mismatch",
                    ),
                ],
            ),
        };

        let message = HarnessError::from(failure).to_string();
        assert!(message.contains("1 of 2 assertions failed"));
        assert!(message.contains(r#"expected "qui est esse""#));
        assert!(message.contains(r#"got "other""#));
    }

    #[test]
    fn test_error_kinds() {
        let err = HarnessError::from(HttpClientError::Timeout { timeout_ms: 10 });
        assert!(err.is_connectivity());
        assert!(!err.is_assertion());
        assert_eq!(err.to_string(), "connectivity error: request timed out after 10ms");
    }
}
