//! Sequential scenario runner.

use std::sync::Arc;
use std::time::Instant;

use postcheck_domain::report::{ReportRecord, ScenarioOutcome, SuiteReport};
use postcheck_domain::scenario::Scenario;

use crate::error::HarnessError;
use crate::harness::Harness;
use crate::ports::{Clock, HttpClient};

/// Runs scenarios one at a time and collects a report record for each.
///
/// Each scenario runs to completion before the next begins. A failure of any
/// kind ends only the scenario it happened in.
pub struct SuiteRunner<C: HttpClient> {
    harness: Harness<C>,
    clock: Arc<dyn Clock>,
}

impl<C: HttpClient> SuiteRunner<C> {
    /// Creates a runner around a harness.
    pub fn new(harness: Harness<C>, clock: Arc<dyn Clock>) -> Self {
        Self { harness, clock }
    }

    /// Runs every scenario in order.
    pub async fn run(&self, scenarios: &[Scenario]) -> SuiteReport {
        let started_at = self.clock.now();
        tracing::info!(
            scenarios = scenarios.len(),
            base_url = %self.harness.base_url(),
            "starting suite"
        );

        let mut records = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            records.push(self.run_scenario(scenario).await);
        }

        let report = SuiteReport::new(
            self.harness.base_url().as_str(),
            started_at,
            self.clock.now(),
            records,
        );
        tracing::info!(
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            errored = report.errored,
            "suite finished"
        );
        report
    }

    /// Runs one scenario and returns its finished report record.
    pub async fn run_scenario(&self, scenario: &Scenario) -> ReportRecord {
        let mut record = ReportRecord::new(&scenario.name, scenario.operation.to_string());
        let start = Instant::now();

        let outcome = match self.harness.run(scenario, &mut record).await {
            Ok(_) => ScenarioOutcome::Passed,
            Err(HarnessError::Assertion(failure)) => ScenarioOutcome::Failed {
                failures: failure.results.failures().cloned().collect(),
            },
            Err(e @ (HarnessError::Connectivity(_) | HarnessError::InvalidRequest(_))) => {
                ScenarioOutcome::Errored {
                    message: e.to_string(),
                }
            }
        };

        record.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::info!(
            scenario = %scenario.name,
            operation = %record.operation,
            outcome = outcome.label(),
            duration_ms = record.duration_ms,
            "scenario finished"
        );
        record.outcome = outcome;
        record
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::HttpClientError;
    use chrono::{DateTime, TimeZone, Utc};
    use postcheck_domain::{NewPost, RequestSpec, Resource, ResponseSnapshot};
    use pretty_assertions::assert_eq;
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;
    use url::Url;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    /// Answers by path: `/posts/1` is served, `/users/...` is unreachable,
    /// everything else is a 404 with an empty object.
    struct RoutingClient;

    impl HttpClient for RoutingClient {
        fn execute(
            &self,
            request: &RequestSpec,
        ) -> Pin<Box<dyn Future<Output = Result<ResponseSnapshot, HttpClientError>> + Send + '_>>
        {
            let result = if request.path.starts_with("/users") {
                Err(HttpClientError::ConnectionFailed("network unreachable".to_string()))
            } else {
                let (status, body) = if request.path == "/posts/1" {
                    (200, r#"{"id": 1, "title": "first"}"#)
                } else {
                    (404, "{}")
                };
                Ok(ResponseSnapshot::new(
                    request.url.clone(),
                    status,
                    Vec::new(),
                    body.as_bytes(),
                    Duration::from_millis(1),
                ))
            };
            Box::pin(async move { result })
        }
    }

    fn runner() -> SuiteRunner<RoutingClient> {
        let harness = Harness::new(
            Arc::new(RoutingClient),
            Url::parse("http://mock.test").unwrap(),
        );
        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()));
        SuiteRunner::new(harness, clock)
    }

    #[tokio::test]
    async fn test_outcomes_are_isolated_per_scenario() {
        let scenarios = vec![
            Scenario::fetch_found("found", Resource::Posts, 1, "first"),
            Scenario::fetch_found("wrong_title", Resource::Posts, 1, "second"),
            Scenario::fetch_found("unreachable", Resource::Users, 1, "Bret"),
            Scenario::fetch("missing", Resource::Posts, 9999, 404),
            Scenario::create("create_gets_404", NewPost::new("t", "b", 1), 201),
        ];

        let report = runner().run(&scenarios).await;

        let labels: Vec<_> = report.records.iter().map(|r| r.outcome.label()).collect();
        assert_eq!(labels, vec!["passed", "failed", "errored", "passed", "failed"]);
        assert_eq!(report.total, 5);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 2);
        assert_eq!(report.errored, 1);
        assert_eq!(report.base_url, "http://mock.test/");
    }

    #[tokio::test]
    async fn test_failed_record_keeps_expected_and_actual() {
        let scenario = Scenario::fetch_found("wrong_title", Resource::Posts, 1, "second");

        let record = runner().run_scenario(&scenario).await;

        assert_eq!(record.operation, "GET /posts/1");
        let ScenarioOutcome::Failed { failures } = &record.outcome else {
            unreachable!("scenario should fail: {:?}", record.outcome);
        };
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].assertion.expected_display(), r#""second""#);
        assert_eq!(failures[0].actual.as_deref(), Some(r#""first""#));
        assert_eq!(record.property("title"), Some(&serde_json::json!("first")));
    }

    #[tokio::test]
    async fn test_errored_record_carries_message() {
        let scenario = Scenario::fetch_found("unreachable", Resource::Users, 10, "Moriah.Stanton");

        let record = runner().run_scenario(&scenario).await;

        assert_eq!(
            record.outcome,
            ScenarioOutcome::Errored {
                message: "connectivity error: connection failed: network unreachable".to_string()
            }
        );
        assert!(record.properties.is_empty());
    }

    #[tokio::test]
    async fn test_report_uses_clock() {
        let report = runner().run(&[]).await;
        assert_eq!(report.started_at, Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(report.started_at, report.finished_at);
        assert!(report.all_passed());
    }
}
