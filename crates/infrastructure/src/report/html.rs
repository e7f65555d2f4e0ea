//! HTML report artifact.

use std::fmt::Write as _;
use std::path::Path;

use postcheck_domain::{ReportRecord, ScenarioOutcome, SuiteReport, escape_html};
use serde_json::Value;

use super::ReportError;

const STYLE: &str = "body{font-family:sans-serif;margin:1.5em}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ddd;padding:6px;vertical-align:top;text-align:left}\
th{background:#f5f5f5}\
tr.passed td.outcome{color:#2e7d32}\
tr.failed td.outcome{color:#c62828}\
tr.errored td.outcome{color:#ef6c00}\
ul{margin:0;padding-left:1.2em}";

/// Renders a suite report as a standalone HTML page.
///
/// Recorded property values, names and failure details are escaped;
/// attached fragments are embedded verbatim.
#[must_use]
pub fn render_html(report: &SuiteReport) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>postcheck report</title>\n");
    let _ = writeln!(html, "<style>{STYLE}</style>\n</head>\n<body>");
    html.push_str("<h1>postcheck report</h1>\n");
    let _ = writeln!(
        html,
        "<p>Run <code>{}</code> against <code>{}</code></p>",
        report.run_id,
        escape_html(&report.base_url)
    );
    let _ = writeln!(
        html,
        "<p>Started {} &ndash; finished {}</p>",
        report.started_at.to_rfc3339(),
        report.finished_at.to_rfc3339()
    );
    let _ = writeln!(
        html,
        "<p class=\"summary\">{} scenarios: {} passed, {} failed, {} errored ({:.1}%)</p>",
        report.total,
        report.passed,
        report.failed,
        report.errored,
        report.pass_rate()
    );

    html.push_str(
        "<table>\n<thead><tr><th>Scenario</th><th>Operation</th><th>Outcome</th>\
         <th>Duration</th><th>Properties</th><th>Details</th></tr></thead>\n<tbody>\n",
    );
    for record in &report.records {
        render_row(&mut html, record);
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

fn render_row(html: &mut String, record: &ReportRecord) {
    let label = record.outcome.label();
    let _ = write!(
        html,
        "<tr class=\"{label}\"><td>{}</td><td><code>{}</code></td><td class=\"outcome\">{label}</td><td>{} ms</td><td>",
        escape_html(&record.scenario),
        escape_html(&record.operation),
        record.duration_ms,
    );

    if !record.properties.is_empty() {
        html.push_str("<ul>");
        for (key, value) in &record.properties {
            let _ = write!(
                html,
                "<li><b>{}</b>: {}</li>",
                escape_html(key),
                escape_html(&property_text(value))
            );
        }
        html.push_str("</ul>");
    }
    html.push_str("</td><td>");

    for fragment in &record.fragments {
        html.push_str(fragment.as_str());
    }
    match &record.outcome {
        ScenarioOutcome::Failed { failures } => {
            html.push_str("<ul class=\"failures\">");
            for failure in failures {
                let _ = write!(
                    html,
                    "<li>{}: expected {}, got {}</li>",
                    escape_html(&failure.assertion.description()),
                    escape_html(&failure.assertion.expected_display()),
                    escape_html(failure.actual.as_deref().unwrap_or("nothing")),
                );
            }
            html.push_str("</ul>");
        }
        ScenarioOutcome::Errored { message } => {
            let _ = write!(html, "<p class=\"error\">{}</p>", escape_html(message));
        }
        ScenarioOutcome::Passed | ScenarioOutcome::Pending => {}
    }
    html.push_str("</td></tr>\n");
}

fn property_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Writes a suite report as HTML, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if any file operation fails.
pub async fn write_html_report(report: &SuiteReport, path: &Path) -> Result<(), ReportError> {
    super::write_artifact(path, render_html(report).as_bytes()).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use postcheck_domain::{Assertion, AssertionResult, HtmlFragment};
    use serde_json::json;

    fn report() -> SuiteReport {
        let mut passed = ReportRecord::new("get_post_2", "GET /posts/2");
        passed.outcome = ScenarioOutcome::Passed;
        passed.properties.push(("title".to_string(), json!("qui <est> esse")));
        passed
            .fragments
            .push(HtmlFragment::new("<b>GET /posts/2</b><br>Status: 200"));

        let mut failed = ReportRecord::new("get_post_1", "GET /posts/1");
        failed.outcome = ScenarioOutcome::Failed {
            failures: vec![AssertionResult::fail_with_value(
                Assertion::status(200),
                "404",
                "Expected status 200, got 404",
            )],
        };

        let mut errored = ReportRecord::new("delete_post_1", "DELETE /posts/1");
        errored.outcome = ScenarioOutcome::Errored {
            message: "connection refused by localhost:1".to_string(),
        };

        let now = Utc::now();
        SuiteReport::new("http://localhost:1/", now, now, vec![passed, failed, errored])
    }

    #[test]
    fn test_render_summary_and_rows() {
        let html = render_html(&report());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("3 scenarios: 1 passed, 1 failed, 1 errored (33.3%)"));
        assert!(html.contains("<tr class=\"passed\">"));
        assert!(html.contains("<tr class=\"failed\">"));
        assert!(html.contains("<tr class=\"errored\">"));
    }

    #[test]
    fn test_properties_escaped_fragments_verbatim() {
        let html = render_html(&report());
        assert!(html.contains("<li><b>title</b>: qui &lt;est&gt; esse</li>"));
        assert!(html.contains("<b>GET /posts/2</b><br>Status: 200"));
    }

    #[test]
    fn test_failures_show_expected_and_actual() {
        let html = render_html(&report());
        assert!(html.contains("<li>Status code = 200: expected 200, got 404</li>"));
        assert!(html.contains("<p class=\"error\">connection refused by localhost:1</p>"));
    }

    #[tokio::test]
    async fn test_write_html_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        write_html_report(&report(), &path).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("postcheck report"));
    }
}
