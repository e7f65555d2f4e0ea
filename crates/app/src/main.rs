//! postcheck - Main Entry Point
//!
//! Runs the built-in scenario catalog against the configured service, one
//! scenario at a time, and writes JSON and HTML reports.

use std::path::PathBuf;
use std::sync::Arc;

use postcheck_application::{Harness, SuiteRunner};
use postcheck_domain::catalog;
use postcheck_infrastructure::{
    HarnessConfig, ReqwestHttpClient, SystemClock, write_html_report, write_json_report,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Directory the reports are written to.
const REPORT_DIR_ENV: &str = "POSTCHECK_REPORT_DIR";
const DEFAULT_REPORT_DIR: &str = "target/postcheck";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HarnessConfig::from_env()?;
    let report_dir = std::env::var(REPORT_DIR_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_REPORT_DIR), PathBuf::from);

    tracing::info!(
        base_url = %config.base_url(),
        "Starting postcheck v{}",
        env!("CARGO_PKG_VERSION")
    );

    let harness = Harness::new(Arc::new(ReqwestHttpClient::new()?), config.base_url().clone());
    let runner = SuiteRunner::new(harness, Arc::new(SystemClock::new()));
    let report = runner.run(&catalog()).await;

    let json_path = report_dir.join("report.json");
    let html_path = report_dir.join("report.html");
    write_json_report(&report, &json_path).await?;
    write_html_report(&report, &html_path).await?;
    tracing::info!(
        json = %json_path.display(),
        html = %html_path.display(),
        "reports written"
    );

    if report.all_passed() {
        Ok(())
    } else {
        Err(format!(
            "{} of {} scenarios did not pass ({} failed, {} errored)",
            report.total - report.passed,
            report.total,
            report.failed,
            report.errored
        )
        .into())
    }
}
