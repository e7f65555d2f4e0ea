//! JSON report artifact.

use std::path::Path;

use postcheck_domain::SuiteReport;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::ReportError;

/// Serializes a value to deterministic JSON.
///
/// Output format:
/// - 2-space indentation
/// - Trailing newline
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, ReportError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Writes a suite report as JSON, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization or any file operation fails.
pub async fn write_json_report(report: &SuiteReport, path: &Path) -> Result<(), ReportError> {
    let json = to_json_stable(report)?;
    super::write_artifact(path, json.as_bytes()).await
}
