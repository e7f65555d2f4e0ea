//! Human-readable test artifacts.
//!
//! A finished [`SuiteReport`](postcheck_domain::SuiteReport) is written as a
//! standalone HTML page and as deterministic JSON.

mod html;
mod json;

use std::path::Path;

use tokio::fs;

pub use html::{render_html, write_html_report};
pub use json::{to_json_stable, write_json_report};

/// Error type for report writing.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

async fn write_artifact(path: &Path, contents: &[u8]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, contents).await?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(())
}
