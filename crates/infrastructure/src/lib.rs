//! Postcheck Infrastructure - Adapters and implementations
//!
//! This crate provides the concrete pieces behind the application ports:
//! the reqwest HTTP client, the system clock, configuration loading and the
//! report writers.

pub mod adapters;
pub mod config;
pub mod report;

pub use adapters::{ReqwestHttpClient, SystemClock};
pub use config::{BASE_URL_ENV, ConfigError, DEFAULT_BASE_URL, HarnessConfig};
pub use report::{ReportError, render_html, to_json_stable, write_html_report, write_json_report};
