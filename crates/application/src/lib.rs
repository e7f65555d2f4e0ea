//! Postcheck Application - Harness and ports
//!
//! This crate defines the application layer:
//! - Port traits for the HTTP client, the reporting sink and the clock
//! - The test harness, one operation per HTTP verb
//! - The sequential suite runner
//! - Harness error handling

pub mod assertions;
pub mod error;
pub mod harness;
pub mod ports;
pub mod suite;

pub use assertions::AssertionRunner;
pub use error::{AssertionFailure, HarnessError, HarnessResult};
pub use harness::Harness;
pub use ports::{Clock, HttpClient, HttpClientError, NullSink, ReportSink};
pub use suite::SuiteRunner;
