//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the harness and external systems.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod clock;
mod http_client;
mod report_sink;

pub use clock::Clock;
pub use http_client::{HttpClient, HttpClientError};
pub use report_sink::{NullSink, ReportSink};
