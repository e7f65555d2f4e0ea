//! HTTP Client port

use std::future::Future;
use std::pin::Pin;

use postcheck_domain::{request::RequestSpec, response::ResponseSnapshot};
use thiserror::Error;

/// Errors raised when a call cannot complete.
///
/// These are connectivity failures: the service was never reached, or the
/// exchange broke off. A response with an unexpected status is not an error
/// at this level.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// DNS resolution failed.
    #[error("could not resolve host '{host}': {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying error message.
        message: String,
    },

    /// The server refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection could not be established for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// TLS negotiation failed.
    #[error("TLS error: {0}")]
    TlsError(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Configured limit.
        max: usize,
    },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    BodyRead(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, so the harness can
/// be driven by reqwest in production and by canned responses in tests.
pub trait HttpClient: Send + Sync {
    /// Executes a request and returns a snapshot of the response.
    ///
    /// Any status code, including 4xx and 5xx, is a successful call.
    ///
    /// # Errors
    ///
    /// Returns an error if the call itself cannot complete.
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSnapshot, HttpClientError>> + Send + '_>>;
}
