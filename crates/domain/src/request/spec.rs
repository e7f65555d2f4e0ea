//! Request specification type

use serde::{Deserialize, Serialize};
use url::Url;

use super::HttpMethod;
use crate::error::{DomainError, DomainResult};

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Complete specification for one HTTP call issued by the harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL
    pub url: String,
    /// Path relative to the base URL, used for display (e.g. `/posts/1`)
    pub path: String,
    /// JSON body, sent only for methods that carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl RequestSpec {
    /// Creates a request for `path` resolved against `base_url`.
    ///
    /// `path` must start with `/`. A trailing slash on the base is ignored, so
    /// `https://host/api/` and `https://host/api` resolve identically.
    #[must_use]
    pub fn new(method: HttpMethod, base_url: &Url, path: impl Into<String>) -> Self {
        let path = path.into();
        let url = format!("{}{}", base_url.as_str().trim_end_matches('/'), path);
        Self {
            method,
            url,
            path,
            body: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Attaches a JSON body (builder pattern).
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn with_json<T: Serialize>(mut self, body: &T) -> DomainResult<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Validates the URL and returns the parsed version if valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed.
    pub fn parse_url(&self) -> DomainResult<Url> {
        Url::parse(&self.url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.url)))
    }

    /// Short label used in logs and report fragments, e.g. `GET /posts/1`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_url_join_ignores_trailing_slash() {
        let a = RequestSpec::new(HttpMethod::Get, &base("https://api.example.com"), "/posts/1");
        let b = RequestSpec::new(HttpMethod::Get, &base("https://api.example.com/"), "/posts/1");
        assert_eq!(a.url, "https://api.example.com/posts/1");
        assert_eq!(a.url, b.url);
    }

    #[test]
    fn test_url_join_keeps_base_path() {
        let req = RequestSpec::new(HttpMethod::Get, &base("http://127.0.0.1:8080/api/"), "/users/10");
        assert_eq!(req.url, "http://127.0.0.1:8080/api/users/10");
    }

    #[test]
    fn test_negative_id_path_is_preserved() {
        let req = RequestSpec::new(HttpMethod::Delete, &base("https://api.example.com"), "/posts/-1");
        assert_eq!(req.url, "https://api.example.com/posts/-1");
        assert!(req.parse_url().is_ok());
    }

    #[test]
    fn test_with_json() {
        let req = RequestSpec::new(HttpMethod::Post, &base("https://api.example.com"), "/posts")
            .with_json(&json!({"title": "t"}))
            .unwrap();
        assert_eq!(req.body, Some(json!({"title": "t"})));
        assert_eq!(req.label(), "POST /posts");
        assert_eq!(req.timeout_ms, DEFAULT_TIMEOUT_MS);
    }
}
