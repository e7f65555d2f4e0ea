//! Response snapshot type

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::Value;

/// Status code, headers and parsed body of a single HTTP response.
///
/// Created once per call and discarded after its assertions have run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSnapshot {
    /// Final URL the response was served from
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Status text (e.g., "OK", "Not Found")
    pub status_text: String,
    /// Response headers, names lowercased
    pub headers: BTreeMap<String, String>,
    /// Response body as string
    pub body: String,
    /// Response time
    pub duration: Duration,
    json: Option<Value>,
}

impl ResponseSnapshot {
    /// Creates a snapshot from raw response parts.
    ///
    /// The body is decoded lossily as UTF-8 and parsed as JSON once; a body
    /// that is not JSON simply has no fields.
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        status: u16,
        headers: Vec<(String, String)>,
        body: &[u8],
        duration: Duration,
    ) -> Self {
        let body = String::from_utf8_lossy(body).into_owned();
        let json = serde_json::from_str(&body).ok();
        Self {
            url: url.into(),
            status,
            status_text: String::new(),
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v))
                .collect(),
            body,
            duration,
            json,
        }
    }

    /// Sets the status text (builder pattern).
    #[must_use]
    pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = status_text.into();
        self
    }

    /// Returns the parsed JSON body, if the body was valid JSON.
    #[must_use]
    pub const fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    /// Returns a top-level field of a JSON object body.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.json.as_ref().and_then(|json| json.get(name))
    }

    /// Returns a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn snapshot(status: u16, body: &str) -> ResponseSnapshot {
        ResponseSnapshot::new(
            "https://api.example.com/posts/1",
            status,
            vec![("Content-Type".to_string(), "application/json".to_string())],
            body.as_bytes(),
            Duration::from_millis(12),
        )
    }

    #[test]
    fn test_parses_json_fields() {
        let snap = snapshot(200, r#"{"id": 1, "title": "qui est esse"}"#);
        assert_eq!(snap.field("id"), Some(&json!(1)));
        assert_eq!(snap.field("title"), Some(&json!("qui est esse")));
        assert_eq!(snap.field("missing"), None);
    }

    #[test]
    fn test_non_json_body_has_no_fields() {
        let snap = snapshot(502, "<html>Bad Gateway</html>");
        assert!(snap.json().is_none());
        assert!(snap.field("id").is_none());
    }

    #[test]
    fn test_empty_object_body() {
        let snap = snapshot(404, "{}");
        assert_eq!(snap.json(), Some(&json!({})));
        assert!(snap.field("id").is_none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let snap = snapshot(200, "{}");
        assert_eq!(snap.header("content-type"), Some("application/json"));
        assert_eq!(snap.header("CONTENT-TYPE"), Some("application/json"));
    }
}
