//! Reporting sink port

use postcheck_domain::report::{HtmlFragment, ReportRecord};
use serde_json::Value;

/// Receives metadata for the currently executing scenario.
///
/// Both operations are fire-and-forget.
pub trait ReportSink {
    /// Records a structured key/value property.
    fn record(&mut self, key: &str, value: Value);

    /// Attaches an HTML fragment.
    fn attach(&mut self, fragment: HtmlFragment);
}

impl ReportSink for ReportRecord {
    fn record(&mut self, key: &str, value: Value) {
        self.properties.push((key.to_string(), value));
    }

    fn attach(&mut self, fragment: HtmlFragment) {
        self.fragments.push(fragment);
    }
}

/// A sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn record(&mut self, _key: &str, _value: Value) {}

    fn attach(&mut self, _fragment: HtmlFragment) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_record_collects_in_order() {
        let mut record = ReportRecord::new("delete_post_1", "DELETE /posts/1");
        record.record("url", json!("https://api.example.com/posts/1"));
        record.record("status_code", json!(200));
        record.attach(HtmlFragment::new("<b>DELETE /posts/1</b>"));

        assert_eq!(
            record.properties,
            vec![
                ("url".to_string(), json!("https://api.example.com/posts/1")),
                ("status_code".to_string(), json!(200)),
            ]
        );
        assert_eq!(record.fragments.len(), 1);
    }
}
