//! Test harness: one HTTP call per scenario, then record and assert.

use std::sync::Arc;

use postcheck_domain::report::{HtmlFragment, escape_html};
use postcheck_domain::{
    Expectation, HttpMethod, NewPost, Operation, PostReplacement, RequestSpec, Resource,
    ResponseSnapshot, Scenario,
};
use serde_json::{Value, json};
use url::Url;

use crate::assertions::AssertionRunner;
use crate::error::{AssertionFailure, HarnessError, HarnessResult};
use crate::ports::{HttpClient, ReportSink};

const CARD_STYLE: &str = "padding:4px;margin:2px;border:1px solid #ccc;border-radius:5px;";
const POST_CARD_STYLE: &str =
    "padding:4px;margin:2px;border:1px solid #ccc;border-radius:5px; background: #e3f2fd;";

/// Drives calls against the mock service and verifies each response.
///
/// Every operation issues exactly one request, records `url` and
/// `status_code` plus operation-specific properties, attaches one HTML
/// fragment, and only then asserts. A failed assertion therefore still leaves
/// a complete report record behind. Connectivity failures are returned
/// before anything is recorded and are never retried.
///
/// # Example
///
/// ```ignore
/// let harness = Harness::new(Arc::new(ReqwestHttpClient::new()?), base_url);
/// let mut record = ReportRecord::new("get_post_1", "GET /posts/1");
/// let snapshot = harness
///     .fetch_by_id(Resource::Posts, 1, &Expectation::status(200), &mut record)
///     .await?;
/// ```
pub struct Harness<C: HttpClient> {
    client: Arc<C>,
    base_url: Url,
    runner: AssertionRunner,
}

impl<C: HttpClient> Harness<C> {
    /// Creates a harness targeting `base_url`.
    pub const fn new(client: Arc<C>, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            runner: AssertionRunner::new(),
        }
    }

    /// Returns the base URL requests are resolved against.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Runs the operation a scenario describes against its expectation.
    ///
    /// # Errors
    ///
    /// See the individual operations.
    pub async fn run<S: ReportSink + ?Sized>(
        &self,
        scenario: &Scenario,
        sink: &mut S,
    ) -> HarnessResult<ResponseSnapshot> {
        let expectation = &scenario.expectation;
        match &scenario.operation {
            Operation::FetchById { resource, id } => {
                self.fetch_by_id(*resource, *id, expectation, sink).await
            }
            Operation::Create { payload } => self.create(payload, expectation, sink).await,
            Operation::Update { payload } => self.update(payload, expectation, sink).await,
            Operation::Delete { id } => self.delete(*id, expectation, sink).await,
        }
    }

    /// `GET /{resource}/{id}`.
    ///
    /// Records the resource's designated field when the body carries it.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Connectivity` if the call fails and
    /// `HarnessError::Assertion` if the response does not match.
    pub async fn fetch_by_id<S: ReportSink + ?Sized>(
        &self,
        resource: Resource,
        id: i64,
        expectation: &Expectation,
        sink: &mut S,
    ) -> HarnessResult<ResponseSnapshot> {
        let request = RequestSpec::new(HttpMethod::Get, &self.base_url, resource.item_path(id));
        let snapshot = self.send(&request).await?;
        record_common(sink, &snapshot);

        let designated = resource.designated_field();
        let fragment = if let Some(value) = snapshot.field(designated) {
            sink.record(designated, value.clone());
            let style = match resource {
                Resource::Posts => POST_CARD_STYLE,
                Resource::Users => CARD_STYLE,
            };
            card(
                style,
                &request.label(),
                &[
                    ("Status", snapshot.status.to_string()),
                    (designated_label(resource), display(Some(value))),
                ],
            )
        } else {
            HtmlFragment::new(format!(
                "<b>{}</b><br>Status: {}",
                escape_html(&request.label()),
                snapshot.status
            ))
        };
        sink.attach(fragment);

        self.verify(&request, expectation, &snapshot)?;
        Ok(snapshot)
    }

    /// `POST /posts` with `{title, body, userId}`.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Connectivity` if the call fails and
    /// `HarnessError::Assertion` if the response does not match.
    pub async fn create<S: ReportSink + ?Sized>(
        &self,
        payload: &NewPost,
        expectation: &Expectation,
        sink: &mut S,
    ) -> HarnessResult<ResponseSnapshot> {
        let request = RequestSpec::new(
            HttpMethod::Post,
            &self.base_url,
            Resource::Posts.collection_path(),
        )
        .with_json(payload)?;
        let snapshot = self.send(&request).await?;
        record_common(sink, &snapshot);
        sink.record("response_id", snapshot.field("id").cloned().unwrap_or(Value::Null));
        sink.record("title_sent", json!(payload.title));

        sink.attach(card(
            CARD_STYLE,
            &request.label(),
            &[
                ("Status", snapshot.status.to_string()),
                ("Title", display(snapshot.field("title"))),
                ("UserId", display(snapshot.field("userId"))),
                ("Response ID", display(snapshot.field("id"))),
            ],
        ));

        self.verify(&request, expectation, &snapshot)?;
        Ok(snapshot)
    }

    /// `PUT /posts/{id}` with `{id, title, body}`.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Connectivity` if the call fails and
    /// `HarnessError::Assertion` if the response does not match.
    pub async fn update<S: ReportSink + ?Sized>(
        &self,
        payload: &PostReplacement,
        expectation: &Expectation,
        sink: &mut S,
    ) -> HarnessResult<ResponseSnapshot> {
        let request = RequestSpec::new(
            HttpMethod::Put,
            &self.base_url,
            Resource::Posts.item_path(payload.id),
        )
        .with_json(payload)?;
        let snapshot = self.send(&request).await?;
        record_common(sink, &snapshot);
        sink.record(
            "updated_title",
            snapshot.field("title").cloned().unwrap_or(Value::Null),
        );

        sink.attach(card(
            CARD_STYLE,
            &request.label(),
            &[
                ("Status", snapshot.status.to_string()),
                ("Title after update", display(snapshot.field("title"))),
            ],
        ));

        self.verify(&request, expectation, &snapshot)?;
        Ok(snapshot)
    }

    /// `DELETE /posts/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Connectivity` if the call fails and
    /// `HarnessError::Assertion` if the response does not match.
    pub async fn delete<S: ReportSink + ?Sized>(
        &self,
        id: i64,
        expectation: &Expectation,
        sink: &mut S,
    ) -> HarnessResult<ResponseSnapshot> {
        let request = RequestSpec::new(HttpMethod::Delete, &self.base_url, Resource::Posts.item_path(id));
        let snapshot = self.send(&request).await?;
        record_common(sink, &snapshot);

        sink.attach(card(
            CARD_STYLE,
            &request.label(),
            &[("Status", snapshot.status.to_string())],
        ));

        self.verify(&request, expectation, &snapshot)?;
        Ok(snapshot)
    }

    async fn send(&self, request: &RequestSpec) -> HarnessResult<ResponseSnapshot> {
        request.parse_url()?;
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        match self.client.execute(request).await {
            Ok(snapshot) => {
                tracing::debug!(
                    status = snapshot.status,
                    elapsed_ms = u64::try_from(snapshot.duration.as_millis()).unwrap_or(u64::MAX),
                    "response received"
                );
                Ok(snapshot)
            }
            Err(e) => {
                tracing::warn!(url = %request.url, error = %e, "request did not complete");
                Err(HarnessError::Connectivity(e))
            }
        }
    }

    fn verify(
        &self,
        request: &RequestSpec,
        expectation: &Expectation,
        snapshot: &ResponseSnapshot,
    ) -> HarnessResult<()> {
        let label = request.label();
        let results = self.runner.run(&label, &expectation.assertions(), snapshot);
        if results.all_passed() {
            Ok(())
        } else {
            Err(AssertionFailure {
                operation: label,
                results,
            }
            .into())
        }
    }
}

fn record_common<S: ReportSink + ?Sized>(sink: &mut S, snapshot: &ResponseSnapshot) {
    sink.record("url", json!(snapshot.url));
    sink.record("status_code", json!(snapshot.status));
}

const fn designated_label(resource: Resource) -> &'static str {
    match resource {
        Resource::Posts => "Title",
        Resource::Users => "Username",
    }
}

/// Renders a body field for display; strings appear without quotes.
fn display(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "null".to_string(),
    }
}

fn card(style: &str, heading: &str, lines: &[(&str, String)]) -> HtmlFragment {
    let mut markup = format!("<div style='{style}'><b>{}</b>", escape_html(heading));
    for (label, value) in lines {
        markup.push_str("<br>");
        markup.push_str(label);
        markup.push_str(": ");
        markup.push_str(&escape_html(value));
    }
    markup.push_str("</div>");
    HtmlFragment::new(markup)
}
