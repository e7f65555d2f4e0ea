//! Postcheck Domain - Core types
//!
//! This crate defines the domain model for the postcheck API test harness:
//! requests, response snapshots, scenarios, assertions and report records.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod report;
pub mod request;
pub mod resource;
pub mod response;
pub mod scenario;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use report::{HtmlFragment, ReportRecord, ScenarioOutcome, SuiteReport, escape_html};
pub use request::{HttpMethod, RequestSpec};
pub use resource::{NewPost, PostReplacement, Resource};
pub use response::ResponseSnapshot;
pub use scenario::{Expectation, Operation, OperationKind, Scenario, catalog};
pub use testing::{Assertion, AssertionResult, TestResults};
