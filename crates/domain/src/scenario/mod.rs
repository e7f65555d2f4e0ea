//! Parametrized test scenarios.
//!
//! A [`Scenario`] pairs one operation against the mock service with the
//! status code and body fields the response must carry. Scenarios are built
//! once, never mutated, and consumed once per run.

mod catalog;

pub use catalog::catalog;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::resource::{NewPost, PostReplacement, Resource};
use crate::testing::Assertion;

/// The call a scenario makes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    /// `GET /{resource}/{id}`
    FetchById {
        /// Resource collection.
        resource: Resource,
        /// Item id, possibly zero, negative or out of range.
        id: i64,
    },
    /// `POST /posts`
    Create {
        /// Submitted payload.
        payload: NewPost,
    },
    /// `PUT /posts/{id}`
    Update {
        /// Replacement payload; its `id` is also the path id.
        payload: PostReplacement,
    },
    /// `DELETE /posts/{id}`
    Delete {
        /// Post id, possibly zero, negative or out of range.
        id: i64,
    },
}

/// Coarse grouping of operations, one per HTTP verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Reads.
    Fetch,
    /// Creates.
    Create,
    /// Full replacements.
    Update,
    /// Deletes.
    Delete,
}

impl Operation {
    /// Returns the verb family of this operation.
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::FetchById { .. } => OperationKind::Fetch,
            Self::Create { .. } => OperationKind::Create,
            Self::Update { .. } => OperationKind::Update,
            Self::Delete { .. } => OperationKind::Delete,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchById { resource, id } => write!(f, "GET {}", resource.item_path(*id)),
            Self::Create { .. } => write!(f, "POST {}", Resource::Posts.collection_path()),
            Self::Update { payload } => write!(f, "PUT {}", Resource::Posts.item_path(payload.id)),
            Self::Delete { id } => write!(f, "DELETE {}", Resource::Posts.item_path(*id)),
        }
    }
}

/// What a response must look like for a scenario to pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expectation {
    /// Expected status code.
    pub status: u16,
    /// Expected top-level body fields, compared by exact JSON equality.
    #[serde(default)]
    pub fields: Vec<(String, Value)>,
}

impl Expectation {
    /// Expects only a status code.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self {
            status,
            fields: Vec::new(),
        }
    }

    /// Adds an expected field (builder pattern).
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Expands the expectation into assertions, status first.
    #[must_use]
    pub fn assertions(&self) -> Vec<Assertion> {
        std::iter::once(Assertion::status(self.status))
            .chain(
                self.fields
                    .iter()
                    .map(|(name, value)| Assertion::field_equals(name, value.clone())),
            )
            .collect()
    }
}

/// One parametrized test case: inputs plus expectations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name, unique within a catalog.
    pub name: String,
    /// The call to make.
    pub operation: Operation,
    /// What the response must carry.
    pub expectation: Expectation,
}

impl Scenario {
    /// A read expecting `status` and no particular fields.
    #[must_use]
    pub fn fetch(name: impl Into<String>, resource: Resource, id: i64, status: u16) -> Self {
        Self {
            name: name.into(),
            operation: Operation::FetchById { resource, id },
            expectation: Expectation::status(status),
        }
    }

    /// A read expecting 200, the requested id and the resource's designated
    /// field equal to `designated`.
    #[must_use]
    pub fn fetch_found(
        name: impl Into<String>,
        resource: Resource,
        id: i64,
        designated: impl Into<Value>,
    ) -> Self {
        let mut scenario = Self::fetch(name, resource, id, 200);
        scenario.expectation = scenario
            .expectation
            .with_field("id", id)
            .with_field(resource.designated_field(), designated);
        scenario
    }

    /// A create expecting `status` and every submitted field echoed back.
    #[must_use]
    pub fn create(name: impl Into<String>, payload: NewPost, status: u16) -> Self {
        let expectation = Expectation::status(status)
            .with_field("title", payload.title.clone())
            .with_field("body", payload.body.clone())
            .with_field("userId", payload.user_id);
        Self {
            name: name.into(),
            operation: Operation::Create { payload },
            expectation,
        }
    }

    /// An update expecting `status` and the replacement title, body and id.
    #[must_use]
    pub fn update(name: impl Into<String>, payload: PostReplacement, status: u16) -> Self {
        let expectation = Expectation::status(status)
            .with_field("title", payload.title.clone())
            .with_field("body", payload.body.clone())
            .with_field("id", payload.id);
        Self {
            name: name.into(),
            operation: Operation::Update { payload },
            expectation,
        }
    }

    /// A delete expecting `status`.
    #[must_use]
    pub fn delete(name: impl Into<String>, id: i64, status: u16) -> Self {
        Self {
            name: name.into(),
            operation: Operation::Delete { id },
            expectation: Expectation::status(status),
        }
    }
}
