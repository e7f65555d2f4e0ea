//! Mock service resources and the payloads written to them.

use serde::{Deserialize, Serialize};

/// A collection exposed by the mock service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// `/posts`
    Posts,
    /// `/users`
    Users,
}

impl Resource {
    const fn segment(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Users => "users",
        }
    }

    /// Field asserted and recorded on a successful fetch.
    #[must_use]
    pub const fn designated_field(self) -> &'static str {
        match self {
            Self::Posts => "title",
            Self::Users => "username",
        }
    }

    /// Path of the collection, e.g. `/posts`.
    #[must_use]
    pub fn collection_path(self) -> String {
        format!("/{}", self.segment())
    }

    /// Path of one item, e.g. `/posts/1`. Ids are not range-checked.
    #[must_use]
    pub fn item_path(self, id: i64) -> String {
        format!("/{}/{id}", self.segment())
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    /// Post title
    pub title: String,
    /// Post body, may be empty
    pub body: String,
    /// Owning user id
    #[serde(rename = "userId")]
    pub user_id: i64,
}

impl NewPost {
    /// Creates a new post payload.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: i64) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }
}

/// Body of `PUT /posts/{id}`: a full replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostReplacement {
    /// Id of the post being replaced
    pub id: i64,
    /// Replacement title
    pub title: String,
    /// Replacement body
    pub body: String,
}

impl PostReplacement {
    /// Creates a replacement payload.
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_paths() {
        assert_eq!(Resource::Posts.collection_path(), "/posts");
        assert_eq!(Resource::Posts.item_path(9999), "/posts/9999");
        assert_eq!(Resource::Users.item_path(10), "/users/10");
        assert_eq!(Resource::Posts.item_path(-1), "/posts/-1");
    }

    #[test]
    fn test_designated_field() {
        assert_eq!(Resource::Posts.designated_field(), "title");
        assert_eq!(Resource::Users.designated_field(), "username");
    }

    #[test]
    fn test_new_post_uses_camel_case_owner() {
        let payload = NewPost::new("empty title", "", 3);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"title": "empty title", "body": "", "userId": 3})
        );
    }

    #[test]
    fn test_replacement_shape() {
        let payload = PostReplacement::new(2, "Another update", "Different content here");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"id": 2, "title": "Another update", "body": "Different content here"})
        );
    }
}
