//! Built-in scenario table for the JSONPlaceholder mock service.

use super::Scenario;
use crate::resource::{NewPost, PostReplacement, Resource};

/// Returns every built-in scenario, grouped by verb in catalog order.
///
/// Writes against the mock service are faked: creates and updates echo the
/// payload, and deletes answer 200 for any id, including ids that never
/// existed. Those expectations describe this particular backend only.
#[must_use]
pub fn catalog() -> Vec<Scenario> {
    let mut scenarios = fetch_scenarios();
    scenarios.extend(create_scenarios());
    scenarios.extend(update_scenarios());
    scenarios.extend(delete_scenarios());
    scenarios
}

fn fetch_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::fetch_found(
            "get_post_1",
            Resource::Posts,
            1,
            "sunt aut facere repellat provident occaecati excepturi optio reprehenderit",
        ),
        Scenario::fetch_found("get_post_2", Resource::Posts, 2, "qui est esse"),
        Scenario::fetch_found("get_user_1", Resource::Users, 1, "Bret"),
        Scenario::fetch_found("get_user_10", Resource::Users, 10, "Moriah.Stanton"),
        Scenario::fetch("get_post_zero_id", Resource::Posts, 0, 404),
        Scenario::fetch("get_post_out_of_range", Resource::Posts, 9999, 404),
        Scenario::fetch("get_post_negative_id", Resource::Posts, -1, 404),
    ]
}

fn create_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::create(
            "normal_post",
            NewPost::new(
                "pytest demo post",
                "This is a test post created during API testing.",
                1,
            ),
            201,
        ),
        Scenario::create(
            "another_post",
            NewPost::new("second post", "Another body for API testing", 2),
            201,
        ),
        Scenario::create("empty_body", NewPost::new("empty title", "", 3), 201),
        Scenario::create("empty_title", NewPost::new("", "Body without a title", 4), 201),
    ]
}

fn update_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::update(
            "update_post_1",
            PostReplacement::new(1, "Updated title", "Updated body content"),
            200,
        ),
        Scenario::update(
            "update_post_2",
            PostReplacement::new(2, "Another update", "Different content here"),
            200,
        ),
    ]
}

fn delete_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::delete("delete_post_1", 1, 200),
        Scenario::delete("delete_post_2", 2, 200),
        Scenario::delete("non_existent_post", 9999, 200),
        Scenario::delete("negative_id", -1, 200),
        Scenario::delete("zero_id", 0, 200),
    ]
}
