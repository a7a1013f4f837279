#![allow(dead_code)]
use storefront::domain::entities::{Tag, TagRequest};
use storefront::infrastructure::http::middleware::AppState;

/// Create a test tag
pub async fn create_test_tag(state: &AppState, label: &str) -> Tag {
    state
        .tag_service
        .create_tag(TagRequest {
            label: label.to_string(),
        })
        .await
        .expect("Failed to create test tag")
}

/// Create multiple test tags
pub async fn create_test_tags(state: &AppState, labels: &[&str]) -> Vec<Tag> {
    let mut tags = Vec::new();
    for label in labels {
        tags.push(create_test_tag(state, label).await);
    }
    tags
}
