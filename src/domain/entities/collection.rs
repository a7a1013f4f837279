use crate::domain::entities::content_type::EntityKind;
use crate::domain::entities::tag::Taggable;
use crate::domain::errors::DomainResult;
use serde::{Deserialize, Serialize};

use super::validate_text;

/// Grouping of products shown together in the storefront
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: i64,
    pub title: String,
    pub featured_product_id: Option<i64>,
}

impl Taggable for Collection {
    const KIND: EntityKind = EntityKind::Collection;

    fn object_id(&self) -> i64 {
        self.id
    }
}

// ========== DTOs (Data Transfer Objects) ==========

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCollectionRequest {
    pub title: String,
    pub featured_product_id: Option<i64>,
}

impl CreateCollectionRequest {
    pub fn validate(&self) -> DomainResult<()> {
        validate_text("title", &self.title, 255)
    }
}

/// Partial update; `featured_product_id: Some(None)` clears the featured product
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCollectionRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub featured_product_id: Option<Option<i64>>,
}

impl UpdateCollectionRequest {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(ref title) = self.title {
            validate_text("title", title, 255)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_blank_title() {
        let request = CreateCollectionRequest {
            title: "   ".to_string(),
            featured_product_id: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_distinguishes_null_from_missing() {
        let cleared: UpdateCollectionRequest =
            serde_json::from_str(r#"{"featured_product_id": null}"#).unwrap();
        assert_eq!(cleared.featured_product_id, Some(None));

        let untouched: UpdateCollectionRequest = serde_json::from_str(r#"{"title": "Bakery"}"#).unwrap();
        assert_eq!(untouched.featured_product_id, None);
    }
}
