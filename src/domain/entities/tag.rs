use crate::domain::entities::content_type::EntityKind;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Largest object id a tagged row can hold.
///
/// `tagged_items.object_id` is a small positive integer column, so rows
/// with larger ids cannot be tagged at all. Callers get a validation error
/// rather than a silently truncated reference.
pub const MAX_TAGGABLE_OBJECT_ID: i64 = 32_767;

/// Anything that can be the target of a tag.
///
/// Implemented by the store entities; this module never names them.
pub trait Taggable {
    const KIND: EntityKind;

    fn object_id(&self) -> i64;
}

/// Identifier of a tag target, bounded to the tagged_items column width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ObjectId(i64);

impl ObjectId {
    pub fn new(raw: i64) -> DomainResult<Self> {
        if !(0..=MAX_TAGGABLE_OBJECT_ID).contains(&raw) {
            return Err(DomainError::ValidationError(format!(
                "object id {} is outside the taggable range 0..={}",
                raw, MAX_TAGGABLE_OBJECT_ID
            )));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// (kind, id) pair a tag is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TagTarget {
    pub content_type: EntityKind,
    pub object_id: ObjectId,
}

impl TagTarget {
    pub fn new(content_type: EntityKind, object_id: i64) -> DomainResult<Self> {
        Ok(Self {
            content_type,
            object_id: ObjectId::new(object_id)?,
        })
    }

    pub fn of<T: Taggable>(entity: &T) -> DomainResult<Self> {
        Self::new(T::KIND, entity.object_id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub label: String,
}

/// Association between a tag and one (kind, id) pair, with the tag loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedItem {
    pub id: i64,
    pub tag: Tag,
    pub content_type: EntityKind,
    pub object_id: i64,
}

impl TaggedItem {
    pub fn target(&self) -> DomainResult<TagTarget> {
        TagTarget::new(self.content_type, self.object_id)
    }
}

// ========== DTOs (Data Transfer Objects) ==========

#[derive(Debug, Clone, Deserialize)]
pub struct TagRequest {
    pub label: String,
}

impl TagRequest {
    pub fn normalized_label(&self) -> DomainResult<String> {
        let label = self.label.trim();
        if label.is_empty() {
            return Err(DomainError::ValidationError(
                "Tag label cannot be empty".to_string(),
            ));
        }
        if label.chars().count() > 255 {
            return Err(DomainError::ValidationError(
                "Tag label cannot exceed 255 characters".to_string(),
            ));
        }
        Ok(label.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaggedItemRequest {
    pub tag_id: i64,
    pub content_type: EntityKind,
    pub object_id: i64,
}

#[derive(Debug, Serialize)]
pub struct TagListResponse {
    pub tags: Vec<Tag>,
    pub pagination: super::PaginationMetadata,
}

#[derive(Debug, Serialize)]
pub struct ObjectTagsResponse {
    pub content_type: EntityKind,
    pub object_id: i64,
    pub tagged_items: Vec<TaggedItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget(i64);

    impl Taggable for Widget {
        const KIND: EntityKind = EntityKind::Product;

        fn object_id(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_object_id_range() {
        assert!(ObjectId::new(0).is_ok());
        assert!(ObjectId::new(MAX_TAGGABLE_OBJECT_ID).is_ok());
        assert!(ObjectId::new(-1).is_err());
        let err = ObjectId::new(40_000).unwrap_err();
        assert!(err.to_string().contains("0..=32767"));
    }

    #[test]
    fn test_target_of_taggable_uses_its_kind() {
        let target = TagTarget::of(&Widget(5)).unwrap();
        assert_eq!(target.content_type, EntityKind::Product);
        assert_eq!(target.object_id.get(), 5);
        assert!(TagTarget::of(&Widget(70_000)).is_err());
    }

    #[test]
    fn test_tag_label_validation() {
        let ok = TagRequest { label: "  sale ".to_string() };
        assert_eq!(ok.normalized_label().unwrap(), "sale");
        assert!(TagRequest { label: " ".to_string() }.normalized_label().is_err());
        assert!(TagRequest { label: "x".repeat(256) }.normalized_label().is_err());
    }
}
