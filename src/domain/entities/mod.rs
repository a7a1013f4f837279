pub mod address;
pub mod cart;
pub mod changelist;
pub mod collection;
pub mod content_type;
pub mod customer;
pub mod money;
pub mod order;
pub mod product;
pub mod promotion;
pub mod tag;

pub use address::*;
pub use cart::*;
pub use changelist::*;
pub use collection::*;
pub use content_type::*;
pub use customer::*;
pub use money::*;
pub use order::*;
pub use product::*;
pub use promotion::*;
pub use tag::*;

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMetadata {
    pub page: i64,
    pub per_page: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

impl PaginationMetadata {
    pub fn new(page: i64, per_page: i64, total_count: i64) -> Self {
        let total_pages = if per_page > 0 {
            (total_count + per_page - 1) / per_page
        } else {
            0
        };
        Self {
            page,
            per_page,
            total_count,
            total_pages,
        }
    }
}

/// Non-blank text of at most `max_len` characters
pub(crate) fn validate_text(field: &str, value: &str, max_len: usize) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::ValidationError(format!(
            "{} cannot be empty",
            field
        )));
    }
    if value.chars().count() > max_len {
        return Err(DomainError::ValidationError(format!(
            "{} cannot exceed {} characters",
            field, max_len
        )));
    }
    Ok(())
}

/// Lets PATCH bodies tell an explicit `null` apart from an absent field
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
