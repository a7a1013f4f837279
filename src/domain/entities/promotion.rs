use crate::domain::entities::content_type::EntityKind;
use crate::domain::entities::tag::Taggable;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use super::validate_text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i64,
    pub description: String,
    pub discount: f64,
}

impl Taggable for Promotion {
    const KIND: EntityKind = EntityKind::Promotion;

    fn object_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromotionRequest {
    pub description: String,
    pub discount: f64,
}

impl PromotionRequest {
    pub fn validate(&self) -> DomainResult<()> {
        validate_text("description", &self.description, 255)?;
        if !self.discount.is_finite() {
            return Err(DomainError::ValidationError(
                "discount must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}
