use crate::domain::entities::content_type::EntityKind;
use crate::domain::entities::money::Money;
use crate::domain::entities::tag::Taggable;
use crate::domain::errors::{DomainError, DomainResult};
use crate::shared::utils::{is_valid_slug, slugify};
use serde::{Deserialize, Serialize};

use super::validate_text;

/// Lowest price a product can be listed at.
pub const MIN_UNIT_PRICE: Money = Money::from_cents(100);

/// Inventory below this level is reported as "Low" in the admin.
pub const LOW_INVENTORY_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub unit_price: Money,
    pub inventory: i64,
    pub last_update: String,
    pub collection_id: i64,
    pub promotion_ids: Vec<i64>,
}

impl Product {
    pub fn inventory_status(&self) -> InventoryStatus {
        InventoryStatus::for_level(self.inventory)
    }
}

impl Taggable for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn object_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryStatus {
    Low,
    #[serde(rename = "OK")]
    Ok,
}

impl InventoryStatus {
    pub fn for_level(inventory: i64) -> Self {
        if inventory < LOW_INVENTORY_THRESHOLD {
            InventoryStatus::Low
        } else {
            InventoryStatus::Ok
        }
    }
}

/// Validated column values for an insert or full update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub unit_price: Money,
    pub inventory: i64,
    pub collection_id: i64,
    pub promotion_ids: Vec<i64>,
}

// ========== DTOs (Data Transfer Objects) ==========

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub title: String,
    /// Prepopulated from the title when omitted
    pub slug: Option<String>,
    pub description: Option<String>,
    pub unit_price: Money,
    pub inventory: i64,
    pub collection_id: i64,
    #[serde(default)]
    pub promotion_ids: Vec<i64>,
}

impl CreateProductRequest {
    pub fn into_draft(self) -> DomainResult<ProductDraft> {
        validate_text("title", &self.title, 255)?;
        let slug = match self.slug {
            Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
            _ => slugify(&self.title),
        };
        validate_slug(&slug)?;

        Ok(ProductDraft {
            title: self.title.trim().to_string(),
            slug,
            description: normalize_description(self.description),
            unit_price: self.unit_price.ensure_between("unit_price", MIN_UNIT_PRICE)?,
            inventory: self.inventory,
            collection_id: self.collection_id,
            promotion_ids: dedup(self.promotion_ids),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub description: Option<Option<String>>,
    pub unit_price: Option<Money>,
    pub inventory: Option<i64>,
    pub collection_id: Option<i64>,
    pub promotion_ids: Option<Vec<i64>>,
}

impl UpdateProductRequest {
    /// Merge onto the current row, validating every touched field
    pub fn apply_to(self, current: &Product) -> DomainResult<ProductDraft> {
        let title = match self.title {
            Some(title) => {
                validate_text("title", &title, 255)?;
                title.trim().to_string()
            }
            None => current.title.clone(),
        };
        let slug = match self.slug {
            Some(slug) => {
                let slug = slug.trim().to_string();
                validate_slug(&slug)?;
                slug
            }
            None => current.slug.clone(),
        };
        let unit_price = match self.unit_price {
            Some(price) => price.ensure_between("unit_price", MIN_UNIT_PRICE)?,
            None => current.unit_price,
        };

        Ok(ProductDraft {
            title,
            slug,
            description: match self.description {
                Some(description) => normalize_description(description),
                None => current.description.clone(),
            },
            unit_price,
            inventory: self.inventory.unwrap_or(current.inventory),
            collection_id: self.collection_id.unwrap_or(current.collection_id),
            promotion_ids: self
                .promotion_ids
                .map(dedup)
                .unwrap_or_else(|| current.promotion_ids.clone()),
        })
    }
}

fn validate_slug(slug: &str) -> DomainResult<()> {
    if slug.len() > 50 {
        return Err(DomainError::ValidationError(
            "slug cannot exceed 50 characters".to_string(),
        ));
    }
    if !is_valid_slug(slug) {
        return Err(DomainError::ValidationError(format!(
            "slug '{}' must consist of letters, numbers, underscores or hyphens",
            slug
        )));
    }
    Ok(())
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty())
}

fn dedup(mut ids: Vec<i64>) -> Vec<i64> {
    ids.sort_unstable();
    ids.dedup();
    ids
}
