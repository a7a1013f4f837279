//! Admin changelists: declarative per-model options plus the queries and
//! bulk edits behind `/admin/store/<model>/`.

pub mod autocomplete;
pub mod collection_admin;
pub mod customer_admin;
pub mod links;
pub mod order_admin;
pub mod product_admin;

pub use autocomplete::AutocompleteAdmin;
pub use collection_admin::CollectionAdmin;
pub use customer_admin::CustomerAdmin;
pub use order_admin::OrderAdmin;
pub use product_admin::ProductAdmin;

use crate::domain::entities::{EntityKind, PaginationMetadata};
use serde::{Deserialize, Serialize};

/// Static description of how a model is presented in the admin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdminOptions {
    pub model: EntityKind,
    pub list_display: &'static [&'static str],
    pub list_editable: &'static [&'static str],
    pub list_filter: &'static [&'static str],
    pub search_fields: &'static [&'static str],
    /// Default `o` value
    pub ordering: &'static str,
    pub list_per_page: i64,
    pub actions: &'static [&'static str],
    pub autocomplete_fields: &'static [&'static str],
}

impl AdminOptions {
    /// Page size after applying the site-wide cap
    pub fn page_size(&self, cap: i64) -> i64 {
        self.list_per_page.min(cap).max(1)
    }
}

/// Query parameters shared by every changelist
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeListRequest {
    /// Free-text search, split on whitespace
    pub q: Option<String>,
    /// Ordering column, `-` prefix for descending
    pub o: Option<String>,
    /// 1-based page number
    pub p: Option<i64>,
}

impl ChangeListRequest {
    pub fn page(&self) -> i64 {
        self.p.filter(|p| *p >= 1).unwrap_or(1)
    }

    pub fn search_terms(&self) -> Vec<String> {
        self.q
            .as_deref()
            .map(|q| q.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// `(limit, offset)` for the requested page; offsets past `i64::MAX` saturate to an empty page
    pub fn window(&self, per_page: i64) -> (i64, i64) {
        (per_page, (self.page() - 1).saturating_mul(per_page))
    }
}

/// One page of changelist rows
#[derive(Debug, Serialize)]
pub struct ChangeListPage<R> {
    pub rows: Vec<R>,
    #[serde(flatten)]
    pub pagination: PaginationMetadata,
}

impl<R> ChangeListPage<R> {
    pub fn new(rows: Vec<R>, request: &ChangeListRequest, per_page: i64, total_count: i64) -> Self {
        Self {
            rows,
            pagination: PaginationMetadata::new(request.page(), per_page, total_count),
        }
    }
}

/// Outcome of a bulk action or inline edit, as shown to the admin user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResponse {
    pub updated: u64,
    pub message: String,
}

impl ActionResponse {
    pub fn products_updated(updated: u64) -> Self {
        Self {
            updated,
            message: format!("{} products were successfully updated", updated),
        }
    }

    pub fn customers_updated(updated: u64) -> Self {
        Self {
            updated,
            message: format!("{} customers were successfully updated", updated),
        }
    }
}
