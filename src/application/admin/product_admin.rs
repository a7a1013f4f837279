use crate::{
    application::admin::{ActionResponse, AdminOptions, ChangeListPage, ChangeListRequest},
    domain::entities::*,
    domain::ports::changelist_repository::ChangeListRepository,
    domain::ports::product_repository::ProductRepository,
    infrastructure::http::middleware::error::{ApiError, ApiResult},
    infrastructure::observability::counters,
    shared::utils::format_timestamp,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const OPTIONS: AdminOptions = AdminOptions {
    model: EntityKind::Product,
    list_display: &["title", "unit_price", "inventory_status", "collection_title"],
    list_editable: &["unit_price"],
    list_filter: &["collection", "last_update", "inventory"],
    search_fields: &["title"],
    ordering: "title",
    list_per_page: 10,
    actions: &["clear_inventory"],
    autocomplete_fields: &["collection"],
};

const DEFAULT_ORDER: SortOrder<ProductSort> = SortOrder {
    field: ProductSort::Title,
    direction: SortDirection::Asc,
};

/// Value of the `inventory` filter selecting low-stock rows
pub const LOW_INVENTORY_FILTER: &str = "<10";

/// Sidebar filters of the product changelist
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilters {
    #[serde(rename = "collection__id")]
    pub collection_id: Option<i64>,
    pub last_update: Option<String>,
    pub inventory: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductListRow {
    #[serde(flatten)]
    pub row: ProductRow,
    pub inventory_status: InventoryStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClearInventoryRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnitPriceEdit {
    pub id: i64,
    pub unit_price: Money,
}

#[derive(Clone)]
pub struct ProductAdmin {
    changelists: Arc<dyn ChangeListRepository>,
    product_repo: Arc<dyn ProductRepository>,
    per_page: i64,
}

impl ProductAdmin {
    pub fn new(
        changelists: Arc<dyn ChangeListRepository>,
        product_repo: Arc<dyn ProductRepository>,
        page_size_cap: i64,
    ) -> Self {
        Self {
            changelists,
            product_repo,
            per_page: OPTIONS.page_size(page_size_cap),
        }
    }

    pub fn options(&self) -> &'static AdminOptions {
        &OPTIONS
    }

    pub async fn changelist(
        &self,
        request: &ChangeListRequest,
        filters: &ProductFilters,
    ) -> ApiResult<ChangeListPage<ProductListRow>> {
        let last_update_since = match filters.last_update.as_deref() {
            None | Some("") => None,
            Some(raw) => {
                let window = LastUpdateFilter::from_param(raw).ok_or_else(|| {
                    ApiError::BadRequest(format!("Invalid last_update filter: {}", raw))
                })?;
                Some(format_timestamp(window.since(Utc::now())))
            }
        };
        let low_inventory = match filters.inventory.as_deref() {
            None | Some("") => false,
            Some(LOW_INVENTORY_FILTER) => true,
            Some(other) => {
                return Err(ApiError::BadRequest(format!(
                    "Invalid inventory filter: {}",
                    other
                )))
            }
        };

        let (limit, offset) = request.window(self.per_page);
        let params = ProductChangeListParams {
            search_terms: request.search_terms(),
            collection_id: filters.collection_id,
            last_update_since,
            low_inventory,
            ordering: SortOrder::parse(request.o.as_deref(), DEFAULT_ORDER),
            limit,
            offset,
        };

        let (rows, total_count) = self.changelists.product_changelist(&params).await?;
        let rows = rows
            .into_iter()
            .map(|row| ProductListRow {
                inventory_status: InventoryStatus::for_level(row.inventory),
                row,
            })
            .collect();

        Ok(ChangeListPage::new(rows, request, self.per_page, total_count))
    }

    /// Bulk action: zero the inventory of exactly the selected products
    pub async fn clear_inventory(&self, request: ClearInventoryRequest) -> ApiResult<ActionResponse> {
        let mut ids = request.ids;
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Err(ApiError::BadRequest(
                "Items must be selected in order to perform actions on them".to_string(),
            ));
        }

        let updated = self.product_repo.clear_inventory(&ids).await?;
        metrics::counter!(counters::INVENTORY_CLEARED).increment(updated);
        Ok(ActionResponse::products_updated(updated))
    }

    /// Inline `unit_price` edits from the changelist, saved together
    pub async fn edit_unit_prices(&self, edits: Vec<UnitPriceEdit>) -> ApiResult<ActionResponse> {
        let mut prices = Vec::with_capacity(edits.len());
        for edit in edits {
            let price = edit
                .unit_price
                .ensure_between(&format!("unit_price (product {})", edit.id), MIN_UNIT_PRICE)?;
            prices.push((edit.id, price));
        }

        let updated = self.product_repo.update_unit_prices(&prices).await?;
        Ok(ActionResponse::products_updated(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_describe_product_changelist() {
        assert_eq!(OPTIONS.list_per_page, 10);
        assert_eq!(OPTIONS.actions, &["clear_inventory"]);
        let fallback = SortOrder {
            field: ProductSort::Id,
            direction: SortDirection::Desc,
        };
        assert_eq!(SortOrder::parse(Some(OPTIONS.ordering), fallback), DEFAULT_ORDER);
    }

    #[test]
    fn test_filters_read_double_underscore_names() {
        let filters: ProductFilters =
            serde_json::from_str(r#"{"collection__id": 4, "inventory": "<10"}"#).unwrap();
        assert_eq!(filters.collection_id, Some(4));
        assert_eq!(filters.inventory.as_deref(), Some(LOW_INVENTORY_FILTER));
    }
}
