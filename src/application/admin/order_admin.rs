use crate::{
    application::admin::{AdminOptions, ChangeListPage, ChangeListRequest},
    application::services::OrderService,
    domain::entities::*,
    domain::ports::changelist_repository::ChangeListRepository,
    infrastructure::http::middleware::error::ApiResult,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const OPTIONS: AdminOptions = AdminOptions {
    model: EntityKind::Order,
    list_display: &["id", "placed_at", "payment_status", "customer_name"],
    list_editable: &[],
    list_filter: &["customer"],
    search_fields: &[],
    ordering: "id",
    list_per_page: 100,
    actions: &[],
    autocomplete_fields: &["customer", "product"],
};

const DEFAULT_ORDER: SortOrder<OrderSort> = SortOrder {
    field: OrderSort::Id,
    direction: SortDirection::Asc,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderFilters {
    #[serde(rename = "customer__id")]
    pub customer_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct OrderListRow {
    #[serde(flatten)]
    pub row: OrderRow,
    pub customer_name: String,
}

#[derive(Clone)]
pub struct OrderAdmin {
    changelists: Arc<dyn ChangeListRepository>,
    order_service: OrderService,
    per_page: i64,
}

impl OrderAdmin {
    pub fn new(
        changelists: Arc<dyn ChangeListRepository>,
        order_service: OrderService,
        page_size_cap: i64,
    ) -> Self {
        Self {
            changelists,
            order_service,
            per_page: OPTIONS.page_size(page_size_cap),
        }
    }

    pub fn options(&self) -> &'static AdminOptions {
        &OPTIONS
    }

    pub async fn changelist(
        &self,
        request: &ChangeListRequest,
        filters: &OrderFilters,
    ) -> ApiResult<ChangeListPage<OrderListRow>> {
        let (limit, offset) = request.window(self.per_page);
        let params = OrderChangeListParams {
            customer_id: filters.customer_id,
            ordering: SortOrder::parse(request.o.as_deref(), DEFAULT_ORDER),
            limit,
            offset,
        };

        let (rows, total_count) = self.changelists.order_changelist(&params).await?;
        let rows = rows
            .into_iter()
            .map(|row| OrderListRow {
                customer_name: format!("{} {}", row.customer_first_name, row.customer_last_name),
                row,
            })
            .collect();

        Ok(ChangeListPage::new(rows, request, self.per_page, total_count))
    }

    /// Add form with inline items; the 1..=10 item bounds apply here too
    pub async fn add_order(&self, request: CreateOrderRequest) -> ApiResult<OrderWithItems> {
        self.order_service.create_order(request).await
    }
}
