use crate::{
    application::admin::{
        links::changelist_url, ActionResponse, AdminOptions, ChangeListPage, ChangeListRequest,
    },
    domain::entities::*,
    domain::ports::changelist_repository::ChangeListRepository,
    domain::ports::customer_repository::CustomerRepository,
    infrastructure::http::middleware::error::ApiResult,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const OPTIONS: AdminOptions = AdminOptions {
    model: EntityKind::Customer,
    list_display: &["first_name", "last_name", "membership", "order_count"],
    list_editable: &["membership"],
    list_filter: &[],
    // Case-insensitive prefix match
    search_fields: &["first_name__istartswith", "last_name__istartswith"],
    ordering: "first_name",
    list_per_page: 10,
    actions: &[],
    autocomplete_fields: &[],
};

const DEFAULT_ORDER: SortOrder<CustomerSort> = SortOrder {
    field: CustomerSort::FirstName,
    direction: SortDirection::Asc,
};

#[derive(Debug, Serialize)]
pub struct CustomerListRow {
    #[serde(flatten)]
    pub row: CustomerRow,
    /// Order changelist narrowed to this customer
    pub orders_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MembershipEdit {
    pub id: i64,
    pub membership: Membership,
}

#[derive(Clone)]
pub struct CustomerAdmin {
    changelists: Arc<dyn ChangeListRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    per_page: i64,
}

impl CustomerAdmin {
    pub fn new(
        changelists: Arc<dyn ChangeListRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
        page_size_cap: i64,
    ) -> Self {
        Self {
            changelists,
            customer_repo,
            per_page: OPTIONS.page_size(page_size_cap),
        }
    }

    pub fn options(&self) -> &'static AdminOptions {
        &OPTIONS
    }

    pub async fn changelist(
        &self,
        request: &ChangeListRequest,
    ) -> ApiResult<ChangeListPage<CustomerListRow>> {
        let (limit, offset) = request.window(self.per_page);
        let params = CustomerChangeListParams {
            search_terms: request.search_terms(),
            ordering: SortOrder::parse(request.o.as_deref(), DEFAULT_ORDER),
            limit,
            offset,
        };

        let (rows, total_count) = self.changelists.customer_changelist(&params).await?;
        let rows = rows
            .into_iter()
            .map(|row| CustomerListRow {
                orders_url: changelist_url(
                    EntityKind::Order,
                    &[("customer__id", row.id.to_string().as_str())],
                ),
                row,
            })
            .collect();

        Ok(ChangeListPage::new(rows, request, self.per_page, total_count))
    }

    /// Inline membership edits from the changelist, saved together
    pub async fn edit_memberships(&self, edits: Vec<MembershipEdit>) -> ApiResult<ActionResponse> {
        let memberships: Vec<(i64, Membership)> =
            edits.into_iter().map(|e| (e.id, e.membership)).collect();
        let updated = self.customer_repo.update_memberships(&memberships).await?;
        Ok(ActionResponse::customers_updated(updated))
    }
}
