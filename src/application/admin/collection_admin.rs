use crate::{
    application::admin::{links::changelist_url, AdminOptions, ChangeListPage, ChangeListRequest},
    domain::entities::*,
    domain::ports::changelist_repository::ChangeListRepository,
    infrastructure::http::middleware::error::ApiResult,
};
use serde::Serialize;
use std::sync::Arc;

pub const OPTIONS: AdminOptions = AdminOptions {
    model: EntityKind::Collection,
    list_display: &["title", "products_count"],
    list_editable: &[],
    list_filter: &[],
    search_fields: &["title"],
    ordering: "title",
    list_per_page: 100,
    actions: &[],
    autocomplete_fields: &[],
};

const DEFAULT_ORDER: SortOrder<CollectionSort> = SortOrder {
    field: CollectionSort::Title,
    direction: SortDirection::Asc,
};

#[derive(Debug, Serialize)]
pub struct CollectionListRow {
    #[serde(flatten)]
    pub row: CollectionRow,
    /// Product changelist narrowed to this collection
    pub products_url: String,
}

#[derive(Clone)]
pub struct CollectionAdmin {
    changelists: Arc<dyn ChangeListRepository>,
    per_page: i64,
}

impl CollectionAdmin {
    pub fn new(changelists: Arc<dyn ChangeListRepository>, page_size_cap: i64) -> Self {
        Self {
            changelists,
            per_page: OPTIONS.page_size(page_size_cap),
        }
    }

    pub fn options(&self) -> &'static AdminOptions {
        &OPTIONS
    }

    pub async fn changelist(
        &self,
        request: &ChangeListRequest,
    ) -> ApiResult<ChangeListPage<CollectionListRow>> {
        let (limit, offset) = request.window(self.per_page);
        let params = CollectionChangeListParams {
            search_terms: request.search_terms(),
            ordering: SortOrder::parse(request.o.as_deref(), DEFAULT_ORDER),
            limit,
            offset,
        };

        let (rows, total_count) = self.changelists.collection_changelist(&params).await?;
        let rows = rows
            .into_iter()
            .map(|row| CollectionListRow {
                products_url: changelist_url(
                    EntityKind::Product,
                    &[("collection__id", row.id.to_string().as_str())],
                ),
                row,
            })
            .collect();

        Ok(ChangeListPage::new(rows, request, self.per_page, total_count))
    }
}
