use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    application::admin::{
        autocomplete::{AutocompleteRequest, AutocompleteResponse},
        collection_admin::CollectionListRow,
        customer_admin::{CustomerListRow, MembershipEdit},
        order_admin::{OrderFilters, OrderListRow},
        product_admin::{ClearInventoryRequest, ProductFilters, ProductListRow, UnitPriceEdit},
        ActionResponse, AdminOptions, ChangeListPage, ChangeListRequest,
    },
    domain::entities::*,
    infrastructure::http::middleware::{ApiResult, AppState},
};

/// GET /admin/ - Registered models and how they are listed
pub async fn index(State(state): State<AppState>) -> Json<Vec<AdminOptions>> {
    Json(vec![
        *state.collection_admin.options(),
        *state.product_admin.options(),
        *state.customer_admin.options(),
        *state.order_admin.options(),
    ])
}

/// GET /admin/store/collection/
pub async fn collection_changelist(
    State(state): State<AppState>,
    Query(request): Query<ChangeListRequest>,
) -> ApiResult<Json<ChangeListPage<CollectionListRow>>> {
    Ok(Json(state.collection_admin.changelist(&request).await?))
}

/// GET /admin/store/product/
pub async fn product_changelist(
    State(state): State<AppState>,
    Query(request): Query<ChangeListRequest>,
    Query(filters): Query<ProductFilters>,
) -> ApiResult<Json<ChangeListPage<ProductListRow>>> {
    Ok(Json(state.product_admin.changelist(&request, &filters).await?))
}

/// PATCH /admin/store/product/ - Save inline unit_price edits
pub async fn edit_product_prices(
    State(state): State<AppState>,
    Json(edits): Json<Vec<UnitPriceEdit>>,
) -> ApiResult<Json<ActionResponse>> {
    Ok(Json(state.product_admin.edit_unit_prices(edits).await?))
}

/// POST /admin/store/product/actions/clear_inventory
pub async fn clear_inventory(
    State(state): State<AppState>,
    Json(req): Json<ClearInventoryRequest>,
) -> ApiResult<Json<ActionResponse>> {
    Ok(Json(state.product_admin.clear_inventory(req).await?))
}

/// GET /admin/store/customer/
pub async fn customer_changelist(
    State(state): State<AppState>,
    Query(request): Query<ChangeListRequest>,
) -> ApiResult<Json<ChangeListPage<CustomerListRow>>> {
    Ok(Json(state.customer_admin.changelist(&request).await?))
}

/// PATCH /admin/store/customer/ - Save inline membership edits
pub async fn edit_customer_memberships(
    State(state): State<AppState>,
    Json(edits): Json<Vec<MembershipEdit>>,
) -> ApiResult<Json<ActionResponse>> {
    Ok(Json(state.customer_admin.edit_memberships(edits).await?))
}

/// GET /admin/store/order/
pub async fn order_changelist(
    State(state): State<AppState>,
    Query(request): Query<ChangeListRequest>,
    Query(filters): Query<OrderFilters>,
) -> ApiResult<Json<ChangeListPage<OrderListRow>>> {
    Ok(Json(state.order_admin.changelist(&request, &filters).await?))
}

/// POST /admin/store/order/ - Add an order with its inline items
pub async fn add_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<(StatusCode, Json<OrderWithItems>)> {
    let order = state.order_admin.add_order(req).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /admin/autocomplete/?model=&term=
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(request): Query<AutocompleteRequest>,
) -> ApiResult<Json<AutocompleteResponse>> {
    Ok(Json(state.autocomplete_admin.search(&request).await?))
}
