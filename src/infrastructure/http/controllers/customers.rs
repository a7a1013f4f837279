use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    domain::entities::*,
    infrastructure::http::controllers::{PaginatedResponse, PaginationQuery},
    infrastructure::http::middleware::{ApiResult, AppState},
};

/// POST /api/customers
pub async fn create_customer(
    State(state): State<AppState>,
    Json(req): Json<CreateCustomerRequest>,
) -> ApiResult<(StatusCode, Json<Customer>)> {
    let customer = state.customer_service.create_customer(req).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/customers
pub async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<PaginationQuery>,
) -> ApiResult<Json<PaginatedResponse<Customer>>> {
    let (limit, offset) = params.window();
    let (customers, total) = state.customer_service.list_customers(limit, offset).await?;
    Ok(Json(params.respond(customers, total)))
}

/// GET /api/customers/:id
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Customer>> {
    Ok(Json(state.customer_service.get_customer(id).await?))
}

/// PATCH /api/customers/:id
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCustomerRequest>,
) -> ApiResult<Json<Customer>> {
    Ok(Json(state.customer_service.update_customer(id, req).await?))
}

/// DELETE /api/customers/:id
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.customer_service.delete_customer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/customers/:id/addresses
pub async fn add_address(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
    Json(req): Json<CreateAddressRequest>,
) -> ApiResult<(StatusCode, Json<Address>)> {
    let address = state.customer_service.add_address(customer_id, req).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

/// GET /api/customers/:id/addresses
pub async fn list_addresses(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
) -> ApiResult<Json<Vec<Address>>> {
    Ok(Json(state.customer_service.list_addresses(customer_id).await?))
}

/// DELETE /api/customers/:id/addresses/:address_id
pub async fn delete_address(
    State(state): State<AppState>,
    Path((customer_id, address_id)): Path<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state
        .customer_service
        .delete_address(customer_id, address_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
