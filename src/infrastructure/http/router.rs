use crate::infrastructure::http::controllers as api;
use crate::infrastructure::http::middleware::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Request bodies above this size are rejected with 413.
const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let store = Router::new()
        .route("/api/collections", get(api::collections::list_collections))
        .route("/api/collections", post(api::collections::create_collection))
        .route("/api/collections/:id", get(api::collections::get_collection))
        .route(
            "/api/collections/:id",
            patch(api::collections::update_collection),
        )
        .route(
            "/api/collections/:id",
            delete(api::collections::delete_collection),
        )
        .route("/api/products", get(api::products::list_products))
        .route("/api/products", post(api::products::create_product))
        .route("/api/products/:id", get(api::products::get_product))
        .route("/api/products/:id", patch(api::products::update_product))
        .route("/api/products/:id", delete(api::products::delete_product))
        .route("/api/promotions", get(api::promotions::list_promotions))
        .route("/api/promotions", post(api::promotions::create_promotion))
        .route("/api/promotions/:id", get(api::promotions::get_promotion))
        .route(
            "/api/promotions/:id",
            axum::routing::put(api::promotions::update_promotion),
        )
        .route(
            "/api/promotions/:id",
            delete(api::promotions::delete_promotion),
        )
        .route("/api/customers", get(api::customers::list_customers))
        .route("/api/customers", post(api::customers::create_customer))
        .route("/api/customers/:id", get(api::customers::get_customer))
        .route("/api/customers/:id", patch(api::customers::update_customer))
        .route("/api/customers/:id", delete(api::customers::delete_customer))
        .route(
            "/api/customers/:id/addresses",
            get(api::customers::list_addresses).post(api::customers::add_address),
        )
        .route(
            "/api/customers/:id/addresses/:address_id",
            delete(api::customers::delete_address),
        )
        .route("/api/orders", get(api::orders::list_orders))
        .route("/api/orders", post(api::orders::create_order))
        .route("/api/orders/:id", get(api::orders::get_order))
        .route(
            "/api/orders/:id/payment-status",
            patch(api::orders::update_payment_status),
        )
        .route("/api/carts", post(api::carts::create_cart))
        .route(
            "/api/carts/:id",
            get(api::carts::get_cart).delete(api::carts::delete_cart),
        )
        .route("/api/carts/:id/items", post(api::carts::add_cart_item))
        .route(
            "/api/carts/:id/items/:item_id",
            delete(api::carts::remove_cart_item),
        );

    // Tags and generic tagged items
    let tagging = Router::new()
        .route(
            "/api/tags",
            get(api::tags::list_tags).post(api::tags::create_tag),
        )
        .route(
            "/api/tags/:id",
            get(api::tags::get_tag)
                .patch(api::tags::rename_tag)
                .delete(api::tags::delete_tag),
        )
        .route(
            "/api/tags/:id/tagged-items",
            get(api::tags::list_tagged_objects),
        )
        .route(
            "/api/tagged-items",
            post(api::tagged_items::create_tagged_item),
        )
        .route(
            "/api/tagged-items/item/:id",
            get(api::tagged_items::get_tagged_item).delete(api::tagged_items::delete_tagged_item),
        )
        .route(
            "/api/tagged-items/:kind/:object_id",
            get(api::tagged_items::get_object_tags),
        )
        .route(
            "/api/tagged-items/:kind/:object_id/:tag_id",
            delete(api::tagged_items::untag_object),
        );

    let admin = Router::new()
        .route("/admin/", get(api::admin::index))
        .route(
            "/admin/store/collection/",
            get(api::admin::collection_changelist),
        )
        .route(
            "/admin/store/product/",
            get(api::admin::product_changelist).patch(api::admin::edit_product_prices),
        )
        .route(
            "/admin/store/product/actions/clear_inventory",
            post(api::admin::clear_inventory),
        )
        .route(
            "/admin/store/customer/",
            get(api::admin::customer_changelist).patch(api::admin::edit_customer_memberships),
        )
        .route(
            "/admin/store/order/",
            get(api::admin::order_changelist).post(api::admin::add_order),
        )
        .route("/admin/autocomplete/", get(api::admin::autocomplete));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(store)
        .merge(tagging)
        .merge(admin)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Storefront"
}

async fn health_handler() -> &'static str {
    "OK"
}
