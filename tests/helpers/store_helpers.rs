#![allow(dead_code)]
use storefront::domain::entities::*;
use storefront::infrastructure::http::middleware::AppState;

pub async fn create_test_collection(state: &AppState, title: &str) -> Collection {
    state
        .collection_service
        .create_collection(CreateCollectionRequest {
            title: title.to_string(),
            featured_product_id: None,
        })
        .await
        .expect("Failed to create test collection")
}

/// Product priced in cents, with no promotions
pub async fn create_test_product(
    state: &AppState,
    collection_id: i64,
    title: &str,
    price_cents: i64,
    inventory: i64,
) -> Product {
    state
        .product_service
        .create_product(CreateProductRequest {
            title: title.to_string(),
            slug: None,
            description: None,
            unit_price: Money::from_cents(price_cents),
            inventory,
            collection_id,
            promotion_ids: Vec::new(),
        })
        .await
        .expect("Failed to create test product")
}

pub async fn create_test_customer(
    state: &AppState,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Customer {
    state
        .customer_service
        .create_customer(CreateCustomerRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: "555-0100".to_string(),
            birth_date: None,
            membership: Membership::Bronze,
        })
        .await
        .expect("Failed to create test customer")
}

/// Single-line order at the product's current price
pub async fn create_test_order(
    state: &AppState,
    customer_id: i64,
    product_id: i64,
    quantity: i64,
) -> OrderWithItems {
    state
        .order_service
        .create_order(CreateOrderRequest {
            customer_id,
            payment_status: PaymentStatus::Pending,
            items: vec![OrderItemRequest {
                product_id,
                quantity,
                unit_price: None,
            }],
        })
        .await
        .expect("Failed to create test order")
}
