// Integration tests for orders and their line items
use storefront::domain::entities::*;
use storefront::infrastructure::http::middleware::ApiError;

mod helpers;
use helpers::*;

fn line(product_id: i64, quantity: i64) -> OrderItemRequest {
    OrderItemRequest {
        product_id,
        quantity,
        unit_price: None,
    }
}

#[tokio::test]
async fn test_order_defaults_to_current_prices() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let customer = create_test_customer(&state, "Edsger", "Dijkstra", "edsger@example.com").await;
    let collection = create_test_collection(&state, "Office").await;
    let stapler = create_test_product(&state, collection.id, "Stapler", 1250, 20).await;
    let paper = create_test_product(&state, collection.id, "Paper", 599, 200).await;

    let order = state
        .order_service
        .create_order(CreateOrderRequest {
            customer_id: customer.id,
            payment_status: PaymentStatus::default(),
            items: vec![
                line(stapler.id, 1),
                OrderItemRequest {
                    product_id: paper.id,
                    quantity: 3,
                    unit_price: Some(Money::from_cents(500)),
                },
            ],
        })
        .await
        .expect("Failed to create order");

    assert_eq!(order.order.customer_id, customer.id);
    assert_eq!(order.order.payment_status, PaymentStatus::Pending);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].unit_price, Money::from_cents(1250));
    assert_eq!(order.items[1].unit_price, Money::from_cents(500));
    assert!(order.items.iter().all(|i| i.order_id == order.order.id));

    let fetched = state.order_service.get_order(order.order.id).await.unwrap();
    assert_eq!(fetched.items.len(), 2);
}

#[tokio::test]
async fn test_item_count_bounds() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let customer = create_test_customer(&state, "Barbara", "Liskov", "barbara@example.com").await;
    let collection = create_test_collection(&state, "Toys").await;
    let product = create_test_product(&state, collection.id, "Yo-yo", 350, 100).await;

    let request = |count: usize| CreateOrderRequest {
        customer_id: customer.id,
        payment_status: PaymentStatus::Pending,
        items: (0..count).map(|_| line(product.id, 1)).collect(),
    };

    assert!(matches!(
        state.order_service.create_order(request(0)).await,
        Err(ApiError::BadRequest(_))
    ));
    assert!(matches!(
        state.order_service.create_order(request(11)).await,
        Err(ApiError::BadRequest(_))
    ));
    let full = state.order_service.create_order(request(10)).await.unwrap();
    assert_eq!(full.items.len(), 10);

    // Rejected requests left nothing behind
    let (orders, total) = state
        .order_service
        .list_orders(Some(customer.id), 20, 0)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(orders.len(), 1);
}

#[tokio::test]
async fn test_order_with_unknown_product_is_not_stored() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let customer = create_test_customer(&state, "Donald", "Knuth", "donald@example.com").await;
    let collection = create_test_collection(&state, "Books").await;
    let product = create_test_product(&state, collection.id, "TAOCP", 19_999, 3).await;

    let result = state
        .order_service
        .create_order(CreateOrderRequest {
            customer_id: customer.id,
            payment_status: PaymentStatus::Pending,
            items: vec![line(product.id, 1), line(4_242, 1)],
        })
        .await;
    assert!(matches!(result, Err(ApiError::BadRequest(_))));

    let unknown_customer = state
        .order_service
        .create_order(CreateOrderRequest {
            customer_id: 999,
            payment_status: PaymentStatus::Pending,
            items: vec![line(product.id, 1)],
        })
        .await;
    assert!(matches!(unknown_customer, Err(ApiError::BadRequest(_))));

    let (_, total) = state.order_service.list_orders(None, 20, 0).await.unwrap();
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_quantity_bounds() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let customer = create_test_customer(&state, "Ken", "Thompson", "ken@example.com").await;
    let collection = create_test_collection(&state, "Games").await;
    let product = create_test_product(&state, collection.id, "Chess Set", 4999, 5).await;

    for quantity in [0, 32_768] {
        let result = state
            .order_service
            .create_order(CreateOrderRequest {
                customer_id: customer.id,
                payment_status: PaymentStatus::Pending,
                items: vec![line(product.id, quantity)],
            })
            .await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}

#[tokio::test]
async fn test_payment_status_update() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let customer = create_test_customer(&state, "Frances", "Allen", "frances@example.com").await;
    let collection = create_test_collection(&state, "Garden").await;
    let product = create_test_product(&state, collection.id, "Trowel", 899, 15).await;
    let order = create_test_order(&state, customer.id, product.id, 1).await;

    let updated = state
        .order_service
        .update_payment_status(
            order.order.id,
            UpdatePaymentStatusRequest {
                payment_status: PaymentStatus::Complete,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.order.payment_status, PaymentStatus::Complete);
    assert_eq!(updated.items.len(), 1);

    let missing = state
        .order_service
        .update_payment_status(
            9_999,
            UpdatePaymentStatusRequest {
                payment_status: PaymentStatus::Failed,
            },
        )
        .await;
    assert!(matches!(missing, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_customer_with_orders_cannot_be_deleted() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let customer = create_test_customer(&state, "Dennis", "Ritchie", "dennis@example.com").await;
    let collection = create_test_collection(&state, "Manuals").await;
    let product = create_test_product(&state, collection.id, "K&R", 4500, 10).await;
    create_test_order(&state, customer.id, product.id, 1).await;

    let result = state.customer_service.delete_customer(customer.id).await;
    assert!(matches!(result, Err(ApiError::Conflict(_))));
    assert!(state.customer_service.get_customer(customer.id).await.is_ok());
}

#[tokio::test]
async fn test_admin_add_order_applies_same_rules() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let customer = create_test_customer(&state, "John", "McCarthy", "john@example.com").await;
    let collection = create_test_collection(&state, "Lisp").await;
    let product = create_test_product(&state, collection.id, "Parentheses", 100, 1_000).await;

    let too_many = state
        .order_admin
        .add_order(CreateOrderRequest {
            customer_id: customer.id,
            payment_status: PaymentStatus::Pending,
            items: (0..11).map(|_| line(product.id, 1)).collect(),
        })
        .await;
    assert!(matches!(too_many, Err(ApiError::BadRequest(_))));

    let order = state
        .order_admin
        .add_order(CreateOrderRequest {
            customer_id: customer.id,
            payment_status: PaymentStatus::Failed,
            items: vec![line(product.id, 2)],
        })
        .await
        .unwrap();
    assert_eq!(order.order.payment_status, PaymentStatus::Failed);
}
