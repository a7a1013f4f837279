// Integration tests for collections, products and promotions
use storefront::application::admin::product_admin::{ClearInventoryRequest, UnitPriceEdit};
use storefront::domain::entities::*;
use storefront::infrastructure::http::middleware::error::REFERENCED_ELSEWHERE;
use storefront::infrastructure::http::middleware::ApiError;

mod helpers;
use helpers::*;

#[tokio::test]
async fn test_product_crud_operations() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Bakery").await;
    let product = create_test_product(&state, collection.id, "Sourdough Loaf", 650, 12).await;
    assert_eq!(product.slug, "sourdough-loaf");
    assert_eq!(product.unit_price, Money::from_cents(650));
    assert_eq!(product.collection_id, collection.id);
    assert!(product.promotion_ids.is_empty());

    let fetched = state.product_service.get_product(product.id).await.unwrap();
    assert_eq!(fetched, product);

    let updated = state
        .product_service
        .update_product(
            product.id,
            UpdateProductRequest {
                inventory: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.inventory, 3);
    assert_eq!(updated.title, "Sourdough Loaf");
    assert_eq!(updated.inventory_status(), InventoryStatus::Low);
    assert!(updated.last_update >= product.last_update);

    let (products, total) = state.product_service.list_products(10, 0).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(products.len(), 1);

    state.product_service.delete_product(product.id).await.unwrap();
    assert!(matches!(
        state.product_service.get_product(product.id).await,
        Err(ApiError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_unit_price_bounds() {
    let test_db = setup_test_db().await;
    let state = test_db.state();
    let collection = create_test_collection(&state, "Deli").await;

    let request = |cents: i64| CreateProductRequest {
        title: "Ham".to_string(),
        slug: None,
        description: None,
        unit_price: Money::from_cents(cents),
        inventory: 1,
        collection_id: collection.id,
        promotion_ids: Vec::new(),
    };

    assert!(matches!(
        state.product_service.create_product(request(99)).await,
        Err(ApiError::BadRequest(_))
    ));
    assert!(matches!(
        state.product_service.create_product(request(1_000_000)).await,
        Err(ApiError::BadRequest(_))
    ));
    assert!(state.product_service.create_product(request(100)).await.is_ok());
    assert!(state.product_service.create_product(request(999_999)).await.is_ok());
}

#[tokio::test]
async fn test_product_references_must_exist() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let missing_collection = state
        .product_service
        .create_product(CreateProductRequest {
            title: "Orphan".to_string(),
            slug: None,
            description: None,
            unit_price: Money::from_cents(500),
            inventory: 1,
            collection_id: 42,
            promotion_ids: Vec::new(),
        })
        .await;
    assert!(matches!(missing_collection, Err(ApiError::BadRequest(_))));

    let collection = create_test_collection(&state, "Promo").await;
    let promotion = state
        .promotion_service
        .create_promotion(PromotionRequest {
            description: "Spring sale".to_string(),
            discount: 0.15,
        })
        .await
        .unwrap();

    let product = state
        .product_service
        .create_product(CreateProductRequest {
            title: "Tulips".to_string(),
            slug: Some("tulips-bunch".to_string()),
            description: Some("A dozen".to_string()),
            unit_price: Money::from_cents(1200),
            inventory: 30,
            collection_id: collection.id,
            promotion_ids: vec![promotion.id, promotion.id],
        })
        .await
        .unwrap();
    assert_eq!(product.slug, "tulips-bunch");
    assert_eq!(product.promotion_ids, vec![promotion.id]);

    let bad_promotion = state
        .product_service
        .update_product(
            product.id,
            UpdateProductRequest {
                promotion_ids: Some(vec![promotion.id, 99]),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(bad_promotion, Err(ApiError::BadRequest(_))));

    // Deleting the promotion drops the link, not the product
    state
        .promotion_service
        .delete_promotion(promotion.id)
        .await
        .unwrap();
    let product = state.product_service.get_product(product.id).await.unwrap();
    assert!(product.promotion_ids.is_empty());
}

#[tokio::test]
async fn test_collection_with_products_cannot_be_deleted() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Cheese").await;
    let product = create_test_product(&state, collection.id, "Brie", 899, 8).await;

    let result = state.collection_service.delete_collection(collection.id).await;
    assert_eq!(
        result,
        Err(ApiError::Conflict(REFERENCED_ELSEWHERE.to_string()))
    );

    state.product_service.delete_product(product.id).await.unwrap();
    state
        .collection_service
        .delete_collection(collection.id)
        .await
        .expect("Empty collection should delete");
}

#[tokio::test]
async fn test_ordered_product_cannot_be_deleted() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Wine").await;
    let product = create_test_product(&state, collection.id, "Merlot", 1999, 24).await;
    let customer = create_test_customer(&state, "Alan", "Turing", "alan@example.com").await;
    create_test_order(&state, customer.id, product.id, 2).await;

    let result = state.product_service.delete_product(product.id).await;
    assert_eq!(
        result,
        Err(ApiError::Conflict(REFERENCED_ELSEWHERE.to_string()))
    );
}

#[tokio::test]
async fn test_deleting_featured_product_clears_the_reference() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Coffee").await;
    let product = create_test_product(&state, collection.id, "Espresso Beans", 1450, 40).await;

    let collection = state
        .collection_service
        .update_collection(
            collection.id,
            UpdateCollectionRequest {
                title: None,
                featured_product_id: Some(Some(product.id)),
            },
        )
        .await
        .unwrap();
    assert_eq!(collection.featured_product_id, Some(product.id));

    state.product_service.delete_product(product.id).await.unwrap();

    let collection = state
        .collection_service
        .get_collection(collection.id)
        .await
        .unwrap();
    assert_eq!(collection.featured_product_id, None);

    let unknown_featured = state
        .collection_service
        .update_collection(
            collection.id,
            UpdateCollectionRequest {
                title: None,
                featured_product_id: Some(Some(12_345)),
            },
        )
        .await;
    assert!(matches!(unknown_featured, Err(ApiError::BadRequest(_))));
}

#[tokio::test]
async fn test_clear_inventory_touches_only_selected_products() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Hardware").await;
    let hammer = create_test_product(&state, collection.id, "Hammer", 1500, 7).await;
    let nails = create_test_product(&state, collection.id, "Nails", 300, 500).await;
    let saw = create_test_product(&state, collection.id, "Saw", 2500, 3).await;

    let response = state
        .product_admin
        .clear_inventory(ClearInventoryRequest {
            ids: vec![hammer.id, saw.id, saw.id],
        })
        .await
        .unwrap();
    assert_eq!(response.updated, 2);
    assert_eq!(response.message, "2 products were successfully updated");

    let hammer = state.product_service.get_product(hammer.id).await.unwrap();
    let nails = state.product_service.get_product(nails.id).await.unwrap();
    let saw = state.product_service.get_product(saw.id).await.unwrap();
    assert_eq!(hammer.inventory, 0);
    assert_eq!(saw.inventory, 0);
    assert_eq!(nails.inventory, 500);

    let empty = state
        .product_admin
        .clear_inventory(ClearInventoryRequest { ids: Vec::new() })
        .await;
    assert!(matches!(empty, Err(ApiError::BadRequest(_))));
}

#[tokio::test]
async fn test_inline_price_edits_are_all_or_nothing() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Garden").await;
    let rake = create_test_product(&state, collection.id, "Rake", 1800, 10).await;
    let hose = create_test_product(&state, collection.id, "Hose", 2200, 10).await;

    let response = state
        .product_admin
        .edit_unit_prices(vec![
            UnitPriceEdit {
                id: rake.id,
                unit_price: Money::from_cents(1700),
            },
            UnitPriceEdit {
                id: hose.id,
                unit_price: Money::from_cents(2100),
            },
        ])
        .await
        .unwrap();
    assert_eq!(response.updated, 2);

    let below_minimum = state
        .product_admin
        .edit_unit_prices(vec![
            UnitPriceEdit {
                id: rake.id,
                unit_price: Money::from_cents(1000),
            },
            UnitPriceEdit {
                id: hose.id,
                unit_price: Money::from_cents(50),
            },
        ])
        .await;
    assert!(matches!(below_minimum, Err(ApiError::BadRequest(_))));

    let missing_row = state
        .product_admin
        .edit_unit_prices(vec![
            UnitPriceEdit {
                id: rake.id,
                unit_price: Money::from_cents(1000),
            },
            UnitPriceEdit {
                id: 9_999,
                unit_price: Money::from_cents(1000),
            },
        ])
        .await;
    assert!(matches!(missing_row, Err(ApiError::NotFound(_))));

    let rake = state.product_service.get_product(rake.id).await.unwrap();
    assert_eq!(rake.unit_price, Money::from_cents(1700));
}
