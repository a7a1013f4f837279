// Integration tests for generic tagging of store objects
use futures::TryStreamExt;
use storefront::domain::entities::*;
use storefront::infrastructure::http::middleware::ApiError;

mod helpers;
use helpers::*;

#[tokio::test]
async fn test_sale_tag_on_product() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Bakery").await;
    let mut products = Vec::new();
    for i in 1..=5 {
        products.push(create_test_product(&state, collection.id, &format!("Bread {}", i), 250, 20).await);
    }
    let product = products.last().expect("five products");
    assert_eq!(product.id, 5);

    let sale = create_test_tag(&state, "sale").await;
    let item = state
        .tagging_service
        .tag_object(sale.id, EntityKind::Product, 5)
        .await
        .expect("Failed to tag product");
    assert_eq!(item.tag, sale);
    assert_eq!(item.content_type, EntityKind::Product);
    assert_eq!(item.object_id, 5);

    let items = state
        .tagging_service
        .tags_for(EntityKind::Product, 5)
        .fetch_all()
        .await
        .expect("Failed to load tags");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].tag.label, "sale");

    // Other products carry nothing
    let other = state
        .tagging_service
        .tags_for(EntityKind::Product, 4)
        .count()
        .await
        .unwrap();
    assert_eq!(other, 0);
}

#[tokio::test]
async fn test_same_id_different_kind_is_a_different_target() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Dairy").await;
    let product = create_test_product(&state, collection.id, "Milk", 199, 50).await;
    assert_eq!(collection.id, product.id);

    let featured = create_test_tag(&state, "featured").await;
    state
        .tagging_service
        .tag(featured.id, &collection)
        .await
        .expect("Failed to tag collection");

    let on_collection = state
        .tagging_service
        .tags_for_object(&collection)
        .tags()
        .await
        .unwrap();
    let on_product = state
        .tagging_service
        .tags_for_object(&product)
        .tags()
        .await
        .unwrap();

    assert_eq!(on_collection, vec![featured]);
    assert!(on_product.is_empty());
}

#[tokio::test]
async fn test_query_is_lazy_and_restartable() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Produce").await;
    let product = create_test_product(&state, collection.id, "Apples", 120, 40).await;

    // Built before anything is attached
    let query = state.tagging_service.tags_for_object(&product);
    assert_eq!(query.count().await.unwrap(), 0);
    assert!(query.fetch_all().await.unwrap().is_empty());

    let tags = create_test_tags(&state, &["organic", "local"]).await;
    for tag in &tags {
        state.tagging_service.tag(tag.id, &product).await.unwrap();
    }

    // Same query object sees the new rows, in attach order
    assert_eq!(query.count().await.unwrap(), 2);
    assert_eq!(query.tags().await.unwrap(), tags);

    let mut stream = query.stream();
    let first = stream.try_next().await.unwrap().expect("first row");
    assert_eq!(first.tag.label, "organic");
    drop(stream);

    // A second pass starts from the beginning again
    let again: Vec<TaggedItem> = query.stream().try_collect().await.unwrap();
    assert_eq!(again.len(), 2);
}

#[tokio::test]
async fn test_tagging_twice_is_idempotent() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Pantry").await;
    let product = create_test_product(&state, collection.id, "Rice", 300, 100).await;
    let tag = create_test_tag(&state, "staple").await;

    let first = state.tagging_service.tag(tag.id, &product).await.unwrap();
    let second = state.tagging_service.tag(tag.id, &product).await.unwrap();

    assert_eq!(first.id, second.id);
    let count = state
        .tagging_service
        .tags_for_object(&product)
        .count()
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_object_id_outside_column_range_cannot_be_tagged() {
    let test_db = setup_test_db().await;
    let state = test_db.state();
    let tag = create_test_tag(&state, "bulk").await;

    let result = state
        .tagging_service
        .tag_object(tag.id, EntityKind::Product, 40_000)
        .await;
    assert!(matches!(result, Err(ApiError::BadRequest(_))));

    // Looking it up is fine and simply finds nothing
    let query = state.tagging_service.tags_for(EntityKind::Product, 40_000);
    assert!(query.target().is_none());
    assert!(query.fetch_all().await.unwrap().is_empty());
    assert_eq!(query.count().await.unwrap(), 0);

    let edge = state.tagging_service.tags_for(EntityKind::Order, 32_767);
    assert!(edge.target().is_some());
    assert_eq!(edge.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_missing_tag_or_target_is_not_found() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Frozen").await;
    let product = create_test_product(&state, collection.id, "Peas", 150, 30).await;
    let tag = create_test_tag(&state, "cold").await;

    let missing_tag = state
        .tagging_service
        .tag_object(9_999, EntityKind::Product, product.id)
        .await;
    assert!(matches!(missing_tag, Err(ApiError::NotFound(_))));

    let missing_object = state
        .tagging_service
        .tag_object(tag.id, EntityKind::Customer, 77)
        .await;
    match missing_object {
        Err(ApiError::NotFound(msg)) => assert_eq!(msg, "store.customer 77 not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_untag_removes_only_that_association() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Snacks").await;
    let product = create_test_product(&state, collection.id, "Chips", 299, 12).await;
    let tags = create_test_tags(&state, &["salty", "crunchy"]).await;
    for tag in &tags {
        state.tagging_service.tag(tag.id, &product).await.unwrap();
    }

    state
        .tagging_service
        .untag_object(tags[0].id, EntityKind::Product, product.id)
        .await
        .expect("Failed to untag");

    let remaining = state
        .tagging_service
        .tags_for_object(&product)
        .tags()
        .await
        .unwrap();
    assert_eq!(remaining, vec![tags[1].clone()]);

    // Detaching again changes nothing
    state
        .tagging_service
        .untag_object(tags[0].id, EntityKind::Product, product.id)
        .await
        .expect("Untagging twice should succeed");
    let unchanged = state
        .tagging_service
        .tags_for_object(&product)
        .count()
        .await
        .unwrap();
    assert_eq!(unchanged, 1);
}

#[tokio::test]
async fn test_deleting_tag_cascades_to_tagged_items() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Beverages").await;
    let product = create_test_product(&state, collection.id, "Tea", 450, 60).await;
    let customer = create_test_customer(&state, "Grace", "Hopper", "grace@example.com").await;
    let tag = create_test_tag(&state, "vip").await;

    let on_product = state.tagging_service.tag(tag.id, &product).await.unwrap();
    state.tagging_service.tag(tag.id, &customer).await.unwrap();
    assert_eq!(
        state.tagging_service.tagged_objects(tag.id).await.unwrap().len(),
        2
    );

    state.tag_service.delete_tag(tag.id).await.expect("Failed to delete tag");

    assert!(matches!(
        state.tagging_service.get_tagged_item(on_product.id).await,
        Err(ApiError::NotFound(_))
    ));
    let count = state
        .tagging_service
        .tags_for_object(&customer)
        .count()
        .await
        .unwrap();
    assert_eq!(count, 0);
    assert!(matches!(
        state.tagging_service.tagged_objects(tag.id).await,
        Err(ApiError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_deleted_target_leaves_an_orphan() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Seasonal").await;
    let product = create_test_product(&state, collection.id, "Pumpkin", 500, 5).await;
    let tag = create_test_tag(&state, "autumn").await;
    let item = state.tagging_service.tag(tag.id, &product).await.unwrap();

    let resolved = state
        .tagging_service
        .resolve_content_object(&item)
        .await
        .unwrap();
    match resolved {
        Some(ContentObject::Product(found)) => assert_eq!(found.id, product.id),
        other => panic!("expected product, got {:?}", other),
    }

    state.product_service.delete_product(product.id).await.unwrap();

    // The association survives; its target no longer resolves
    let item = state.tagging_service.get_tagged_item(item.id).await.unwrap();
    assert!(state
        .tagging_service
        .resolve_content_object(&item)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_create_tagged_item_by_descriptor() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let customer = create_test_customer(&state, "Ada", "Lovelace", "ada@example.com").await;
    let tag = create_test_tag(&state, "newsletter").await;

    let request: CreateTaggedItemRequest = serde_json::from_value(serde_json::json!({
        "tag_id": tag.id,
        "content_type": "store.customer",
        "object_id": customer.id,
    }))
    .unwrap();
    let item = state
        .tagging_service
        .create_tagged_item(request)
        .await
        .unwrap();
    assert_eq!(item.content_type, EntityKind::Customer);

    let unknown = serde_json::from_value::<CreateTaggedItemRequest>(serde_json::json!({
        "tag_id": tag.id,
        "content_type": "store.warehouse",
        "object_id": 1,
    }));
    assert!(unknown.is_err());
}
