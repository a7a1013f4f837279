// Integration tests for customers, their addresses, and carts
use storefront::domain::entities::*;
use storefront::infrastructure::http::middleware::ApiError;

mod helpers;
use helpers::*;

#[tokio::test]
async fn test_customer_crud_operations() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let customer = create_test_customer(&state, "Katherine", "Johnson", "Kat@Example.com").await;
    assert_eq!(customer.email, "kat@example.com");
    assert_eq!(customer.membership, Membership::Bronze);
    assert_eq!(customer.full_name(), "Katherine Johnson");

    let updated = state
        .customer_service
        .update_customer(
            customer.id,
            UpdateCustomerRequest {
                membership: Some(Membership::Silver),
                birth_date: Some(Some("1918-08-26".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.membership, Membership::Silver);
    assert_eq!(updated.birth_date.as_deref(), Some("1918-08-26"));
    assert_eq!(updated.first_name, "Katherine");

    let (customers, total) = state.customer_service.list_customers(10, 0).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(customers[0].id, customer.id);

    state.customer_service.delete_customer(customer.id).await.unwrap();
    assert!(matches!(
        state.customer_service.get_customer(customer.id).await,
        Err(ApiError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_email_must_be_unique() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    create_test_customer(&state, "Hedy", "Lamarr", "hedy@example.com").await;
    let other = create_test_customer(&state, "Mary", "Jackson", "mary@example.com").await;

    let duplicate = state
        .customer_service
        .create_customer(CreateCustomerRequest {
            first_name: "Someone".to_string(),
            last_name: "Else".to_string(),
            email: "HEDY@example.com".to_string(),
            phone: "555-0199".to_string(),
            birth_date: None,
            membership: Membership::Gold,
        })
        .await;
    assert!(matches!(duplicate, Err(ApiError::Conflict(_))));

    let steal = state
        .customer_service
        .update_customer(
            other.id,
            UpdateCustomerRequest {
                email: Some("hedy@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(steal, Err(ApiError::Conflict(_))));

    // Keeping one's own address is fine
    let same = state
        .customer_service
        .update_customer(
            other.id,
            UpdateCustomerRequest {
                email: Some("mary@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(same.is_ok());
}

#[tokio::test]
async fn test_invalid_customer_fields_are_rejected() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let request = |email: &str, birth_date: Option<&str>| CreateCustomerRequest {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        birth_date: birth_date.map(str::to_string),
        membership: Membership::Bronze,
    };

    assert!(matches!(
        state
            .customer_service
            .create_customer(request("not-an-email", None))
            .await,
        Err(ApiError::BadRequest(_))
    ));
    assert!(matches!(
        state
            .customer_service
            .create_customer(request("ok@example.com", Some("26/08/1918")))
            .await,
        Err(ApiError::BadRequest(_))
    ));
}

#[tokio::test]
async fn test_addresses_belong_to_their_customer() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let owner = create_test_customer(&state, "Radia", "Perlman", "radia@example.com").await;
    let stranger = create_test_customer(&state, "Vint", "Cerf", "vint@example.com").await;

    let address = state
        .customer_service
        .add_address(
            owner.id,
            CreateAddressRequest {
                street: "1 Spanning Tree Way".to_string(),
                city: "Cambridge".to_string(),
                zip_code: Some("02139".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(address.customer_id, owner.id);

    let addresses = state.customer_service.list_addresses(owner.id).await.unwrap();
    assert_eq!(addresses, vec![address.clone()]);
    assert!(state
        .customer_service
        .list_addresses(stranger.id)
        .await
        .unwrap()
        .is_empty());

    // Scoped by customer
    let wrong_owner = state
        .customer_service
        .delete_address(stranger.id, address.id)
        .await;
    assert!(matches!(wrong_owner, Err(ApiError::NotFound(_))));

    // Deleting the customer takes the addresses along
    state.customer_service.delete_customer(owner.id).await.unwrap();
    let gone = state.customer_service.delete_address(owner.id, address.id).await;
    assert!(matches!(gone, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_cart_lifecycle() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Candy").await;
    let product = create_test_product(&state, collection.id, "Licorice", 199, 80).await;

    let cart = state.cart_service.create_cart().await.unwrap();
    assert!(cart.items.is_empty());

    let item = state
        .cart_service
        .add_item(
            cart.cart.id,
            AddCartItemRequest {
                product_id: product.id,
                quantity: 3,
            },
        )
        .await
        .unwrap();
    assert_eq!(item.cart_id, cart.cart.id);
    assert_eq!(item.quantity, 3);

    let loaded = state.cart_service.get_cart(cart.cart.id).await.unwrap();
    assert_eq!(loaded.items, vec![item.clone()]);

    let zero = state
        .cart_service
        .add_item(
            cart.cart.id,
            AddCartItemRequest {
                product_id: product.id,
                quantity: 0,
            },
        )
        .await;
    assert!(matches!(zero, Err(ApiError::BadRequest(_))));

    let unknown_product = state
        .cart_service
        .add_item(
            cart.cart.id,
            AddCartItemRequest {
                product_id: 404,
                quantity: 1,
            },
        )
        .await;
    assert!(matches!(unknown_product, Err(ApiError::BadRequest(_))));

    state
        .cart_service
        .remove_item(cart.cart.id, item.id)
        .await
        .unwrap();
    assert!(state
        .cart_service
        .get_cart(cart.cart.id)
        .await
        .unwrap()
        .items
        .is_empty());

    state.cart_service.delete_cart(cart.cart.id).await.unwrap();
    assert!(matches!(
        state.cart_service.get_cart(cart.cart.id).await,
        Err(ApiError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_deleting_product_empties_carts() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Fruit").await;
    let product = create_test_product(&state, collection.id, "Mango", 250, 25).await;
    let cart = state.cart_service.create_cart().await.unwrap();
    state
        .cart_service
        .add_item(
            cart.cart.id,
            AddCartItemRequest {
                product_id: product.id,
                quantity: 2,
            },
        )
        .await
        .unwrap();

    state.product_service.delete_product(product.id).await.unwrap();

    let cart = state.cart_service.get_cart(cart.cart.id).await.unwrap();
    assert!(cart.items.is_empty());
}

#[tokio::test]
async fn test_unset_optional_columns_read_back_as_none() {
    let test_db = setup_test_db().await;
    let state = test_db.state();

    let collection = create_test_collection(&state, "Pottery").await;
    assert_eq!(collection.featured_product_id, None);
    let collection = state
        .collection_service
        .get_collection(collection.id)
        .await
        .unwrap();
    assert_eq!(collection.featured_product_id, None);

    let product = create_test_product(&state, collection.id, "Vase", 2400, 6).await;
    assert_eq!(product.description, None);
    let product = state.product_service.get_product(product.id).await.unwrap();
    assert_eq!(product.description, None);

    let customer = create_test_customer(&state, "Joan", "Clarke", "joan@example.com").await;
    assert_eq!(customer.birth_date, None);
    let customer = state.customer_service.get_customer(customer.id).await.unwrap();
    assert_eq!(customer.birth_date, None);

    let address = state
        .customer_service
        .add_address(
            customer.id,
            CreateAddressRequest {
                street: "Bletchley Park".to_string(),
                city: "Milton Keynes".to_string(),
                zip_code: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(address.zip_code, None);
    let addresses = state.customer_service.list_addresses(customer.id).await.unwrap();
    assert_eq!(addresses[0].zip_code, None);
}
