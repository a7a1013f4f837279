use crate::application::admin::{
    AutocompleteAdmin, CollectionAdmin, CustomerAdmin, OrderAdmin, ProductAdmin,
};
use crate::application::services::*;
use crate::config::Config;
use crate::domain::ports::cart_repository::CartRepository;
use crate::domain::ports::changelist_repository::ChangeListRepository;
use crate::domain::ports::collection_repository::CollectionRepository;
use crate::domain::ports::content_object_repository::ContentObjectRepository;
use crate::domain::ports::customer_repository::CustomerRepository;
use crate::domain::ports::order_repository::OrderRepository;
use crate::domain::ports::product_repository::ProductRepository;
use crate::domain::ports::promotion_repository::PromotionRepository;
use crate::domain::ports::tag_repository::TagRepository;
use crate::domain::ports::tagged_item_repository::TaggedItemRepository;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use std::sync::Arc;

/// Wire every service and admin against one database handle.
pub fn build_app_state(db: Database, config: &Config) -> AppState {
    let collection_repo: Arc<dyn CollectionRepository> = Arc::new(db.clone());
    let product_repo: Arc<dyn ProductRepository> = Arc::new(db.clone());
    let promotion_repo: Arc<dyn PromotionRepository> = Arc::new(db.clone());
    let customer_repo: Arc<dyn CustomerRepository> = Arc::new(db.clone());
    let order_repo: Arc<dyn OrderRepository> = Arc::new(db.clone());
    let cart_repo: Arc<dyn CartRepository> = Arc::new(db.clone());
    let tag_repo: Arc<dyn TagRepository> = Arc::new(db.clone());
    let tagged_item_repo: Arc<dyn TaggedItemRepository> = Arc::new(db.clone());
    let content_repo: Arc<dyn ContentObjectRepository> = Arc::new(db.clone());
    let changelists: Arc<dyn ChangeListRepository> = Arc::new(db);

    let order_service = OrderService::new(
        order_repo,
        customer_repo.clone(),
        product_repo.clone(),
    );

    let cap = config.admin_page_size_cap;
    tracing::info!("Admin changelist page size capped at {}", cap);

    AppState {
        collection_service: CollectionService::new(collection_repo.clone(), product_repo.clone()),
        product_service: ProductService::new(
            product_repo.clone(),
            collection_repo,
            promotion_repo.clone(),
        ),
        promotion_service: PromotionService::new(promotion_repo),
        customer_service: CustomerService::new(customer_repo.clone()),
        order_service: order_service.clone(),
        cart_service: CartService::new(cart_repo, product_repo.clone()),
        tag_service: TagService::new(tag_repo.clone()),
        tagging_service: TaggingService::new(tagged_item_repo, tag_repo, content_repo),
        collection_admin: CollectionAdmin::new(changelists.clone(), cap),
        product_admin: ProductAdmin::new(changelists.clone(), product_repo, cap),
        customer_admin: CustomerAdmin::new(changelists.clone(), customer_repo, cap),
        order_admin: OrderAdmin::new(changelists.clone(), order_service, cap),
        autocomplete_admin: AutocompleteAdmin::new(changelists),
    }
}
