use crate::application::admin::{
    AutocompleteAdmin, CollectionAdmin, CustomerAdmin, OrderAdmin, ProductAdmin,
};
use crate::application::services::{
    CartService, CollectionService, CustomerService, OrderService, ProductService,
    PromotionService, TagService, TaggingService,
};

/// Shared handler state; every field is cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub collection_service: CollectionService,
    pub product_service: ProductService,
    pub promotion_service: PromotionService,
    pub customer_service: CustomerService,
    pub order_service: OrderService,
    pub cart_service: CartService,
    pub tag_service: TagService,
    pub tagging_service: TaggingService,
    pub collection_admin: CollectionAdmin,
    pub product_admin: ProductAdmin,
    pub customer_admin: CustomerAdmin,
    pub order_admin: OrderAdmin,
    pub autocomplete_admin: AutocompleteAdmin,
}
