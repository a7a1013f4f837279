pub mod cart_repository;
pub mod changelist_repository;
pub mod collection_repository;
pub mod content_object_repository;
pub mod customer_repository;
pub mod order_repository;
pub mod product_repository;
pub mod promotion_repository;
pub mod tag_repository;
pub mod tagged_item_repository;
