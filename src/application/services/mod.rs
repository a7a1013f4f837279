pub mod cart_service;
pub mod collection_service;
pub mod customer_service;
pub mod order_service;
pub mod product_service;
pub mod promotion_service;
pub mod tag_service;
pub mod tagging_service;

pub use cart_service::CartService;
pub use collection_service::CollectionService;
pub use customer_service::CustomerService;
pub use order_service::OrderService;
pub use product_service::ProductService;
pub use promotion_service::PromotionService;
pub use tag_service::TagService;
pub use tagging_service::{TaggedItemQuery, TaggingService};

use crate::infrastructure::http::middleware::error::{ApiError, REFERENCED_ELSEWHERE};
use crate::infrastructure::observability::counters;

/// Conflict returned when restrict-on-delete rows still point at `what`
pub(crate) fn referenced_elsewhere(what: &str, id: i64, referrers: i64) -> ApiError {
    tracing::warn!(
        "Refusing to delete {} {}: still referenced by {} rows",
        what,
        id,
        referrers
    );
    metrics::counter!(counters::DELETES_REJECTED).increment(1);
    ApiError::Conflict(REFERENCED_ELSEWHERE.to_string())
}
