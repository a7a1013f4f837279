use crate::{
    application::services::referenced_elsewhere,
    domain::entities::*,
    domain::ports::collection_repository::CollectionRepository,
    domain::ports::product_repository::ProductRepository,
    domain::ports::promotion_repository::PromotionRepository,
    infrastructure::http::middleware::error::{ApiError, ApiResult},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
    collection_repo: Arc<dyn CollectionRepository>,
    promotion_repo: Arc<dyn PromotionRepository>,
}

impl ProductService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        collection_repo: Arc<dyn CollectionRepository>,
        promotion_repo: Arc<dyn PromotionRepository>,
    ) -> Self {
        Self {
            product_repo,
            collection_repo,
            promotion_repo,
        }
    }

    /// Parent rows are checked up front so a bad reference reads as a 400
    async fn check_references(&self, draft: &ProductDraft) -> ApiResult<()> {
        if self
            .collection_repo
            .get_collection_by_id(draft.collection_id)
            .await?
            .is_none()
        {
            return Err(ApiError::BadRequest(format!(
                "collection_id: collection {} does not exist",
                draft.collection_id
            )));
        }

        for promotion_id in &draft.promotion_ids {
            if self
                .promotion_repo
                .get_promotion_by_id(*promotion_id)
                .await?
                .is_none()
            {
                return Err(ApiError::BadRequest(format!(
                    "promotion_ids: promotion {} does not exist",
                    promotion_id
                )));
            }
        }
        Ok(())
    }

    pub async fn create_product(&self, request: CreateProductRequest) -> ApiResult<Product> {
        let draft = request.into_draft()?;
        self.check_references(&draft).await?;
        self.product_repo.create_product(&draft).await
    }

    pub async fn get_product(&self, id: i64) -> ApiResult<Product> {
        self.product_repo
            .get_product_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", id)))
    }

    pub async fn list_products(&self, limit: i64, offset: i64) -> ApiResult<(Vec<Product>, i64)> {
        self.product_repo.list_products(limit, offset).await
    }

    pub async fn update_product(&self, id: i64, request: UpdateProductRequest) -> ApiResult<Product> {
        let current = self.get_product(id).await?;
        let draft = request.apply_to(&current)?;
        self.check_references(&draft).await?;
        self.product_repo.update_product(id, &draft).await
    }

    /// Refused once an order line refers to the product. A collection
    /// featuring it loses its featured product.
    pub async fn delete_product(&self, id: i64) -> ApiResult<()> {
        self.get_product(id).await?;

        let order_items = self.product_repo.count_order_items_for_product(id).await?;
        if order_items > 0 {
            return Err(referenced_elsewhere("product", id, order_items));
        }

        self.product_repo.delete_product(id).await
    }
}
