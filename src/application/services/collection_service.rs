use crate::{
    application::services::referenced_elsewhere,
    domain::entities::*,
    domain::ports::collection_repository::CollectionRepository,
    domain::ports::product_repository::ProductRepository,
    infrastructure::http::middleware::error::{ApiError, ApiResult},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct CollectionService {
    collection_repo: Arc<dyn CollectionRepository>,
    product_repo: Arc<dyn ProductRepository>,
}

impl CollectionService {
    pub fn new(
        collection_repo: Arc<dyn CollectionRepository>,
        product_repo: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            collection_repo,
            product_repo,
        }
    }

    async fn ensure_product_exists(&self, product_id: i64) -> ApiResult<()> {
        if self.product_repo.get_product_by_id(product_id).await?.is_none() {
            return Err(ApiError::BadRequest(format!(
                "featured_product_id: product {} does not exist",
                product_id
            )));
        }
        Ok(())
    }

    pub async fn create_collection(&self, request: CreateCollectionRequest) -> ApiResult<Collection> {
        request.validate()?;
        if let Some(product_id) = request.featured_product_id {
            self.ensure_product_exists(product_id).await?;
        }
        self.collection_repo.create_collection(&request).await
    }

    pub async fn get_collection(&self, id: i64) -> ApiResult<Collection> {
        self.collection_repo
            .get_collection_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Collection {} not found", id)))
    }

    pub async fn list_collections(&self, limit: i64, offset: i64) -> ApiResult<(Vec<Collection>, i64)> {
        self.collection_repo.list_collections(limit, offset).await
    }

    pub async fn update_collection(
        &self,
        id: i64,
        request: UpdateCollectionRequest,
    ) -> ApiResult<Collection> {
        request.validate()?;
        let current = self.get_collection(id).await?;

        let featured_product_id = match request.featured_product_id {
            Some(Some(product_id)) => {
                self.ensure_product_exists(product_id).await?;
                Some(product_id)
            }
            Some(None) => None,
            None => current.featured_product_id,
        };
        let title = request
            .title
            .map(|t| t.trim().to_string())
            .unwrap_or(current.title);

        self.collection_repo
            .update_collection(id, &title, featured_product_id)
            .await
    }

    /// Refused while any product still belongs to the collection
    pub async fn delete_collection(&self, id: i64) -> ApiResult<()> {
        self.get_collection(id).await?;

        let products = self.collection_repo.count_products_in_collection(id).await?;
        if products > 0 {
            return Err(referenced_elsewhere("collection", id, products));
        }

        self.collection_repo.delete_collection(id).await
    }
}
