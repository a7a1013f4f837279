use crate::{
    domain::entities::*,
    domain::ports::customer_repository::CustomerRepository,
    domain::ports::order_repository::{NewOrderItem, OrderRepository},
    domain::ports::product_repository::ProductRepository,
    infrastructure::http::middleware::error::{ApiError, ApiResult},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderService {
    order_repo: Arc<dyn OrderRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    product_repo: Arc<dyn ProductRepository>,
}

impl OrderService {
    pub fn new(
        order_repo: Arc<dyn OrderRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
        product_repo: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            order_repo,
            customer_repo,
            product_repo,
        }
    }

    /// Place an order with its line items.
    ///
    /// Items without an explicit price are charged the product's current
    /// unit price. Either the order and every item are stored, or nothing is.
    pub async fn create_order(&self, request: CreateOrderRequest) -> ApiResult<OrderWithItems> {
        request.validate()?;

        if self
            .customer_repo
            .get_customer_by_id(request.customer_id)
            .await?
            .is_none()
        {
            return Err(ApiError::BadRequest(format!(
                "customer_id: customer {} does not exist",
                request.customer_id
            )));
        }

        let mut items = Vec::with_capacity(request.items.len());
        for item in &request.items {
            let product = self
                .product_repo
                .get_product_by_id(item.product_id)
                .await?
                .ok_or_else(|| {
                    ApiError::BadRequest(format!(
                        "product_id: product {} does not exist",
                        item.product_id
                    ))
                })?;

            items.push(NewOrderItem {
                product_id: product.id,
                quantity: item.quantity,
                unit_price: item.unit_price.unwrap_or(product.unit_price),
            });
        }

        self.order_repo
            .create_order(request.customer_id, request.payment_status, &items)
            .await
    }

    pub async fn get_order(&self, id: i64) -> ApiResult<OrderWithItems> {
        self.order_repo
            .get_order_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Order {} not found", id)))
    }

    pub async fn list_orders(
        &self,
        customer_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<OrderWithItems>, i64)> {
        self.order_repo.list_orders(customer_id, limit, offset).await
    }

    pub async fn update_payment_status(
        &self,
        id: i64,
        request: UpdatePaymentStatusRequest,
    ) -> ApiResult<OrderWithItems> {
        self.order_repo
            .update_payment_status(id, request.payment_status)
            .await?;
        self.get_order(id).await
    }
}
