use crate::domain::entities::{Money, Order, OrderItem, OrderWithItems, PaymentStatus};
use crate::domain::ports::order_repository::{NewOrderItem, OrderRepository};
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use crate::shared::utils::now_timestamp;
use sqlx::any::AnyRow;
use sqlx::{Any, QueryBuilder, Row};
use std::collections::HashMap;

impl Database {
    pub(crate) fn order_from_row(row: &AnyRow) -> ApiResult<Order> {
        let status: String = row.try_get("payment_status")?;
        Ok(Order {
            id: row.try_get("id")?,
            placed_at: row.try_get("placed_at")?,
            payment_status: status.parse()?,
            customer_id: row.try_get("customer_id")?,
        })
    }

    pub(crate) fn order_item_from_row(row: &AnyRow) -> ApiResult<OrderItem> {
        Ok(OrderItem {
            id: row.try_get("id")?,
            order_id: row.try_get("order_id")?,
            product_id: row.try_get("product_id")?,
            quantity: row.try_get("quantity")?,
            unit_price: Money::from_cents(row.try_get("unit_price_cents")?),
        })
    }

    async fn items_for_orders(&self, order_ids: &[i64]) -> ApiResult<HashMap<i64, Vec<OrderItem>>> {
        let mut items: HashMap<i64, Vec<OrderItem>> = HashMap::new();
        if order_ids.is_empty() {
            return Ok(items);
        }

        let mut builder = QueryBuilder::<Any>::new(
            "SELECT id, order_id, product_id, quantity, unit_price_cents
             FROM order_items
             WHERE order_id IN (",
        );
        let mut separated = builder.separated(", ");
        for id in order_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY id");

        let rows = builder.build().fetch_all(&self.pool).await?;
        for row in &rows {
            let item = Self::order_item_from_row(row)?;
            items.entry(item.order_id).or_default().push(item);
        }
        Ok(items)
    }
}

#[async_trait::async_trait]
impl OrderRepository for Database {
    async fn create_order(
        &self,
        customer_id: i64,
        payment_status: PaymentStatus,
        items: &[NewOrderItem],
    ) -> ApiResult<OrderWithItems> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            "INSERT INTO orders (placed_at, payment_status, customer_id)
             VALUES (?, ?, ?)
             RETURNING id, placed_at, payment_status, customer_id",
        )
        .bind(now_timestamp())
        .bind(payment_status.code())
        .bind(customer_id)
        .fetch_one(&mut *tx)
        .await?;
        let order = Self::order_from_row(&row)?;

        let mut order_items = Vec::with_capacity(items.len());
        for item in items {
            let row = sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity, unit_price_cents)
                 VALUES (?, ?, ?, ?)
                 RETURNING id, order_id, product_id, quantity, unit_price_cents",
            )
            .bind(order.id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.unit_price.cents())
            .fetch_one(&mut *tx)
            .await?;
            order_items.push(Self::order_item_from_row(&row)?);
        }

        tx.commit().await?;

        tracing::info!(
            "Order created: id={}, customer_id={}, items={}",
            order.id,
            customer_id,
            order_items.len()
        );
        Ok(OrderWithItems {
            order,
            items: order_items,
        })
    }

    async fn get_order_by_id(&self, id: i64) -> ApiResult<Option<OrderWithItems>> {
        let row = sqlx::query(
            "SELECT id, placed_at, payment_status, customer_id FROM orders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let order = Self::order_from_row(&row)?;
        let items = self
            .items_for_orders(&[order.id])
            .await?
            .remove(&order.id)
            .unwrap_or_default();
        Ok(Some(OrderWithItems { order, items }))
    }

    async fn list_orders(
        &self,
        customer_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<OrderWithItems>, i64)> {
        let mut count_query = QueryBuilder::<Any>::new("SELECT COUNT(*) as count FROM orders");
        let mut select_query =
            QueryBuilder::<Any>::new("SELECT id, placed_at, payment_status, customer_id FROM orders");
        if let Some(customer_id) = customer_id {
            count_query.push(" WHERE customer_id = ").push_bind(customer_id);
            select_query.push(" WHERE customer_id = ").push_bind(customer_id);
        }
        select_query
            .push(" ORDER BY placed_at DESC, id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let count_row = count_query.build().fetch_one(&self.pool).await?;
        let total_count: i64 = count_row.try_get("count")?;

        let rows = select_query.build().fetch_all(&self.pool).await?;
        let orders = rows
            .iter()
            .map(Self::order_from_row)
            .collect::<ApiResult<Vec<_>>>()?;

        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        let mut items = self.items_for_orders(&ids).await?;
        let orders = orders
            .into_iter()
            .map(|order| {
                let items = items.remove(&order.id).unwrap_or_default();
                OrderWithItems { order, items }
            })
            .collect();

        Ok((orders, total_count))
    }

    async fn update_payment_status(&self, id: i64, status: PaymentStatus) -> ApiResult<()> {
        let result = sqlx::query("UPDATE orders SET payment_status = ? WHERE id = ?")
            .bind(status.code())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Order {} not found", id)));
        }

        tracing::info!("Order {} payment status set to {}", id, status.code());
        Ok(())
    }
}
