use crate::domain::entities::{Address, CreateAddressRequest, Customer, CustomerDraft, Membership};
use crate::domain::ports::customer_repository::CustomerRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use sqlx::any::AnyRow;
use sqlx::Row;

const CUSTOMER_COLUMNS: &str = "id, first_name, last_name, email, phone, birth_date, membership";

impl Database {
    pub(crate) fn customer_from_row(row: &AnyRow) -> ApiResult<Customer> {
        let membership: String = row.try_get("membership")?;
        Ok(Customer {
            id: row.try_get("id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            birth_date: row.try_get::<Option<String>, _>("birth_date").ok().flatten(),
            membership: membership.parse()?,
        })
    }

    pub(crate) fn address_from_row(row: &AnyRow) -> ApiResult<Address> {
        Ok(Address {
            id: row.try_get("id")?,
            street: row.try_get("street")?,
            city: row.try_get("city")?,
            zip_code: row.try_get::<Option<String>, _>("zip_code").ok().flatten(),
            customer_id: row.try_get("customer_id")?,
        })
    }
}

#[async_trait::async_trait]
impl CustomerRepository for Database {
    async fn create_customer(&self, draft: &CustomerDraft) -> ApiResult<Customer> {
        let row = sqlx::query(&format!(
            "INSERT INTO customers (first_name, last_name, email, phone, birth_date, membership)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {}",
            CUSTOMER_COLUMNS
        ))
        .bind(&draft.first_name)
        .bind(&draft.last_name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.birth_date)
        .bind(draft.membership.code())
        .fetch_one(&self.pool)
        .await?;

        let customer = Self::customer_from_row(&row)?;
        tracing::info!(
            "Customer created: id={}, email={}",
            customer.id,
            customer.email
        );
        Ok(customer)
    }

    async fn get_customer_by_id(&self, id: i64) -> ApiResult<Option<Customer>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM customers WHERE id = ?",
            CUSTOMER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::customer_from_row).transpose()
    }

    async fn get_customer_by_email(&self, email: &str) -> ApiResult<Option<Customer>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM customers WHERE email = ?",
            CUSTOMER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::customer_from_row).transpose()
    }

    async fn list_customers(&self, limit: i64, offset: i64) -> ApiResult<(Vec<Customer>, i64)> {
        let count_row = sqlx::query("SELECT COUNT(*) as count FROM customers")
            .fetch_one(&self.pool)
            .await?;
        let total_count: i64 = count_row.try_get("count")?;

        let rows = sqlx::query(&format!(
            "SELECT {} FROM customers
             ORDER BY first_name, last_name, id
             LIMIT ? OFFSET ?",
            CUSTOMER_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let customers = rows
            .iter()
            .map(Self::customer_from_row)
            .collect::<ApiResult<Vec<_>>>()?;

        Ok((customers, total_count))
    }

    async fn update_customer(&self, id: i64, draft: &CustomerDraft) -> ApiResult<Customer> {
        let row = sqlx::query(&format!(
            "UPDATE customers
             SET first_name = ?, last_name = ?, email = ?, phone = ?, birth_date = ?, membership = ?
             WHERE id = ?
             RETURNING {}",
            CUSTOMER_COLUMNS
        ))
        .bind(&draft.first_name)
        .bind(&draft.last_name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.birth_date)
        .bind(draft.membership.code())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Customer {} not found", id)))?;

        tracing::info!("Customer updated: id={}", id);
        Self::customer_from_row(&row)
    }

    async fn delete_customer(&self, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Customer {} not found", id)));
        }

        tracing::info!("Customer deleted: id={}", id);
        Ok(())
    }

    async fn count_orders_for_customer(&self, id: i64) -> ApiResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM orders WHERE customer_id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }

    async fn update_memberships(&self, memberships: &[(i64, Membership)]) -> ApiResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut updated = 0;

        for (id, membership) in memberships {
            let result = sqlx::query("UPDATE customers SET membership = ? WHERE id = ?")
                .bind(membership.code())
                .bind(*id)
                .execute(&mut *tx)
                .await?;

            if result.rows_affected() == 0 {
                return Err(ApiError::NotFound(format!("Customer {} not found", id)));
            }
            updated += result.rows_affected();
        }

        tx.commit().await?;
        tracing::info!("Membership updated for {} customers", updated);
        Ok(updated)
    }

    async fn create_address(
        &self,
        customer_id: i64,
        request: &CreateAddressRequest,
    ) -> ApiResult<Address> {
        let row = sqlx::query(
            "INSERT INTO addresses (street, city, zip_code, customer_id)
             VALUES (?, ?, ?, ?)
             RETURNING id, street, city, zip_code, customer_id",
        )
        .bind(request.street.trim())
        .bind(request.city.trim())
        .bind(request.zip_code.as_deref().map(str::trim))
        .bind(customer_id)
        .fetch_one(&self.pool)
        .await?;

        Self::address_from_row(&row)
    }

    async fn list_addresses(&self, customer_id: i64) -> ApiResult<Vec<Address>> {
        let rows = sqlx::query(
            "SELECT id, street, city, zip_code, customer_id
             FROM addresses
             WHERE customer_id = ?
             ORDER BY id",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::address_from_row).collect()
    }

    async fn delete_address(&self, customer_id: i64, address_id: i64) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = ? AND customer_id = ?")
            .bind(address_id)
            .bind(customer_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
