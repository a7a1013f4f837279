use crate::{
    application::services::referenced_elsewhere,
    domain::entities::*,
    domain::ports::customer_repository::CustomerRepository,
    infrastructure::http::middleware::error::{ApiError, ApiResult},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct CustomerService {
    customer_repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repo }
    }

    async fn ensure_email_available(&self, email: &str, owner: Option<i64>) -> ApiResult<()> {
        if let Some(existing) = self.customer_repo.get_customer_by_email(email).await? {
            if Some(existing.id) != owner {
                return Err(ApiError::Conflict(
                    "A customer with this email already exists".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub async fn create_customer(&self, request: CreateCustomerRequest) -> ApiResult<Customer> {
        let draft = request.into_draft()?;
        self.ensure_email_available(&draft.email, None).await?;
        self.customer_repo.create_customer(&draft).await
    }

    pub async fn get_customer(&self, id: i64) -> ApiResult<Customer> {
        self.customer_repo
            .get_customer_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Customer {} not found", id)))
    }

    pub async fn list_customers(&self, limit: i64, offset: i64) -> ApiResult<(Vec<Customer>, i64)> {
        self.customer_repo.list_customers(limit, offset).await
    }

    pub async fn update_customer(&self, id: i64, request: UpdateCustomerRequest) -> ApiResult<Customer> {
        let current = self.get_customer(id).await?;
        let draft = request.apply_to(&current)?;
        if draft.email != current.email {
            self.ensure_email_available(&draft.email, Some(id)).await?;
        }
        self.customer_repo.update_customer(id, &draft).await
    }

    /// Refused while the customer has orders; addresses are removed with it
    pub async fn delete_customer(&self, id: i64) -> ApiResult<()> {
        self.get_customer(id).await?;

        let orders = self.customer_repo.count_orders_for_customer(id).await?;
        if orders > 0 {
            return Err(referenced_elsewhere("customer", id, orders));
        }

        self.customer_repo.delete_customer(id).await
    }

    pub async fn add_address(
        &self,
        customer_id: i64,
        request: CreateAddressRequest,
    ) -> ApiResult<Address> {
        request.validate()?;
        self.get_customer(customer_id).await?;
        self.customer_repo.create_address(customer_id, &request).await
    }

    pub async fn list_addresses(&self, customer_id: i64) -> ApiResult<Vec<Address>> {
        self.get_customer(customer_id).await?;
        self.customer_repo.list_addresses(customer_id).await
    }

    pub async fn delete_address(&self, customer_id: i64, address_id: i64) -> ApiResult<()> {
        if !self
            .customer_repo
            .delete_address(customer_id, address_id)
            .await?
        {
            return Err(ApiError::NotFound(format!(
                "Address {} not found for customer {}",
                address_id, customer_id
            )));
        }
        Ok(())
    }
}
