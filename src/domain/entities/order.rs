use crate::domain::entities::content_type::EntityKind;
use crate::domain::entities::money::Money;
use crate::domain::entities::tag::Taggable;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every order carries at least this many line items.
pub const MIN_ORDER_ITEMS: usize = 1;
/// Upper bound on line items per order.
pub const MAX_ORDER_ITEMS: usize = 10;
/// Quantities share the positive small-integer column width.
pub const MAX_QUANTITY: i64 = 32_767;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    #[serde(rename = "P")]
    Pending,
    #[serde(rename = "C")]
    Complete,
    #[serde(rename = "F")]
    Failed,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "P",
            PaymentStatus::Complete => "C",
            PaymentStatus::Failed => "F",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Complete => "Complete",
            PaymentStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "pending" => Ok(PaymentStatus::Pending),
            "c" | "complete" => Ok(PaymentStatus::Complete),
            "f" | "failed" => Ok(PaymentStatus::Failed),
            other => Err(DomainError::ValidationError(format!(
                "Invalid payment status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub placed_at: String,
    pub payment_status: PaymentStatus,
    pub customer_id: i64,
}

impl Taggable for Order {
    const KIND: EntityKind = EntityKind::Order;

    fn object_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Money,
}

impl Taggable for OrderItem {
    const KIND: EntityKind = EntityKind::OrderItem;

    fn object_id(&self) -> i64 {
        self.id
    }
}

/// Order together with its line items
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

// ========== DTOs (Data Transfer Objects) ==========

#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: i64,
    /// Falls back to the product's current price when omitted
    pub unit_price: Option<Money>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: i64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub items: Vec<OrderItemRequest>,
}

impl CreateOrderRequest {
    pub fn validate(&self) -> DomainResult<()> {
        if self.items.len() < MIN_ORDER_ITEMS || self.items.len() > MAX_ORDER_ITEMS {
            return Err(DomainError::ValidationError(format!(
                "An order must have between {} and {} items, got {}",
                MIN_ORDER_ITEMS,
                MAX_ORDER_ITEMS,
                self.items.len()
            )));
        }
        for item in &self.items {
            validate_quantity(item.quantity)?;
            if let Some(price) = item.unit_price {
                price.ensure_between("unit_price", Money::from_cents(0))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePaymentStatusRequest {
    pub payment_status: PaymentStatus,
}

pub fn validate_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 1 || quantity > MAX_QUANTITY {
        return Err(DomainError::ValidationError(format!(
            "quantity must be between 1 and {}",
            MAX_QUANTITY
        )));
    }
    Ok(())
}
