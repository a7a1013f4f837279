//! Descriptors for the entity kinds that generic relations can point at.
//!
//! A tagged row stores `(EntityKind, object id)` instead of a foreign key, so
//! the kind is the only thing telling a reader which table the id belongs to.

use crate::domain::entities::{
    Address, Cart, CartItem, Collection, Customer, Order, OrderItem, Product, Promotion,
};
use crate::domain::errors::DomainError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const APP_LABEL: &str = "store";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Collection,
    Product,
    Promotion,
    Customer,
    Order,
    OrderItem,
    Address,
    Cart,
    CartItem,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Collection,
        EntityKind::Product,
        EntityKind::Promotion,
        EntityKind::Customer,
        EntityKind::Order,
        EntityKind::OrderItem,
        EntityKind::Address,
        EntityKind::Cart,
        EntityKind::CartItem,
    ];

    /// Lowercase model name, e.g. `orderitem`
    pub fn model_name(&self) -> &'static str {
        match self {
            EntityKind::Collection => "collection",
            EntityKind::Product => "product",
            EntityKind::Promotion => "promotion",
            EntityKind::Customer => "customer",
            EntityKind::Order => "order",
            EntityKind::OrderItem => "orderitem",
            EntityKind::Address => "address",
            EntityKind::Cart => "cart",
            EntityKind::CartItem => "cartitem",
        }
    }

    pub fn app_label(&self) -> &'static str {
        APP_LABEL
    }

    /// Persisted descriptor, e.g. `store.product`
    pub fn descriptor(&self) -> &'static str {
        match self {
            EntityKind::Collection => "store.collection",
            EntityKind::Product => "store.product",
            EntityKind::Promotion => "store.promotion",
            EntityKind::Customer => "store.customer",
            EntityKind::Order => "store.order",
            EntityKind::OrderItem => "store.orderitem",
            EntityKind::Address => "store.address",
            EntityKind::Cart => "store.cart",
            EntityKind::CartItem => "store.cartitem",
        }
    }

    /// Table holding rows of this kind
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Collection => "collections",
            EntityKind::Product => "products",
            EntityKind::Promotion => "promotions",
            EntityKind::Customer => "customers",
            EntityKind::Order => "orders",
            EntityKind::OrderItem => "order_items",
            EntityKind::Address => "addresses",
            EntityKind::Cart => "carts",
            EntityKind::CartItem => "cart_items",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor())
    }
}

/// Accepts the full descriptor (`store.product`) or the bare model name
/// (`product`, `Product`, `order_item`).
impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "");
        let model = match normalized.split_once('.') {
            Some((app, model)) if app == APP_LABEL => model.to_string(),
            Some(_) => {
                return Err(DomainError::ValidationError(format!(
                    "unknown entity kind: {}",
                    s
                )))
            }
            None => normalized,
        };

        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.model_name() == model)
            .ok_or_else(|| DomainError::ValidationError(format!("unknown entity kind: {}", s)))
    }
}

impl Serialize for EntityKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.descriptor())
    }
}

impl<'de> Deserialize<'de> for EntityKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|e: DomainError| de::Error::custom(e.to_string()))
    }
}

/// The entity a tagged row points at, loaded from its own table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "object", rename_all = "snake_case")]
pub enum ContentObject {
    Collection(Collection),
    Product(Product),
    Promotion(Promotion),
    Customer(Customer),
    Order(Order),
    OrderItem(OrderItem),
    Address(Address),
    Cart(Cart),
    CartItem(CartItem),
}

impl ContentObject {
    pub fn kind(&self) -> EntityKind {
        match self {
            ContentObject::Collection(_) => EntityKind::Collection,
            ContentObject::Product(_) => EntityKind::Product,
            ContentObject::Promotion(_) => EntityKind::Promotion,
            ContentObject::Customer(_) => EntityKind::Customer,
            ContentObject::Order(_) => EntityKind::Order,
            ContentObject::OrderItem(_) => EntityKind::OrderItem,
            ContentObject::Address(_) => EntityKind::Address,
            ContentObject::Cart(_) => EntityKind::Cart,
            ContentObject::CartItem(_) => EntityKind::CartItem,
        }
    }
}
