use crate::domain::entities::content_type::EntityKind;
use crate::domain::entities::tag::Taggable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: i64,
    pub created_at: String,
}

impl Taggable for Cart {
    const KIND: EntityKind = EntityKind::Cart;

    fn object_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub cart_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl Taggable for CartItem {
    const KIND: EntityKind = EntityKind::CartItem;

    fn object_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CartWithItems {
    #[serde(flatten)]
    pub cart: Cart,
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddCartItemRequest {
    pub product_id: i64,
    pub quantity: i64,
}
