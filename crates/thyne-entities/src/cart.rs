use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::SeedDocument;

/// One product reference in a cart or guest session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ObjectId,
    pub quantity: i32,
    pub added_at: bson::DateTime,
}

/// A shopping cart, owned by either a user or a guest session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_session_id: Option<String>,
    pub items: Vec<CartItem>,
    pub discount: f64,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for Cart {
    const COLLECTION: &'static str = "carts";
}
