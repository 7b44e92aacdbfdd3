use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::SeedDocument;

/// Products a user has saved for later.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub product_ids: Vec<ObjectId>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for Wishlist {
    const COLLECTION: &'static str = "wishlist";
}
