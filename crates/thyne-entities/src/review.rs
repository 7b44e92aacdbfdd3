use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::SeedDocument;

/// A customer review of a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub user_name: String,
    pub product_id: ObjectId,
    /// 1 to 5 stars.
    pub rating: i32,
    pub comment: String,
    pub images: Vec<String>,
    pub is_verified: bool,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for Review {
    const COLLECTION: &'static str = "reviews";
}
