use bson::oid::ObjectId;
use bson::Document;
use serde::{Deserialize, Serialize};

use crate::coupon::DiscountType;
use crate::SeedDocument;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoucherKind {
    Loyalty,
    Welcome,
    Referral,
}

/// A redeemable reward voucher with global and per-user caps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub code: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: VoucherKind,
    pub discount_type: DiscountType,
    pub value: f64,
    pub min_order_value: f64,
    pub max_discount: f64,
    /// Loyalty points spent to claim this voucher; 0 for granted vouchers.
    pub points_cost: i64,
    pub max_redemptions: i32,
    pub max_per_user: i32,
    pub valid_from: bson::DateTime,
    pub valid_until: bson::DateTime,
    pub usage_conditions: Document,
    pub is_active: bool,
    pub image_url: String,
    pub terms: Vec<String>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for Voucher {
    const COLLECTION: &'static str = "vouchers";
}
