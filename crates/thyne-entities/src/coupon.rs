use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::SeedDocument;

/// How a coupon or voucher discounts an order total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// A discount code redeemable at checkout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub code: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    pub value: f64,
    pub min_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<f64>,
    pub usage_limit: i32,
    pub used_count: i32,
    pub is_active: bool,
    pub valid_from: bson::DateTime,
    pub valid_until: bson::DateTime,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for Coupon {
    const COLLECTION: &'static str = "coupons";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_type_serializes_lowercase() {
        assert_eq!(
            bson::to_bson(&DiscountType::Percentage).unwrap(),
            bson::Bson::String("percentage".to_string())
        );
        assert_eq!(
            bson::to_bson(&DiscountType::Fixed).unwrap(),
            bson::Bson::String("fixed".to_string())
        );
    }

    #[test]
    fn test_coupon_type_field_name() {
        let now = bson::DateTime::now();
        let coupon = Coupon {
            id: None,
            code: "FIRST10".to_string(),
            name: "First Order Discount".to_string(),
            description: "10% off on your first order".to_string(),
            discount_type: DiscountType::Percentage,
            value: 10.0,
            min_amount: 1000.0,
            max_discount: Some(5000.0),
            usage_limit: 1000,
            used_count: 0,
            is_active: true,
            valid_from: now,
            valid_until: now,
            created_at: now,
            updated_at: now,
        };
        let doc = bson::to_document(&coupon).unwrap();
        assert_eq!(doc.get_str("type").unwrap(), "percentage");
        assert!(doc.contains_key("minAmount"));
        assert!(doc.contains_key("validUntil"));
    }
}
