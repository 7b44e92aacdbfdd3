use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::SeedDocument;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Earned,
    Redeemed,
}

/// One ledger entry in a loyalty account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyTransaction {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Negative for redemptions.
    pub points: i64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<ObjectId>,
    pub created_at: bson::DateTime,
}

/// Loyalty account, one per user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyProgram {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub total_points: i64,
    pub current_points: i64,
    pub tier: LoyaltyTier,
    pub login_streak: i32,
    pub last_login_date: bson::DateTime,
    pub total_spent: f64,
    pub total_orders: i32,
    pub transactions: Vec<LoyaltyTransaction>,
    /// Ids of vouchers redeemed against this account.
    pub vouchers: Vec<ObjectId>,
    pub joined_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for LoyaltyProgram {
    const COLLECTION: &'static str = "loyalty_programs";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_and_kind_serialize_lowercase() {
        assert_eq!(
            bson::to_bson(&LoyaltyTier::Silver).unwrap(),
            bson::Bson::String("silver".to_string())
        );
        assert_eq!(
            bson::to_bson(&TransactionKind::Redeemed).unwrap(),
            bson::Bson::String("redeemed".to_string())
        );
    }
}
