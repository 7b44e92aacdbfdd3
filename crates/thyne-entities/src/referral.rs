use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::SeedDocument;

/// Singleton configuration for the refer-a-friend program.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralProgram {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub is_active: bool,
    /// Points credited to the referrer after the referee's first order.
    pub referrer_reward: i64,
    pub referee_reward: i64,
    pub min_order_value: f64,
    pub max_referrals: i32,
    pub validity_days: i32,
    pub description: String,
    pub terms: Vec<String>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for ReferralProgram {
    const COLLECTION: &'static str = "referral_programs";
}
