use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::SeedDocument;

/// An anonymous shopping session.
///
/// Documents are auto-purged by a TTL index once `expiresAt` passes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestSession {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub cart_items: Vec<CartItem>,
    pub created_at: bson::DateTime,
    pub last_activity: bson::DateTime,
    pub expires_at: bson::DateTime,
}

impl SeedDocument for GuestSession {
    const COLLECTION: &'static str = "guest_sessions";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_contact_fields_are_omitted() {
        let now = bson::DateTime::now();
        let session = GuestSession {
            id: None,
            session_id: "guest_1_001".to_string(),
            email: None,
            phone: Some("+1234567899".to_string()),
            name: None,
            cart_items: vec![],
            created_at: now,
            last_activity: now,
            expires_at: now,
        };
        let doc = bson::to_document(&session).unwrap();
        assert!(!doc.contains_key("email"));
        assert!(!doc.contains_key("name"));
        assert_eq!(doc.get_str("phone").unwrap(), "+1234567899");
        assert!(doc.contains_key("expiresAt"));
    }
}
