use bson::oid::ObjectId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thyne_core::ConstraintViolation;

use crate::SeedDocument;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Postal address embedded in a user document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub is_default: bool,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

/// A registered customer account.
///
/// The `users` collection carries a `$jsonSchema` validator; `validate`
/// applies the same bounds client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Bcrypt hash, never the plaintext password.
    pub password: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub is_admin: bool,
    pub addresses: Vec<Address>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for User {
    const COLLECTION: &'static str = "users";

    fn validate(&self) -> Result<(), ConstraintViolation> {
        let name_len = self.name.chars().count();
        if !(2..=100).contains(&name_len) {
            return Err(ConstraintViolation::new(
                "name",
                format!("length {} outside 2..=100", name_len),
            ));
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(ConstraintViolation::new(
                "email",
                format!("'{}' does not match the email pattern", self.email),
            ));
        }
        let phone_len = self.phone.chars().count();
        if !(10..=15).contains(&phone_len) {
            return Err(ConstraintViolation::new(
                "phone",
                format!("length {} outside 10..=15", phone_len),
            ));
        }
        if self.password.chars().count() < 6 {
            return Err(ConstraintViolation::new(
                "password",
                "shorter than 6 characters",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let now = bson::DateTime::now();
        User {
            id: None,
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@example.com".to_string(),
            phone: "+1234567890".to_string(),
            password: "$2a$12$5U6OxbrjSw9qkPUQ4MPTsOz0vAoF088p/d4GJaVNPJRtkBVjTQXq6".to_string(),
            is_active: true,
            is_verified: true,
            is_admin: false,
            addresses: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_valid_user_passes() {
        assert!(sample_user().validate().is_ok());
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        let mut user = sample_user();
        user.email = "sarah.johnson.example.com".to_string();
        let err = user.validate().unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_short_name_is_rejected() {
        let mut user = sample_user();
        user.name = "S".to_string();
        assert_eq!(user.validate().unwrap_err().field, "name");
    }

    #[test]
    fn test_short_phone_is_rejected() {
        let mut user = sample_user();
        user.phone = "12345".to_string();
        assert_eq!(user.validate().unwrap_err().field, "phone");
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let doc = bson::to_document(&sample_user()).unwrap();
        assert!(doc.contains_key("isActive"));
        assert!(doc.contains_key("isVerified"));
        assert!(doc.contains_key("createdAt"));
        // no _id until the server assigns one
        assert!(!doc.contains_key("_id"));
    }
}
