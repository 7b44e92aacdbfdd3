//! Storage-layer `$jsonSchema` validators
//!
//! Only `users` and `products` are validated at the storage layer; the
//! remaining collections are created plain. The client-side
//! `SeedDocument::validate` checks mirror these rules so a bad fixture
//! is caught before the server would reject it.

use bson::{doc, Document};

pub fn user_validator() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["name", "email", "phone", "password"],
            "properties": {
                "name": { "bsonType": "string", "minLength": 2, "maxLength": 100 },
                "email": {
                    "bsonType": "string",
                    "pattern": r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
                },
                "phone": { "bsonType": "string", "minLength": 10, "maxLength": 15 },
                "password": { "bsonType": "string", "minLength": 6 },
                "isActive": { "bsonType": "bool" },
                "isVerified": { "bsonType": "bool" }
            }
        }
    }
}

pub fn product_validator() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": [
                "name", "description", "price", "images",
                "category", "subcategory", "metalType", "stockQuantity"
            ],
            "properties": {
                "name": { "bsonType": "string", "minLength": 2, "maxLength": 200 },
                "description": { "bsonType": "string", "minLength": 10, "maxLength": 2000 },
                "price": { "bsonType": "double", "minimum": 0 },
                "images": {
                    "bsonType": "array",
                    "minItems": 1,
                    "items": { "bsonType": "string" }
                },
                "category": { "bsonType": "string" },
                "subcategory": { "bsonType": "string" },
                "metalType": { "bsonType": "string" },
                "stockQuantity": { "bsonType": "int", "minimum": 0 },
                "rating": { "bsonType": "double", "minimum": 0, "maximum": 5 },
                "reviewCount": { "bsonType": "int", "minimum": 0 },
                "isAvailable": { "bsonType": "bool" },
                "isFeatured": { "bsonType": "bool" }
            }
        }
    }
}

/// Collections created with a validator, in creation order.
pub fn validated_collections() -> Vec<(&'static str, Document)> {
    vec![
        ("users", user_validator()),
        ("products", product_validator()),
    ]
}

/// Collections created without validation rules.
pub const PLAIN_COLLECTIONS: &[&str] = &[
    "carts",
    "orders",
    "reviews",
    "guest_sessions",
    "coupons",
    "wishlist",
    "loyalty_programs",
    "vouchers",
    "badges",
    "referral_programs",
];

#[cfg(test)]
mod tests {
    use super::*;
    use bson::Bson;

    fn required_fields(validator: &Document) -> Vec<String> {
        validator
            .get_document("$jsonSchema")
            .unwrap()
            .get_array("required")
            .unwrap()
            .iter()
            .map(|b| b.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_user_validator_requires_identity_fields() {
        let required = required_fields(&user_validator());
        for field in ["name", "email", "phone", "password"] {
            assert!(required.contains(&field.to_string()), "missing {field}");
        }
    }

    #[test]
    fn test_user_email_pattern_requires_at_sign() {
        let validator = user_validator();
        let pattern = validator
            .get_document("$jsonSchema")
            .unwrap()
            .get_document("properties")
            .unwrap()
            .get_document("email")
            .unwrap()
            .get_str("pattern")
            .unwrap();
        assert!(pattern.contains('@'));
        let re = regex::Regex::new(pattern).unwrap();
        assert!(re.is_match("sarah.johnson@example.com"));
        assert!(!re.is_match("sarah.johnson.example.com"));
    }

    #[test]
    fn test_product_stock_quantity_bounds() {
        let validator = product_validator();
        let stock = validator
            .get_document("$jsonSchema")
            .unwrap()
            .get_document("properties")
            .unwrap()
            .get_document("stockQuantity")
            .unwrap();
        assert_eq!(stock.get_str("bsonType").unwrap(), "int");
        assert_eq!(stock.get("minimum"), Some(&Bson::Int32(0)));
    }

    #[test]
    fn test_every_seeded_collection_is_listed_once() {
        let mut names: Vec<&str> = PLAIN_COLLECTIONS.to_vec();
        names.extend(validated_collections().iter().map(|(n, _)| *n));
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count, "duplicate collection name");
        assert_eq!(count, 12);
    }
}
