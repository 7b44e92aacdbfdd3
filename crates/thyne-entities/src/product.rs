use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use thyne_core::ConstraintViolation;

use crate::SeedDocument;

/// A catalog item.
///
/// The `products` collection carries a `$jsonSchema` validator; `validate`
/// applies the same bounds client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub images: Vec<String>,
    pub category: String,
    pub subcategory: String,
    pub metal_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stone_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub stock_quantity: i32,
    pub rating: f64,
    pub review_count: i32,
    pub tags: Vec<String>,
    pub is_available: bool,
    pub is_featured: bool,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for Product {
    const COLLECTION: &'static str = "products";

    fn validate(&self) -> Result<(), ConstraintViolation> {
        let name_len = self.name.chars().count();
        if !(2..=200).contains(&name_len) {
            return Err(ConstraintViolation::new(
                "name",
                format!("length {} outside 2..=200", name_len),
            ));
        }
        let desc_len = self.description.chars().count();
        if !(10..=2000).contains(&desc_len) {
            return Err(ConstraintViolation::new(
                "description",
                format!("length {} outside 10..=2000", desc_len),
            ));
        }
        if self.price < 0.0 {
            return Err(ConstraintViolation::new("price", "negative"));
        }
        if self.images.is_empty() {
            return Err(ConstraintViolation::new("images", "empty"));
        }
        if self.stock_quantity < 0 {
            return Err(ConstraintViolation::new("stockQuantity", "negative"));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ConstraintViolation::new(
                "rating",
                format!("{} outside 0..=5", self.rating),
            ));
        }
        if self.review_count < 0 {
            return Err(ConstraintViolation::new("reviewCount", "negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        let now = bson::DateTime::now();
        Product {
            id: None,
            name: "Diamond Solitaire Ring".to_string(),
            description: "A stunning solitaire diamond ring set in 18K white gold.".to_string(),
            price: 85000.0,
            original_price: Some(100000.0),
            images: vec!["https://images.example.com/ring.jpg".to_string()],
            category: "Rings".to_string(),
            subcategory: "Engagement".to_string(),
            metal_type: "18K White Gold".to_string(),
            stone_type: Some("Diamond".to_string()),
            weight: Some(3.5),
            size: Some("6".to_string()),
            stock_quantity: 5,
            rating: 4.8,
            review_count: 124,
            tags: vec!["diamond".to_string()],
            is_available: true,
            is_featured: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_valid_product_passes() {
        assert!(sample_product().validate().is_ok());
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let mut product = sample_product();
        product.stock_quantity = -1;
        assert_eq!(product.validate().unwrap_err().field, "stockQuantity");
    }

    #[test]
    fn test_empty_images_are_rejected() {
        let mut product = sample_product();
        product.images.clear();
        assert_eq!(product.validate().unwrap_err().field, "images");
    }

    #[test]
    fn test_rating_above_five_is_rejected() {
        let mut product = sample_product();
        product.rating = 5.1;
        assert_eq!(product.validate().unwrap_err().field, "rating");
    }

    #[test]
    fn test_optional_fields_are_omitted_when_absent() {
        let mut product = sample_product();
        product.original_price = None;
        product.size = None;
        let doc = bson::to_document(&product).unwrap();
        assert!(!doc.contains_key("originalPrice"));
        assert!(!doc.contains_key("size"));
        assert!(doc.contains_key("metalType"));
        assert!(doc.contains_key("stockQuantity"));
    }
}
