//! Best-effort index creation
//!
//! Every index the platform queries against is declared here in one
//! table. Creation tolerates conflicts with pre-existing indexes: those
//! are logged and reported as warnings, never fatal, so a partially
//! indexed database converges over repeated runs.

use std::time::Duration;

use bson::{doc, Document};
use mongodb::error::ErrorKind;
use mongodb::options::IndexOptions;
use mongodb::{Database, IndexModel};
use tracing::{debug, warn};

/// Declarative index definition for one collection.
#[derive(Clone, Debug)]
pub struct IndexSpec {
    pub collection: &'static str,
    pub keys: Document,
    pub unique: bool,
    /// TTL expiry. Zero seconds means documents expire at the stored
    /// `expiresAt` timestamp itself, with no grace period.
    pub expire_after: Option<Duration>,
}

impl IndexSpec {
    fn plain(collection: &'static str, keys: Document) -> Self {
        Self {
            collection,
            keys,
            unique: false,
            expire_after: None,
        }
    }

    fn unique(collection: &'static str, keys: Document) -> Self {
        Self {
            collection,
            keys,
            unique: true,
            expire_after: None,
        }
    }

    fn model(&self) -> IndexModel {
        let mut options = IndexOptions::builder().build();
        if self.unique {
            options.unique = Some(true);
        }
        if let Some(ttl) = self.expire_after {
            options.expire_after = Some(ttl);
        }
        IndexModel::builder()
            .keys(self.keys.clone())
            .options(options)
            .build()
    }
}

/// The full index table, mirroring what the query paths rely on.
pub fn index_specs() -> Vec<IndexSpec> {
    vec![
        // Users
        IndexSpec::unique("users", doc! { "email": 1 }),
        IndexSpec::unique("users", doc! { "phone": 1 }),
        IndexSpec::plain("users", doc! { "isActive": 1 }),
        // Products
        IndexSpec::plain("products", doc! { "name": "text", "description": "text" }),
        IndexSpec::plain("products", doc! { "category": 1, "subcategory": 1 }),
        IndexSpec::plain("products", doc! { "isAvailable": 1, "isFeatured": 1 }),
        IndexSpec::plain("products", doc! { "price": 1 }),
        IndexSpec::plain("products", doc! { "rating": -1 }),
        // Orders
        IndexSpec::unique("orders", doc! { "orderNumber": 1 }),
        IndexSpec::plain("orders", doc! { "userId": 1 }),
        IndexSpec::plain("orders", doc! { "guestSessionId": 1 }),
        IndexSpec::plain("orders", doc! { "status": 1 }),
        IndexSpec::plain("orders", doc! { "createdAt": -1 }),
        // Coupons
        IndexSpec::unique("coupons", doc! { "code": 1 }),
        IndexSpec::plain("coupons", doc! { "isActive": 1 }),
        // Reviews
        IndexSpec::plain("reviews", doc! { "productId": 1 }),
        IndexSpec::plain("reviews", doc! { "userId": 1 }),
        IndexSpec::plain("reviews", doc! { "rating": -1 }),
        // Guest sessions
        IndexSpec::unique("guest_sessions", doc! { "sessionId": 1 }),
        IndexSpec {
            collection: "guest_sessions",
            keys: doc! { "expiresAt": 1 },
            unique: false,
            expire_after: Some(Duration::from_secs(0)),
        },
        // Loyalty programs
        IndexSpec::unique("loyalty_programs", doc! { "userId": 1 }),
        IndexSpec::plain("loyalty_programs", doc! { "tier": 1 }),
        // Vouchers
        IndexSpec::unique("vouchers", doc! { "code": 1 }),
        IndexSpec::plain("vouchers", doc! { "type": 1 }),
        IndexSpec::plain("vouchers", doc! { "isActive": 1 }),
        // Carts
        IndexSpec::plain("carts", doc! { "userId": 1 }),
        IndexSpec::plain("carts", doc! { "guestSessionId": 1 }),
        // Wishlist
        IndexSpec::plain("wishlist", doc! { "userId": 1 }),
    ]
}

// IndexOptionsConflict and IndexKeySpecsConflict: the index exists with
// different options or the same name covers different keys.
const INDEX_CONFLICT_CODES: &[i32] = &[85, 86];

fn command_error_code(err: &mongodb::error::Error) -> Option<i32> {
    match &*err.kind {
        ErrorKind::Command(e) => Some(e.code),
        _ => None,
    }
}

/// Attempt to create every index in the table.
///
/// Returns the warnings produced along the way; an empty list means all
/// indexes were created or already matched.
pub async fn ensure_indexes(db: &Database) -> Vec<String> {
    let mut warnings = Vec::new();

    for spec in index_specs() {
        let collection = db.collection::<Document>(spec.collection);
        match collection.create_index(spec.model()).await {
            Ok(result) => {
                debug!(
                    collection = spec.collection,
                    index = %result.index_name,
                    "index ready"
                );
            }
            Err(err) => {
                let detail = match command_error_code(&err) {
                    Some(code) if INDEX_CONFLICT_CODES.contains(&code) => format!(
                        "{}: index for {} already exists with different options (code {})",
                        spec.collection, spec.keys, code
                    ),
                    _ => format!(
                        "{}: failed to create index for {}: {}",
                        spec.collection, spec.keys, err
                    ),
                };
                warn!("{}", detail);
                warnings.push(detail);
            }
        }
    }

    warnings
}
