//! Integration tests against a live MongoDB instance.
//!
//! The battery runs only when THYNE_TEST_MONGODB_URI points at a server
//! (e.g. mongodb://localhost:27017); without it every test skips with a
//! notice. Each test works in its own database and drops it afterwards.

use std::collections::HashMap;

use bson::{doc, Document};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{Database, IndexModel};

use thyne_entities::SeedDocument;
use thyne_migrations::{ensure_indexes, fixtures, SeedStrategy, Seeder};

async fn test_database(suffix: &str) -> anyhow::Result<Option<Database>> {
    let Ok(uri) = std::env::var("THYNE_TEST_MONGODB_URI") else {
        println!("⏭️  Skipping: THYNE_TEST_MONGODB_URI not set");
        return Ok(None);
    };
    let name = format!("thyne_seed_test_{suffix}");
    let db = thyne_database::establish_connection(&uri, &name).await?;
    // Start from a clean slate in case a previous run was interrupted
    db.drop().await?;
    Ok(Some(db))
}

async fn collection_counts(db: &Database) -> anyhow::Result<HashMap<String, u64>> {
    let mut counts = HashMap::new();
    for name in db.list_collection_names().await? {
        let count = db
            .collection::<Document>(&name)
            .count_documents(doc! {})
            .await?;
        counts.insert(name, count);
    }
    Ok(counts)
}

#[tokio::test]
async fn test_seed_twice_leaves_counts_unchanged() -> anyhow::Result<()> {
    let Some(db) = test_database("idempotent").await? else {
        return Ok(());
    };
    let now = Utc::now();

    let first = Seeder::new(db.clone(), now).run().await;
    assert!(!first.has_failures(), "first run failed:\n{first}");
    assert!(first.total_inserted() > 0);

    let counts = collection_counts(&db).await?;
    assert_eq!(counts["users"], 3);
    assert!(counts["products"] >= 4);
    assert!(counts["coupons"] >= 2);
    assert_eq!(counts["orders"], 3);
    assert_eq!(counts["guest_sessions"], 2);

    let second = Seeder::new(db.clone(), now).run().await;
    assert!(!second.has_failures(), "second run failed:\n{second}");
    assert_eq!(second.total_inserted(), 0, "second run inserted documents");
    assert_eq!(collection_counts(&db).await?, counts);

    db.drop().await?;
    Ok(())
}

#[tokio::test]
async fn test_keyed_seeding_inserts_only_absent_keys() -> anyhow::Result<()> {
    let Some(db) = test_database("keyed").await? else {
        return Ok(());
    };
    let now = Utc::now();
    let seeder = Seeder::new(db.clone(), now);

    // One fixture's key already exists; only the others may be inserted
    let users = fixtures::users(now);
    let collection = db.collection::<Document>("users");
    collection
        .insert_one(bson::to_document(&users[0])?)
        .await?;

    let inserted = seeder
        .seed_collection(&users, SeedStrategy::IfKeyAbsent { field: "email" })
        .await?;
    assert_eq!(inserted, (users.len() - 1) as u64);
    assert_eq!(
        collection.count_documents(doc! {}).await?,
        users.len() as u64
    );

    // Empty candidate list is a no-op
    let none: Vec<thyne_entities::User> = vec![];
    let inserted = seeder
        .seed_collection(&none, SeedStrategy::IfKeyAbsent { field: "email" })
        .await?;
    assert_eq!(inserted, 0);

    db.drop().await?;
    Ok(())
}

#[tokio::test]
async fn test_unkeyed_seeding_skips_nonempty_collection() -> anyhow::Result<()> {
    let Some(db) = test_database("unkeyed").await? else {
        return Ok(());
    };
    let now = Utc::now();
    let seeder = Seeder::new(db.clone(), now);

    let collection = db.collection::<Document>("reviews");
    collection.insert_one(doc! { "marker": true }).await?;

    let inserted = seeder
        .seed_collection(&fixtures::reviews(now), SeedStrategy::IfCollectionEmpty)
        .await?;
    assert_eq!(inserted, 0, "non-empty collection must not be reseeded");
    assert_eq!(collection.count_documents(doc! {}).await?, 1);

    db.drop().await?;
    Ok(())
}

#[tokio::test]
async fn test_schema_validation_rejects_bad_documents() -> anyhow::Result<()> {
    let Some(db) = test_database("schema").await? else {
        return Ok(());
    };
    let now = Utc::now();
    let seeder = Seeder::new(db.clone(), now);
    seeder.ensure_collections().await?;

    let users = db.collection::<Document>("users");
    let bad_email = doc! {
        "name": "Bad Email",
        "email": "not-an-email",
        "phone": "+1234567000",
        "password": "$2a$12$5U6OxbrjSw9qkPUQ4MPTsOz0vAoF088p/d4GJaVNPJRtkBVjTQXq6",
    };
    assert!(
        users.insert_one(bad_email).await.is_err(),
        "email without @ must be rejected by the validator"
    );

    let products = db.collection::<Document>("products");
    let negative_stock = doc! {
        "name": "Phantom Ring",
        "description": "A ring that should never exist",
        "price": 1000.0,
        "images": ["https://images.example.com/phantom.jpg"],
        "category": "Rings",
        "subcategory": "Misc",
        "metalType": "Gold",
        "stockQuantity": -1,
    };
    assert!(
        products.insert_one(negative_stock).await.is_err(),
        "negative stockQuantity must be rejected by the validator"
    );

    // The client-side constraint pass skips invalid fixtures instead of
    // letting the server reject the batch
    let mut candidates = fixtures::products(now);
    candidates.truncate(2);
    candidates[1].stock_quantity = -5;
    let inserted = seeder
        .seed_collection(&candidates, SeedStrategy::IfKeyAbsent { field: "name" })
        .await?;
    assert_eq!(inserted, 1, "only the valid candidate may be inserted");

    db.drop().await?;
    Ok(())
}

#[tokio::test]
async fn test_index_creation_is_best_effort() -> anyhow::Result<()> {
    let Some(db) = test_database("indexes").await? else {
        return Ok(());
    };

    // A pre-existing index with the same keys but different options
    // conflicts; the run must warn and keep going
    let coupons = db.collection::<Document>("coupons");
    coupons
        .create_index(IndexModel::builder().keys(doc! { "code": 1 }).build())
        .await?;

    let warnings = ensure_indexes(&db).await;
    assert!(
        warnings.iter().any(|w| w.contains("coupons")),
        "expected a conflict warning for coupons, got: {warnings:?}"
    );

    // Later indexes were still created despite the earlier conflict
    let user_indexes: Vec<IndexModel> = db
        .collection::<Document>("users")
        .list_indexes()
        .await?
        .try_collect()
        .await?;
    assert!(user_indexes
        .iter()
        .any(|m| m.keys == doc! { "email": 1 }
            && m.options.as_ref().and_then(|o| o.unique) == Some(true)));

    // Re-running with matching options produces no new warnings
    db.collection::<Document>("coupons")
        .drop_index("code_1")
        .await?;
    let warnings = ensure_indexes(&db).await;
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    let warnings = ensure_indexes(&db).await;
    assert!(warnings.is_empty(), "re-run produced warnings: {warnings:?}");

    db.drop().await?;
    Ok(())
}

#[tokio::test]
async fn test_session_expiry_index_has_zero_grace() -> anyhow::Result<()> {
    let Some(db) = test_database("ttl").await? else {
        return Ok(());
    };

    let warnings = ensure_indexes(&db).await;
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

    let indexes: Vec<IndexModel> = db
        .collection::<Document>(thyne_entities::GuestSession::COLLECTION)
        .list_indexes()
        .await?
        .try_collect()
        .await?;
    let ttl = indexes
        .iter()
        .find(|m| m.keys == doc! { "expiresAt": 1 })
        .expect("expiresAt index missing");
    assert_eq!(
        ttl.options
            .as_ref()
            .and_then(|o| o.expire_after),
        Some(std::time::Duration::from_secs(0)),
        "expiry must be defined by the stored timestamp itself"
    );

    db.drop().await?;
    Ok(())
}
