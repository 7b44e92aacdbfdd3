//! The straight-line seeding batch

use bson::{doc, Document};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::Database;
use tracing::{debug, error, info, warn};

use thyne_core::{SeedError, SeedResult, UtcDateTime};
use thyne_entities::SeedDocument;

use crate::fixtures;
use crate::indexes;
use crate::report::SeedReport;
use crate::schema;
use crate::strategy::{natural_key, SeedStrategy};

// Server error codes the runner treats as recoverable.
const DUPLICATE_KEY: i32 = 11000;
const DOCUMENT_VALIDATION_FAILURE: i32 = 121;
const NAMESPACE_EXISTS: i32 = 48;

/// Idempotent seed runner for one target database.
///
/// The clock is fixed at construction so every fixture of a run shares
/// one "now".
pub struct Seeder {
    db: Database,
    now: UtcDateTime,
}

impl Seeder {
    pub fn new(db: Database, now: UtcDateTime) -> Self {
        Self { db, now }
    }

    /// Run the whole batch: collections, documents, indexes.
    ///
    /// Collection steps are independent; a failure in one is recorded in
    /// the report and the remaining steps still run.
    pub async fn run(&self) -> SeedReport {
        let mut report = SeedReport::default();

        if let Err(err) = self.ensure_collections().await {
            // Inserts create collections implicitly, so seeding can
            // still proceed; only the validators are lost.
            error!("failed to create collections: {err}");
            report.record_failure("(collections)", err.to_string());
        }

        self.step(&mut report, fixtures::users(self.now), SeedStrategy::IfKeyAbsent { field: "email" }).await;
        self.step(&mut report, fixtures::products(self.now), SeedStrategy::IfKeyAbsent { field: "name" }).await;
        self.step(&mut report, fixtures::coupons(self.now), SeedStrategy::IfKeyAbsent { field: "code" }).await;
        self.step(&mut report, fixtures::orders(self.now), SeedStrategy::IfCollectionEmpty).await;
        self.step(&mut report, fixtures::reviews(self.now), SeedStrategy::IfCollectionEmpty).await;
        self.step(&mut report, fixtures::guest_sessions(self.now), SeedStrategy::IfKeyAbsent { field: "sessionId" }).await;
        self.step(&mut report, fixtures::loyalty_programs(self.now), SeedStrategy::IfCollectionEmpty).await;
        self.step(&mut report, fixtures::vouchers(self.now), SeedStrategy::IfKeyAbsent { field: "code" }).await;
        self.step(&mut report, fixtures::badges(self.now), SeedStrategy::IfKeyAbsent { field: "name" }).await;
        self.step(&mut report, fixtures::referral_programs(self.now), SeedStrategy::IfCollectionEmpty).await;
        self.step(&mut report, fixtures::carts(self.now), SeedStrategy::IfCollectionEmpty).await;
        self.step(&mut report, fixtures::wishlists(self.now), SeedStrategy::IfCollectionEmpty).await;

        report.index_warnings = indexes::ensure_indexes(&self.db).await;

        info!(
            inserted = report.total_inserted(),
            failures = report.failed_steps().len(),
            "seeding run finished"
        );
        report
    }

    async fn step<T: SeedDocument>(
        &self,
        report: &mut SeedReport,
        candidates: Vec<T>,
        strategy: SeedStrategy,
    ) {
        match self.seed_collection(&candidates, strategy).await {
            Ok(inserted) => {
                if inserted > 0 {
                    info!(collection = T::COLLECTION, inserted, "seeded");
                } else {
                    debug!(collection = T::COLLECTION, "skipped, data already present");
                }
                report.record(T::COLLECTION, inserted);
            }
            Err(err) => {
                error!(collection = T::COLLECTION, "seeding failed: {err}");
                report.record_failure(T::COLLECTION, err.to_string());
            }
        }
    }

    /// Create the collections, attaching `$jsonSchema` validators where
    /// the schema defines them. Existing collections are left alone.
    pub async fn ensure_collections(&self) -> SeedResult<()> {
        let existing = self
            .db
            .list_collection_names()
            .await
            .map_err(|e| SeedError::Database(e.to_string()))?;

        for (name, validator) in schema::validated_collections() {
            if existing.iter().any(|n| n == name) {
                continue;
            }
            match self.db.create_collection(name).validator(validator).await {
                Ok(()) => debug!(collection = name, "created with validator"),
                Err(err) if error_code(&err) == Some(NAMESPACE_EXISTS) => {
                    debug!(collection = name, "already exists");
                }
                Err(err) => return Err(SeedError::Database(err.to_string())),
            }
        }

        for name in schema::PLAIN_COLLECTIONS {
            if existing.iter().any(|n| n == name) {
                continue;
            }
            match self.db.create_collection(*name).await {
                Ok(()) => debug!(collection = name, "created"),
                Err(err) if error_code(&err) == Some(NAMESPACE_EXISTS) => {
                    debug!(collection = name, "already exists");
                }
                Err(err) => return Err(SeedError::Database(err.to_string())),
            }
        }

        Ok(())
    }

    /// Seed one collection according to its strategy.
    ///
    /// Returns how many documents were actually inserted. Candidates
    /// failing their constraint pass are reported and skipped; a
    /// duplicate-key conflict from a concurrent or earlier run counts as
    /// already seeded.
    pub async fn seed_collection<T: SeedDocument>(
        &self,
        candidates: &[T],
        strategy: SeedStrategy,
    ) -> SeedResult<u64> {
        if candidates.is_empty() {
            return Ok(0);
        }

        let mut valid = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if let Err(violation) = candidate.validate() {
                warn!(
                    collection = T::COLLECTION,
                    "skipping invalid fixture: {violation}"
                );
                continue;
            }
            let document = bson::to_document(candidate)
                .map_err(|e| SeedError::Database(format!("serialization failed: {e}")))?;
            valid.push(document);
        }
        if valid.is_empty() {
            return Ok(0);
        }

        let collection = self.db.collection::<Document>(T::COLLECTION);

        let to_insert = match strategy {
            SeedStrategy::IfCollectionEmpty => {
                let count = collection
                    .count_documents(doc! {})
                    .await
                    .map_err(|e| SeedError::Database(e.to_string()))?;
                if count > 0 {
                    debug!(collection = T::COLLECTION, count, "not empty, skipping");
                    return Ok(0);
                }
                valid
            }
            SeedStrategy::IfKeyAbsent { field } => {
                let mut fresh = Vec::with_capacity(valid.len());
                for document in valid {
                    let Some(key) = natural_key(&document, field) else {
                        warn!(
                            collection = T::COLLECTION,
                            field, "fixture is missing its natural key, skipping"
                        );
                        continue;
                    };
                    let exists = collection
                        .find_one(doc! { field: key.clone() })
                        .await
                        .map_err(|e| SeedError::Database(e.to_string()))?;
                    if exists.is_none() {
                        fresh.push(document);
                    }
                }
                fresh
            }
        };

        if to_insert.is_empty() {
            return Ok(0);
        }

        let attempted = to_insert.len() as u64;
        match collection.insert_many(to_insert).ordered(false).await {
            Ok(result) => Ok(result.inserted_ids.len() as u64),
            Err(err) => {
                let failed = recoverable_write_failures::<T>(&err)?;
                Ok(attempted.saturating_sub(failed))
            }
        }
    }
}

/// Inspect an insert error; return how many writes failed if every
/// failure is recoverable, or surface the error otherwise.
fn recoverable_write_failures<T: SeedDocument>(err: &MongoError) -> SeedResult<u64> {
    match &*err.kind {
        ErrorKind::InsertMany(insert_err) => {
            let write_errors = insert_err.write_errors.as_deref().unwrap_or_default();
            if write_errors.is_empty() {
                return Err(SeedError::Database(err.to_string()));
            }
            for write_error in write_errors {
                match write_error.code {
                    DUPLICATE_KEY => debug!(
                        collection = T::COLLECTION,
                        "duplicate key, already seeded: {}", write_error.message
                    ),
                    DOCUMENT_VALIDATION_FAILURE => warn!(
                        collection = T::COLLECTION,
                        "document rejected by schema validation: {}", write_error.message
                    ),
                    _ => return Err(SeedError::Database(err.to_string())),
                }
            }
            Ok(write_errors.len() as u64)
        }
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY =>
        {
            debug!(collection = T::COLLECTION, "duplicate key, already seeded");
            Ok(1)
        }
        _ => Err(SeedError::Database(err.to_string())),
    }
}

fn error_code(err: &MongoError) -> Option<i32> {
    match &*err.kind {
        ErrorKind::Command(command_err) => Some(command_err.code),
        _ => None,
    }
}
