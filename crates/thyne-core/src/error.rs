//! Common error types used across all seeder crates

use thiserror::Error;

/// Common error type for seeding operations
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Validation error in {collection}: {message}")]
    Validation { collection: String, message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for seeding operations
pub type SeedResult<T> = Result<T, SeedError>;

/// A single failed constraint check on a candidate document.
///
/// Mirrors the storage-layer `$jsonSchema` rules so that invalid fixtures
/// are caught before any document is sent to the server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ConstraintViolation {
    pub field: &'static str,
    pub message: String,
}

impl ConstraintViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
