//! Core types shared across all Thyne Jewels seeder crates

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::*;
pub use types::*;

// Re-export external dependencies
pub use anyhow;
pub use chrono;
pub use serde;
pub use thiserror;
pub use tracing;
