//! Seed and migration runner for the Thyne Jewels database
//!
//! Brings a target database from an unknown prior state to one that
//! contains the baseline reference data and required indexes, without
//! deleting or updating anything already there. Every step is
//! idempotent, so re-running the whole batch after a partial failure is
//! always safe.

pub mod fixtures;
pub mod indexes;
pub mod report;
pub mod schema;
pub mod seeder;
pub mod strategy;

pub use indexes::{ensure_indexes, index_specs, IndexSpec};
pub use report::{SeedReport, StepOutcome};
pub use seeder::Seeder;
pub use strategy::SeedStrategy;
