//! Outcome of a seeding run

use std::fmt;

/// Result of one collection's seeding step.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    pub collection: String,
    pub inserted: u64,
    /// Set when the step failed; later steps still run.
    pub error: Option<String>,
}

/// Aggregate outcome of a full run.
///
/// Per-collection failures and index conflicts are recorded here instead
/// of aborting the batch.
#[derive(Clone, Debug, Default)]
pub struct SeedReport {
    pub steps: Vec<StepOutcome>,
    pub index_warnings: Vec<String>,
}

impl SeedReport {
    pub fn record(&mut self, collection: impl Into<String>, inserted: u64) {
        self.steps.push(StepOutcome {
            collection: collection.into(),
            inserted,
            error: None,
        });
    }

    pub fn record_failure(&mut self, collection: impl Into<String>, error: impl Into<String>) {
        self.steps.push(StepOutcome {
            collection: collection.into(),
            inserted: 0,
            error: Some(error.into()),
        });
    }

    pub fn total_inserted(&self) -> u64 {
        self.steps.iter().map(|s| s.inserted).sum()
    }

    pub fn failed_steps(&self) -> Vec<&StepOutcome> {
        self.steps.iter().filter(|s| s.error.is_some()).collect()
    }

    pub fn has_failures(&self) -> bool {
        self.steps.iter().any(|s| s.error.is_some())
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "seeded {} documents across {} collections",
            self.total_inserted(),
            self.steps.len()
        )?;
        for step in &self.steps {
            match &step.error {
                Some(err) => writeln!(f, "  {}: FAILED ({})", step.collection, err)?,
                None if step.inserted == 0 => {
                    writeln!(f, "  {}: skipped, data already present", step.collection)?
                }
                None => writeln!(f, "  {}: inserted {}", step.collection, step.inserted)?,
            }
        }
        for warning in &self.index_warnings {
            writeln!(f, "  index warning: {}", warning)?;
        }
        Ok(())
    }
}
