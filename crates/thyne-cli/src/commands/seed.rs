use chrono::Utc;
use clap::Args;
use thyne_migrations::Seeder;
use tracing::{debug, info, warn};

#[derive(Args)]
pub struct SeedCommand {
    /// MongoDB connection URI
    #[arg(
        long,
        env = "THYNE_MONGODB_URI",
        default_value = "mongodb://localhost:27017"
    )]
    pub mongodb_uri: String,

    /// Target database name
    #[arg(long, env = "THYNE_DATABASE", default_value = "thyne_jewels")]
    pub database: String,
}

impl SeedCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        info!(database = %self.database, "seeding database");

        debug!("initializing database connection...");
        let rt = tokio::runtime::Runtime::new()?;
        let db = rt.block_on(thyne_database::establish_connection(
            &self.mongodb_uri,
            &self.database,
        ))?;

        let seeder = Seeder::new(db, Utc::now());
        let report = rt.block_on(seeder.run());

        // Per-collection failures are reported, not fatal; only a dead
        // connection aborts the run above.
        for line in report.to_string().lines() {
            info!("{line}");
        }
        if report.has_failures() {
            warn!(
                "{} collection step(s) failed; re-run once the cause is fixed",
                report.failed_steps().len()
            );
        }

        Ok(())
    }
}
