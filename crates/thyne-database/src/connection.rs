//! Connection establishment with a verification ping

use std::time::Duration;

use bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use thyne_core::{SeedError, SeedResult};
use tracing::debug;

/// Connect to MongoDB and select the target database.
///
/// Verifies connectivity with a ping before returning, so a bad URI
/// fails here instead of on the first seeding step.
pub async fn establish_connection(uri: &str, db_name: &str) -> SeedResult<Database> {
    debug!("connecting to MongoDB");

    let mut options = ClientOptions::parse(uri)
        .await
        .map_err(|e| SeedError::Connection(format!("failed to parse MongoDB URI: {e}")))?;
    options.max_pool_size = Some(100);
    options.min_pool_size = Some(5);
    options.max_idle_time = Some(Duration::from_secs(30));
    options.server_selection_timeout = Some(Duration::from_secs(5));
    if options.app_name.is_none() {
        options.app_name = Some("thyne-seeder".to_string());
    }

    let client = Client::with_options(options)
        .map_err(|e| SeedError::Connection(format!("failed to create MongoDB client: {e}")))?;

    let db = client.database(db_name);
    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| SeedError::Connection(format!("failed to reach MongoDB: {e}")))?;

    debug!(database = db_name, "connected");
    Ok(db)
}
