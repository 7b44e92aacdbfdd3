use std::future::IntoFuture;

use bson::{doc, Document};
use clap::Args;
use tracing::info;

#[derive(Args)]
pub struct StatusCommand {
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

impl StatusCommand {
    /// Read-only summary of what the database currently holds.
    pub fn execute(self) -> anyhow::Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        let db = rt.block_on(thyne_database::establish_connection(
            &self.mongodb_uri,
            &self.database,
        ))?;

        let mut names = rt.block_on(db.list_collection_names().into_future())?;
        names.sort_unstable();

        if names.is_empty() {
            info!(database = %self.database, "database has no collections");
            return Ok(());
        }

        info!(database = %self.database, collections = names.len(), "status");
        for name in names {
            let collection = db.collection::<Document>(&name);
            let count = rt.block_on(collection.count_documents(doc! {}).into_future())?;
            info!("  {name}: {count} documents");
        }

        Ok(())
    }
}
