//! MongoDB connection management

mod connection;

pub use connection::establish_connection;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_establish_connection() -> anyhow::Result<()> {
        // Runs only when a MongoDB instance is provided externally
        let Ok(uri) = std::env::var("THYNE_TEST_MONGODB_URI") else {
            println!("⏭️  Skipping test_establish_connection: THYNE_TEST_MONGODB_URI not set");
            return Ok(());
        };

        let db = establish_connection(&uri, "thyne_connection_test").await?;
        assert_eq!(db.name(), "thyne_connection_test");
        Ok(())
    }

    #[tokio::test]
    async fn test_establish_connection_rejects_bad_uri() {
        let result = establish_connection("not-a-mongodb-uri", "thyne_jewels").await;
        assert!(result.is_err());
    }
}
