#![allow(dead_code)]

use std::sync::Arc;
use sea_orm::ConnectOptions;
use fridge_content::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
}

impl TestContext {
    /// Fresh, migrated in-memory database per context.
    pub async fn new() -> TestContext {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Arc::new(
            PostgresService::connect(options)
                .await
                .expect("Failed to initialize database")
        );

        TestContext { db }
    }
}

// Test data helpers
pub mod test_data {
    use fridge_content::types::item::Item;

    pub fn fridge() -> Vec<Item> {
        ["Apple", "Banana", "Butter", "Jelly", "Grapes"]
            .into_iter()
            .map(Item::new)
            .collect()
    }

    pub fn fridge_with_duplicates() -> Vec<Item> {
        ["Apple", "Banana", "Apple", "Milk", "Apple", "Milk"]
            .into_iter()
            .map(Item::new)
            .collect()
    }
}
