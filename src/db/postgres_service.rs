use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

pub struct PostgresService {
    pub(crate) db: DatabaseConnection,
}

impl PostgresService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        Self::connect(ConnectOptions::new(uri)).await
    }

    /// Connects with explicit options and brings the schema up to date.
    pub async fn connect(options: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let db = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Database ready.");
        Ok(Self { db })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}
