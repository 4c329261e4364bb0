use async_trait::async_trait;

use crate::types::{error::AppError, item::Item, snapshot::Snapshot};

pub mod item;
pub mod postgres_service;
pub mod snapshot;

/// Persistence for the items of a snapshot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persists the batch and hands it back id-populated, in submission order.
    async fn save_all(&self, items: Vec<Item>) -> Result<Vec<Item>, AppError>;

    /// Every item of the snapshot, possibly none.
    async fn find_all_by_snapshot_id(&self, snapshot_id: i32) -> Result<Vec<Item>, AppError>;

    /// No-op when the snapshot has no items.
    async fn delete_all_by_snapshot_id(&self, snapshot_id: i32) -> Result<(), AppError>;
}

/// Persistence for snapshot records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn save(&self, snapshot: Snapshot) -> Result<Snapshot, AppError>;

    async fn find_by_id(&self, snapshot_id: i32) -> Result<Option<Snapshot>, AppError>;

    /// No-op when the snapshot does not exist.
    async fn delete_by_id(&self, snapshot_id: i32) -> Result<(), AppError>;
}
