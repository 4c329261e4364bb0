use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, NotSet, Set};
use tracing::warn;

use crate::db::{postgres_service::PostgresService, ItemStore, SnapshotStore};
use crate::types::{
    error::AppError,
    snapshot::{Snapshot, SnapshotWithItems},
};
use entity::snapshot::{ActiveModel as SnapshotActive, Entity as SnapshotData};

#[async_trait]
impl SnapshotStore for PostgresService {
    /// A snapshot whose row cannot be read back after the insert comes back
    /// without an id.
    async fn save(&self, snapshot: Snapshot) -> Result<Snapshot, AppError> {
        let inserted = SnapshotActive {
            id: NotSet,
            capture_date: Set(snapshot.capture_date),
        }
        .insert(&self.db)
        .await;

        match inserted {
            Ok(model) => Ok(Snapshot::from(model)),
            Err(DbErr::RecordNotFound(reason)) => {
                warn!("snapshot insert assigned no id: {}", reason);
                Ok(Snapshot { id: None, ..snapshot })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, snapshot_id: i32) -> Result<Option<Snapshot>, AppError> {
        Ok(SnapshotData::find_by_id(snapshot_id)
            .one(&self.db)
            .await?
            .map(Snapshot::from))
    }

    async fn delete_by_id(&self, snapshot_id: i32) -> Result<(), AppError> {
        SnapshotData::delete_by_id(snapshot_id).exec(&self.db).await?;
        Ok(())
    }
}

impl PostgresService {
    /// The snapshot together with its items, `None` when the id is unknown.
    ///
    /// Not served over HTTP: the bulk routes answer with an envelope instead.
    /// This is the read model for in-process callers such as jobs and tooling.
    pub async fn load_snapshot_with_items(
        &self,
        snapshot_id: i32,
    ) -> Result<Option<SnapshotWithItems>, AppError> {
        let Some(snapshot) = self.find_by_id(snapshot_id).await? else {
            return Ok(None);
        };
        let items = self.find_all_by_snapshot_id(snapshot_id).await?;
        Ok(Some(SnapshotWithItems::new(snapshot, items)))
    }
}
