use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

use crate::db::{postgres_service::PostgresService, ItemStore};
use crate::types::{error::AppError, item::Item};
use entity::item::{ActiveModel as ItemActive, Column, Entity as ItemData};

#[async_trait]
impl ItemStore for PostgresService {
    async fn save_all(&self, items: Vec<Item>) -> Result<Vec<Item>, AppError> {
        let txn = self.db.begin().await?;
        let mut saved = Vec::with_capacity(items.len());

        for item in items {
            let snapshot_id = item.snapshot_id.ok_or_else(|| {
                AppError::Internal(format!("item {} has no snapshot", item.description))
            })?;

            let model = ItemActive {
                id: NotSet,
                snapshot_id: Set(snapshot_id),
                description: Set(item.description),
                amount: Set(item.amount),
            }
            .insert(&txn)
            .await?;

            saved.push(Item::from(model));
        }

        txn.commit().await?;
        debug!("saved {} items", saved.len());
        Ok(saved)
    }

    async fn find_all_by_snapshot_id(&self, snapshot_id: i32) -> Result<Vec<Item>, AppError> {
        let items = ItemData::find()
            .filter(Column::SnapshotId.eq(snapshot_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(items.into_iter().map(Item::from).collect())
    }

    async fn delete_all_by_snapshot_id(&self, snapshot_id: i32) -> Result<(), AppError> {
        let res = ItemData::delete_many()
            .filter(Column::SnapshotId.eq(snapshot_id))
            .exec(&self.db)
            .await?;

        debug!("deleted {} items of snapshot {}", res.rows_affected, snapshot_id);
        Ok(())
    }
}
