use sea_orm_migration::prelude::*;

use crate::m20220101_000001_create_snapshot_table::Snapshot;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Item::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Item::SnapshotId)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::Description)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::Amount)
                            .integer()
                            .not_null()
                            .default(0)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_snapshot")
                            .from(Item::Table, Item::SnapshotId)
                            .to(Snapshot::Table, Snapshot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade)
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_item_snapshot")
                    .table(Item::Table)
                    .col(Item::SnapshotId)
                    .to_owned(),
            )
            .await?;

        // one row per description inside a snapshot
        manager
            .create_index(
                Index::create()
                    .name("uq_item_snapshot_description")
                    .table(Item::Table)
                    .col(Item::SnapshotId)
                    .col(Item::Description)
                    .unique()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Item::Table)
                    .to_owned()
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Item {
    Table,
    Id,
    SnapshotId,
    Description,
    Amount,
}
