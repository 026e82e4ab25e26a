use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_table_area_table::TableArea;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiningTable::Table)
                    .if_not_exists()
                    .col(pk_auto(DiningTable::Id))
                    .col(string_uniq(DiningTable::Code))
                    .col(integer(DiningTable::Capacity))
                    .col(string_len(DiningTable::State, 16).default("available"))
                    .col(integer_null(DiningTable::AreaId))
                    .col(text_null(DiningTable::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dining_table_area_id")
                            .from(DiningTable::Table, DiningTable::AreaId)
                            .to(TableArea::Table, TableArea::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiningTable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiningTable {
    Table,
    Id,
    Code,
    Capacity,
    State,
    AreaId,
    Notes,
}
