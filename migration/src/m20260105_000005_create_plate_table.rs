use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000004_create_plate_category_table::PlateCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plate::Table)
                    .if_not_exists()
                    .col(pk_auto(Plate::Id))
                    .col(string(Plate::Name))
                    .col(text_null(Plate::Description))
                    .col(double(Plate::Price))
                    .col(integer_null(Plate::CategoryId))
                    .col(boolean(Plate::Available).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plate_category_id")
                            .from(Plate::Table, Plate::CategoryId)
                            .to(PlateCategory::Table, PlateCategory::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Plate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Plate {
    Table,
    Id,
    Name,
    Description,
    Price,
    CategoryId,
    Available,
}
