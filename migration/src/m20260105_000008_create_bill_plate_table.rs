use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000005_create_plate_table::Plate, m20260105_000007_create_bill_table::Bill,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillPlate::Table)
                    .if_not_exists()
                    .col(pk_auto(BillPlate::Id))
                    .col(integer(BillPlate::BillId))
                    .col(integer(BillPlate::PlateId))
                    .col(string_len(BillPlate::Notes, 1024).default(""))
                    .col(boolean(BillPlate::Cooked).default(false))
                    .col(timestamp_with_time_zone_null(BillPlate::CookedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bill_plate_bill_id")
                            .from(BillPlate::Table, BillPlate::BillId)
                            .to(Bill::Table, Bill::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bill_plate_plate_id")
                            .from(BillPlate::Table, BillPlate::PlateId)
                            .to(Plate::Table, Plate::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bill_plate_bill_id")
                    .table(BillPlate::Table)
                    .col(BillPlate::BillId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BillPlate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BillPlate {
    Table,
    Id,
    BillId,
    PlateId,
    Notes,
    Cooked,
    CookedAt,
}
