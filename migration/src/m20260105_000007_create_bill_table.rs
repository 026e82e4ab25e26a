use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User,
    m20260105_000003_create_dining_table_table::DiningTable,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bill::Table)
                    .if_not_exists()
                    .col(pk_auto(Bill::Id))
                    .col(string_uniq(Bill::Code))
                    .col(integer_null(Bill::TableId))
                    .col(integer_null(Bill::WaiterId))
                    .col(
                        timestamp_with_time_zone(Bill::DateTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_len(Bill::State, 16).default("current"))
                    .col(double(Bill::Total).default(0.0))
                    .col(double(Bill::TotalPaid).default(0.0))
                    .col(integer(Bill::Tip).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bill_table_id")
                            .from(Bill::Table, Bill::TableId)
                            .to(DiningTable::Table, DiningTable::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bill_waiter_id")
                            .from(Bill::Table, Bill::WaiterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bill::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bill {
    Table,
    Id,
    Code,
    TableId,
    WaiterId,
    DateTime,
    State,
    Total,
    TotalPaid,
    Tip,
}
