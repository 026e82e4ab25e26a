use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User,
    m20260105_000002_create_table_area_table::TableArea,
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
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(string_uniq(Reservation::Code))
                    .col(string(Reservation::Name))
                    .col(string_null(Reservation::Email))
                    .col(string_null(Reservation::PhoneNumber))
                    .col(timestamp_with_time_zone(Reservation::DateTime))
                    .col(integer(Reservation::AmountPeople))
                    .col(string_len(Reservation::State, 16).default("active"))
                    .col(integer_null(Reservation::TableId))
                    .col(integer_null(Reservation::AreaId))
                    .col(integer_null(Reservation::ClientId))
                    .col(text_null(Reservation::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_table_id")
                            .from(Reservation::Table, Reservation::TableId)
                            .to(DiningTable::Table, DiningTable::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_area_id")
                            .from(Reservation::Table, Reservation::AreaId)
                            .to(TableArea::Table, TableArea::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_client_id")
                            .from(Reservation::Table, Reservation::ClientId)
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
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    Code,
    Name,
    Email,
    PhoneNumber,
    DateTime,
    AmountPeople,
    State,
    TableId,
    AreaId,
    ClientId,
    Notes,
}
