use sea_orm_migration::prelude::*;

/// Partial unique index allowing at most one `current` bill per table.
///
/// Written as raw SQL because the partial `WHERE` clause is not expressible through the
/// index builder. The statement is valid for both SQLite and PostgreSQL.
pub const CREATE_BILL_CURRENT_TABLE_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     idx_bill_current_table ON bill (table_id) WHERE state = 'current'";

const DROP_BILL_CURRENT_TABLE_INDEX: &str = "DROP INDEX IF EXISTS idx_bill_current_table";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(CREATE_BILL_CURRENT_TABLE_INDEX)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(DROP_BILL_CURRENT_TABLE_INDEX)
            .await?;

        Ok(())
    }
}
