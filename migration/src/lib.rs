pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_table_area_table;
mod m20260105_000003_create_dining_table_table;
mod m20260105_000004_create_plate_category_table;
mod m20260105_000005_create_plate_table;
mod m20260105_000006_create_reservation_table;
mod m20260105_000007_create_bill_table;
mod m20260105_000008_create_bill_plate_table;
mod m20260112_000009_create_bill_current_table_index;
mod m20260120_000010_create_review_table;

pub use m20260112_000009_create_bill_current_table_index::CREATE_BILL_CURRENT_TABLE_INDEX;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_table_area_table::Migration),
            Box::new(m20260105_000003_create_dining_table_table::Migration),
            Box::new(m20260105_000004_create_plate_category_table::Migration),
            Box::new(m20260105_000005_create_plate_table::Migration),
            Box::new(m20260105_000006_create_reservation_table::Migration),
            Box::new(m20260105_000007_create_bill_table::Migration),
            Box::new(m20260105_000008_create_bill_plate_table::Migration),
            Box::new(m20260112_000009_create_bill_current_table_index::Migration),
            Box::new(m20260120_000010_create_review_table::Migration),
        ]
    }
}
