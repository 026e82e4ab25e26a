//! SeaORM entities for the restaurant database.
//!
//! One module per table plus the closed state enums shared by tables, reservations and
//! bills. The `prelude` module re-exports every entity under its table name.

pub mod prelude;

pub mod bill;
pub mod bill_plate;
pub mod dining_table;
pub mod plate;
pub mod plate_category;
pub mod reservation;
pub mod review;
pub mod sea_orm_active_enums;
pub mod table_area;
pub mod user;
