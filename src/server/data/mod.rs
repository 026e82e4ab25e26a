//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models. They are generic
//! over `ConnectionTrait`, so the same repository runs against the pool or inside a
//! transaction opened by a service.

pub mod bill;
pub mod bill_plate;
pub mod plate;
pub mod plate_category;
pub mod reservation;
pub mod review;
pub mod table;
pub mod table_area;
pub mod user;

#[cfg(test)]
mod test;
