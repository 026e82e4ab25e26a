//! Request and response payloads shared by every HTTP endpoint.
//!
//! These types define the JSON wire format. Server-side domain models convert into them via
//! `into_dto` and are built from them via `from_dto`.

pub mod api;
pub mod bill;
pub mod plate;
pub mod reservation;
pub mod review;
pub mod table;
pub mod user;
