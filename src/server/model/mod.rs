//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into DTOs at
//! the controller boundary. Parameter types carry the input of one service operation.

pub mod bill;
pub mod plate;
pub mod reservation;
pub mod review;
pub mod table;
pub mod user;
