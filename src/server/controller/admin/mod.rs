//! Back-office endpoints under `/admin`. Every handler requires the `Admin` role.

pub mod bills;
pub mod catalog;
pub mod reservations;
pub mod tables;
pub mod users;

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";
