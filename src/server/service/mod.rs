//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They are responsible for:
//!
//! - **Business Logic**: Enforcing the table, reservation and bill lifecycle rules
//! - **Orchestration**: Coordinating several repository calls for one request
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running every multi-step mutation inside one transaction
//!
//! Mutations that touch more than one row open a transaction with `TransactionTrait::begin`
//! and commit at the end. Returning early with `?` drops the transaction, which rolls it back.

pub mod auth;
pub mod bill;
pub mod catalog;
pub mod code;
pub mod kitchen;
pub mod load_balancer;
pub mod reservation;
pub mod review;
pub mod table;
pub mod user;
