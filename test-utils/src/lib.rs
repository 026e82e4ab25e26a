//! Comanda Test Utils
//!
//! Shared testing utilities for the restaurant backend. Provides a builder for test contexts
//! backed by an in-memory SQLite database, factories for every entity and the error type
//! returned by test setup.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn opens_bill_on_table() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_restaurant_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let table = factory::dining_table::create_table(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
