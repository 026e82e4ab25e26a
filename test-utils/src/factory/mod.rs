//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories take the ids of the
//! rows they reference; `helpers` creates whole dependency chains at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let waiter = factory::user::create_waiter(&db).await?;
//! let table = factory::dining_table::create_table(&db).await?;
//! let bill = factory::bill::BillFactory::new(&db, table.id)
//!     .waiter_id(Some(waiter.id))
//!     .total(100.0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Accounts with any combination of roles
//! - `table_area` - Table areas
//! - `dining_table` - Dining tables
//! - `plate_category` - Plate categories
//! - `plate` - Menu plates
//! - `reservation` - Reservations
//! - `bill` - Bills
//! - `bill_plate` - Bill line items
//! - `review` - Restaurant reviews
//! - `helpers` - Id generation and dependency chains

pub mod bill;
pub mod bill_plate;
pub mod dining_table;
pub mod helpers;
pub mod plate;
pub mod plate_category;
pub mod reservation;
pub mod review;
pub mod table_area;
pub mod user;

pub use bill::create_bill;
pub use dining_table::create_table;
pub use plate::create_plate;
pub use reservation::create_reservation;
pub use review::create_review;
pub use table_area::create_area;
pub use user::{create_user, create_waiter};
