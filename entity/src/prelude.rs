pub use super::bill::Entity as Bill;
pub use super::bill_plate::Entity as BillPlate;
pub use super::dining_table::Entity as DiningTable;
pub use super::plate::Entity as Plate;
pub use super::plate_category::Entity as PlateCategory;
pub use super::reservation::Entity as Reservation;
pub use super::review::Entity as Review;
pub use super::table_area::Entity as TableArea;
pub use super::user::Entity as User;
