use sea_orm::entity::prelude::*;

/// Occupancy of a dining table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TableState {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "occupied")]
    Occupied,
}

/// Lifecycle of a reservation.
///
/// `Active` is the initial state. `Cancelled` is only reachable from `Active`, `Finalized`
/// only from `InCourse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ReservationState {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "in_course")]
    InCourse,
    #[sea_orm(string_value = "finalized")]
    Finalized,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Lifecycle of a bill. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum BillState {
    #[sea_orm(string_value = "current")]
    Current,
    #[sea_orm(string_value = "closed")]
    Closed,
}
