use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::ReservationState;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// Scheduled time, always stored in UTC.
    pub date_time: DateTimeUtc,
    pub amount_people: i32,
    pub state: ReservationState,
    pub table_id: Option<i32>,
    pub area_id: Option<i32>,
    pub client_id: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dining_table::Entity",
        from = "Column::TableId",
        to = "super::dining_table::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    DiningTable,
    #[sea_orm(
        belongs_to = "super::table_area::Entity",
        from = "Column::AreaId",
        to = "super::table_area::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    TableArea,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ClientId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::dining_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiningTable.def()
    }
}

impl Related<super::table_area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TableArea.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
