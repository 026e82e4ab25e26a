use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::TableState;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dining_table")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub capacity: i32,
    pub state: TableState,
    pub area_id: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::table_area::Entity",
        from = "Column::AreaId",
        to = "super::table_area::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    TableArea,
    #[sea_orm(has_many = "super::bill::Entity")]
    Bill,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::table_area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TableArea.def()
    }
}

impl Related<super::bill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bill.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
