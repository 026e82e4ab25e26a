use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::BillState;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bill")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub table_id: Option<i32>,
    pub waiter_id: Option<i32>,
    pub date_time: DateTimeUtc,
    pub state: BillState,
    pub total: f64,
    pub total_paid: f64,
    /// Tip percentage recorded at finalization.
    pub tip: i32,
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
        belongs_to = "super::user::Entity",
        from = "Column::WaiterId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::bill_plate::Entity")]
    BillPlate,
}

impl Related<super::dining_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiningTable.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::bill_plate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BillPlate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
