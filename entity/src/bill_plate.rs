use sea_orm::entity::prelude::*;

/// One ordered unit of a plate on a bill.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bill_plate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bill_id: i32,
    pub plate_id: i32,
    pub notes: String,
    pub cooked: bool,
    pub cooked_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bill::Entity",
        from = "Column::BillId",
        to = "super::bill::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bill,
    #[sea_orm(
        belongs_to = "super::plate::Entity",
        from = "Column::PlateId",
        to = "super::plate::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Plate,
}

impl Related<super::bill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bill.def()
    }
}

impl Related<super::plate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
