use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "plate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: Option<i32>,
    pub available: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plate_category::Entity",
        from = "Column::CategoryId",
        to = "super::plate_category::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    PlateCategory,
    #[sea_orm(has_many = "super::bill_plate::Entity")]
    BillPlate,
}

impl Related<super::plate_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlateCategory.def()
    }
}

impl Related<super::bill_plate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BillPlate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
