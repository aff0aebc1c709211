use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "school")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub acronym: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::canteen::Entity")]
    Canteen,
}

impl Related<super::canteen::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Canteen.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
