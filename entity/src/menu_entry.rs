use sea_orm::entity::prelude::*;

/// A canteen's menus for one calendar day.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub canteen_id: i32,
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::canteen::Entity",
        from = "Column::CanteenId",
        to = "super::canteen::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Canteen,
    #[sea_orm(has_many = "super::menu::Entity")]
    Menu,
}

impl Related<super::canteen::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Canteen.def()
    }
}

impl Related<super::menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Menu.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
