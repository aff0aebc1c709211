use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menu")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub menu_entry_id: i32,
    /// Ordinal of the menu type (0 = lunch, 1 = dinner).
    pub menu_type: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menu_entry::Entity",
        from = "Column::MenuEntryId",
        to = "super::menu_entry::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MenuEntry,
    #[sea_orm(has_many = "super::dish::Entity")]
    Dish,
}

impl Related<super::menu_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuEntry.def()
    }
}

impl Related<super::dish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dish.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
