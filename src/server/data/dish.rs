use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::dish::Dish;

pub struct DishRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DishRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a dish only if it belongs to the given menu
    pub async fn find_in_menu(&self, menu_id: i32, dish_id: i32) -> Result<Option<Dish>, DbErr> {
        entity::prelude::Dish::find_by_id(dish_id)
            .filter(entity::dish::Column::MenuId.eq(menu_id))
            .one(self.db)
            .await?
            .map(Dish::from_entity)
            .transpose()
    }
}
