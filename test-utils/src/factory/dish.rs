//! Dish factory for creating test dish rows.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dishes under an existing menu.
pub struct DishFactory<'a> {
    db: &'a DatabaseConnection,
    menu_id: i32,
    dish_type: i32,
    description: String,
}

impl<'a> DishFactory<'a> {
    /// Creates a new DishFactory with default values.
    ///
    /// Defaults:
    /// - dish_type: fixture default (fish)
    /// - description: `"Dish {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection, menu_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            menu_id,
            dish_type: fixture::dish::DEFAULT_DISH_TYPE,
            description: format!("Dish {}", id),
        }
    }

    pub fn dish_type(mut self, dish_type: i32) -> Self {
        self.dish_type = dish_type;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the dish row.
    pub async fn build(self) -> Result<entity::dish::Model, DbErr> {
        entity::dish::ActiveModel {
            id: ActiveValue::NotSet,
            menu_id: ActiveValue::Set(self.menu_id),
            dish_type: ActiveValue::Set(self.dish_type),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dish with default values under the specified menu.
pub async fn create_dish(
    db: &DatabaseConnection,
    menu_id: i32,
) -> Result<entity::dish::Model, DbErr> {
    DishFactory::new(db, menu_id).build().await
}
