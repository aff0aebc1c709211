use sea_orm::DatabaseConnection;

use crate::server::{
    data::dish::DishRepository, error::AppError, model::dish::Dish,
    service::menu::MenuService,
};

pub struct DishService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DishService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the dishes of a menu reached through its school and canteen
    pub async fn get_all(
        &self,
        school_id: i32,
        canteen_id: i32,
        menu_id: i32,
    ) -> Result<Vec<Dish>, AppError> {
        let menu = MenuService::new(self.db)
            .get(school_id, canteen_id, menu_id)
            .await?;

        Ok(menu.into_dishes())
    }

    /// Gets a single dish, checking every level of the resource chain
    ///
    /// # Returns
    /// - `Ok(Dish)`: The dish
    /// - `Err(AppError::NotFound)`: Any link of school/canteen/menu/dish is missing
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get(
        &self,
        school_id: i32,
        canteen_id: i32,
        menu_id: i32,
        dish_id: i32,
    ) -> Result<Dish, AppError> {
        MenuService::new(self.db)
            .get(school_id, canteen_id, menu_id)
            .await?;

        DishRepository::new(self.db)
            .find_in_menu(menu_id, dish_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Dish {} not found in menu {}", dish_id, menu_id))
            })
    }
}
