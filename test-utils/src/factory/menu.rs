//! Menu factory for creating test menu rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menus under an existing menu entry.
pub struct MenuFactory<'a> {
    db: &'a DatabaseConnection,
    menu_entry_id: i32,
    menu_type: i32,
}

impl<'a> MenuFactory<'a> {
    /// Creates a new MenuFactory for a lunch menu (ordinal `0`).
    pub fn new(db: &'a DatabaseConnection, menu_entry_id: i32) -> Self {
        Self {
            db,
            menu_entry_id,
            menu_type: 0,
        }
    }

    /// Sets the stored menu type ordinal.
    pub fn menu_type(mut self, menu_type: i32) -> Self {
        self.menu_type = menu_type;
        self
    }

    /// Builds and inserts the menu row.
    pub async fn build(self) -> Result<entity::menu::Model, DbErr> {
        entity::menu::ActiveModel {
            id: ActiveValue::NotSet,
            menu_entry_id: ActiveValue::Set(self.menu_entry_id),
            menu_type: ActiveValue::Set(self.menu_type),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lunch menu under the specified menu entry.
pub async fn create_menu(
    db: &DatabaseConnection,
    menu_entry_id: i32,
) -> Result<entity::menu::Model, DbErr> {
    MenuFactory::new(db, menu_entry_id).build().await
}
