//! Menu entry factory for creating a canteen's day record.

use chrono::{Local, NaiveDate};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu entries under an existing canteen.
pub struct MenuEntryFactory<'a> {
    db: &'a DatabaseConnection,
    canteen_id: i32,
    date: NaiveDate,
}

impl<'a> MenuEntryFactory<'a> {
    /// Creates a new MenuEntryFactory dated today in local time.
    pub fn new(db: &'a DatabaseConnection, canteen_id: i32) -> Self {
        Self {
            db,
            canteen_id,
            date: Local::now().date_naive(),
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the menu entry row.
    pub async fn build(self) -> Result<entity::menu_entry::Model, DbErr> {
        entity::menu_entry::ActiveModel {
            id: ActiveValue::NotSet,
            canteen_id: ActiveValue::Set(self.canteen_id),
            date: ActiveValue::Set(self.date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates today's menu entry for the specified canteen.
pub async fn create_menu_entry(
    db: &DatabaseConnection,
    canteen_id: i32,
) -> Result<entity::menu_entry::Model, DbErr> {
    MenuEntryFactory::new(db, canteen_id).build().await
}
