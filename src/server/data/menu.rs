use chrono::NaiveDate;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

use crate::server::model::menu::Menu;

pub struct MenuRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a menu and its dishes for a canteen on a given day
    ///
    /// Reuses the canteen's menu entry for that day, creating it first if this is the
    /// day's first menu. Everything is written in one transaction.
    ///
    /// A second menu of the same type on that day violates the unique index on
    /// `(menu_entry_id, menu_type)` and fails with a unique constraint error.
    ///
    /// # Arguments
    /// - `canteen_id`: ID of the canteen serving the menu
    /// - `date`: Calendar day the menu is served on
    /// - `menu`: Validated menu; its `id` and dish ids are ignored
    ///
    /// # Returns
    /// - `Ok(Menu)`: The stored menu with database identifiers
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, canteen_id: i32, date: NaiveDate, menu: &Menu) -> Result<Menu, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::MenuEntry::insert(entity::menu_entry::ActiveModel {
            canteen_id: ActiveValue::Set(canteen_id),
            date: ActiveValue::Set(date),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::menu_entry::Column::CanteenId,
                entity::menu_entry::Column::Date,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        // The insert is a no-op when another request already opened the day
        let entry = entity::prelude::MenuEntry::find()
            .filter(entity::menu_entry::Column::CanteenId.eq(canteen_id))
            .filter(entity::menu_entry::Column::Date.eq(date))
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("menu entry for canteen {canteen_id}")))?;

        let stored = entity::menu::ActiveModel {
            menu_entry_id: ActiveValue::Set(entry.id),
            menu_type: ActiveValue::Set(menu.menu_type.ordinal()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut dishes = Vec::with_capacity(menu.dishes().len());
        for dish in menu.dishes() {
            let model = entity::dish::ActiveModel {
                menu_id: ActiveValue::Set(stored.id),
                dish_type: ActiveValue::Set(dish.dish_type.ordinal()),
                description: ActiveValue::Set(dish.description.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            dishes.push(model);
        }

        txn.commit().await?;

        Menu::from_entity(stored, dishes)
    }

    /// Gets the menus a canteen serves on a given day, with their dishes
    ///
    /// # Returns
    /// - `Ok(Vec<Menu>)`: Menus ordered by ID, empty if none are filed for that day
    /// - `Err(DbErr)`: Database error or an unknown stored enum ordinal
    pub async fn find_by_canteen_on(
        &self,
        canteen_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<Menu>, DbErr> {
        let menus = entity::prelude::Menu::find()
            .join(
                JoinType::InnerJoin,
                entity::menu::Relation::MenuEntry.def(),
            )
            .filter(entity::menu_entry::Column::CanteenId.eq(canteen_id))
            .filter(entity::menu_entry::Column::Date.eq(date))
            .order_by_asc(entity::menu::Column::Id)
            .find_with_related(entity::prelude::Dish)
            .all(self.db)
            .await?;

        menus
            .into_iter()
            .map(|(menu, dishes)| Menu::from_entity(menu, dishes))
            .collect()
    }

    /// Gets a menu with its dishes only if it was filed under the given canteen
    ///
    /// # Returns
    /// - `Ok(Some(Menu))`: Menu exists and belongs to one of the canteen's days
    /// - `Ok(None)`: Menu does not exist or belongs to another canteen
    /// - `Err(DbErr)`: Database error
    pub async fn find_in_canteen(
        &self,
        canteen_id: i32,
        menu_id: i32,
    ) -> Result<Option<Menu>, DbErr> {
        let Some(menu) = entity::prelude::Menu::find_by_id(menu_id)
            .join(
                JoinType::InnerJoin,
                entity::menu::Relation::MenuEntry.def(),
            )
            .filter(entity::menu_entry::Column::CanteenId.eq(canteen_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let dishes = entity::prelude::Dish::find()
            .filter(entity::dish::Column::MenuId.eq(menu.id))
            .order_by_asc(entity::dish::Column::Id)
            .all(self.db)
            .await?;

        Menu::from_entity(menu, dishes).map(Some)
    }
}
