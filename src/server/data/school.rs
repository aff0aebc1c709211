use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::school::School;

pub struct SchoolRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all schools with their canteens, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<School>, DbErr> {
        let schools = entity::prelude::School::find()
            .order_by_asc(entity::school::Column::Id)
            .find_with_related(entity::prelude::Canteen)
            .all(self.db)
            .await?;

        Ok(schools
            .into_iter()
            .map(|(school, canteens)| School::from_entity(school, canteens))
            .collect())
    }

    /// Gets a school by ID with its canteens
    ///
    /// # Returns
    /// - `Ok(Some(School))`: School and its canteens ordered by ID
    /// - `Ok(None)`: School not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<School>, DbErr> {
        let Some(school) = entity::prelude::School::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let canteens = entity::prelude::Canteen::find()
            .filter(entity::canteen::Column::SchoolId.eq(id))
            .order_by_asc(entity::canteen::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(School::from_entity(school, canteens)))
    }

    /// Checks if a school with the given acronym is already stored
    pub async fn exists_by_acronym(&self, acronym: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::School::find()
            .filter(entity::school::Column::Acronym.eq(acronym))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a school and all of its canteens in one transaction
    ///
    /// # Arguments
    /// - `school`: Validated school; its `id` and canteen ids are ignored
    ///
    /// # Returns
    /// - `Ok(School)`: The stored school with database identifiers
    /// - `Err(DbErr)`: Database error, including a unique violation on the acronym
    pub async fn create(&self, school: &School) -> Result<School, DbErr> {
        let txn = self.db.begin().await?;

        let stored = entity::school::ActiveModel {
            acronym: ActiveValue::Set(school.acronym.clone()),
            name: ActiveValue::Set(school.name.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut canteens = Vec::with_capacity(school.canteens().len());
        for canteen in school.canteens() {
            let location = canteen.location;
            let model = entity::canteen::ActiveModel {
                school_id: ActiveValue::Set(stored.id),
                name: ActiveValue::Set(canteen.name.clone()),
                latitude: ActiveValue::Set(location.map(|l| l.latitude)),
                longitude: ActiveValue::Set(location.map(|l| l.longitude)),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            canteens.push(model);
        }

        txn.commit().await?;

        Ok(School::from_entity(stored, canteens))
    }

    /// Deletes a school together with its canteens, menu entries, menus and dishes
    ///
    /// # Returns
    /// - `Ok(true)`: School was deleted
    /// - `Ok(false)`: No school with that ID exists
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let canteen_ids: Vec<i32> = entity::prelude::Canteen::find()
            .select_only()
            .column(entity::canteen::Column::Id)
            .filter(entity::canteen::Column::SchoolId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        let entry_ids: Vec<i32> = entity::prelude::MenuEntry::find()
            .select_only()
            .column(entity::menu_entry::Column::Id)
            .filter(entity::menu_entry::Column::CanteenId.is_in(canteen_ids.clone()))
            .into_tuple()
            .all(&txn)
            .await?;

        let menu_ids: Vec<i32> = entity::prelude::Menu::find()
            .select_only()
            .column(entity::menu::Column::Id)
            .filter(entity::menu::Column::MenuEntryId.is_in(entry_ids.clone()))
            .into_tuple()
            .all(&txn)
            .await?;

        entity::prelude::Dish::delete_many()
            .filter(entity::dish::Column::MenuId.is_in(menu_ids.clone()))
            .exec(&txn)
            .await?;
        entity::prelude::Menu::delete_many()
            .filter(entity::menu::Column::Id.is_in(menu_ids))
            .exec(&txn)
            .await?;
        entity::prelude::MenuEntry::delete_many()
            .filter(entity::menu_entry::Column::Id.is_in(entry_ids))
            .exec(&txn)
            .await?;
        entity::prelude::Canteen::delete_many()
            .filter(entity::canteen::Column::Id.is_in(canteen_ids))
            .exec(&txn)
            .await?;

        let result = entity::prelude::School::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
