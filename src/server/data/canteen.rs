use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::canteen::Canteen;

pub struct CanteenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CanteenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a canteen under a school
    ///
    /// # Arguments
    /// - `school_id`: ID of the owning school, which must exist
    /// - `canteen`: Validated canteen; its `id` is ignored
    ///
    /// # Returns
    /// - `Ok(Canteen)`: The stored canteen with its database identifier
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, school_id: i32, canteen: &Canteen) -> Result<Canteen, DbErr> {
        let location = canteen.location;
        let model = entity::canteen::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            name: ActiveValue::Set(canteen.name.clone()),
            latitude: ActiveValue::Set(location.map(|l| l.latitude)),
            longitude: ActiveValue::Set(location.map(|l| l.longitude)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Canteen::from_entity(model))
    }

    /// Gets a canteen only if it belongs to the given school
    ///
    /// # Returns
    /// - `Ok(Some(Canteen))`: Canteen exists and is owned by the school
    /// - `Ok(None)`: Canteen does not exist or belongs to another school
    /// - `Err(DbErr)`: Database error
    pub async fn find_in_school(
        &self,
        school_id: i32,
        canteen_id: i32,
    ) -> Result<Option<Canteen>, DbErr> {
        let canteen = entity::prelude::Canteen::find_by_id(canteen_id)
            .filter(entity::canteen::Column::SchoolId.eq(school_id))
            .one(self.db)
            .await?;

        Ok(canteen.map(Canteen::from_entity))
    }
}
