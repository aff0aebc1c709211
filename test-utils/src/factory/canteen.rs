//! Canteen factory for creating test canteen rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test canteens under an existing school.
pub struct CanteenFactory<'a> {
    db: &'a DatabaseConnection,
    school_id: i32,
    name: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl<'a> CanteenFactory<'a> {
    /// Creates a new CanteenFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Canteen {id}"` where id is auto-incremented
    /// - no location
    pub fn new(db: &'a DatabaseConnection, school_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            school_id,
            name: format!("Canteen {}", id),
            latitude: None,
            longitude: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Builds and inserts the canteen row.
    pub async fn build(self) -> Result<entity::canteen::Model, DbErr> {
        entity::canteen::ActiveModel {
            id: ActiveValue::NotSet,
            school_id: ActiveValue::Set(self.school_id),
            name: ActiveValue::Set(self.name),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a canteen with default values for the specified school.
pub async fn create_canteen(
    db: &DatabaseConnection,
    school_id: i32,
) -> Result<entity::canteen::Model, DbErr> {
    CanteenFactory::new(db, school_id).build().await
}
