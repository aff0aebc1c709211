//! School factory for creating test school rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test schools with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let school = SchoolFactory::new(&db).acronym("FEUP").build().await?;
/// ```
pub struct SchoolFactory<'a> {
    db: &'a DatabaseConnection,
    acronym: String,
    name: String,
}

impl<'a> SchoolFactory<'a> {
    /// Creates a new SchoolFactory with default values.
    ///
    /// Defaults:
    /// - acronym: `"SCH{id}"` where id is auto-incremented
    /// - name: `"School {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            acronym: format!("SCH{}", id),
            name: format!("School {}", id),
        }
    }

    pub fn acronym(mut self, acronym: impl Into<String>) -> Self {
        self.acronym = acronym.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the school row.
    ///
    /// # Returns
    /// - `Ok(entity::school::Model)` - Created school
    /// - `Err(DbErr)` - Database error during insert, e.g. a duplicated acronym
    pub async fn build(self) -> Result<entity::school::Model, DbErr> {
        entity::school::ActiveModel {
            id: ActiveValue::NotSet,
            acronym: ActiveValue::Set(self.acronym),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a school with default values.
pub async fn create_school(db: &DatabaseConnection) -> Result<entity::school::Model, DbErr> {
    SchoolFactory::new(db).build().await
}
