use sea_orm::DatabaseConnection;

use crate::server::{
    data::{canteen::CanteenRepository, school::SchoolRepository},
    error::AppError,
    model::canteen::Canteen,
};

pub struct CanteenService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CanteenService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the canteens of a school
    ///
    /// # Returns
    /// - `Ok(Vec<Canteen>)`: The school's canteens ordered by ID
    /// - `Err(AppError::NotFound)`: School does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_all(&self, school_id: i32) -> Result<Vec<Canteen>, AppError> {
        let school = SchoolRepository::new(self.db)
            .find_by_id(school_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("School {} not found", school_id)))?;

        Ok(school.into_canteens())
    }

    /// Gets a canteen that belongs to the given school
    pub async fn get(&self, school_id: i32, canteen_id: i32) -> Result<Canteen, AppError> {
        CanteenRepository::new(self.db)
            .find_in_school(school_id, canteen_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Canteen {} not found in school {}",
                    canteen_id, school_id
                ))
            })
    }

    /// Adds a validated canteen to a school
    ///
    /// The school is loaded with its canteens so the name uniqueness rule is checked
    /// against the whole set before anything is written.
    ///
    /// # Returns
    /// - `Ok(Canteen)`: The stored canteen
    /// - `Err(AppError::NotFound)`: School does not exist
    /// - `Err(AppError::FieldErr)`: The school already has a canteen with that name
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create(&self, school_id: i32, canteen: Canteen) -> Result<Canteen, AppError> {
        let mut school = SchoolRepository::new(self.db)
            .find_by_id(school_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("School {} not found", school_id)))?;

        school.add_canteen(canteen.clone())?;

        let created = CanteenRepository::new(self.db)
            .create(school_id, &canteen)
            .await?;

        tracing::info!(
            "Created canteen {} ({}) in school {}",
            created.name,
            created.id.unwrap_or_default(),
            school.acronym
        );

        Ok(created)
    }
}
