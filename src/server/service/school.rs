use sea_orm::DatabaseConnection;

use crate::server::{
    data::school::SchoolRepository,
    error::AppError,
    model::school::{duplicate_acronym_error, School},
};

pub struct SchoolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every school
    ///
    /// # Returns
    /// - `Ok(Vec<School>)`: At least one school
    /// - `Err(AppError::NotFound)`: No school is stored
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<School>, AppError> {
        let repo = SchoolRepository::new(self.db);

        let schools = repo.get_all().await?;

        if schools.is_empty() {
            return Err(AppError::NotFound("No schools available".to_string()));
        }

        Ok(schools)
    }

    /// Gets a school by ID with its canteens
    pub async fn get_by_id(&self, id: i32) -> Result<School, AppError> {
        let repo = SchoolRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("School {} not found", id)))
    }

    /// Stores a validated school and its canteens
    ///
    /// The acronym is checked up front; a unique violation raised by a concurrent
    /// insert of the same acronym is reported the same way.
    ///
    /// # Returns
    /// - `Ok(School)`: The stored school with identifiers
    /// - `Err(AppError::FieldErr)`: A school with the same acronym exists
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create(&self, school: School) -> Result<School, AppError> {
        let repo = SchoolRepository::new(self.db);

        if repo.exists_by_acronym(&school.acronym).await? {
            return Err(duplicate_acronym_error().into());
        }

        let created = repo
            .create(&school)
            .await
            .map_err(|err| AppError::from_conflict(err, duplicate_acronym_error))?;

        tracing::info!(
            "Created school {} ({}) with {} canteen(s)",
            created.acronym,
            created.id.unwrap_or_default(),
            created.canteens().len()
        );

        Ok(created)
    }

    /// Deletes a school and everything it owns
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = SchoolRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(format!("School {} not found", id)));
        }

        tracing::info!("Deleted school {}", id);

        Ok(())
    }
}
