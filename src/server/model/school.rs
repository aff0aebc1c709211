//! School domain model.
//!
//! A school owns one or more canteens whose names are unique within the school,
//! ignoring case. Canteens can be added after creation, but only when the enlarged
//! set still has no duplicates.

use crate::{
    model::school::{CreateSchoolDto, SchoolDto, SchoolListItemDto},
    server::{
        error::field::FieldError,
        model::canteen::Canteen,
        util::validate::{has_duplicates, is_blank},
    },
};

const MODEL: &str = "school";

/// Error returned when a school with the same acronym is already stored.
pub fn duplicate_acronym_error() -> FieldError {
    FieldError::new(
        "acronym",
        MODEL,
        "a school with the same acronym already exists",
    )
}

#[derive(Debug, Clone)]
pub struct School {
    pub id: Option<i32>,
    /// Short code such as "ISEP", unique across all schools.
    pub acronym: String,
    pub name: String,
    canteens: Vec<Canteen>,
}

impl School {
    /// Creates a school with trimmed acronym and name.
    ///
    /// Checks run in order: acronym present, acronym without inner whitespace, name
    /// present, at least one canteen, no duplicated canteens.
    ///
    /// # Returns
    /// - `Ok(School)` - Valid school
    /// - `Err(FieldError)` - First failed check
    pub fn new(
        acronym: impl Into<String>,
        name: impl Into<String>,
        canteens: Vec<Canteen>,
    ) -> Result<Self, FieldError> {
        let (acronym, name) = validate_identity(&acronym.into(), &name.into())?;
        validate_canteens(&canteens)?;

        Ok(Self {
            id: None,
            acronym,
            name,
            canteens,
        })
    }

    pub fn canteens(&self) -> &[Canteen] {
        &self.canteens
    }

    pub fn into_canteens(self) -> Vec<Canteen> {
        self.canteens
    }

    /// Adds a canteen, keeping the school untouched if its name is already taken.
    pub fn add_canteen(&mut self, canteen: Canteen) -> Result<(), FieldError> {
        let mut candidate = self.canteens.clone();
        candidate.push(canteen);

        validate_canteens(&candidate)?;
        self.canteens = candidate;

        Ok(())
    }

    /// Rebuilds a stored school together with its canteens.
    pub fn from_entity(
        entity: entity::school::Model,
        canteens: Vec<entity::canteen::Model>,
    ) -> Self {
        Self {
            id: Some(entity.id),
            acronym: entity.acronym,
            name: entity.name,
            canteens: canteens.into_iter().map(Canteen::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> SchoolDto {
        SchoolDto {
            id: self.id.unwrap_or_default(),
            acronym: self.acronym,
            name: self.name,
            canteens: self
                .canteens
                .into_iter()
                .map(Canteen::into_list_item_dto)
                .collect(),
        }
    }

    pub fn into_list_item_dto(self) -> SchoolListItemDto {
        SchoolListItemDto {
            id: self.id.unwrap_or_default(),
            acronym: self.acronym,
            name: self.name,
        }
    }
}

/// Returns the trimmed acronym and name if both are acceptable.
fn validate_identity(acronym: &str, name: &str) -> Result<(String, String), FieldError> {
    let acronym = acronym.trim();

    if acronym.is_empty() {
        return Err(FieldError::new(
            "acronym",
            MODEL,
            "school acronym cannot be empty",
        ));
    }

    if acronym.chars().any(char::is_whitespace) {
        return Err(FieldError::new(
            "acronym",
            MODEL,
            "school acronym cannot have spaces between letters",
        ));
    }

    if is_blank(name) {
        return Err(FieldError::new("name", MODEL, "school name cannot be empty"));
    }

    Ok((acronym.to_string(), name.trim().to_string()))
}

fn validate_canteens(canteens: &[Canteen]) -> Result<(), FieldError> {
    if canteens.is_empty() {
        return Err(FieldError::new(
            "canteens",
            MODEL,
            "school requires at least one canteen to be provided",
        ));
    }

    if has_duplicates(canteens) {
        return Err(FieldError::new(
            "canteens",
            MODEL,
            "school cannot have duplicated canteens",
        ));
    }

    Ok(())
}

/// Builds a school from a request body.
///
/// Acronym and name are checked before any canteen body is looked at.
impl TryFrom<CreateSchoolDto> for School {
    type Error = FieldError;

    fn try_from(dto: CreateSchoolDto) -> Result<Self, Self::Error> {
        let (acronym, name) = validate_identity(&dto.acronym, &dto.name)?;
        let canteens = dto
            .canteens
            .into_iter()
            .map(Canteen::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        School::new(acronym, name, canteens)
    }
}
