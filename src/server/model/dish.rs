//! Dish domain model and dish type enum.
//!
//! A dish is what a person can choose to eat at a canteen. Dishes are owned by a
//! menu and compare equal when they share the same type and description.

use sea_orm::DbErr;
use std::{fmt, str::FromStr};

use crate::{
    model::dish::DishDto,
    server::{error::field::FieldError, util::validate::is_blank},
};

const MODEL: &str = "dish";

/// Kind of dish served in a menu.
///
/// Persisted as its ordinal and serialized as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DishType {
    Meat,
    Fish,
    Vegetarian,
    Diet,
}

impl DishType {
    pub const ALL: [DishType; 4] = [
        DishType::Meat,
        DishType::Fish,
        DishType::Vegetarian,
        DishType::Diet,
    ];

    /// Canonical lowercase name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            DishType::Meat => "meat",
            DishType::Fish => "fish",
            DishType::Vegetarian => "vegetarian",
            DishType::Diet => "diet",
        }
    }

    /// Integer representation stored in the database.
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// Checks whether an integer names a dish type.
    pub fn validate(value: i32) -> bool {
        Self::ALL.iter().any(|t| t.ordinal() == value)
    }

    fn invalid() -> FieldError {
        FieldError::new("dishtype", MODEL, "specified dish type is not valid")
    }
}

impl fmt::Display for DishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for DishType {
    type Error = FieldError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.ordinal() == value)
            .ok_or_else(Self::invalid)
    }
}

/// Parses the wire name, ignoring case and surrounding whitespace.
impl FromStr for DishType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(Self::invalid)
    }
}

/// Dish domain model.
#[derive(Debug, Clone)]
pub struct Dish {
    /// Database identifier, `None` until the dish has been persisted.
    pub id: Option<i32>,
    pub dish_type: DishType,
    pub description: String,
}

impl Dish {
    /// Creates a dish from a raw type ordinal and a description.
    ///
    /// # Returns
    /// - `Ok(Dish)` - Valid dish with a trimmed description
    /// - `Err(FieldError)` - `dishtype` is out of range, or `description` is blank
    pub fn new(dish_type: i32, description: impl Into<String>) -> Result<Self, FieldError> {
        let dish_type = DishType::try_from(dish_type)?;

        Self::with_type(dish_type, description)
    }

    /// Creates a dish from an already parsed dish type.
    pub fn with_type(dish_type: DishType, description: impl Into<String>) -> Result<Self, FieldError> {
        let description = description.into();

        if is_blank(&description) {
            return Err(FieldError::new(
                "description",
                MODEL,
                "dish description cannot be empty",
            ));
        }

        Ok(Self {
            id: None,
            dish_type,
            description: description.trim().to_string(),
        })
    }

    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Dish)` - Converted dish
    /// - `Err(DbErr::Custom)` - Stored dish type ordinal is not a known dish type
    pub fn from_entity(entity: entity::dish::Model) -> Result<Self, DbErr> {
        let dish_type = DishType::try_from(entity.dish_type).map_err(|_| {
            DbErr::Custom(format!(
                "Dish {} has unknown dish type {}",
                entity.id, entity.dish_type
            ))
        })?;

        Ok(Self {
            id: Some(entity.id),
            dish_type,
            description: entity.description,
        })
    }

    pub fn into_dto(self) -> DishDto {
        DishDto {
            id: self.id.unwrap_or_default(),
            dish_type: self.dish_type.to_string(),
            description: self.description,
        }
    }
}

/// Dishes are equal when both type and description match; the id is ignored.
impl PartialEq for Dish {
    fn eq(&self, other: &Self) -> bool {
        self.dish_type == other.dish_type && self.description == other.description
    }
}
