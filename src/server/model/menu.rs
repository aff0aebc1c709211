//! Menu domain model and menu type enum.

use sea_orm::DbErr;
use std::{fmt, str::FromStr};

use crate::{
    model::{
        dish::CreateDishDto,
        menu::{CreateMenuDto, MenuDto, MenuListItemDto},
    },
    server::{
        error::field::FieldError,
        model::dish::{Dish, DishType},
        util::validate::has_duplicates,
    },
};

const MODEL: &str = "menu";

/// Meal a menu is served at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuType {
    Lunch,
    Dinner,
}

impl MenuType {
    pub const ALL: [MenuType; 2] = [MenuType::Lunch, MenuType::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            MenuType::Lunch => "lunch",
            MenuType::Dinner => "dinner",
        }
    }

    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// Checks whether an integer names a menu type.
    pub fn validate(value: i32) -> bool {
        Self::ALL.iter().any(|t| t.ordinal() == value)
    }

    fn invalid() -> FieldError {
        FieldError::new("menutype", MODEL, "specified menu type is not valid")
    }
}

impl fmt::Display for MenuType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for MenuType {
    type Error = FieldError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.ordinal() == value)
            .ok_or_else(Self::invalid)
    }
}

impl FromStr for MenuType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(Self::invalid)
    }
}

/// Menu domain model.
///
/// A menu is immutable once built: its dishes can be read but never replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub id: Option<i32>,
    pub menu_type: MenuType,
    dishes: Vec<Dish>,
}

impl Menu {
    /// Creates a menu from a raw type ordinal and its dishes.
    ///
    /// # Returns
    /// - `Ok(Menu)` - Valid menu
    /// - `Err(FieldError)` - `menutype` is out of range, `dishes` is empty, or two
    ///   dishes share the same type and description
    pub fn new(menu_type: i32, dishes: Vec<Dish>) -> Result<Self, FieldError> {
        let menu_type = MenuType::try_from(menu_type)?;

        Self::with_type(menu_type, dishes)
    }

    /// Creates a menu from an already parsed menu type.
    pub fn with_type(menu_type: MenuType, dishes: Vec<Dish>) -> Result<Self, FieldError> {
        if dishes.is_empty() {
            return Err(FieldError::new(
                "dishes",
                MODEL,
                "menu requires at least one dish to be provided",
            ));
        }

        if has_duplicates(&dishes) {
            return Err(FieldError::new(
                "dishes",
                MODEL,
                "menu cannot have duplicated dishes",
            ));
        }

        Ok(Self {
            id: None,
            menu_type,
            dishes,
        })
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn into_dishes(self) -> Vec<Dish> {
        self.dishes
    }

    /// Rebuilds a stored menu together with its dishes.
    ///
    /// Stored rows are trusted, so the non-empty and uniqueness checks are skipped;
    /// only the enum ordinals are verified.
    ///
    /// # Arguments
    /// - `entity` - The menu row
    /// - `dishes` - Dish rows belonging to the menu
    ///
    /// # Returns
    /// - `Ok(Menu)` - Converted domain model
    /// - `Err(DbErr::Custom)` - A stored menu or dish type ordinal is unknown
    pub fn from_entity(
        entity: entity::menu::Model,
        dishes: Vec<entity::dish::Model>,
    ) -> Result<Self, DbErr> {
        let menu_type = MenuType::try_from(entity.menu_type).map_err(|_| {
            DbErr::Custom(format!(
                "Menu {} has unknown menu type {}",
                entity.id, entity.menu_type
            ))
        })?;

        let dishes = dishes
            .into_iter()
            .map(Dish::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: Some(entity.id),
            menu_type,
            dishes,
        })
    }

    pub fn into_dto(self) -> MenuDto {
        MenuDto {
            id: self.id.unwrap_or_default(),
            menu_type: self.menu_type.to_string(),
            dishes: self.dishes.into_iter().map(Dish::into_dto).collect(),
        }
    }

    pub fn into_list_item_dto(self) -> MenuListItemDto {
        MenuListItemDto {
            id: self.id.unwrap_or_default(),
            menu_type: self.menu_type.to_string(),
        }
    }
}

impl TryFrom<CreateDishDto> for Dish {
    type Error = FieldError;

    fn try_from(dto: CreateDishDto) -> Result<Self, Self::Error> {
        let dish_type = dto.dish_type.parse::<DishType>()?;

        Dish::with_type(dish_type, dto.description)
    }
}

/// Builds a menu from a request body.
///
/// Every dish body is parsed before the menu type, so a body that is wrong in both
/// places reports the first bad dish.
impl TryFrom<CreateMenuDto> for Menu {
    type Error = FieldError;

    fn try_from(dto: CreateMenuDto) -> Result<Self, Self::Error> {
        let dishes = dto
            .dishes
            .into_iter()
            .map(Dish::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let menu_type = dto.menu_type.parse::<MenuType>()?;

        Menu::with_type(menu_type, dishes)
    }
}
