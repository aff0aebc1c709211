//! Canteen domain model and day-menu bookkeeping.
//!
//! A canteen keeps its menus grouped by calendar day. At most one menu of each
//! menu type may be filed for a given day. The "today" operations resolve the day
//! from the local clock and delegate to the date-explicit ones.

use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

use crate::{
    model::canteen::{CanteenDto, CanteenListItemDto, CreateCanteenDto},
    server::{
        error::field::FieldError,
        model::{location::GeographicalLocation, menu::Menu},
        util::validate::is_blank,
    },
};

const MODEL: &str = "canteen";

/// Error for a second menu of an already filed type on the same day.
pub fn duplicate_menu_type_error() -> FieldError {
    FieldError::new(
        "menus",
        MODEL,
        "canteen already has a menu of the same type for today",
    )
}

/// Current calendar day in the server's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone)]
pub struct Canteen {
    pub id: Option<i32>,
    pub name: String,
    pub location: Option<GeographicalLocation>,
    menus: BTreeMap<NaiveDate, Vec<Menu>>,
}

impl Canteen {
    /// Creates a canteen with a trimmed name and no menus.
    ///
    /// # Returns
    /// - `Ok(Canteen)` - Valid canteen
    /// - `Err(FieldError)` - `name` is blank
    pub fn new(
        name: impl Into<String>,
        location: Option<GeographicalLocation>,
    ) -> Result<Self, FieldError> {
        let name = name.into();

        if is_blank(&name) {
            return Err(FieldError::new(
                "name",
                MODEL,
                "canteen name cannot be empty",
            ));
        }

        Ok(Self {
            id: None,
            name: name.trim().to_string(),
            location,
            menus: BTreeMap::new(),
        })
    }

    /// Files a menu under today's date.
    ///
    /// # Returns
    /// - `Ok(NaiveDate)` - The day the menu was filed under
    /// - `Err(FieldError)` - A menu of the same type already exists for today
    pub fn add_today_menu(&mut self, menu: Menu) -> Result<NaiveDate, FieldError> {
        let date = today();
        self.add_menu_on(date, menu)?;

        Ok(date)
    }

    /// Files a menu under the given date, rejecting a second menu of the same type.
    pub fn add_menu_on(&mut self, date: NaiveDate, menu: Menu) -> Result<(), FieldError> {
        let day = self.menus.entry(date).or_default();

        if day.iter().any(|m| m.menu_type == menu.menu_type) {
            return Err(duplicate_menu_type_error());
        }

        day.push(menu);

        Ok(())
    }

    /// Returns a copy of today's menus, empty if none were filed.
    ///
    /// The copy is owned by the caller; modifying it never affects the canteen.
    pub fn available_menus(&self) -> Vec<Menu> {
        self.available_menus_on(today())
    }

    pub fn available_menus_on(&self, date: NaiveDate) -> Vec<Menu> {
        self.menus.get(&date).cloned().unwrap_or_default()
    }

    /// Converts a stored canteen row to a domain model without any menus loaded.
    pub fn from_entity(entity: entity::canteen::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            location: GeographicalLocation::from_columns(entity.latitude, entity.longitude),
            menus: BTreeMap::new(),
        }
    }

    /// Attaches menus already stored for a given day.
    ///
    /// The menus come from storage, so no duplicate-type check is performed.
    pub fn with_menus_on(mut self, date: NaiveDate, menus: Vec<Menu>) -> Self {
        if !menus.is_empty() {
            self.menus.insert(date, menus);
        }

        self
    }

    pub fn into_dto(self) -> CanteenDto {
        CanteenDto {
            id: self.id.unwrap_or_default(),
            name: self.name,
            location: self.location.map(GeographicalLocation::into_dto),
        }
    }

    pub fn into_list_item_dto(self) -> CanteenListItemDto {
        CanteenListItemDto {
            id: self.id.unwrap_or_default(),
            name: self.name,
        }
    }
}

/// Canteens are the same canteen when their names match ignoring case.
impl PartialEq for Canteen {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl TryFrom<CreateCanteenDto> for Canteen {
    type Error = FieldError;

    fn try_from(dto: CreateCanteenDto) -> Result<Self, Self::Error> {
        let canteen = Canteen::new(dto.name, None)?;
        let location = dto
            .location
            .map(GeographicalLocation::try_from)
            .transpose()?;

        Ok(Canteen { location, ..canteen })
    }
}
