//! Dish fixtures for creating in-memory test data.

use entity::dish;

pub const DEFAULT_DESCRIPTION: &str = "Bacalhau com Natas";

/// Ordinal of the fish dish type.
pub const DEFAULT_DISH_TYPE: i32 = 1;

pub const DEFAULT_MENU_ID: i32 = 1;

/// Creates a dish entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - menu_id: `1`
/// - dish_type: `1` (fish)
/// - description: `"Bacalhau com Natas"`
pub fn entity() -> dish::Model {
    dish::Model {
        id: 1,
        menu_id: DEFAULT_MENU_ID,
        dish_type: DEFAULT_DISH_TYPE,
        description: DEFAULT_DESCRIPTION.to_string(),
    }
}

/// Creates a dish entity builder for customization.
pub fn entity_builder() -> DishEntityBuilder {
    DishEntityBuilder { entity: entity() }
}

/// Builder for dish entity models.
pub struct DishEntityBuilder {
    entity: dish::Model,
}

impl DishEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn menu_id(mut self, menu_id: i32) -> Self {
        self.entity.menu_id = menu_id;
        self
    }

    pub fn dish_type(mut self, dish_type: i32) -> Self {
        self.entity.dish_type = dish_type;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    pub fn build(self) -> dish::Model {
        self.entity
    }
}
