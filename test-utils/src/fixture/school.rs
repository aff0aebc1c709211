//! School fixtures for creating in-memory test data.

use entity::school;

pub const DEFAULT_ACRONYM: &str = "ISEP";

pub const DEFAULT_NAME: &str = "Instituto Superior de Engenharia do Porto";

/// Creates a school entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - acronym: `"ISEP"`
/// - name: `"Instituto Superior de Engenharia do Porto"`
pub fn entity() -> school::Model {
    school::Model {
        id: 1,
        acronym: DEFAULT_ACRONYM.to_string(),
        name: DEFAULT_NAME.to_string(),
    }
}

/// Creates a school entity builder for customization.
pub fn entity_builder() -> SchoolEntityBuilder {
    SchoolEntityBuilder { entity: entity() }
}

/// Builder for school entity models.
pub struct SchoolEntityBuilder {
    entity: school::Model,
}

impl SchoolEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn acronym(mut self, acronym: impl Into<String>) -> Self {
        self.entity.acronym = acronym.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn build(self) -> school::Model {
        self.entity
    }
}
