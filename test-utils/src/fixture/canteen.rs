//! Canteen fixtures for creating in-memory test data.

use entity::canteen;

pub const DEFAULT_NAME: &str = "Cantina do H";

pub const DEFAULT_SCHOOL_ID: i32 = 1;

/// Creates a canteen entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - school_id: `1`
/// - name: `"Cantina do H"`
/// - latitude / longitude: `None`
pub fn entity() -> canteen::Model {
    canteen::Model {
        id: 1,
        school_id: DEFAULT_SCHOOL_ID,
        name: DEFAULT_NAME.to_string(),
        latitude: None,
        longitude: None,
    }
}

/// Creates a canteen entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let canteen = fixture::canteen::entity_builder()
///     .school_id(4)
///     .location(41.17, -8.60)
///     .build();
/// ```
pub fn entity_builder() -> CanteenEntityBuilder {
    CanteenEntityBuilder { entity: entity() }
}

/// Builder for canteen entity models.
pub struct CanteenEntityBuilder {
    entity: canteen::Model,
}

impl CanteenEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn school_id(mut self, school_id: i32) -> Self {
        self.entity.school_id = school_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets both coordinates.
    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.entity.latitude = Some(latitude);
        self.entity.longitude = Some(longitude);
        self
    }

    pub fn build(self) -> canteen::Model {
        self.entity
    }
}
