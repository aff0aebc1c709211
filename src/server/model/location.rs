use crate::{model::canteen::LocationDto, server::error::field::FieldError};

const MODEL: &str = "geographical location";

/// Latitude and longitude of a canteen, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicalLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeographicalLocation {
    /// Creates a location, rejecting coordinates outside the valid ranges (NaN included).
    ///
    /// # Returns
    /// - `Ok(GeographicalLocation)` - Latitude in [-90, 90] and longitude in [-180, 180]
    /// - `Err(FieldError)` - On `latitude` first, then `longitude`
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, FieldError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(FieldError::new(
                "latitude",
                MODEL,
                "geographical location latitude must be between -90 and 90",
            ));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(FieldError::new(
                "longitude",
                MODEL,
                "geographical location longitude must be between -180 and 180",
            ));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Rebuilds a stored location; a location exists only when both columns are set.
    pub fn from_columns(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl TryFrom<LocationDto> for GeographicalLocation {
    type Error = FieldError;

    fn try_from(dto: LocationDto) -> Result<Self, Self::Error> {
        Self::new(dto.latitude, dto.longitude)
    }
}
