use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
pub struct LocationDto {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateCanteenDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<LocationDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CanteenListItemDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CanteenDto {
    pub id: i32,
    pub name: String,
    pub location: Option<LocationDto>,
}
