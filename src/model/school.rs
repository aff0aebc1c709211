use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::canteen::{CanteenListItemDto, CreateCanteenDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateSchoolDto {
    #[serde(default)]
    pub acronym: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub canteens: Vec<CreateCanteenDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SchoolListItemDto {
    pub id: i32,
    pub acronym: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SchoolDto {
    pub id: i32,
    pub acronym: String,
    pub name: String,
    pub canteens: Vec<CanteenListItemDto>,
}
