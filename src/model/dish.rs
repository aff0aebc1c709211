use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateDishDto {
    /// `meat`, `fish`, `vegetarian` or `diet`
    #[serde(rename = "type", default)]
    pub dish_type: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DishDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub dish_type: String,
    pub description: String,
}
