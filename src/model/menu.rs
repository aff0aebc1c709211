use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::dish::{CreateDishDto, DishDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateMenuDto {
    /// `lunch` or `dinner`
    #[serde(rename = "type", default)]
    pub menu_type: String,
    #[serde(default)]
    pub dishes: Vec<CreateDishDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MenuListItemDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub menu_type: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MenuDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub menu_type: String,
    pub dishes: Vec<DishDto>,
}
