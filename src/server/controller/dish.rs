use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::dish::DishDto,
    server::{
        error::AppError, model::dish::Dish, service::dish::DishService, state::AppState,
        util::parse::parse_resource_id,
    },
};

/// Tag for grouping dish endpoints in OpenAPI documentation
pub static DISH_TAG: &str = "dish";

/// List the dishes of a menu.
#[utoipa::path(
    get,
    path = "/schools/{id}/canteens/{id2}/menus/{id3}/dishes",
    tag = DISH_TAG,
    params(
        ("id" = i32, Path, description = "School ID"),
        ("id2" = i32, Path, description = "Canteen ID"),
        ("id3" = i32, Path, description = "Menu ID")
    ),
    responses(
        (status = 200, description = "Menu dishes", body = Vec<DishDto>),
        (status = 404, description = "Chain broken"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_dishes(
    State(state): State<AppState>,
    Path((school_id, canteen_id, menu_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let school_id = parse_resource_id("school", &school_id)?;
    let canteen_id = parse_resource_id("canteen", &canteen_id)?;
    let menu_id = parse_resource_id("menu", &menu_id)?;

    let dishes = DishService::new(&state.db)
        .get_all(school_id, canteen_id, menu_id)
        .await?;

    let dtos: Vec<DishDto> = dishes.into_iter().map(Dish::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a dish of a menu.
#[utoipa::path(
    get,
    path = "/schools/{id}/canteens/{id2}/menus/{id3}/dishes/{id4}",
    tag = DISH_TAG,
    params(
        ("id" = i32, Path, description = "School ID"),
        ("id2" = i32, Path, description = "Canteen ID"),
        ("id3" = i32, Path, description = "Menu ID"),
        ("id4" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 200, description = "Dish detail", body = DishDto),
        (status = 404, description = "Chain broken"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_dish(
    State(state): State<AppState>,
    Path((school_id, canteen_id, menu_id, dish_id)): Path<(String, String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let school_id = parse_resource_id("school", &school_id)?;
    let canteen_id = parse_resource_id("canteen", &canteen_id)?;
    let menu_id = parse_resource_id("menu", &menu_id)?;
    let dish_id = parse_resource_id("dish", &dish_id)?;

    let dish = DishService::new(&state.db)
        .get(school_id, canteen_id, menu_id, dish_id)
        .await?;

    Ok((StatusCode::OK, Json(dish.into_dto())))
}
