use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        menu::{CreateMenuDto, MenuDto, MenuListItemDto},
    },
    server::{
        error::AppError,
        model::menu::Menu,
        service::menu::MenuService,
        state::AppState,
        util::parse::parse_resource_id,
    },
};

/// Tag for grouping menu endpoints in OpenAPI documentation
pub static MENU_TAG: &str = "menu";

/// List the menus a canteen serves today.
///
/// # Returns
/// - `200 OK` - Today's menus
/// - `404 Not Found` - No menus today, or the school/canteen chain is broken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/schools/{id}/canteens/{id2}/menus",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "School ID"),
        ("id2" = i32, Path, description = "Canteen ID")
    ),
    responses(
        (status = 200, description = "Menus available today", body = Vec<MenuListItemDto>),
        (status = 404, description = "No menus available or chain broken"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_menus(
    State(state): State<AppState>,
    Path((school_id, canteen_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let school_id = parse_resource_id("school", &school_id)?;
    let canteen_id = parse_resource_id("canteen", &canteen_id)?;

    let menus = MenuService::new(&state.db)
        .get_available(school_id, canteen_id)
        .await?;

    let dtos: Vec<MenuListItemDto> = menus.into_iter().map(Menu::into_list_item_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a menu with its dishes.
#[utoipa::path(
    get,
    path = "/schools/{id}/canteens/{id2}/menus/{id3}",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "School ID"),
        ("id2" = i32, Path, description = "Canteen ID"),
        ("id3" = i32, Path, description = "Menu ID")
    ),
    responses(
        (status = 200, description = "Menu detail", body = MenuDto),
        (status = 404, description = "Chain broken"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_menu(
    State(state): State<AppState>,
    Path((school_id, canteen_id, menu_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let school_id = parse_resource_id("school", &school_id)?;
    let canteen_id = parse_resource_id("canteen", &canteen_id)?;
    let menu_id = parse_resource_id("menu", &menu_id)?;

    let menu = MenuService::new(&state.db)
        .get(school_id, canteen_id, menu_id)
        .await?;

    Ok((StatusCode::OK, Json(menu.into_dto())))
}

/// Publish one of today's menus for a canteen.
///
/// A canteen serves at most one lunch and one dinner menu per day.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Menu type (`lunch` or `dinner`) and its dishes
///
/// # Returns
/// - `201 Created` - The created menu
/// - `400 Bad Request` - Invalid body, invalid field or a menu of that type already exists today
/// - `404 Not Found` - The school/canteen chain is broken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/schools/{id}/canteens/{id2}/menus",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "School ID"),
        ("id2" = i32, Path, description = "Canteen ID")
    ),
    request_body = CreateMenuDto,
    responses(
        (status = 201, description = "Successfully created menu", body = MenuDto),
        (status = 400, description = "Invalid menu data", body = ErrorDto),
        (status = 404, description = "Chain broken"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_menu(
    State(state): State<AppState>,
    Path((school_id, canteen_id)): Path<(String, String)>,
    payload: Result<Json<CreateMenuDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let school_id = parse_resource_id("school", &school_id)?;
    let canteen_id = parse_resource_id("canteen", &canteen_id)?;
    let Json(payload) = payload?;
    let menu = Menu::try_from(payload)?;

    let menu = MenuService::new(&state.db)
        .create(school_id, canteen_id, menu)
        .await?;

    Ok((StatusCode::CREATED, Json(menu.into_dto())))
}
